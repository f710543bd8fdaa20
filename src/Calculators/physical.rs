use super::Category;
use crate::Evaluator::classify::{Threshold, ThresholdTable};
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::{Direction, Evaluation, FormulaSpec};
use crate::Evaluator::input::{Constraint, FieldSpec, InputKind};
use crate::constants::PhysicalConstants;

const fn positive(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Scientific, Constraint::Positive)
}

const fn non_negative(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Scientific, Constraint::NonNegative)
}

////////////////////////////////////////////////////////////////////////////////
// Beer-Lambert law: A = εbc
////////////////////////////////////////////////////////////////////////////////

/// Reliability of a spectrophotometer reading by absorbance.
pub const ABSORBANCE_TABLE: ThresholdTable = ThresholdTable::new(
    &[
        Threshold::below(0.1, "Very low absorbance - sample may be too dilute"),
        Threshold::at_most(1.0, "Optimal range for accurate measurements"),
        Threshold::at_most(2.0, "High absorbance - acceptable but less accurate"),
    ],
    "Very high absorbance - sample may need dilution",
);

fn transmittance(absorbance: f64) -> f64 {
    10f64.powf(-absorbance) * 100.0
}

/// inputs: A, ε, b
fn beer_concentration(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (absorbance, epsilon, path) = (x[0], x[1], x[2]);
    Ok(Evaluation::new(absorbance / (epsilon * path))
        .with_secondary(absorbance)
        .with_extra("Transmittance", transmittance(absorbance), "%")
        .classified_on(absorbance))
}

/// inputs: ε, b, c
fn beer_absorbance(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (epsilon, path, concentration) = (x[0], x[1], x[2]);
    let a = epsilon * path * concentration;
    Ok(Evaluation::new(a)
        .with_secondary(concentration)
        .with_extra("Transmittance", transmittance(a), "%")
        .classified_on(a))
}

/// inputs: A, b, c
fn beer_absorptivity(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (absorbance, path, concentration) = (x[0], x[1], x[2]);
    if concentration == 0.0 {
        return Err(EvaluatorError::domain(
            "concentration",
            "Path length and concentration must be positive",
        ));
    }
    Ok(Evaluation::new(absorbance / (path * concentration))
        .with_secondary(absorbance)
        .classified_on(absorbance))
}

/// inputs: A, ε, c
fn beer_path_length(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (absorbance, epsilon, concentration) = (x[0], x[1], x[2]);
    if concentration == 0.0 {
        return Err(EvaluatorError::domain(
            "concentration",
            "Molar absorptivity and concentration must be positive",
        ));
    }
    Ok(Evaluation::new(absorbance / (epsilon * concentration))
        .with_secondary(absorbance)
        .classified_on(absorbance))
}

pub const BEERS_LAW_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "beers-law-calculator",
    name: "Beer's Law Calculator",
    category: Category::PhysicalChemistry,
    formula_text: "A = εbc",
    fields: &[
        non_negative("absorbance", "Absorbance (A)", "").with_message("Absorbance cannot be negative"),
        positive("molar_absorptivity", "Molar absorptivity (ε)", "L/(mol·cm)")
            .with_message("Molar absorptivity must be positive"),
        positive("path_length", "Path length (b)", "cm").with_message("Path length must be positive"),
        non_negative("concentration", "Concentration (c)", "mol/L")
            .with_message("Concentration cannot be negative"),
    ],
    directions: &[
        Direction {
            name: "Concentration from A, ε, b",
            inputs: &["absorbance", "molar_absorptivity", "path_length"],
            output: "c",
            unit: "mol/L",
            formula: beer_concentration,
        },
        Direction {
            name: "Absorbance from ε, b, c",
            inputs: &["molar_absorptivity", "path_length", "concentration"],
            output: "A",
            unit: "",
            formula: beer_absorbance,
        },
        Direction {
            name: "Molar absorptivity from A, b, c",
            inputs: &["absorbance", "path_length", "concentration"],
            output: "ε",
            unit: "L/(mol·cm)",
            formula: beer_absorptivity,
        },
        Direction {
            name: "Path length from A, ε, c",
            inputs: &["absorbance", "molar_absorptivity", "concentration"],
            output: "b",
            unit: "cm",
            formula: beer_path_length,
        },
    ],
    table: Some(ABSORBANCE_TABLE),
};

////////////////////////////////////////////////////////////////////////////////
// Osmotic pressure: π = iMRT, R in L·atm/(mol·K)
////////////////////////////////////////////////////////////////////////////////

pub const KPA_PER_ATM: f64 = 101.325;
pub const MMHG_PER_ATM: f64 = 760.0;
pub const BAR_PER_ATM: f64 = 1.01325;

const OSMOTIC_MESSAGE: &str =
    "Molarity must be non-negative, temperature and van't Hoff factor must be positive.";

fn with_pressure_units(evaluation: Evaluation, atm: f64) -> Evaluation {
    evaluation
        .with_extra("Pressure", atm * KPA_PER_ATM, "kPa")
        .with_extra("Pressure", atm * MMHG_PER_ATM, "mmHg")
        .with_extra("Pressure", atm * BAR_PER_ATM, "bar")
}

/// inputs: M, T, i
fn osmotic_pressure(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (molarity, temperature, vant_hoff) = (x[0], x[1], x[2]);
    let pi = vant_hoff * molarity * c.gas_constant_latm * temperature;
    Ok(with_pressure_units(Evaluation::new(pi).with_secondary(molarity), pi))
}

/// inputs: π, T, i
fn osmotic_molarity(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (pi, temperature, vant_hoff) = (x[0], x[1], x[2]);
    let molarity = pi / (vant_hoff * c.gas_constant_latm * temperature);
    Ok(with_pressure_units(Evaluation::new(molarity).with_secondary(pi), pi))
}

pub const OSMOTIC_PRESSURE_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "osmotic-pressure-calculator",
    name: "Osmotic Pressure Calculator",
    category: Category::PhysicalChemistry,
    formula_text: "π = iMRT",
    fields: &[
        non_negative("molarity", "Molarity (M)", "mol/L").with_message(OSMOTIC_MESSAGE),
        positive("temperature", "Temperature (T)", "K").with_message(OSMOTIC_MESSAGE),
        positive("vant_hoff", "van't Hoff factor (i)", "").with_message(OSMOTIC_MESSAGE),
        non_negative("osmotic_pressure", "Osmotic pressure (π)", "atm")
            .with_message("Osmotic pressure cannot be negative"),
    ],
    directions: &[
        Direction {
            name: "Osmotic pressure from M, T, i",
            inputs: &["molarity", "temperature", "vant_hoff"],
            output: "π",
            unit: "atm",
            formula: osmotic_pressure,
        },
        Direction {
            name: "Molarity from π, T, i",
            inputs: &["osmotic_pressure", "temperature", "vant_hoff"],
            output: "M",
            unit: "mol/L",
            formula: osmotic_molarity,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Raoult's law: P = χ_solvent·P°
////////////////////////////////////////////////////////////////////////////////

const fn mole_fraction(name: &'static str, label: &'static str) -> FieldSpec {
    non_negative(name, label, "").with_message("Mole fraction must be between 0 and 1")
}

fn check_fraction(field: &str, chi: f64) -> Result<(), EvaluatorError> {
    if chi > 1.0 {
        return Err(EvaluatorError::domain(field, "Mole fraction must be between 0 and 1"));
    }
    Ok(())
}

fn raoult(pure: f64, chi_solvent: f64) -> Evaluation {
    let p = chi_solvent * pure;
    Evaluation::new(p)
        .with_secondary(pure)
        .with_extra("Vapor pressure lowering", pure - p, "mmHg")
        .with_extra("Relative lowering", 1.0 - chi_solvent, "")
}

/// inputs: P°, χ_solvent
fn raoult_from_solvent(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    check_fraction("chi_solvent", x[1])?;
    Ok(raoult(x[0], x[1]))
}

/// inputs: P°, χ_solute
fn raoult_from_solute(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    check_fraction("chi_solute", x[1])?;
    Ok(raoult(x[0], 1.0 - x[1]))
}

pub const RAOULTS_LAW_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "raoults-law-calculator",
    name: "Raoult's Law Calculator",
    category: Category::PhysicalChemistry,
    formula_text: "P = χ_solvent × P°",
    fields: &[
        positive("p_pure", "Vapor pressure of pure solvent (P°)", "mmHg")
            .with_message("Vapor pressure must be positive"),
        mole_fraction("chi_solvent", "Mole fraction of solvent (χ)"),
        mole_fraction("chi_solute", "Mole fraction of solute (χ)"),
    ],
    directions: &[
        Direction {
            name: "From solvent mole fraction",
            inputs: &["p_pure", "chi_solvent"],
            output: "P",
            unit: "mmHg",
            formula: raoult_from_solvent,
        },
        Direction {
            name: "From solute mole fraction",
            inputs: &["p_pure", "chi_solute"],
            output: "P",
            unit: "mmHg",
            formula: raoult_from_solute,
        },
    ],
    table: None,
};
