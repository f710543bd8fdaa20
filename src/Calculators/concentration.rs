use super::Category;
use crate::Evaluator::classify::{Threshold, ThresholdTable};
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::{Direction, Evaluation, FormulaSpec};
use crate::Evaluator::input::{Constraint, FieldSpec, InputKind};
use crate::constants::PhysicalConstants;

const fn positive(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Scientific, Constraint::Positive)
}

const BOTH_FIELDS_MESSAGE: &str = "Please enter valid numbers for both fields";

const fn non_negative(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Scientific, Constraint::NonNegative)
}

////////////////////////////////////////////////////////////////////////////////
// Molarity: M = n / V
////////////////////////////////////////////////////////////////////////////////

fn molarity(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (moles, volume) = (x[0], x[1]);
    Ok(Evaluation::new(moles / volume).with_secondary(moles))
}

fn moles_from_molarity(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (molarity, volume) = (x[0], x[1]);
    Ok(Evaluation::new(molarity * volume).with_secondary(molarity))
}

fn volume_from_molarity(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (moles, molarity) = (x[0], x[1]);
    Ok(Evaluation::new(moles / molarity)
        .with_secondary(moles)
        .with_extra("Volume", moles / molarity * 1000.0, "mL"))
}

pub const MOLARITY_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "molarity-calculator",
    name: "Molarity Calculator",
    category: Category::Concentration,
    formula_text: "M = n / V",
    fields: &[
        non_negative("moles", "Moles of solute (n)", "mol")
            .with_message("Moles must be a non-negative number"),
        positive("volume", "Volume of solution (V)", "L")
            .with_message("Volume must be a positive number of liters"),
        positive("molarity", "Molarity (M)", "mol/L").with_message("Molarity must be positive"),
    ],
    directions: &[
        Direction {
            name: "Molarity from moles and volume",
            inputs: &["moles", "volume"],
            output: "M",
            unit: "mol/L",
            formula: molarity,
        },
        Direction {
            name: "Moles from molarity and volume",
            inputs: &["molarity", "volume"],
            output: "n",
            unit: "mol",
            formula: moles_from_molarity,
        },
        Direction {
            name: "Volume from moles and molarity",
            inputs: &["moles", "molarity"],
            output: "V",
            unit: "L",
            formula: volume_from_molarity,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Normality: N = M × n
////////////////////////////////////////////////////////////////////////////////

const EQUIVALENTS_MESSAGE: &str = "Molarity and equivalents must be positive values";

fn normality(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (molarity, equivalents) = (x[0], x[1]);
    Ok(Evaluation::new(molarity * equivalents).with_secondary(molarity))
}

fn molarity_from_normality(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (normality, equivalents) = (x[0], x[1]);
    Ok(Evaluation::new(normality / equivalents).with_secondary(normality))
}

pub const NORMALITY_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "normality-calculator",
    name: "Normality Calculator",
    category: Category::Concentration,
    formula_text: "N = M × n",
    fields: &[
        positive("molarity", "Molarity (M)", "mol/L")
            .with_message(EQUIVALENTS_MESSAGE)
            .with_parse_message("Please enter valid numbers for molarity and equivalents"),
        positive("equivalents", "Equivalents per mole (n)", "eq/mol")
            .with_message(EQUIVALENTS_MESSAGE)
            .with_parse_message("Please enter valid numbers for molarity and equivalents"),
        positive("normality", "Normality (N)", "eq/L")
            .with_message("Normality and equivalents must be positive values")
            .with_parse_message("Please enter valid numbers for normality and equivalents"),
    ],
    directions: &[
        Direction {
            name: "Normality from molarity",
            inputs: &["molarity", "equivalents"],
            output: "N",
            unit: "eq/L",
            formula: normality,
        },
        Direction {
            name: "Molarity from normality",
            inputs: &["normality", "equivalents"],
            output: "M",
            unit: "mol/L",
            formula: molarity_from_normality,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Dilution: M₁V₁ = M₂V₂
////////////////////////////////////////////////////////////////////////////////

const ALL_POSITIVE: &str = "All values must be positive";

fn dilution_volume(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (m1, v1, m2) = (x[0], x[1], x[2]);
    if m2 > m1 {
        return Err(EvaluatorError::domain(
            "m2",
            "Final concentration (M₂) cannot be greater than initial concentration (M₁)",
        ));
    }
    let v2 = m1 * v1 / m2;
    Ok(Evaluation::new(v2)
        .with_secondary(v1)
        .with_extra("Solvent to add", v2 - v1, "L"))
}

fn dilution_concentration(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (m1, v1, v2) = (x[0], x[1], x[2]);
    if v2 < v1 {
        return Err(EvaluatorError::domain(
            "v2",
            "Final volume (V₂) must be greater than initial volume (V₁)",
        ));
    }
    Ok(Evaluation::new(m1 * v1 / v2)
        .with_secondary(m1)
        .with_extra("Dilution factor", v2 / v1, ""))
}

pub const DILUTION_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "dilution-calculator",
    name: "Dilution Calculator",
    category: Category::Concentration,
    formula_text: "M₁V₁ = M₂V₂",
    fields: &[
        positive("m1", "Initial concentration (M₁)", "mol/L")
            .with_message(ALL_POSITIVE)
            .with_parse_message("Please enter valid numbers for M₁ and V₁"),
        positive("v1", "Initial volume (V₁)", "L")
            .with_message(ALL_POSITIVE)
            .with_parse_message("Please enter valid numbers for M₁ and V₁"),
        positive("m2", "Final concentration (M₂)", "mol/L")
            .with_message(ALL_POSITIVE)
            .with_parse_message("Please enter valid numbers for M₁, V₁, and M₂"),
        positive("v2", "Final volume (V₂)", "L")
            .with_message(ALL_POSITIVE)
            .with_parse_message("Please enter valid numbers for M₁, V₁, and V₂"),
    ],
    directions: &[
        Direction {
            name: "Final volume from M₁, V₁, M₂",
            inputs: &["m1", "v1", "m2"],
            output: "V₂",
            unit: "L",
            formula: dilution_volume,
        },
        Direction {
            name: "Final concentration from M₁, V₁, V₂",
            inputs: &["m1", "v1", "v2"],
            output: "M₂",
            unit: "mol/L",
            formula: dilution_concentration,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Molality: m = n / kg solvent
////////////////////////////////////////////////////////////////////////////////

const MOLALITY_MESSAGE: &str = "Moles must be non-negative and solvent mass must be positive";

fn molality(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (moles, solvent) = (x[0], x[1]);
    Ok(Evaluation::new(moles / solvent).with_secondary(moles))
}

pub const MOLALITY_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "molality-calculator",
    name: "Molality Calculator",
    category: Category::Concentration,
    formula_text: "m = n / kg solvent",
    fields: &[
        non_negative("moles", "Moles of solute (n)", "mol")
            .with_message(MOLALITY_MESSAGE)
            .with_parse_message(BOTH_FIELDS_MESSAGE),
        positive("solvent_mass", "Mass of solvent", "kg")
            .with_message(MOLALITY_MESSAGE)
            .with_parse_message(BOTH_FIELDS_MESSAGE),
    ],
    directions: &[Direction {
        name: "Molality from moles and solvent mass",
        inputs: &["moles", "solvent_mass"],
        output: "m",
        unit: "mol/kg",
        formula: molality,
    }],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Parts per million
////////////////////////////////////////////////////////////////////////////////

const PPM_FACTOR: f64 = 1.0e6;

fn ppm(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (solute, solution) = (x[0], x[1]);
    let ppm = solute / solution * PPM_FACTOR;
    Ok(Evaluation::new(ppm)
        .with_secondary(solute)
        .with_extra("Mass percent", ppm / 1.0e4, "%"))
}

fn solute_from_ppm(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (ppm, solution) = (x[0], x[1]);
    Ok(Evaluation::new(ppm * solution / PPM_FACTOR).with_secondary(ppm))
}

fn solution_from_ppm(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (solute, ppm) = (x[0], x[1]);
    Ok(Evaluation::new(solute * PPM_FACTOR / ppm).with_secondary(ppm))
}

pub const PPM_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "ppm-calculator",
    name: "PPM Calculator",
    category: Category::Concentration,
    formula_text: "ppm = (mass of solute / mass of solution) × 10⁶",
    fields: &[
        non_negative("solute_mass", "Mass of solute", "g"),
        positive("solution_mass", "Mass of solution", "g"),
        positive("ppm", "Concentration", "ppm"),
    ],
    directions: &[
        Direction {
            name: "ppm from solute and solution mass",
            inputs: &["solute_mass", "solution_mass"],
            output: "Concentration",
            unit: "ppm",
            formula: ppm,
        },
        Direction {
            name: "Solute mass from ppm",
            inputs: &["ppm", "solution_mass"],
            output: "Mass of solute",
            unit: "g",
            formula: solute_from_ppm,
        },
        Direction {
            name: "Solution mass from ppm",
            inputs: &["solute_mass", "ppm"],
            output: "Mass of solution",
            unit: "g",
            formula: solution_from_ppm,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Percent yield
////////////////////////////////////////////////////////////////////////////////

/// `< 70` needs work, `[70, 90)` good, `>= 90` excellent.
pub const YIELD_TABLE: ThresholdTable = ThresholdTable::new(
    &[
        Threshold::below(70.0, "Consider optimizing reaction conditions"),
        Threshold::below(90.0, "Good yield"),
    ],
    "Excellent yield!",
);

const YIELD_MESSAGE: &str = "Yields must be non-negative and theoretical yield must be positive";

fn percent_yield(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (actual, theoretical) = (x[0], x[1]);
    if actual > theoretical {
        return Err(EvaluatorError::domain(
            "actual_yield",
            "Actual yield cannot exceed theoretical yield",
        ));
    }
    let percent = actual / theoretical * 100.0;
    Ok(Evaluation::new(percent)
        .with_secondary(actual)
        .with_extra("Loss", theoretical - actual, "g")
        .classified_on(percent))
}

pub const PERCENT_YIELD_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "percent-yield-calculator",
    name: "Percent Yield Calculator",
    category: Category::Concentration,
    formula_text: "% Yield = (Actual / Theoretical) × 100",
    fields: &[
        non_negative("actual_yield", "Actual yield", "g")
            .with_message(YIELD_MESSAGE)
            .with_parse_message(BOTH_FIELDS_MESSAGE),
        positive("theoretical_yield", "Theoretical yield", "g")
            .with_message(YIELD_MESSAGE)
            .with_parse_message(BOTH_FIELDS_MESSAGE),
    ],
    directions: &[Direction {
        name: "Percent yield",
        inputs: &["actual_yield", "theoretical_yield"],
        output: "Percent yield",
        unit: "%",
        formula: percent_yield,
    }],
    table: Some(YIELD_TABLE),
};

////////////////////////////////////////////////////////////////////////////////
// PPB: ppb = (mass of solute / mass of solution) × 10⁹
////////////////////////////////////////////////////////////////////////////////

const PPB_FACTOR: f64 = 1.0e9;

fn ppb(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (solute, solution) = (x[0], x[1]);
    let ppb = solute / solution * PPB_FACTOR;
    Ok(Evaluation::new(ppb)
        .with_secondary(solute)
        .with_extra("Concentration", ppb / 1.0e3, "ppm"))
}

fn solute_from_ppb(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (ppb, solution) = (x[0], x[1]);
    Ok(Evaluation::new(ppb * solution / PPB_FACTOR).with_secondary(ppb))
}

fn solution_from_ppb(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (solute, ppb) = (x[0], x[1]);
    Ok(Evaluation::new(solute * PPB_FACTOR / ppb).with_secondary(ppb))
}

pub const PPB_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "ppb-calculator",
    name: "PPB Calculator",
    category: Category::Concentration,
    formula_text: "ppb = (mass of solute / mass of solution) × 10⁹",
    fields: &[
        non_negative("solute_mass", "Mass of solute", "g"),
        positive("solution_mass", "Mass of solution", "g"),
        positive("ppb", "Concentration", "ppb"),
    ],
    directions: &[
        Direction {
            name: "ppb from solute and solution mass",
            inputs: &["solute_mass", "solution_mass"],
            output: "Concentration",
            unit: "ppb",
            formula: ppb,
        },
        Direction {
            name: "Solute mass from ppb",
            inputs: &["ppb", "solution_mass"],
            output: "Mass of solute",
            unit: "g",
            formula: solute_from_ppb,
        },
        Direction {
            name: "Solution mass from ppb",
            inputs: &["solute_mass", "ppb"],
            output: "Mass of solution",
            unit: "g",
            formula: solution_from_ppb,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Mole fraction: χᵢ = nᵢ / Σn
////////////////////////////////////////////////////////////////////////////////

fn total_moles(moles: &[f64]) -> Result<f64, EvaluatorError> {
    let total: f64 = moles.iter().sum();
    if total <= 0.0 {
        return Err(EvaluatorError::domain(
            "moles_a",
            "Total moles must be greater than zero",
        ));
    }
    Ok(total)
}

/// inputs: nA, nB
fn binary_mole_fraction(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let total = total_moles(x)?;
    Ok(Evaluation::new(x[0] / total)
        .with_secondary(total)
        .with_extra("χB", x[1] / total, "")
        .with_extra("Component A", x[0] / total * 100.0, "mol %")
        .with_extra("Total moles", total, "mol"))
}

/// inputs: nA, nB, nC
fn ternary_mole_fraction(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let total = total_moles(x)?;
    Ok(Evaluation::new(x[0] / total)
        .with_secondary(total)
        .with_extra("χB", x[1] / total, "")
        .with_extra("χC", x[2] / total, "")
        .with_extra("Component A", x[0] / total * 100.0, "mol %")
        .with_extra("Total moles", total, "mol"))
}

const MOLES_MESSAGE: &str = "Moles must be non-negative numbers";

pub const MOLE_FRACTION_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "mole-fraction-calculator",
    name: "Mole Fraction Calculator",
    category: Category::Concentration,
    formula_text: "χA = nA / (nA + nB + ...)",
    fields: &[
        non_negative("moles_a", "Moles of component A", "mol").with_message(MOLES_MESSAGE),
        non_negative("moles_b", "Moles of component B", "mol").with_message(MOLES_MESSAGE),
        non_negative("moles_c", "Moles of component C", "mol").with_message(MOLES_MESSAGE),
    ],
    directions: &[
        Direction {
            name: "Two components",
            inputs: &["moles_a", "moles_b"],
            output: "χA",
            unit: "",
            formula: binary_mole_fraction,
        },
        Direction {
            name: "Three components",
            inputs: &["moles_a", "moles_b", "moles_c"],
            output: "χA",
            unit: "",
            formula: ternary_mole_fraction,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Mass percent: % = m(solute) / (m(solute) + m(solvent)) × 100
////////////////////////////////////////////////////////////////////////////////

const PERCENT_RANGE_MESSAGE: &str =
    "Mass percent must be 0-100% and solution mass must be positive";

fn check_percent(percent: f64) -> Result<(), EvaluatorError> {
    if percent > 100.0 {
        return Err(EvaluatorError::domain("mass_percent", PERCENT_RANGE_MESSAGE));
    }
    Ok(())
}

/// inputs: solute, solvent
fn mass_percent(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (solute, solvent) = (x[0], x[1]);
    let total = solute + solvent;
    if total <= 0.0 {
        return Err(EvaluatorError::domain(
            "solute_mass",
            "Total mass must be greater than zero",
        ));
    }
    Ok(Evaluation::new(solute / total * 100.0)
        .with_secondary(solute)
        .with_extra("Mass of solution", total, "g"))
}

/// inputs: %, solution
fn solute_from_percent(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (percent, solution) = (x[0], x[1]);
    check_percent(percent)?;
    let solute = percent / 100.0 * solution;
    Ok(Evaluation::new(solute)
        .with_secondary(percent)
        .with_extra("Mass of solvent", solution - solute, "g"))
}

/// inputs: solute, %
fn solution_from_percent(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (solute, percent) = (x[0], x[1]);
    check_percent(percent)?;
    if percent == 0.0 {
        return Err(EvaluatorError::domain(
            "mass_percent",
            "Mass percent must be greater than zero",
        ));
    }
    let solution = solute / percent * 100.0;
    Ok(Evaluation::new(solution)
        .with_secondary(percent)
        .with_extra("Mass of solvent", solution - solute, "g"))
}

pub const MASS_PERCENT_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "mass-percent-calculator",
    name: "Mass Percent Calculator",
    category: Category::Concentration,
    formula_text: "Mass % = (mass of solute / mass of solution) × 100",
    fields: &[
        non_negative("solute_mass", "Mass of solute", "g").with_message("Mass values must be positive"),
        non_negative("solvent_mass", "Mass of solvent", "g")
            .with_message("Mass values must be positive"),
        positive("solution_mass", "Mass of solution", "g").with_message(PERCENT_RANGE_MESSAGE),
        non_negative("mass_percent", "Mass percent", "%").with_message(PERCENT_RANGE_MESSAGE),
    ],
    directions: &[
        Direction {
            name: "Mass percent from solute and solvent",
            inputs: &["solute_mass", "solvent_mass"],
            output: "Mass percent",
            unit: "%",
            formula: mass_percent,
        },
        Direction {
            name: "Solute mass from mass percent",
            inputs: &["mass_percent", "solution_mass"],
            output: "Mass of solute",
            unit: "g",
            formula: solute_from_percent,
        },
        Direction {
            name: "Solution mass from mass percent",
            inputs: &["solute_mass", "mass_percent"],
            output: "Mass of solution",
            unit: "g",
            formula: solution_from_percent,
        },
    ],
    table: None,
};
