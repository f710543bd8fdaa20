use super::Category;
use crate::Evaluator::classify::{Threshold, ThresholdTable};
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::{Direction, Evaluation, FormulaSpec};
use crate::Evaluator::input::{Constraint, FieldSpec, InputKind};
use crate::constants::PhysicalConstants;

/// Spontaneity by ΔG. ΔG exactly 0 is equilibrium.
pub const SPONTANEITY_TABLE: ThresholdTable = ThresholdTable::new(
    &[
        Threshold::below(0.0, "Spontaneous (thermodynamically favorable)"),
        Threshold::at_most(0.0, "At equilibrium"),
    ],
    "Non-spontaneous (thermodynamically unfavorable)",
);

/// ΔG = ΔH - TΔS, with ΔH in kJ/mol and ΔS in J/(mol·K)
fn gibbs_energy(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (enthalpy, entropy, temperature) = (x[0], x[1], x[2]);
    let gibbs = enthalpy - temperature * entropy / 1000.0;
    let evaluation = Evaluation::new(gibbs)
        .with_secondary(enthalpy)
        .with_extra("TΔS", temperature * entropy / 1000.0, "kJ/mol")
        .classified_on(gibbs);
    // temperature at which the sign of ΔG flips, when there is one
    let crossover = enthalpy * 1000.0 / entropy;
    if entropy != 0.0 && crossover > 0.0 {
        return Ok(evaluation.with_extra("Crossover temperature", crossover, "K"));
    }
    Ok(evaluation)
}

pub const GIBBS_FREE_ENERGY_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "gibbs-free-energy-calculator",
    name: "Gibbs Free Energy Calculator",
    category: Category::Thermodynamics,
    formula_text: "ΔG = ΔH - TΔS",
    fields: &[
        FieldSpec::new(
            "enthalpy",
            "Enthalpy change (ΔH)",
            "kJ/mol",
            InputKind::Numeric,
            Constraint::Any,
        )
        .with_message("Please enter valid values for all fields."),
        FieldSpec::new(
            "entropy",
            "Entropy change (ΔS)",
            "J/(mol·K)",
            InputKind::Numeric,
            Constraint::Any,
        )
        .with_message("Please enter valid values for all fields."),
        FieldSpec::new(
            "temperature",
            "Temperature (T)",
            "K",
            InputKind::Numeric,
            Constraint::Positive,
        )
        .with_message("Temperature must be positive."),
    ],
    directions: &[Direction {
        name: "Gibbs free energy",
        inputs: &["enthalpy", "entropy", "temperature"],
        output: "ΔG",
        unit: "kJ/mol",
        formula: gibbs_energy,
    }],
    table: Some(SPONTANEITY_TABLE),
};

////////////////////////////////////////////////////////////////////////////////
// Clausius-Clapeyron: ln(P₂/P₁) = -(ΔHvap / R)(1/T₂ - 1/T₁), T in °C
////////////////////////////////////////////////////////////////////////////////

fn to_kelvin(field: &str, celsius: f64, c: &PhysicalConstants) -> Result<f64, EvaluatorError> {
    let kelvin = celsius + c.kelvin_offset;
    if kelvin <= 0.0 {
        return Err(EvaluatorError::domain(
            field,
            "Temperature must be above absolute zero",
        ));
    }
    Ok(kelvin)
}

/// inputs: P₁, T₁ (°C), T₂ (°C), ΔHvap (kJ/mol)
fn vapor_pressure(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (p1, t1, t2, heat) = (x[0], x[1], x[2], x[3]);
    let (t1, t2) = (to_kelvin("t1", t1, c)?, to_kelvin("t2", t2, c)?);
    let ln_ratio = -(heat * 1000.0 / c.gas_constant) * (1.0 / t2 - 1.0 / t1);
    Ok(Evaluation::new(p1 * ln_ratio.exp())
        .with_secondary(p1)
        .with_extra("ln(P₂/P₁)", ln_ratio, ""))
}

/// inputs: P₁, P₂, T₁ (°C), T₂ (°C)
fn heat_of_vaporization(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (p1, p2, t1, t2) = (x[0], x[1], x[2], x[3]);
    let (t1, t2) = (to_kelvin("t1", t1, c)?, to_kelvin("t2", t2, c)?);
    if t1 == t2 {
        return Err(EvaluatorError::domain("t2", "The two temperatures must differ"));
    }
    let heat = -c.gas_constant * (p2 / p1).ln() / (1.0 / t2 - 1.0 / t1);
    Ok(Evaluation::new(heat / 1000.0).with_secondary(p1))
}

/// inputs: P₁, P₂, T₁ (°C), ΔHvap (kJ/mol)
fn boiling_point(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (p1, p2, t1, heat) = (x[0], x[1], x[2], x[3]);
    let t1 = to_kelvin("t1", t1, c)?;
    let inverse = 1.0 / t1 - c.gas_constant / (heat * 1000.0) * (p2 / p1).ln();
    if inverse <= 0.0 {
        return Err(EvaluatorError::domain(
            "p2",
            "No finite boiling point at this pressure",
        ));
    }
    let t2 = 1.0 / inverse;
    Ok(Evaluation::new(t2 - c.kelvin_offset)
        .with_secondary(p2)
        .with_extra("Boiling point", t2, "K"))
}

const CC_PRESSURE_MESSAGE: &str = "Pressures must be positive";

pub const CLAUSIUS_CLAPEYRON_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "clausius-clapeyron-calculator",
    name: "Clausius-Clapeyron Calculator",
    category: Category::Thermodynamics,
    formula_text: "ln(P₂/P₁) = -(ΔHvap / R)(1/T₂ - 1/T₁)",
    fields: &[
        FieldSpec::new("p1", "Pressure (P₁)", "atm", InputKind::Scientific, Constraint::Positive)
            .with_message(CC_PRESSURE_MESSAGE),
        FieldSpec::new("p2", "Pressure (P₂)", "atm", InputKind::Scientific, Constraint::Positive)
            .with_message(CC_PRESSURE_MESSAGE),
        FieldSpec::new("t1", "Temperature (T₁)", "°C", InputKind::Numeric, Constraint::Any),
        FieldSpec::new("t2", "Temperature (T₂)", "°C", InputKind::Numeric, Constraint::Any),
        FieldSpec::new(
            "heat_vap",
            "Heat of vaporization (ΔHvap)",
            "kJ/mol",
            InputKind::Numeric,
            Constraint::Positive,
        )
        .with_message("Heat of vaporization must be positive"),
    ],
    directions: &[
        Direction {
            name: "Vapor pressure P₂ at T₂",
            inputs: &["p1", "t1", "t2", "heat_vap"],
            output: "P₂",
            unit: "atm",
            formula: vapor_pressure,
        },
        Direction {
            name: "Heat of vaporization from two points",
            inputs: &["p1", "p2", "t1", "t2"],
            output: "ΔHvap",
            unit: "kJ/mol",
            formula: heat_of_vaporization,
        },
        Direction {
            name: "Boiling point T₂ at pressure P₂",
            inputs: &["p1", "p2", "t1", "heat_vap"],
            output: "T₂",
            unit: "°C",
            formula: boiling_point,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Specific heat: q = m·c·ΔT
////////////////////////////////////////////////////////////////////////////////

fn temperature_change(initial: f64, last: f64) -> Result<f64, EvaluatorError> {
    let delta = last - initial;
    if delta == 0.0 {
        return Err(EvaluatorError::domain(
            "final_temp",
            "Temperature change cannot be zero",
        ));
    }
    Ok(delta)
}

/// inputs: m, c, T₁, T₂
fn heat(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (mass, specific, initial, last) = (x[0], x[1], x[2], x[3]);
    let delta = last - initial;
    let q = mass * specific * delta;
    Ok(Evaluation::new(q)
        .with_secondary(delta)
        .with_extra("ΔT", delta, "°C")
        .with_extra("Heat", q / 1000.0, "kJ"))
}

/// inputs: q, c, T₁, T₂
fn heated_mass(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (q, specific, initial, last) = (x[0], x[1], x[2], x[3]);
    let delta = temperature_change(initial, last)?;
    Ok(Evaluation::new(q / (specific * delta))
        .with_secondary(delta)
        .with_extra("ΔT", delta, "°C"))
}

/// inputs: q, m, T₁, T₂
fn specific_heat(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (q, mass, initial, last) = (x[0], x[1], x[2], x[3]);
    let delta = temperature_change(initial, last)?;
    Ok(Evaluation::new(q / (mass * delta))
        .with_secondary(delta)
        .with_extra("ΔT", delta, "°C"))
}

/// inputs: q, m, c
fn heat_temperature_change(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (q, mass, specific) = (x[0], x[1], x[2]);
    Ok(Evaluation::new(q / (mass * specific)).with_secondary(q))
}

pub const SPECIFIC_HEAT_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "specific-heat-calculator",
    name: "Specific Heat Calculator",
    category: Category::Thermodynamics,
    formula_text: "q = m × c × ΔT",
    fields: &[
        FieldSpec::new("heat", "Heat energy (q)", "J", InputKind::Scientific, Constraint::Any),
        FieldSpec::new("mass", "Mass (m)", "g", InputKind::Scientific, Constraint::Positive)
            .with_message("Mass must be positive"),
        FieldSpec::new(
            "specific_heat",
            "Specific heat (c)",
            "J/(g·°C)",
            InputKind::Numeric,
            Constraint::Positive,
        )
        .with_message("Specific heat must be positive"),
        FieldSpec::new(
            "initial_temp",
            "Initial temperature (T₁)",
            "°C",
            InputKind::Numeric,
            Constraint::Any,
        ),
        FieldSpec::new(
            "final_temp",
            "Final temperature (T₂)",
            "°C",
            InputKind::Numeric,
            Constraint::Any,
        ),
    ],
    directions: &[
        Direction {
            name: "Heat from m, c, T₁, T₂",
            inputs: &["mass", "specific_heat", "initial_temp", "final_temp"],
            output: "q",
            unit: "J",
            formula: heat,
        },
        Direction {
            name: "Mass from q, c, T₁, T₂",
            inputs: &["heat", "specific_heat", "initial_temp", "final_temp"],
            output: "m",
            unit: "g",
            formula: heated_mass,
        },
        Direction {
            name: "Specific heat from q, m, T₁, T₂",
            inputs: &["heat", "mass", "initial_temp", "final_temp"],
            output: "c",
            unit: "J/(g·°C)",
            formula: specific_heat,
        },
        Direction {
            name: "Temperature change from q, m, c",
            inputs: &["heat", "mass", "specific_heat"],
            output: "ΔT",
            unit: "°C",
            formula: heat_temperature_change,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Colligative shifts: ΔT = i·K·m (boiling point elevation, freezing point depression)
////////////////////////////////////////////////////////////////////////////////

const CHECK_VALUES: &str = "Please check your values";

/// inputs: m, K, i
fn colligative_shift(x: &[f64]) -> f64 {
    let (molality, constant, factor) = (x[0], x[1], x[2]);
    factor * constant * molality
}

/// inputs: ΔT, K, i
fn molality_from_shift(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (delta, constant, factor) = (x[0], x[1], x[2]);
    if constant <= 0.0 || factor <= 0.0 {
        return Err(EvaluatorError::domain("vant_hoff", CHECK_VALUES));
    }
    Ok(Evaluation::new(delta / (factor * constant)).with_secondary(delta))
}

/// inputs: ΔT, m, i
fn constant_from_shift(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (delta, molality, factor) = (x[0], x[1], x[2]);
    if delta <= 0.0 || molality <= 0.0 || factor <= 0.0 {
        return Err(EvaluatorError::domain("delta_t", CHECK_VALUES));
    }
    Ok(Evaluation::new(delta / (factor * molality)).with_secondary(delta))
}

/// inputs: m, Kb, i
fn boiling_point_elevation(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let delta = colligative_shift(x);
    Ok(Evaluation::new(delta)
        .with_secondary(x[0])
        .with_extra("New boiling point of water", 100.0 + delta, "°C"))
}

/// inputs: m, Kf, i
fn freezing_point_depression(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let delta = colligative_shift(x);
    Ok(Evaluation::new(delta)
        .with_secondary(x[0])
        .with_extra("New freezing point of water", -delta, "°C"))
}

const fn colligative_field(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Numeric, Constraint::NonNegative)
        .with_message("Values cannot be negative")
        .with_parse_message("Please enter valid numbers")
}

pub const BOILING_POINT_ELEVATION_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "boiling-point-elevation-calculator",
    name: "Boiling Point Elevation Calculator",
    category: Category::Thermodynamics,
    formula_text: "ΔTb = i × Kb × m",
    fields: &[
        colligative_field("molality", "Molality (m)", "mol/kg"),
        colligative_field("kb", "Ebullioscopic constant (Kb, 0.512 for water)", "°C·kg/mol"),
        colligative_field("vant_hoff", "Van't Hoff factor (i)", ""),
        colligative_field("delta_t", "Boiling point elevation (ΔTb)", "°C"),
    ],
    directions: &[
        Direction {
            name: "Elevation from m, Kb, i",
            inputs: &["molality", "kb", "vant_hoff"],
            output: "ΔTb",
            unit: "°C",
            formula: boiling_point_elevation,
        },
        Direction {
            name: "Molality from ΔTb, Kb, i",
            inputs: &["delta_t", "kb", "vant_hoff"],
            output: "m",
            unit: "mol/kg",
            formula: molality_from_shift,
        },
        Direction {
            name: "Kb from ΔTb, m, i",
            inputs: &["delta_t", "molality", "vant_hoff"],
            output: "Kb",
            unit: "°C·kg/mol",
            formula: constant_from_shift,
        },
    ],
    table: None,
};

pub const FREEZING_POINT_DEPRESSION_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "freezing-point-depression-calculator",
    name: "Freezing Point Depression Calculator",
    category: Category::Thermodynamics,
    formula_text: "ΔTf = i × Kf × m",
    fields: &[
        colligative_field("molality", "Molality (m)", "mol/kg"),
        colligative_field("kf", "Cryoscopic constant (Kf, 1.86 for water)", "°C·kg/mol"),
        colligative_field("vant_hoff", "Van't Hoff factor (i)", ""),
        colligative_field("delta_t", "Freezing point depression (ΔTf)", "°C"),
    ],
    directions: &[
        Direction {
            name: "Depression from m, Kf, i",
            inputs: &["molality", "kf", "vant_hoff"],
            output: "ΔTf",
            unit: "°C",
            formula: freezing_point_depression,
        },
        Direction {
            name: "Molality from ΔTf, Kf, i",
            inputs: &["delta_t", "kf", "vant_hoff"],
            output: "m",
            unit: "mol/kg",
            formula: molality_from_shift,
        },
        Direction {
            name: "Kf from ΔTf, m, i",
            inputs: &["delta_t", "molality", "vant_hoff"],
            output: "Kf",
            unit: "°C·kg/mol",
            formula: constant_from_shift,
        },
    ],
    table: None,
};
