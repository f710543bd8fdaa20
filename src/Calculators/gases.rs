use super::Category;
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::{Direction, Evaluation, FormulaSpec};
use crate::Evaluator::input::{Constraint, FieldSpec, InputKind};
use crate::constants::PhysicalConstants;

const fn positive(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Scientific, Constraint::Positive)
        .with_message("All values must be positive")
}

////////////////////////////////////////////////////////////////////////////////
// Gas density: D = PM / RT, R in L·atm/(mol·K)
////////////////////////////////////////////////////////////////////////////////

/// inputs: M, P, T
fn density(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (molar_mass, pressure, temperature) = (x[0], x[1], x[2]);
    let d = pressure * molar_mass / (c.gas_constant_latm * temperature);
    Ok(Evaluation::new(d).with_secondary(molar_mass))
}

/// inputs: D, P, T
fn molar_mass(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (density, pressure, temperature) = (x[0], x[1], x[2]);
    let m = density * c.gas_constant_latm * temperature / pressure;
    Ok(Evaluation::new(m).with_secondary(density))
}

/// inputs: D, M, T
fn pressure(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (density, molar_mass, temperature) = (x[0], x[1], x[2]);
    let p = density * c.gas_constant_latm * temperature / molar_mass;
    Ok(Evaluation::new(p).with_secondary(density))
}

/// inputs: D, M, P
fn temperature(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (density, molar_mass, pressure) = (x[0], x[1], x[2]);
    let t = pressure * molar_mass / (density * c.gas_constant_latm);
    Ok(Evaluation::new(t)
        .with_secondary(density)
        .with_extra("Temperature", t - c.kelvin_offset, "°C"))
}

pub const GAS_DENSITY_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "gas-density-calculator",
    name: "Gas Density Calculator",
    category: Category::Gases,
    formula_text: "D = PM / RT",
    fields: &[
        positive("density", "Density (D)", "g/L"),
        positive("molar_mass", "Molar mass (M)", "g/mol"),
        positive("pressure", "Pressure (P)", "atm"),
        positive("temperature", "Temperature (T)", "K"),
    ],
    directions: &[
        Direction {
            name: "Density from M, P, T",
            inputs: &["molar_mass", "pressure", "temperature"],
            output: "D",
            unit: "g/L",
            formula: density,
        },
        Direction {
            name: "Molar mass from D, P, T",
            inputs: &["density", "pressure", "temperature"],
            output: "M",
            unit: "g/mol",
            formula: molar_mass,
        },
        Direction {
            name: "Pressure from D, M, T",
            inputs: &["density", "molar_mass", "temperature"],
            output: "P",
            unit: "atm",
            formula: pressure,
        },
        Direction {
            name: "Temperature from D, M, P",
            inputs: &["density", "molar_mass", "pressure"],
            output: "T",
            unit: "K",
            formula: temperature,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Ideal gas law: PV = nRT
////////////////////////////////////////////////////////////////////////////////

/// inputs: V, n, T
fn ideal_pressure(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (volume, moles, temperature) = (x[0], x[1], x[2]);
    Ok(Evaluation::new(moles * c.gas_constant_latm * temperature / volume).with_secondary(volume))
}

/// inputs: P, n, T
fn ideal_volume(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (pressure, moles, temperature) = (x[0], x[1], x[2]);
    Ok(Evaluation::new(moles * c.gas_constant_latm * temperature / pressure)
        .with_secondary(pressure))
}

/// inputs: P, V, T
fn ideal_moles(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (pressure, volume, temperature) = (x[0], x[1], x[2]);
    Ok(Evaluation::new(pressure * volume / (c.gas_constant_latm * temperature))
        .with_secondary(pressure))
}

/// inputs: P, V, n
fn ideal_temperature(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (pressure, volume, moles) = (x[0], x[1], x[2]);
    let t = pressure * volume / (moles * c.gas_constant_latm);
    Ok(Evaluation::new(t)
        .with_secondary(pressure)
        .with_extra("Temperature", t - c.kelvin_offset, "°C"))
}

pub const IDEAL_GAS_LAW_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "ideal-gas-law-calculator",
    name: "Ideal Gas Law Calculator",
    category: Category::Gases,
    formula_text: "PV = nRT",
    fields: &[
        positive("pressure", "Pressure (P)", "atm"),
        positive("volume", "Volume (V)", "L"),
        positive("moles", "Amount of gas (n)", "mol"),
        positive("temperature", "Temperature (T)", "K"),
    ],
    directions: &[
        Direction {
            name: "Pressure from V, n, T",
            inputs: &["volume", "moles", "temperature"],
            output: "P",
            unit: "atm",
            formula: ideal_pressure,
        },
        Direction {
            name: "Volume from P, n, T",
            inputs: &["pressure", "moles", "temperature"],
            output: "V",
            unit: "L",
            formula: ideal_volume,
        },
        Direction {
            name: "Moles from P, V, T",
            inputs: &["pressure", "volume", "temperature"],
            output: "n",
            unit: "mol",
            formula: ideal_moles,
        },
        Direction {
            name: "Temperature from P, V, n",
            inputs: &["pressure", "volume", "moles"],
            output: "T",
            unit: "K",
            formula: ideal_temperature,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Combined gas law: P₁V₁/T₁ = P₂V₂/T₂
////////////////////////////////////////////////////////////////////////////////

const GAS_STATE_MESSAGE: &str = "Temperature, pressure, and volume must be positive.";

const fn gas_state(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    positive(name, label, unit).with_message(GAS_STATE_MESSAGE)
}

/// inputs: P₁, V₁, T₁, V₂, T₂
fn final_pressure(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (p1, v1, t1, v2, t2) = (x[0], x[1], x[2], x[3], x[4]);
    Ok(Evaluation::new(p1 * v1 * t2 / (t1 * v2)).with_secondary(p1))
}

/// inputs: P₁, V₁, T₁, P₂, T₂
fn final_volume(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (p1, v1, t1, p2, t2) = (x[0], x[1], x[2], x[3], x[4]);
    Ok(Evaluation::new(p1 * v1 * t2 / (p2 * t1)).with_secondary(v1))
}

/// inputs: P₁, V₁, T₁, P₂, V₂
fn final_temperature(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (p1, v1, t1, p2, v2) = (x[0], x[1], x[2], x[3], x[4]);
    let t2 = p2 * v2 * t1 / (p1 * v1);
    Ok(Evaluation::new(t2)
        .with_secondary(t1)
        .with_extra("Temperature", t2 - c.kelvin_offset, "°C"))
}

/// inputs: V₁, T₁, P₂, V₂, T₂
fn initial_pressure(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (v1, t1, p2, v2, t2) = (x[0], x[1], x[2], x[3], x[4]);
    Ok(Evaluation::new(p2 * v2 * t1 / (t2 * v1)).with_secondary(p2))
}

/// inputs: P₁, T₁, P₂, V₂, T₂
fn initial_volume(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (p1, t1, p2, v2, t2) = (x[0], x[1], x[2], x[3], x[4]);
    Ok(Evaluation::new(p2 * v2 * t1 / (p1 * t2)).with_secondary(v2))
}

/// inputs: P₁, V₁, P₂, V₂, T₂
fn initial_temperature(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (p1, v1, p2, v2, t2) = (x[0], x[1], x[2], x[3], x[4]);
    let t1 = p1 * v1 * t2 / (p2 * v2);
    Ok(Evaluation::new(t1)
        .with_secondary(t2)
        .with_extra("Temperature", t1 - c.kelvin_offset, "°C"))
}

pub const COMBINED_GAS_LAW_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "combined-gas-law-calculator",
    name: "Combined Gas Law Calculator",
    category: Category::Gases,
    formula_text: "P₁V₁/T₁ = P₂V₂/T₂",
    fields: &[
        gas_state("p1", "Initial pressure (P₁)", "atm"),
        gas_state("v1", "Initial volume (V₁)", "L"),
        gas_state("t1", "Initial temperature (T₁)", "K"),
        gas_state("p2", "Final pressure (P₂)", "atm"),
        gas_state("v2", "Final volume (V₂)", "L"),
        gas_state("t2", "Final temperature (T₂)", "K"),
    ],
    directions: &[
        Direction {
            name: "Final pressure P₂",
            inputs: &["p1", "v1", "t1", "v2", "t2"],
            output: "P₂",
            unit: "atm",
            formula: final_pressure,
        },
        Direction {
            name: "Final volume V₂",
            inputs: &["p1", "v1", "t1", "p2", "t2"],
            output: "V₂",
            unit: "L",
            formula: final_volume,
        },
        Direction {
            name: "Final temperature T₂",
            inputs: &["p1", "v1", "t1", "p2", "v2"],
            output: "T₂",
            unit: "K",
            formula: final_temperature,
        },
        Direction {
            name: "Initial pressure P₁",
            inputs: &["v1", "t1", "p2", "v2", "t2"],
            output: "P₁",
            unit: "atm",
            formula: initial_pressure,
        },
        Direction {
            name: "Initial volume V₁",
            inputs: &["p1", "t1", "p2", "v2", "t2"],
            output: "V₁",
            unit: "L",
            formula: initial_volume,
        },
        Direction {
            name: "Initial temperature T₁",
            inputs: &["p1", "v1", "p2", "v2", "t2"],
            output: "T₁",
            unit: "K",
            formula: initial_temperature,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Graham's law: r₁/r₂ = √(M₂/M₁)
////////////////////////////////////////////////////////////////////////////////

/// inputs: r₂, M₁, M₂
fn graham_rate1(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (rate2, m1, m2) = (x[0], x[1], x[2]);
    let ratio = (m2 / m1).sqrt();
    Ok(Evaluation::new(rate2 * ratio)
        .with_secondary(rate2)
        .with_extra("Rate ratio r₁/r₂", ratio, ""))
}

/// inputs: r₁, M₁, M₂
fn graham_rate2(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (rate1, m1, m2) = (x[0], x[1], x[2]);
    let ratio = (m2 / m1).sqrt();
    Ok(Evaluation::new(rate1 / ratio)
        .with_secondary(rate1)
        .with_extra("Rate ratio r₁/r₂", ratio, ""))
}

/// inputs: r₁, r₂, M₂
fn graham_mass1(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (rate1, rate2, m2) = (x[0], x[1], x[2]);
    Ok(Evaluation::new(m2 * (rate2 / rate1).powi(2))
        .with_secondary(m2)
        .with_extra("Rate ratio r₁/r₂", rate1 / rate2, ""))
}

/// inputs: r₁, r₂, M₁
fn graham_mass2(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (rate1, rate2, m1) = (x[0], x[1], x[2]);
    Ok(Evaluation::new(m1 * (rate1 / rate2).powi(2))
        .with_secondary(m1)
        .with_extra("Rate ratio r₁/r₂", rate1 / rate2, ""))
}

pub const GRAHAMS_LAW_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "grahams-law-calculator",
    name: "Graham's Law Calculator",
    category: Category::Gases,
    formula_text: "r₁/r₂ = √(M₂/M₁)",
    fields: &[
        positive("rate1", "Rate of gas 1 (r₁)", "mol/s"),
        positive("rate2", "Rate of gas 2 (r₂)", "mol/s"),
        positive("m1", "Molar mass of gas 1 (M₁)", "g/mol"),
        positive("m2", "Molar mass of gas 2 (M₂)", "g/mol"),
    ],
    directions: &[
        Direction {
            name: "Rate of gas 1",
            inputs: &["rate2", "m1", "m2"],
            output: "r₁",
            unit: "mol/s",
            formula: graham_rate1,
        },
        Direction {
            name: "Rate of gas 2",
            inputs: &["rate1", "m1", "m2"],
            output: "r₂",
            unit: "mol/s",
            formula: graham_rate2,
        },
        Direction {
            name: "Molar mass of gas 1",
            inputs: &["rate1", "rate2", "m2"],
            output: "M₁",
            unit: "g/mol",
            formula: graham_mass1,
        },
        Direction {
            name: "Molar mass of gas 2",
            inputs: &["rate1", "rate2", "m1"],
            output: "M₂",
            unit: "g/mol",
            formula: graham_mass2,
        },
    ],
    table: None,
};
