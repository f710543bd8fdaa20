use super::Category;
use crate::Evaluator::classify::{Threshold, ThresholdTable};
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::{Direction, Evaluation, FormulaSpec};
use crate::Evaluator::input::{Constraint, FieldSpec, InputKind};
use crate::constants::PhysicalConstants;
use std::f64::consts::{LN_2, PI, SQRT_2};

const fn positive(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Scientific, Constraint::Positive)
}

const fn non_negative(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Scientific, Constraint::NonNegative)
}

////////////////////////////////////////////////////////////////////////////////
// Arrhenius: k = A·exp(-Ea / RT), Ea in kJ/mol
////////////////////////////////////////////////////////////////////////////////

const ARRHENIUS_MESSAGE: &str = "k, A and T must be positive values, Ea must be non-negative";

fn boltzmann_factor(ea_joule: f64, temperature: f64, c: &PhysicalConstants) -> f64 {
    (-ea_joule / (c.gas_constant * temperature)).exp()
}

fn check_k_below_a(k: f64, a: f64) -> Result<(), EvaluatorError> {
    if k > a {
        return Err(EvaluatorError::domain(
            "rate_constant",
            "Rate constant k cannot exceed frequency factor A",
        ));
    }
    Ok(())
}

/// inputs: A, Ea, T
fn arrhenius_k(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (a, ea, temperature) = (x[0], x[1], x[2]);
    let factor = boltzmann_factor(ea * 1000.0, temperature, c);
    Ok(Evaluation::new(a * factor)
        .with_secondary(a)
        .with_extra("exp(-Ea/RT)", factor, ""))
}

/// inputs: k, A, T
fn arrhenius_ea(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (k, a, temperature) = (x[0], x[1], x[2]);
    check_k_below_a(k, a)?;
    // k == A gives -0.0
    let ea = -(c.gas_constant * temperature * (k / a).ln()) / 1000.0 + 0.0;
    Ok(Evaluation::new(ea).with_secondary(k))
}

/// inputs: k, A, Ea
fn arrhenius_t(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (k, a, ea) = (x[0], x[1], x[2]);
    check_k_below_a(k, a)?;
    let temperature = -(ea * 1000.0) / (c.gas_constant * (k / a).ln());
    Ok(Evaluation::new(temperature)
        .with_secondary(k)
        .with_extra("Temperature", temperature - c.kelvin_offset, "°C"))
}

/// inputs: k, Ea, T
fn arrhenius_a(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (k, ea, temperature) = (x[0], x[1], x[2]);
    Ok(Evaluation::new(k / boltzmann_factor(ea * 1000.0, temperature, c)).with_secondary(k))
}

pub const ARRHENIUS_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "arrhenius-equation-calculator",
    name: "Arrhenius Equation Calculator",
    category: Category::Kinetics,
    formula_text: "k = A × exp(-Ea / RT)",
    fields: &[
        positive("rate_constant", "Rate constant (k)", "varies with order")
            .with_message(ARRHENIUS_MESSAGE),
        positive("frequency_factor", "Frequency factor (A)", "same as k")
            .with_message(ARRHENIUS_MESSAGE),
        non_negative("activation_energy", "Activation energy (Ea)", "kJ/mol")
            .with_message(ARRHENIUS_MESSAGE),
        positive("temperature", "Temperature (T)", "K").with_message(ARRHENIUS_MESSAGE),
    ],
    directions: &[
        Direction {
            name: "Rate constant from A, Ea, T",
            inputs: &["frequency_factor", "activation_energy", "temperature"],
            output: "k",
            unit: "same as A",
            formula: arrhenius_k,
        },
        Direction {
            name: "Activation energy from k, A, T",
            inputs: &["rate_constant", "frequency_factor", "temperature"],
            output: "Ea",
            unit: "kJ/mol",
            formula: arrhenius_ea,
        },
        Direction {
            name: "Temperature from k, A, Ea",
            inputs: &["rate_constant", "frequency_factor", "activation_energy"],
            output: "T",
            unit: "K",
            formula: arrhenius_t,
        },
        Direction {
            name: "Frequency factor from k, Ea, T",
            inputs: &["rate_constant", "activation_energy", "temperature"],
            output: "A",
            unit: "same as k",
            formula: arrhenius_a,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Collision theory, Ea in J/mol
////////////////////////////////////////////////////////////////////////////////

/// inputs: d (m), C (mol/L), T (K), M (g/mol)
fn collision_frequency(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (diameter, concentration, temperature, molar_mass) = (x[0], x[1], x[2], x[3]);
    // molecules per m³
    let number_density = concentration * 1000.0 * c.avogadro;
    let molecule_mass = molar_mass / 1000.0 / c.avogadro;
    let mean_speed = (8.0 * c.boltzmann * temperature / (PI * molecule_mass)).sqrt();
    let cross_section = PI * diameter * diameter;
    let frequency = cross_section * mean_speed * number_density * number_density / SQRT_2;
    Ok(Evaluation::new(frequency)
        .with_secondary(temperature)
        .with_extra("Mean molecular speed", mean_speed, "m/s")
        .with_extra("Collision cross-section", cross_section, "m²"))
}

/// inputs: Ea, A, p, T
fn collision_rate_constant(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (ea, a, steric, temperature) = (x[0], x[1], x[2], x[3]);
    let fraction = boltzmann_factor(ea, temperature, c);
    Ok(Evaluation::new(steric * a * fraction)
        .with_secondary(a)
        .with_extra("Molecules with E ≥ Ea", fraction * 100.0, "%"))
}

/// inputs: T₁, T₂, k₁, Ea
fn rate_constant_at_t2(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (t1, t2, k1, ea) = (x[0], x[1], x[2], x[3]);
    let ln_ratio = ea / c.gas_constant * (1.0 / t1 - 1.0 / t2);
    let k2 = k1 * ln_ratio.exp();
    Ok(Evaluation::new(k2)
        .with_secondary(k1)
        .with_extra("k₂/k₁", k2 / k1, ""))
}

pub const COLLISION_THEORY_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "collision-theory-calculator",
    name: "Collision Theory Calculator",
    category: Category::Kinetics,
    formula_text: "Z = σ v̄ n² / √2, k = p A exp(-Ea / RT)",
    fields: &[
        positive("diameter", "Molecular diameter (d)", "m"),
        positive("concentration", "Concentration (C)", "mol/L"),
        positive("temperature", "Temperature (T)", "K"),
        positive("molar_mass", "Molar mass (M)", "g/mol"),
        non_negative("activation_energy", "Activation energy (Ea)", "J/mol"),
        positive("frequency_factor", "Pre-exponential factor (A)", "varies"),
        non_negative("steric_factor", "Steric factor (p)", ""),
        positive("temperature2", "Second temperature (T₂)", "K"),
        positive("rate_constant1", "Rate constant at T (k₁)", "varies"),
    ],
    directions: &[
        Direction {
            name: "Collision frequency",
            inputs: &["diameter", "concentration", "temperature", "molar_mass"],
            output: "Z",
            unit: "collisions/(m³·s)",
            formula: collision_frequency,
        },
        Direction {
            name: "Rate constant with steric factor",
            inputs: &[
                "activation_energy",
                "frequency_factor",
                "steric_factor",
                "temperature",
            ],
            output: "k",
            unit: "same as A",
            formula: collision_rate_constant,
        },
        Direction {
            name: "Rate constant at a second temperature",
            inputs: &["temperature", "temperature2", "rate_constant1", "activation_energy"],
            output: "k₂",
            unit: "same as k₁",
            formula: rate_constant_at_t2,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Half-life
////////////////////////////////////////////////////////////////////////////////

/// first order, inputs: k
fn half_life_first_order(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let k = x[0];
    Ok(Evaluation::new(LN_2 / k).with_secondary(k))
}

/// first order, inputs: t½
fn rate_constant_first_order(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let half_life = x[0];
    Ok(Evaluation::new(LN_2 / half_life).with_secondary(half_life))
}

/// zero order, inputs: k, [A]₀
fn half_life_zero_order(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (k, initial) = (x[0], x[1]);
    Ok(Evaluation::new(initial / (2.0 * k)).with_secondary(k))
}

/// second order, inputs: k, [A]₀
fn half_life_second_order(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (k, initial) = (x[0], x[1]);
    Ok(Evaluation::new(1.0 / (k * initial)).with_secondary(k))
}

pub const HALF_LIFE_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "half-life-calculator",
    name: "Half-Life Calculator",
    category: Category::Kinetics,
    formula_text: "t½ = ln 2 / k (first order)",
    fields: &[
        positive("rate_constant", "Rate constant (k)", "").with_message("Rate constant must be positive"),
        positive("half_life", "Half-life (t½)", "s").with_message("Half-life must be positive"),
        positive("initial_concentration", "Initial concentration ([A]₀)", "mol/L")
            .with_message("Initial concentration must be positive"),
    ],
    directions: &[
        Direction {
            name: "Half-life from k (first order)",
            inputs: &["rate_constant"],
            output: "t½",
            unit: "s",
            formula: half_life_first_order,
        },
        Direction {
            name: "Rate constant from half-life (first order)",
            inputs: &["half_life"],
            output: "k",
            unit: "s⁻¹",
            formula: rate_constant_first_order,
        },
        Direction {
            name: "Half-life from k, [A]₀ (zero order)",
            inputs: &["rate_constant", "initial_concentration"],
            output: "t½",
            unit: "s",
            formula: half_life_zero_order,
        },
        Direction {
            name: "Half-life from k, [A]₀ (second order)",
            inputs: &["rate_constant", "initial_concentration"],
            output: "t½",
            unit: "s",
            formula: half_life_second_order,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Radioactive decay: N = N₀·exp(-λt), λ = ln 2 / t½
////////////////////////////////////////////////////////////////////////////////

const DECAY_MESSAGE: &str = "Final amount must be positive and less than initial amount";

fn check_decayed(initial: f64, remaining: f64) -> Result<(), EvaluatorError> {
    if remaining >= initial {
        return Err(EvaluatorError::domain("final_amount", DECAY_MESSAGE));
    }
    Ok(())
}

/// inputs: N₀, t½, t
fn remaining_amount(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (initial, half_life, time) = (x[0], x[1], x[2]);
    let lambda = LN_2 / half_life;
    let remaining = initial * (-lambda * time).exp();
    let percent_remaining = remaining / initial * 100.0;
    Ok(Evaluation::new(remaining)
        .with_secondary(initial)
        .with_extra("Decay constant (λ)", lambda, "1/time")
        .with_extra("Remaining", percent_remaining, "%")
        .with_extra("Decayed", 100.0 - percent_remaining, "%")
        .with_extra("Half-lives elapsed", time / half_life, ""))
}

/// inputs: N₀, N, t
fn half_life_from_decay(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (initial, remaining, time) = (x[0], x[1], x[2]);
    check_decayed(initial, remaining)?;
    if time <= 0.0 {
        return Err(EvaluatorError::domain("time", "Please enter valid time"));
    }
    let lambda = -(remaining / initial).ln() / time;
    Ok(Evaluation::new(LN_2 / lambda)
        .with_secondary(time)
        .with_extra("Decay constant (λ)", lambda, "1/time"))
}

/// inputs: N₀, N, t½
fn elapsed_time(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (initial, remaining, half_life) = (x[0], x[1], x[2]);
    check_decayed(initial, remaining)?;
    let lambda = LN_2 / half_life;
    let time = -(remaining / initial).ln() / lambda;
    Ok(Evaluation::new(time)
        .with_secondary(half_life)
        .with_extra("Half-lives elapsed", time / half_life, ""))
}

pub const RADIOACTIVE_DECAY_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "radioactive-decay-calculator",
    name: "Radioactive Decay Calculator",
    category: Category::Nuclear,
    formula_text: "N = N₀ × exp(-ln2 × t / t½)",
    fields: &[
        positive("initial_amount", "Initial amount (N₀)", "")
            .with_message("Please enter a valid positive initial amount"),
        positive("final_amount", "Remaining amount (N)", "").with_message(DECAY_MESSAGE),
        positive("half_life", "Half-life (t½)", "time")
            .with_message("Please enter a valid positive half-life"),
        non_negative("time", "Elapsed time (t)", "time").with_message("Please enter a valid time"),
    ],
    directions: &[
        Direction {
            name: "Remaining amount from N₀, t½, t",
            inputs: &["initial_amount", "half_life", "time"],
            output: "N",
            unit: "same as N₀",
            formula: remaining_amount,
        },
        Direction {
            name: "Half-life from N₀, N, t",
            inputs: &["initial_amount", "final_amount", "time"],
            output: "t½",
            unit: "same as t",
            formula: half_life_from_decay,
        },
        Direction {
            name: "Elapsed time from N₀, N, t½",
            inputs: &["initial_amount", "final_amount", "half_life"],
            output: "t",
            unit: "same as t½",
            formula: elapsed_time,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Radiocarbon dating: t = (t½ / ln2)·ln(A₀ / A), t½(¹⁴C) = 5730 years
////////////////////////////////////////////////////////////////////////////////

pub const CARBON14_HALF_LIFE: f64 = 5730.0;

/// Historical era by sample age in years.
pub const ERA_TABLE: ThresholdTable = ThresholdTable::new(
    &[
        Threshold::below(500.0, "Modern Period (0-500 years)"),
        Threshold::below(2000.0, "Medieval to Modern (500-2000 years)"),
        Threshold::below(5000.0, "Ancient Civilizations (2000-5000 years)"),
        Threshold::below(10000.0, "Neolithic Period (5000-10000 years)"),
        Threshold::below(20000.0, "Upper Paleolithic (10000-20000 years)"),
        Threshold::below(50000.0, "Middle Paleolithic (20000-50000 years)"),
    ],
    "Near Detection Limit (>50000 years)",
);

/// 1 % of the age, at least 40 years
fn dating_uncertainty(age: f64) -> f64 {
    (age * 0.01).max(40.0)
}

/// inputs: A, A₀
fn radiocarbon_age(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (current, initial) = (x[0], x[1]);
    if current > initial {
        return Err(EvaluatorError::domain(
            "current_activity",
            "Current activity cannot exceed initial activity",
        ));
    }
    // A == A₀ gives -0.0
    let age = CARBON14_HALF_LIFE / LN_2 * (initial / current).ln() + 0.0;
    Ok(Evaluation::new(age)
        .with_secondary(current)
        .with_extra("Uncertainty (±)", dating_uncertainty(age), "years")
        .with_extra("¹⁴C remaining", current / initial * 100.0, "%")
        .classified_on(age))
}

/// inputs: t, A₀
fn radiocarbon_activity(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (age, initial) = (x[0], x[1]);
    let current = initial * (-LN_2 * age / CARBON14_HALF_LIFE).exp();
    Ok(Evaluation::new(current)
        .with_secondary(age)
        .with_extra("¹⁴C remaining", current / initial * 100.0, "%")
        .classified_on(age))
}

const ACTIVITY_MESSAGE: &str = "Activity values must be positive";

pub const RADIOCARBON_DATING_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "radiocarbon-dating-calculator",
    name: "Radiocarbon Dating Calculator",
    category: Category::Nuclear,
    formula_text: "t = (5730 / ln 2) × ln(A₀ / A)",
    fields: &[
        positive("current_activity", "Current activity (A)", "dpm/g")
            .with_message(ACTIVITY_MESSAGE)
            .with_parse_message("Please enter valid numbers"),
        positive("initial_activity", "Initial activity (A₀, 15.3 for living matter)", "dpm/g")
            .with_message(ACTIVITY_MESSAGE)
            .with_parse_message("Please enter valid numbers"),
        non_negative("age", "Sample age (t)", "years").with_message("Age cannot be negative"),
    ],
    directions: &[
        Direction {
            name: "Age from activities",
            inputs: &["current_activity", "initial_activity"],
            output: "Age",
            unit: "years",
            formula: radiocarbon_age,
        },
        Direction {
            name: "Activity after a given age",
            inputs: &["age", "initial_activity"],
            output: "A",
            unit: "dpm/g",
            formula: radiocarbon_activity,
        },
    ],
    table: Some(ERA_TABLE),
};
