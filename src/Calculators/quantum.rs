use super::Category;
use crate::Evaluator::classify::{Threshold, ThresholdTable};
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::{Direction, Evaluation, FormulaSpec};
use crate::Evaluator::input::{Constraint, FieldSpec, InputKind};
use crate::constants::PhysicalConstants;

const NANOMETER: f64 = 1.0e-9;

/// Region of the electromagnetic spectrum by wavelength in meters.
pub const SPECTRUM_TABLE: ThresholdTable = ThresholdTable::new(
    &[
        Threshold::below(10.0e-9, "Gamma rays"),
        Threshold::below(400.0e-9, "X-rays / UV"),
        Threshold::below(700.0e-9, "Visible light"),
        Threshold::below(1.0e-3, "Infrared"),
        Threshold::below(1.0, "Microwave"),
    ],
    "Radio waves",
);

/// Perceived color by wavelength in meters, inside [`VISIBLE_RANGE`].
pub const VISIBLE_COLOR_TABLE: ThresholdTable = ThresholdTable::new(
    &[
        Threshold::below(450.0e-9, "Violet"),
        Threshold::below(495.0e-9, "Blue"),
        Threshold::below(570.0e-9, "Green"),
        Threshold::below(590.0e-9, "Yellow"),
        Threshold::below(620.0e-9, "Orange"),
    ],
    "Red",
);

/// Wavelengths (m) that get a color note; wider than the "Visible light" bucket.
pub const VISIBLE_RANGE: std::ops::Range<f64> = 380.0e-9..750.0e-9;

fn with_color(evaluation: Evaluation, wavelength: f64) -> Evaluation {
    if VISIBLE_RANGE.contains(&wavelength) {
        evaluation.with_note("Color", VISIBLE_COLOR_TABLE.label_for(wavelength))
    } else {
        evaluation
    }
}

/// Photon energy from its wavelength in meters.
fn photon(wavelength: f64, c: &PhysicalConstants) -> Evaluation {
    let frequency = c.speed_of_light / wavelength;
    let energy = c.planck * frequency;
    let evaluation = Evaluation::new(energy)
        .with_extra("Frequency", frequency, "Hz")
        .with_extra("Energy", energy / c.electron_volt, "eV")
        .with_extra("Energy per mole", energy * c.avogadro / 1000.0, "kJ/mol")
        .classified_on(wavelength);
    with_color(evaluation, wavelength)
}

/// inputs: λ (nm)
fn energy_from_wavelength(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let wavelength_nm = x[0];
    Ok(photon(wavelength_nm * NANOMETER, c).with_secondary(wavelength_nm))
}

/// inputs: ν (Hz)
fn energy_from_frequency(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let frequency = x[0];
    let wavelength = c.speed_of_light / frequency;
    Ok(photon(wavelength, c)
        .with_secondary(frequency)
        .with_extra("Wavelength", wavelength / NANOMETER, "nm"))
}

/// inputs: E (J)
fn wavelength_from_energy(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let energy = x[0];
    let wavelength = c.planck * c.speed_of_light / energy;
    if wavelength == 0.0 {
        return Err(EvaluatorError::domain(
            "energy",
            "Energy is too large: the wavelength underflows to zero",
        ));
    }
    let evaluation = Evaluation::new(wavelength / NANOMETER)
        .with_secondary(energy)
        .with_extra("Frequency", energy / c.planck, "Hz")
        .with_extra("Energy", energy / c.electron_volt, "eV")
        .classified_on(wavelength);
    Ok(with_color(evaluation, wavelength))
}

pub const WAVELENGTH_ENERGY_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "wavelength-energy-calculator",
    name: "Wavelength Energy Calculator",
    category: Category::Quantum,
    formula_text: "E = hc / λ = hν",
    fields: &[
        FieldSpec::new(
            "wavelength",
            "Wavelength (λ)",
            "nm",
            InputKind::Scientific,
            Constraint::Positive,
        )
        .with_message("Please enter a valid positive wavelength"),
        FieldSpec::new(
            "frequency",
            "Frequency (ν)",
            "Hz",
            InputKind::Scientific,
            Constraint::Positive,
        )
        .with_message("Please enter a valid positive frequency"),
        FieldSpec::new(
            "energy",
            "Photon energy (E)",
            "J",
            InputKind::Scientific,
            Constraint::Positive,
        )
        .with_message("Please enter a valid positive energy"),
    ],
    directions: &[
        Direction {
            name: "Energy from wavelength",
            inputs: &["wavelength"],
            output: "E",
            unit: "J",
            formula: energy_from_wavelength,
        },
        Direction {
            name: "Wavelength from energy",
            inputs: &["energy"],
            output: "λ",
            unit: "nm",
            formula: wavelength_from_energy,
        },
        Direction {
            name: "Energy from frequency",
            inputs: &["frequency"],
            output: "E",
            unit: "J",
            formula: energy_from_frequency,
        },
    ],
    table: Some(SPECTRUM_TABLE),
};

////////////////////////////////////////////////////////////////////////////////
// de Broglie: λ = h / (m·v)
////////////////////////////////////////////////////////////////////////////////

/// inputs: m (kg), v (m/s)
fn de_broglie_wavelength(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (mass, velocity) = (x[0], x[1]);
    if velocity >= c.speed_of_light {
        return Err(EvaluatorError::domain(
            "velocity",
            "Velocity must be below the speed of light",
        ));
    }
    let momentum = mass * velocity;
    Ok(Evaluation::new(c.planck / momentum)
        .with_secondary(momentum)
        .with_extra("Momentum (p)", momentum, "kg·m/s")
        .with_extra("Kinetic energy", 0.5 * mass * velocity * velocity, "J"))
}

/// inputs: λ (m), m (kg)
fn de_broglie_velocity(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (wavelength, mass) = (x[0], x[1]);
    let momentum = c.planck / wavelength;
    Ok(Evaluation::new(momentum / mass)
        .with_secondary(momentum)
        .with_extra("Momentum (p)", momentum, "kg·m/s"))
}

pub const DE_BROGLIE_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "de-broglie-wavelength-calculator",
    name: "De Broglie Wavelength Calculator",
    category: Category::Quantum,
    formula_text: "λ = h / (m × v)",
    fields: &[
        FieldSpec::new("mass", "Mass (m)", "kg", InputKind::Scientific, Constraint::Positive)
            .with_message("Mass must be positive"),
        FieldSpec::new(
            "velocity",
            "Velocity (v)",
            "m/s",
            InputKind::Scientific,
            Constraint::Positive,
        )
        .with_message("Velocity must be positive"),
        FieldSpec::new(
            "wavelength",
            "Wavelength (λ)",
            "m",
            InputKind::Scientific,
            Constraint::Positive,
        )
        .with_message("Wavelength must be positive"),
    ],
    directions: &[
        Direction {
            name: "Wavelength from mass and velocity",
            inputs: &["mass", "velocity"],
            output: "λ",
            unit: "m",
            formula: de_broglie_wavelength,
        },
        Direction {
            name: "Velocity from wavelength and mass",
            inputs: &["wavelength", "mass"],
            output: "v",
            unit: "m/s",
            formula: de_broglie_velocity,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Heisenberg uncertainty: Δx·Δp ≥ ħ/2, ΔE·Δt ≥ ħ/2
////////////////////////////////////////////////////////////////////////////////

fn reduced_planck(c: &PhysicalConstants) -> f64 {
    c.planck / (2.0 * std::f64::consts::PI)
}

/// Lower bound of the conjugate quantity: ħ / (2·given).
fn minimum_partner(given: f64, c: &PhysicalConstants) -> f64 {
    reduced_planck(c) / (2.0 * given)
}

/// inputs: Δx (m)
fn momentum_uncertainty(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    Ok(Evaluation::new(minimum_partner(x[0], c)).with_secondary(x[0]))
}

/// inputs: Δp (kg·m/s)
fn position_uncertainty(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    Ok(Evaluation::new(minimum_partner(x[0], c)).with_secondary(x[0]))
}

/// inputs: Δt (s)
fn energy_uncertainty(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let energy = minimum_partner(x[0], c);
    Ok(Evaluation::new(energy)
        .with_secondary(x[0])
        .with_extra("ΔE", energy / c.electron_volt, "eV"))
}

/// inputs: ΔE (J)
fn time_uncertainty(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    Ok(Evaluation::new(minimum_partner(x[0], c)).with_secondary(x[0]))
}

/// inputs: Δx (m), m (kg)
fn velocity_uncertainty(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (position, mass) = (x[0], x[1]);
    let momentum = minimum_partner(position, c);
    Ok(Evaluation::new(momentum / mass)
        .with_secondary(position)
        .with_extra("Δp", momentum, "kg·m/s"))
}

/// inputs: λ (nm). Wave packet of a photon: Δx ≈ λ / 4π.
fn photon_uncertainty(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let wavelength = x[0] * NANOMETER;
    let position = wavelength / (4.0 * std::f64::consts::PI);
    let energy = c.planck * c.speed_of_light / wavelength;
    Ok(Evaluation::new(position)
        .with_secondary(x[0])
        .with_extra("Photon momentum (p)", c.planck / wavelength, "kg·m/s")
        .with_extra("Δp", minimum_partner(position, c), "kg·m/s")
        .with_extra("Photon energy (E)", energy, "J")
        .with_extra("Δt", minimum_partner(energy, c), "s"))
}

const fn uncertainty_field(name: &'static str, label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Scientific, Constraint::Positive)
}

pub const HEISENBERG_UNCERTAINTY_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "heisenberg-uncertainty-calculator",
    name: "Heisenberg Uncertainty Calculator",
    category: Category::Quantum,
    formula_text: "Δx × Δp ≥ ħ/2,  ΔE × Δt ≥ ħ/2",
    fields: &[
        uncertainty_field("delta_x", "Position uncertainty (Δx)", "m"),
        uncertainty_field("delta_p", "Momentum uncertainty (Δp)", "kg·m/s"),
        uncertainty_field("delta_e", "Energy uncertainty (ΔE)", "J"),
        uncertainty_field("delta_t", "Time uncertainty (Δt)", "s"),
        uncertainty_field("mass", "Particle mass (m)", "kg"),
        uncertainty_field("wavelength", "Photon wavelength (λ)", "nm"),
    ],
    directions: &[
        Direction {
            name: "Minimum Δp from Δx",
            inputs: &["delta_x"],
            output: "Δp",
            unit: "kg·m/s",
            formula: momentum_uncertainty,
        },
        Direction {
            name: "Minimum Δx from Δp",
            inputs: &["delta_p"],
            output: "Δx",
            unit: "m",
            formula: position_uncertainty,
        },
        Direction {
            name: "Minimum ΔE from Δt",
            inputs: &["delta_t"],
            output: "ΔE",
            unit: "J",
            formula: energy_uncertainty,
        },
        Direction {
            name: "Minimum Δt from ΔE",
            inputs: &["delta_e"],
            output: "Δt",
            unit: "s",
            formula: time_uncertainty,
        },
        Direction {
            name: "Velocity uncertainty from Δx and mass",
            inputs: &["delta_x", "mass"],
            output: "Δv",
            unit: "m/s",
            formula: velocity_uncertainty,
        },
        Direction {
            name: "Photon uncertainties from wavelength",
            inputs: &["wavelength"],
            output: "Δx",
            unit: "m",
            formula: photon_uncertainty,
        },
    ],
    table: None,
};
