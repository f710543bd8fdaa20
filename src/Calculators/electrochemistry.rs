use super::Category;
use crate::Evaluator::classify::{Threshold, ThresholdTable};
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::{Direction, Evaluation, FormulaSpec};
use crate::Evaluator::input::{Constraint, FieldSpec, InputKind};
use crate::constants::PhysicalConstants;

////////////////////////////////////////////////////////////////////////////////
// Electrolysis (Faraday): m = Q·M / (n·F), Q = I·t
////////////////////////////////////////////////////////////////////////////////

const CURRENT: FieldSpec = FieldSpec::new(
    "current",
    "Current (I)",
    "A",
    InputKind::Scientific,
    Constraint::Positive,
)
.with_message("Current must be positive");
const TIME: FieldSpec = FieldSpec::new("time", "Time (t)", "s", InputKind::Scientific, Constraint::Positive)
    .with_message("Time must be positive");
const MASS: FieldSpec = FieldSpec::new(
    "mass",
    "Mass deposited (m)",
    "g",
    InputKind::Scientific,
    Constraint::Positive,
)
.with_message("Mass must be positive");
const MOLAR_MASS: FieldSpec = FieldSpec::new(
    "molar_mass",
    "Molar mass (M)",
    "g/mol",
    InputKind::Scientific,
    Constraint::Positive,
)
.with_message("Molar mass must be positive");
const ELECTRONS: FieldSpec = FieldSpec::new(
    "electrons",
    "Electrons per ion (n)",
    "",
    InputKind::Numeric,
    Constraint::Positive,
)
.with_message("Number of electrons must be positive");

/// inputs: I, t, M, n
fn deposited_mass(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (current, time, molar_mass, electrons) = (x[0], x[1], x[2], x[3]);
    let charge = current * time;
    let mass = charge * molar_mass / (electrons * c.faraday);
    Ok(Evaluation::new(mass)
        .with_secondary(charge)
        .with_extra("Charge (Q)", charge, "C")
        .with_extra("Moles deposited", mass / molar_mass, "mol"))
}

/// Charge needed to deposit `mass`: Q = m·n·F / M
fn required_charge(mass: f64, molar_mass: f64, electrons: f64, c: &PhysicalConstants) -> f64 {
    mass * electrons * c.faraday / molar_mass
}

/// inputs: m, M, n
fn charge(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (mass, molar_mass, electrons) = (x[0], x[1], x[2]);
    let charge = required_charge(mass, molar_mass, electrons, c);
    Ok(Evaluation::new(charge)
        .with_secondary(mass)
        .with_extra("Moles deposited", mass / molar_mass, "mol")
        .with_extra("Moles of electrons", charge / c.faraday, "mol"))
}

/// inputs: I, m, M, n
fn time(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (current, mass, molar_mass, electrons) = (x[0], x[1], x[2], x[3]);
    let charge = required_charge(mass, molar_mass, electrons, c);
    let time = charge / current;
    Ok(Evaluation::new(time)
        .with_secondary(charge)
        .with_extra("Charge (Q)", charge, "C")
        .with_extra("Time", time / 3600.0, "h"))
}

/// inputs: t, m, M, n
fn current(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (time, mass, molar_mass, electrons) = (x[0], x[1], x[2], x[3]);
    let charge = required_charge(mass, molar_mass, electrons, c);
    Ok(Evaluation::new(charge / time)
        .with_secondary(charge)
        .with_extra("Charge (Q)", charge, "C"))
}

pub const ELECTROLYSIS_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "electrolysis-calculator",
    name: "Electrolysis Calculator",
    category: Category::Electrochemistry,
    formula_text: "m = (I × t × M) / (n × F)",
    fields: &[CURRENT, TIME, MASS, MOLAR_MASS, ELECTRONS],
    directions: &[
        Direction {
            name: "Mass deposited from I, t, M, n",
            inputs: &["current", "time", "molar_mass", "electrons"],
            output: "m",
            unit: "g",
            formula: deposited_mass,
        },
        Direction {
            name: "Charge required from m, M, n",
            inputs: &["mass", "molar_mass", "electrons"],
            output: "Q",
            unit: "C",
            formula: charge,
        },
        Direction {
            name: "Time required from I, m, M, n",
            inputs: &["current", "mass", "molar_mass", "electrons"],
            output: "t",
            unit: "s",
            formula: time,
        },
        Direction {
            name: "Current required from t, m, M, n",
            inputs: &["time", "mass", "molar_mass", "electrons"],
            output: "I",
            unit: "A",
            formula: current,
        },
    ],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Nernst equation: E = E° - (RT / nF)·ln Q
////////////////////////////////////////////////////////////////////////////////

/// inputs: E°, n, Q, T
fn cell_potential(x: &[f64], c: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (standard, electrons, quotient, temperature) = (x[0], x[1], x[2], x[3]);
    let slope = c.gas_constant * temperature / (electrons * c.faraday);
    let potential = standard - slope * quotient.ln();
    Ok(Evaluation::new(potential)
        .with_secondary(standard)
        .with_extra("RT/nF", slope, "V")
        .with_extra("Shift from E°", potential - standard, "V"))
}

pub const NERNST_EQUATION_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "nernst-equation-calculator",
    name: "Nernst Equation Calculator",
    category: Category::Electrochemistry,
    formula_text: "E = E° - (RT / nF) ln Q",
    fields: &[
        FieldSpec::new(
            "standard_potential",
            "Standard potential (E°)",
            "V",
            InputKind::Numeric,
            Constraint::Any,
        ),
        FieldSpec::new(
            "electrons",
            "Electrons transferred (n)",
            "",
            InputKind::Numeric,
            Constraint::NonZero,
        )
        .with_message("Please enter valid values for all fields. Electrons transferred must be non-zero."),
        FieldSpec::new(
            "quotient",
            "Reaction quotient (Q)",
            "",
            InputKind::Scientific,
            Constraint::Positive,
        )
        .with_message("Reaction quotient must be positive."),
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
        name: "Cell potential",
        inputs: &["standard_potential", "electrons", "quotient", "temperature"],
        output: "E",
        unit: "V",
        formula: cell_potential,
    }],
    table: None,
};

////////////////////////////////////////////////////////////////////////////////
// Cell potential: E°cell = E°cathode - E°anode
////////////////////////////////////////////////////////////////////////////////

/// Galvanic or electrolytic by the sign of the cell potential.
pub const CELL_TYPE_TABLE: ThresholdTable = ThresholdTable::new(
    &[Threshold::at_most(
        0.0,
        "Non-spontaneous (requires external voltage - electrolytic cell)",
    )],
    "Spontaneous reaction (galvanic/voltaic cell)",
);

/// inputs: E°cathode, E°anode
fn standard_cell_potential(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (cathode, anode) = (x[0], x[1]);
    let standard = cathode - anode;
    Ok(Evaluation::new(standard)
        .with_secondary(cathode)
        .classified_on(standard))
}

/// inputs: E°cathode, E°anode, n, T, Q
fn nonstandard_cell_potential(
    x: &[f64],
    c: &PhysicalConstants,
) -> Result<Evaluation, EvaluatorError> {
    let (cathode, anode, electrons, temperature, quotient) = (x[0], x[1], x[2], x[3], x[4]);
    let standard = cathode - anode;
    let slope = c.gas_constant * temperature / (electrons * c.faraday);
    let potential = standard - slope * quotient.ln();
    Ok(Evaluation::new(potential)
        .with_secondary(standard)
        .with_extra("E°cell", standard, "V")
        .with_extra("RT/nF", slope, "V")
        .classified_on(potential))
}

pub const CELL_POTENTIAL_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "cell-potential-calculator",
    name: "Cell Potential Calculator",
    category: Category::Electrochemistry,
    formula_text: "E°cell = E°cathode - E°anode,  E = E° - (RT / nF) ln Q",
    fields: &[
        FieldSpec::new(
            "cathode",
            "Cathode reduction potential (E°cathode)",
            "V",
            InputKind::Numeric,
            Constraint::Any,
        )
        .with_message("Please enter valid reduction potentials"),
        FieldSpec::new(
            "anode",
            "Anode reduction potential (E°anode)",
            "V",
            InputKind::Numeric,
            Constraint::Any,
        )
        .with_message("Please enter valid reduction potentials"),
        ELECTRONS,
        FieldSpec::new(
            "temperature",
            "Temperature (T)",
            "K",
            InputKind::Numeric,
            Constraint::Positive,
        )
        .with_message("Temperature must be positive"),
        FieldSpec::new(
            "quotient",
            "Reaction quotient (Q)",
            "",
            InputKind::Scientific,
            Constraint::Positive,
        )
        .with_message("Reaction quotient must be positive"),
    ],
    directions: &[
        Direction {
            name: "Standard cell potential",
            inputs: &["cathode", "anode"],
            output: "E°cell",
            unit: "V",
            formula: standard_cell_potential,
        },
        Direction {
            name: "Cell potential at non-standard conditions",
            inputs: &["cathode", "anode", "electrons", "temperature", "quotient"],
            output: "Ecell",
            unit: "V",
            formula: nonstandard_cell_potential,
        },
    ],
    table: Some(CELL_TYPE_TABLE),
};
