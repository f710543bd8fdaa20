use super::Category;
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::formula::{Direction, Evaluation, FormulaSpec};
use crate::Evaluator::input::{Constraint, FieldSpec, InputKind};
use crate::constants::PhysicalConstants;

const KINETIC_MESSAGE: &str =
    "Substrate concentration must be non-negative, Vmax and Km must be positive.";

const fn kinetic_field(
    name: &'static str,
    label: &'static str,
    unit: &'static str,
    constraint: Constraint,
) -> FieldSpec {
    FieldSpec::new(name, label, unit, InputKind::Scientific, constraint)
        .with_message(KINETIC_MESSAGE)
        .with_parse_message("Please enter valid numbers for all fields.")
}

////////////////////////////////////////////////////////////////////////////////
// Michaelis-Menten: v = Vmax·[S] / (Km + [S])
////////////////////////////////////////////////////////////////////////////////

/// inputs: [S], Vmax, Km
fn reaction_velocity(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (substrate, vmax, km) = (x[0], x[1], x[2]);
    let v = vmax * substrate / (km + substrate);
    Ok(Evaluation::new(v)
        .with_secondary(substrate)
        .with_extra("Fraction of Vmax", v / vmax * 100.0, "%")
        .with_extra("[S] / Km", substrate / km, ""))
}

/// inputs: v, Vmax, Km
fn substrate_for_velocity(x: &[f64], _: &PhysicalConstants) -> Result<Evaluation, EvaluatorError> {
    let (velocity, vmax, km) = (x[0], x[1], x[2]);
    if velocity >= vmax {
        return Err(EvaluatorError::domain(
            "velocity",
            "Velocity must be lower than Vmax",
        ));
    }
    let s = km * velocity / (vmax - velocity);
    Ok(Evaluation::new(s)
        .with_secondary(velocity)
        .with_extra("Fraction of Vmax", velocity / vmax * 100.0, "%"))
}

pub const MICHAELIS_MENTEN_CALCULATOR: FormulaSpec = FormulaSpec {
    slug: "michaelis-menten-calculator",
    name: "Michaelis-Menten Calculator",
    category: Category::Biochemistry,
    formula_text: "v = Vmax × [S] / (Km + [S])",
    fields: &[
        kinetic_field("substrate", "Substrate concentration [S]", "mM", Constraint::NonNegative),
        kinetic_field("vmax", "Maximum velocity (Vmax)", "μmol/min", Constraint::Positive),
        kinetic_field("km", "Michaelis constant (Km)", "mM", Constraint::Positive),
        FieldSpec::new(
            "velocity",
            "Reaction velocity (v)",
            "μmol/min",
            InputKind::Scientific,
            Constraint::NonNegative,
        )
        .with_message("Velocity cannot be negative"),
    ],
    directions: &[
        Direction {
            name: "Velocity from [S], Vmax, Km",
            inputs: &["substrate", "vmax", "km"],
            output: "v",
            unit: "μmol/min",
            formula: reaction_velocity,
        },
        Direction {
            name: "[S] for a target velocity",
            inputs: &["velocity", "vmax", "km"],
            output: "[S]",
            unit: "mM",
            formula: substrate_for_velocity,
        },
    ],
    table: None,
};
