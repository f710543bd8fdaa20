use super::classify::ThresholdTable;
use super::errors::EvaluatorError;
use super::input::FieldSpec;
use crate::Calculators::Category;
use crate::constants::PhysicalConstants;
use serde::Serialize;

/// Closed-form expression of one direction. Receives the parsed inputs in the
/// order listed in [`Direction::inputs`] (already validated against their field
/// constraints) and the constants to use.
pub type FormulaFn = fn(&[f64], &PhysicalConstants) -> Result<Evaluation, EvaluatorError>;

/// Additional derived quantity shown next to the main result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extra {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Descriptive label a formula attaches to its result ("Colour: Green").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Note {
    pub name: &'static str,
    pub text: &'static str,
}

/// Raw output of a formula, before the widget attaches labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    pub value: f64,
    pub secondary: Option<f64>,
    /// value the classification table is applied to, if any
    pub classify_on: Option<f64>,
    pub extras: Vec<Extra>,
    pub notes: Vec<Note>,
}

impl Evaluation {
    pub fn new(value: f64) -> Self {
        Evaluation {
            value,
            ..Default::default()
        }
    }

    pub fn with_secondary(mut self, secondary: f64) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn classified_on(mut self, value: f64) -> Self {
        self.classify_on = Some(value);
        self
    }

    pub fn with_extra(mut self, name: &'static str, value: f64, unit: &'static str) -> Self {
        self.extras.push(Extra { name, value, unit });
        self
    }

    pub fn with_note(mut self, name: &'static str, text: &'static str) -> Self {
        self.notes.push(Note { name, text });
        self
    }

    /// Name of the first quantity that is NaN or infinite, `output` standing
    /// for the main value.
    pub fn non_finite(&self, output: &'static str) -> Option<&'static str> {
        if !self.value.is_finite() {
            return Some(output);
        }
        if self.secondary.is_some_and(|value| !value.is_finite()) {
            return Some("Secondary value");
        }
        if self.classify_on.is_some_and(|value| !value.is_finite()) {
            return Some("Classified value");
        }
        self.extras
            .iter()
            .find(|extra| !extra.value.is_finite())
            .map(|extra| extra.name)
    }
}

/// One rearrangement of a calculator formula ("pKa from Ka", "Ka from pKa").
#[derive(Debug, Clone, Copy)]
pub struct Direction {
    pub name: &'static str,
    /// field names, in the order the formula expects them
    pub inputs: &'static [&'static str],
    pub output: &'static str,
    pub unit: &'static str,
    pub formula: FormulaFn,
}

/// Configuration object of a calculator: everything the generic widget needs.
#[derive(Debug, Clone, Copy)]
pub struct FormulaSpec {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// human readable formula, e.g. "pKa = -log10(Ka)"
    pub formula_text: &'static str,
    pub fields: &'static [FieldSpec],
    /// `directions[0]` is the primary (forward) formula, `directions[1]` the inverse
    pub directions: &'static [Direction],
    pub table: Option<ThresholdTable>,
}

impl FormulaSpec {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn direction(&self, index: usize) -> Result<&'static Direction, EvaluatorError> {
        self.directions
            .get(index)
            .ok_or_else(|| EvaluatorError::UnknownDirection {
                calculator: self.slug.to_string(),
                index,
            })
    }

    /// Field descriptors of a direction, in formula order.
    pub fn direction_fields(&self, index: usize) -> Result<Vec<&'static FieldSpec>, EvaluatorError> {
        let direction = self.direction(index)?;
        direction
            .inputs
            .iter()
            .map(|name| {
                self.field(name).ok_or_else(|| EvaluatorError::UnknownField {
                    calculator: self.slug.to_string(),
                    field: name.to_string(),
                })
            })
            .collect()
    }

    /// Every direction refers only to declared fields.
    pub fn is_consistent(&self) -> bool {
        !self.directions.is_empty()
            && (0..self.directions.len()).all(|index| self.direction_fields(index).is_ok())
            && self.table.is_none_or(|table| table.is_ascending())
    }
}
