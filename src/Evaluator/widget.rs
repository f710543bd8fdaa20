use super::errors::EvaluatorError;
use super::formula::{Extra, FormulaSpec, Note};
use super::input::InputField;
use crate::constants::PhysicalConstants;
use log::{debug, info};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WidgetState {
    /// no result held
    Empty,
    /// a valid result is held
    Computed,
}

/// Outcome of one successful "Calculate". Immutable; the widget replaces it
/// wholesale on the next success and drops it on reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputationResult {
    pub calculator: &'static str,
    pub direction: &'static str,
    pub output: &'static str,
    pub unit: &'static str,
    pub primary_value: f64,
    pub secondary_value: Option<f64>,
    pub classification_label: Option<String>,
    pub extras: Vec<Extra>,
    pub notes: Vec<Note>,
}

/// Stateless evaluation of one direction on already-typed raw inputs.
///
/// Parses and validates every input, runs the formula and classifies. Nothing
/// is produced unless every step succeeds.
pub fn evaluate<S: AsRef<str>>(
    spec: &FormulaSpec,
    direction_index: usize,
    raw_inputs: &[S],
    constants: &PhysicalConstants,
) -> Result<ComputationResult, EvaluatorError> {
    let direction = spec.direction(direction_index)?;
    let fields = spec.direction_fields(direction_index)?;
    if raw_inputs.len() != fields.len() {
        return Err(EvaluatorError::InputCountMismatch {
            direction: direction.name.to_string(),
            expected: fields.len(),
            got: raw_inputs.len(),
        });
    }
    let values = fields
        .iter()
        .zip(raw_inputs)
        .map(|(field, raw)| field.validate(raw.as_ref()))
        .collect::<Result<Vec<f64>, EvaluatorError>>()?;

    let evaluation = (direction.formula)(&values, constants)?;
    // every reported quantity, not only the main value
    if let Some(quantity) = evaluation.non_finite(direction.output) {
        return Err(EvaluatorError::domain(
            direction.output,
            format!("{} is not a finite number for these inputs", quantity),
        ));
    }
    let classification_label = match (spec.table, evaluation.classify_on) {
        (Some(table), Some(value)) => Some(table.label_for(value).to_string()),
        _ => None,
    };
    Ok(ComputationResult {
        calculator: spec.slug,
        direction: direction.name,
        output: direction.output,
        unit: direction.unit,
        primary_value: evaluation.value,
        secondary_value: evaluation.secondary,
        classification_label,
        extras: evaluation.extras,
        notes: evaluation.notes,
    })
}

/// The Formula-Evaluator Widget.
///
/// Owns the raw text of every field of its calculator and the last result.
/// A failed calculation is remembered in `last_error` for display but never
/// touches the held result.
#[derive(Debug, Clone)]
pub struct FormulaWidget {
    spec: FormulaSpec,
    constants: PhysicalConstants,
    inputs: Vec<InputField>,
    result: Option<ComputationResult>,
    last_error: Option<EvaluatorError>,
}

impl FormulaWidget {
    pub fn new(spec: FormulaSpec) -> Self {
        Self::with_constants(spec, PhysicalConstants::default())
    }

    pub fn with_constants(spec: FormulaSpec, constants: PhysicalConstants) -> Self {
        let inputs = spec.fields.iter().copied().map(InputField::new).collect();
        FormulaWidget {
            spec,
            constants,
            inputs,
            result: None,
            last_error: None,
        }
    }

    pub fn spec(&self) -> &FormulaSpec {
        &self.spec
    }

    pub fn state(&self) -> WidgetState {
        match self.result {
            Some(_) => WidgetState::Computed,
            None => WidgetState::Empty,
        }
    }

    pub fn inputs(&self) -> &[InputField] {
        &self.inputs
    }

    pub fn input(&self, name: &str) -> Option<&str> {
        self.inputs
            .iter()
            .find(|field| field.spec.name == name)
            .map(|field| field.raw.as_str())
    }

    pub fn result(&self) -> Option<&ComputationResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&EvaluatorError> {
        self.last_error.as_ref()
    }

    /// Keystroke-level update of one field. Does not validate.
    pub fn set_input(&mut self, name: &str, text: &str) -> Result<(), EvaluatorError> {
        let calculator = self.spec.slug;
        let field = self
            .inputs
            .iter_mut()
            .find(|field| field.spec.name == name)
            .ok_or_else(|| EvaluatorError::UnknownField {
                calculator: calculator.to_string(),
                field: name.to_string(),
            })?;
        field.raw = text.to_string();
        Ok(())
    }

    /// "Calculate" button of a direction: evaluates the current field texts.
    pub fn calculate(&mut self, direction_index: usize) -> Result<ComputationResult, EvaluatorError> {
        let raw_inputs = self
            .spec
            .direction_fields(direction_index)?
            .iter()
            .map(|field| self.input(field.name).unwrap_or_default().to_string())
            .collect::<Vec<String>>();

        match evaluate(&self.spec, direction_index, &raw_inputs, &self.constants) {
            Ok(result) => {
                info!(
                    "{}: {} = {} {}",
                    self.spec.slug, result.output, result.primary_value, result.unit
                );
                self.last_error = None;
                self.result = Some(result.clone());
                Ok(result)
            }
            Err(err) => {
                debug!("{}: calculation rejected: {}", self.spec.slug, err);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Types `raw_inputs` into the fields of a direction, then calculates.
    pub fn compute<S: AsRef<str>>(
        &mut self,
        direction_index: usize,
        raw_inputs: &[S],
    ) -> Result<ComputationResult, EvaluatorError> {
        let direction = self.spec.direction(direction_index)?;
        if raw_inputs.len() != direction.inputs.len() {
            return Err(EvaluatorError::InputCountMismatch {
                direction: direction.name.to_string(),
                expected: direction.inputs.len(),
                got: raw_inputs.len(),
            });
        }
        for (name, raw) in direction.inputs.iter().zip(raw_inputs) {
            self.set_input(name, raw.as_ref())?;
        }
        self.calculate(direction_index)
    }

    pub fn compute_from_primary<S: AsRef<str>>(
        &mut self,
        raw_inputs: &[S],
    ) -> Result<ComputationResult, EvaluatorError> {
        self.compute(0, raw_inputs)
    }

    pub fn compute_from_secondary<S: AsRef<str>>(
        &mut self,
        raw_inputs: &[S],
    ) -> Result<ComputationResult, EvaluatorError> {
        self.compute(1, raw_inputs)
    }

    /// Clears every field, the held result and the last error. Idempotent.
    pub fn reset(&mut self) {
        self.inputs.iter_mut().for_each(InputField::clear);
        self.result = None;
        self.last_error = None;
    }
}
