use thiserror::Error;

/// Everything that can go wrong between a raw input string and a result.
///
/// `ParseError` and `DomainConstraintError` are validation failures meant to be
/// shown to the user as-is; the other variants signal a caller bug (wrong
/// direction index, unknown field name, ...).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluatorError {
    #[error("{message}")]
    ParseError { field: String, message: String },
    #[error("{message}")]
    DomainConstraintError { field: String, message: String },
    #[error("Calculator '{calculator}' has no direction #{index}")]
    UnknownDirection { calculator: String, index: usize },
    #[error("Calculator '{calculator}' has no direction '{given}' (choose 1 to {count})")]
    InvalidDirectionArgument {
        calculator: String,
        given: String,
        count: usize,
    },
    #[error("Calculator '{calculator}' has no input field '{field}'")]
    UnknownField { calculator: String, field: String },
    #[error("No calculator found for '{0}'")]
    UnknownCalculator(String),
    #[error("Direction '{direction}' expects {expected} inputs, got {got}")]
    InputCountMismatch {
        direction: String,
        expected: usize,
        got: usize,
    },
}

impl EvaluatorError {
    pub fn parse(field: &str, message: impl Into<String>) -> Self {
        EvaluatorError::ParseError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn domain(field: &str, message: impl Into<String>) -> Self {
        EvaluatorError::DomainConstraintError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// true for errors caused by what the user typed
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EvaluatorError::ParseError { .. } | EvaluatorError::DomainConstraintError { .. }
        )
    }

    /// Name of the offending input field, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            EvaluatorError::ParseError { field, .. }
            | EvaluatorError::DomainConstraintError { field, .. }
            | EvaluatorError::UnknownField { field, .. } => Some(field),
            _ => None,
        }
    }
}
