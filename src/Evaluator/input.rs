use super::errors::EvaluatorError;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputKind {
    /// decimal or `e` notation
    Numeric,
    /// additionally accepts `a×10^b`, `ax10^b`, `a*10^b`
    Scientific,
}

/// Precondition a parsed value must satisfy before it reaches a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Constraint {
    Any,
    Positive,
    NonNegative,
    NonZero,
}

impl Constraint {
    pub fn admits(&self, value: f64) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Positive => value > 0.0,
            Constraint::NonNegative => value >= 0.0,
            Constraint::NonZero => value != 0.0,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Constraint::Any => "any number",
            Constraint::Positive => "must be positive",
            Constraint::NonNegative => "must be non-negative",
            Constraint::NonZero => "must be non-zero",
        }
    }
}

/// Static description of one input of a calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub kind: InputKind,
    pub constraint: Constraint,
    /// replaces the generated message for both parse and constraint failures
    pub message: Option<&'static str>,
    /// replaces the message for unparseable text only; wins over `message`
    pub parse_message: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        unit: &'static str,
        kind: InputKind,
        constraint: Constraint,
    ) -> Self {
        FieldSpec {
            name,
            label,
            unit,
            kind,
            constraint,
            message: None,
            parse_message: None,
        }
    }

    pub const fn with_message(self, message: &'static str) -> Self {
        FieldSpec {
            message: Some(message),
            ..self
        }
    }

    pub const fn with_parse_message(self, message: &'static str) -> Self {
        FieldSpec {
            parse_message: Some(message),
            ..self
        }
    }

    fn parse_message(&self) -> String {
        match self.parse_message.or(self.message) {
            Some(message) => message.to_string(),
            None => format!("Please enter a valid {} value", self.label),
        }
    }

    fn constraint_message(&self) -> String {
        match self.message {
            Some(message) => message.to_string(),
            None => format!("{} {}", self.label, self.constraint.describe()),
        }
    }

    /// Parses `raw` and checks the field constraint.
    pub fn validate(&self, raw: &str) -> Result<f64, EvaluatorError> {
        let value = parse_number(raw, self.kind)
            .ok_or_else(|| EvaluatorError::parse(self.name, self.parse_message()))?;
        if !self.constraint.admits(value) {
            return Err(EvaluatorError::domain(self.name, self.constraint_message()));
        }
        Ok(value)
    }
}

/// A field of a mounted widget: its descriptor and the text last typed into it.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub spec: FieldSpec,
    pub raw: String,
}

impl InputField {
    pub fn new(spec: FieldSpec) -> Self {
        InputField {
            spec,
            raw: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }
}

fn times_ten_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))\s*[x×*·]\s*10\s*\^\s*\(?\s*([+-]?\d+)\s*\)?$").ok()
    })
    .as_ref()
}

/// Parses a finite real number; `None` for anything else (empty, garbage, NaN, inf).
pub fn parse_number(raw: &str, kind: InputKind) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    // f64::from_str also knows "inf" and "NaN"; only digits are let through
    let plain = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    let value = if plain {
        trimmed.parse::<f64>().ok()
    } else if kind == InputKind::Scientific {
        let caps = times_ten_regex()?.captures(trimmed)?;
        // rewritten as e-notation so "1.8×10^-5" parses to the same f64 as "1.8e-5"
        format!("{}e{}", &caps[1], &caps[2]).parse::<f64>().ok()
    } else {
        None
    };
    value.filter(|v| v.is_finite())
}
