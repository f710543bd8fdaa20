use super::formula::FormulaSpec;
use super::widget::ComputationResult;
use enum_dispatch::enum_dispatch;
use prettytable::{Cell, Row, Table, row};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Formats a value with `precision` decimals, switching to exponent notation
/// for very small or very large magnitudes.
pub fn format_value(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", precision, 0.0);
    }
    let magnitude = value.abs();
    if (1e-3..1e6).contains(&magnitude) {
        format!("{:.*}", precision, value)
    } else {
        format!("{:.*e}", precision, value)
    }
}

#[enum_dispatch]
pub trait Reporter {
    fn render(&self, spec: &FormulaSpec, result: &ComputationResult) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReportFormat {
    #[default]
    Plain,
    Table,
    Json,
}

#[derive(Debug, Clone)]
pub struct PlainReport {
    pub precision: usize,
}

impl Reporter for PlainReport {
    fn render(&self, spec: &FormulaSpec, result: &ComputationResult) -> String {
        let mut lines = vec![format!(
            "{}: {} = {} {}",
            spec.name,
            result.output,
            format_value(result.primary_value, self.precision),
            result.unit
        )];
        for extra in &result.extras {
            lines.push(format!(
                "  {} = {} {}",
                extra.name,
                format_value(extra.value, self.precision),
                extra.unit
            ));
        }
        if let Some(label) = &result.classification_label {
            lines.push(format!("  Classification: {}", label));
        }
        for note in &result.notes {
            lines.push(format!("  {}: {}", note.name, note.text));
        }
        lines
            .iter()
            .map(|line| line.trim_end().to_string())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

#[derive(Debug, Clone)]
pub struct TableReport {
    pub precision: usize,
}

impl Reporter for TableReport {
    fn render(&self, spec: &FormulaSpec, result: &ComputationResult) -> String {
        let mut table = Table::new();
        table.add_row(row![spec.name, result.direction, ""]);
        table.add_row(row!["Quantity", "Value", "Unit"]);
        table.add_row(Row::new(vec![
            Cell::new(result.output),
            Cell::new(&format_value(result.primary_value, self.precision)),
            Cell::new(result.unit),
        ]));
        for extra in &result.extras {
            table.add_row(Row::new(vec![
                Cell::new(extra.name),
                Cell::new(&format_value(extra.value, self.precision)),
                Cell::new(extra.unit),
            ]));
        }
        if let Some(label) = &result.classification_label {
            table.add_row(row!["Classification", label, ""]);
        }
        for note in &result.notes {
            table.add_row(row![note.name, note.text, ""]);
        }
        table.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct JsonReport {
    pub pretty: bool,
}

impl Reporter for JsonReport {
    fn render(&self, spec: &FormulaSpec, result: &ComputationResult) -> String {
        let value = json!({
            "calculator": spec.name,
            "formula": spec.formula_text,
            "result": result,
        });
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        // a json! value always serializes
        rendered.unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
#[enum_dispatch(Reporter)]
pub enum ReportEnum {
    Plain(PlainReport),
    Table(TableReport),
    Json(JsonReport),
}

pub fn create_reporter(format: ReportFormat, precision: usize) -> ReportEnum {
    match format {
        ReportFormat::Plain => ReportEnum::Plain(PlainReport { precision }),
        ReportFormat::Table => ReportEnum::Table(TableReport { precision }),
        ReportFormat::Json => ReportEnum::Json(JsonReport { pretty: true }),
    }
}
