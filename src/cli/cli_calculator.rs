use super::cli_main::prompt;
use crate::Calculators::{Category, calculators_in};
use crate::Evaluator::formula::FormulaSpec;
use crate::Evaluator::report::Reporter;
use crate::Evaluator::widget::FormulaWidget;
use crate::settings::Settings;
use std::io::{self, BufRead, Write};

pub fn category_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
) -> io::Result<()> {
    loop {
        writeln!(output, "\n=== Calculator categories ===")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(output, "\x1b[33m{}. {}\x1b[0m", i + 1, category.as_str())?;
        }
        writeln!(output, "\x1b[33m0. Back to main menu\x1b[0m")?;
        let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "0" => return Ok(()),
            other => match pick(other, Category::ALL.len()) {
                Some(index) => calculator_menu(input, output, settings, Category::ALL[index])?,
                None => writeln!(output, "Invalid choice. Please try again.")?,
            },
        }
    }
}

pub fn calculator_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
    category: Category,
) -> io::Result<()> {
    let calculators = calculators_in(category);
    loop {
        writeln!(output, "\n=== {} ===", category.as_str())?;
        for (i, spec) in calculators.iter().enumerate() {
            writeln!(output, "\x1b[33m{}. {}\x1b[0m", i + 1, spec.name)?;
        }
        writeln!(output, "\x1b[33m0. Back\x1b[0m")?;
        let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "0" => return Ok(()),
            other => match pick(other, calculators.len()) {
                Some(index) => calculator_form(input, output, settings, calculators[index])?,
                None => writeln!(output, "Invalid choice. Please try again.")?,
            },
        }
    }
}

/// One calculator page: pick a direction, type its inputs, read the result.
/// The widget lives as long as the page, so its last result stays on screen
/// until the user resets or leaves.
pub fn calculator_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &Settings,
    spec: &FormulaSpec,
) -> io::Result<()> {
    let mut widget = FormulaWidget::with_constants(*spec, settings.constants());
    let reporter = settings.reporter();
    loop {
        writeln!(output, "\n\x1b[34m=== {} ===\x1b[0m", spec.name)?;
        writeln!(output, "{}", spec.formula_text)?;
        for (i, direction) in spec.directions.iter().enumerate() {
            writeln!(output, "\x1b[33m{}. {}\x1b[0m", i + 1, direction.name)?;
        }
        writeln!(output, "\x1b[33mr. Reset\x1b[0m")?;
        writeln!(output, "\x1b[33m0. Back\x1b[0m")?;
        let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "0" => return Ok(()),
            "r" | "R" => {
                widget.reset();
                writeln!(output, "Form cleared.")?;
            }
            other => match pick(other, spec.directions.len()) {
                Some(index) => {
                    if !fill_direction(input, output, &mut widget, index)? {
                        return Ok(());
                    }
                    match widget.calculate(index) {
                        Ok(result) => writeln!(output, "{}", reporter.render(spec, &result))?,
                        Err(err) => writeln!(output, "\x1b[31m{}\x1b[0m", err)?,
                    }
                }
                None => writeln!(output, "Invalid choice. Please try again.")?,
            },
        }
    }
}

/// Prompts every input of a direction, showing the current text of the field.
/// An empty answer keeps that text. Returns `false` on end of input.
fn fill_direction<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    widget: &mut FormulaWidget,
    index: usize,
) -> io::Result<bool> {
    let fields = match widget.spec().direction_fields(index) {
        Ok(fields) => fields,
        Err(err) => {
            writeln!(output, "\x1b[31m{}\x1b[0m", err)?;
            return Ok(true);
        }
    };
    for field in fields {
        let current = widget.input(field.name).unwrap_or_default().to_string();
        let unit = if field.unit.is_empty() {
            String::new()
        } else {
            format!(" [{}]", field.unit)
        };
        let question = if current.is_empty() {
            format!("{}{}: ", field.label, unit)
        } else {
            format!("{}{} ({}): ", field.label, unit, current)
        };
        let Some(answer) = prompt(input, output, &question)? else {
            return Ok(false);
        };
        if answer.is_empty() {
            continue;
        }
        if let Err(err) = widget.set_input(field.name, &answer) {
            writeln!(output, "\x1b[31m{}\x1b[0m", err)?;
        }
    }
    Ok(true)
}

/// 1-based menu number to index.
fn pick(choice: &str, len: usize) -> Option<usize> {
    choice
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
