use super::cli_calculator::category_menu;
use crate::Calculators::{all_calculators, catalogue_table, find_calculator};
use crate::Evaluator::errors::EvaluatorError;
use crate::Evaluator::report::{ReportFormat, Reporter};
use crate::Evaluator::widget::evaluate;
use crate::settings::Settings;
use std::io::{self, BufRead, Write};

pub fn run_interactive_menu(settings: &mut Settings) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    main_menu(&mut input, &mut output, settings)
}

pub fn main_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &mut Settings,
) -> io::Result<()> {
    loop {
        show_main_menu(output)?;
        let Some(choice) = read_input(input)? else {
            writeln!(output, "Goodbye!")?;
            return Ok(());
        };
        match choice.as_str() {
            "1" => category_menu(input, output, settings)?,
            "2" => writeln!(output, "{}", catalogue_table())?,
            "3" => settings_menu(input, output, settings)?,
            "0" => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }
}
/* colors
Blue (\x1b[34m) - header text
Yellow (\x1b[33m) - menu options
Cyan (\x1b[36m) - prompts
Red (\x1b[31m) - validation errors
Reset (\x1b[0m) - back to normal after each colored section
*/
fn show_main_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "\x1b[34m\n ChemCalc: chemistry calculators ({} formulas)\n\x1b[0m",
        all_calculators().len()
    )?;
    writeln!(output, "\x1b[33m1. Calculators\x1b[0m")?;
    writeln!(output, "\x1b[33m2. Show catalogue\x1b[0m")?;
    writeln!(output, "\x1b[33m3. Settings\x1b[0m")?;
    writeln!(output, "\x1b[33m0. Exit\x1b[0m")?;
    write!(output, "\x1b[36mEnter your choice: \x1b[0m")?;
    output.flush()
}

fn settings_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    settings: &mut Settings,
) -> io::Result<()> {
    loop {
        let config = settings.get_config();
        writeln!(output, "\n=== Settings ({}) ===", settings.config_file())?;
        writeln!(output, "\x1b[33m1. Precision ({})\x1b[0m", config.precision)?;
        writeln!(output, "\x1b[33m2. Report format ({:?})\x1b[0m", config.report_format)?;
        writeln!(output, "\x1b[33m3. Log level ({})\x1b[0m", config.log_level)?;
        writeln!(output, "\x1b[33m4. Reset to defaults\x1b[0m")?;
        writeln!(output, "\x1b[33m0. Back to main menu\x1b[0m")?;
        let Some(choice) = prompt(input, output, "Enter your choice: ")? else {
            return Ok(());
        };
        let outcome = match choice.as_str() {
            "1" => match prompt(input, output, "Decimals: ")? {
                Some(answer) => match answer.parse::<usize>() {
                    Ok(precision) => settings.set_precision(precision),
                    Err(_) => {
                        writeln!(output, "Not a number: {}", answer)?;
                        continue;
                    }
                },
                None => return Ok(()),
            },
            "2" => match prompt(input, output, "Format (plain, table, json): ")? {
                Some(answer) => match parse_format(&answer) {
                    Some(format) => settings.set_report_format(format),
                    None => {
                        writeln!(output, "Unknown format: {}", answer)?;
                        continue;
                    }
                },
                None => return Ok(()),
            },
            "3" => match prompt(input, output, "Level (error, warn, info, debug): ")? {
                Some(answer) => settings.set_log_level(&answer),
                None => return Ok(()),
            },
            "4" => settings.reset_to_defaults(),
            "0" => return Ok(()),
            _ => {
                writeln!(output, "Invalid choice. Please try again.")?;
                continue;
            }
        };
        match outcome {
            Ok(()) => writeln!(output, "Settings updated.")?,
            Err(err) => writeln!(output, "\x1b[31m{}\x1b[0m", err)?,
        }
    }
}

pub fn parse_format(text: &str) -> Option<ReportFormat> {
    match text.trim().to_lowercase().as_str() {
        "plain" | "text" => Some(ReportFormat::Plain),
        "table" => Some(ReportFormat::Table),
        "json" => Some(ReportFormat::Json),
        _ => None,
    }
}

/// Non-interactive use: `<calculator> <direction> <inputs...>`, direction
/// numbered from 1 as in the menus. Returns the rendered report.
pub fn run_once(args: &[String], settings: &Settings) -> Result<String, EvaluatorError> {
    let Some((slug, rest)) = args.split_first() else {
        return Err(EvaluatorError::UnknownCalculator(String::new()));
    };
    let spec = find_calculator(slug)?;
    let given = rest.first().map(String::as_str).unwrap_or("<missing>");
    let direction = given
        .parse::<usize>()
        .ok()
        .filter(|number| (1..=spec.directions.len()).contains(number))
        .ok_or_else(|| EvaluatorError::InvalidDirectionArgument {
            calculator: spec.slug.to_string(),
            given: given.to_string(),
            count: spec.directions.len(),
        })?;
    let result = evaluate(spec, direction - 1, &rest[1..], &settings.constants())?;
    Ok(settings.reporter().render(spec, &result))
}

/// Writes `question` in prompt color and reads the answer.
pub(crate) fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "\x1b[36m{}\x1b[0m", question)?;
    output.flush()?;
    read_input(input)
}

/// One trimmed line; `None` at end of input.
pub(crate) fn read_input<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
