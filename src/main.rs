use ChemCalc::Utils::logger::init_logging;
use ChemCalc::cli::cli_main::{run_interactive_menu, run_once};
use ChemCalc::settings::{DEFAULT_CONFIG_FILE, Settings};
use log::{error, warn};
use std::process::ExitCode;

pub fn main() -> ExitCode {
    let (mut settings, load_error) = Settings::open(DEFAULT_CONFIG_FILE);
    if let Err(err) = init_logging(settings.log_level_filter()) {
        eprintln!("logger not initialized: {}", err);
    }
    // the logger did not exist while the file was read
    if let Some(err) = load_error {
        warn!("{}: {}; using default settings", DEFAULT_CONFIG_FILE, err);
    }

    // `chemcalc <calculator> <direction> <inputs...>` evaluates once and exits
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return match run_once(&args, &settings) {
            Ok(report) => {
                println!("{}", report);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            }
        };
    }

    match run_interactive_menu(&mut settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("terminal i/o failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
