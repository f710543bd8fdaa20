use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs the global terminal logger on stderr, filtered at `level`.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    TermLogger::init(LevelFilter::Trace, config, TerminalMode::Stderr, ColorChoice::Auto)?;
    // the global max level is the only filter, so the settings menu can move it
    log::set_max_level(level);
    Ok(())
}
