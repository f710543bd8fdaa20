//! # Settings Module
//!
//! ## Purpose
//! Persistent user preferences of the calculator application: output precision,
//! log level, report format and overrides of the physical constants used by the
//! formulas. Stored as pretty-printed JSON in `chemcalc_config.json`; a missing
//! file means defaults.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "precision": 4,
//!   "log_level": "info",
//!   "report_format": "Plain",
//!   "constants": { "faraday": 96485.0, "gas_constant": 8.314 }
//! }
//! ```
//! Every key is optional; absent keys (including single constants) take their
//! default value.
//!
//! ## Usage Pattern
//! ```rust, no_run
//! use ChemCalc::settings::Settings;
//! use ChemCalc::Evaluator::report::ReportFormat;
//!
//! let mut settings = Settings::new();
//! settings.set_precision(6).unwrap();
//! settings.set_report_format(ReportFormat::Table).unwrap();
//! settings.reset_to_defaults().unwrap();
//! ```
use crate::Evaluator::report::{ReportEnum, ReportFormat, create_reporter};
use crate::constants::PhysicalConstants;
use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "chemcalc_config.json";
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("Precision must be between 0 and 15, got {0}")]
    InvalidPrecision(usize),
    #[error("Physical constants must be positive finite numbers: {0:?}")]
    InvalidConstants(Vec<&'static str>),
}

/// Serializable content of the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// decimals shown in reports
    pub precision: usize,
    pub log_level: String,
    pub report_format: ReportFormat,
    pub constants: PhysicalConstants,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            log_level: "info".to_string(),
            report_format: ReportFormat::Plain,
            constants: PhysicalConstants::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.precision > MAX_PRECISION {
            return Err(SettingsError::InvalidPrecision(self.precision));
        }
        parse_level(&self.log_level)?;
        let invalid = self.constants.invalid_entries();
        if !invalid.is_empty() {
            return Err(SettingsError::InvalidConstants(invalid));
        }
        Ok(())
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, SettingsError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| SettingsError::InvalidLogLevel(level.to_string()))
}

/// Settings manager: current configuration plus the file it persists to.
#[derive(Debug, Clone)]
pub struct Settings {
    config: AppConfig,
    config_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Loads `chemcalc_config.json` from the working directory. A broken file
    /// is reported and replaced by defaults in memory (not on disk).
    pub fn new() -> Self {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        let (settings, load_error) = Self::open(config_file);
        if let Some(err) = load_error {
            warn!("{}: {}; using default settings", config_file, err);
        }
        settings
    }

    /// Same as [`Settings::with_config_file`] but hands the load error back
    /// instead of logging it, for callers that start the logger afterwards.
    pub fn open(config_file: &str) -> (Self, Option<SettingsError>) {
        let (config, load_error) = match Self::load_config(config_file) {
            Ok(config) => (config, None),
            Err(err) => (AppConfig::default(), Some(err)),
        };
        let settings = Self {
            config,
            config_file: config_file.to_string(),
        };
        (settings, load_error)
    }

    /// Reads and validates a settings file; defaults when the file does not exist.
    pub fn load_config(config_file: &str) -> Result<AppConfig, SettingsError> {
        if !Path::new(config_file).exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(config_file)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_config(&self) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_file, content)?;
        info!("settings saved to {}", self.config_file);
        Ok(())
    }

    pub fn get_config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn constants(&self) -> PhysicalConstants {
        self.config.constants
    }

    pub fn set_precision(&mut self, precision: usize) -> Result<(), SettingsError> {
        if precision > MAX_PRECISION {
            return Err(SettingsError::InvalidPrecision(precision));
        }
        self.config.precision = precision;
        self.save_config()
    }

    pub fn set_report_format(&mut self, format: ReportFormat) -> Result<(), SettingsError> {
        self.config.report_format = format;
        self.save_config()
    }

    /// Stores the level and applies it to the running logger at once.
    pub fn set_log_level(&mut self, level: &str) -> Result<(), SettingsError> {
        let filter = parse_level(level)?;
        self.config.log_level = level.trim().to_lowercase();
        log::set_max_level(filter);
        self.save_config()
    }

    pub fn set_constants(&mut self, constants: PhysicalConstants) -> Result<(), SettingsError> {
        let invalid = constants.invalid_entries();
        if !invalid.is_empty() {
            return Err(SettingsError::InvalidConstants(invalid));
        }
        self.config.constants = constants;
        self.save_config()
    }

    /// Level for the logger; a stored value that fails to parse means `Info`.
    pub fn log_level_filter(&self) -> LevelFilter {
        parse_level(&self.config.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn reporter(&self) -> ReportEnum {
        create_reporter(self.config.report_format, self.config.precision)
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), SettingsError> {
        self.config = AppConfig::default();
        log::set_max_level(self.log_level_filter());
        self.save_config()
    }
}

mod settings_tests;
