//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Calculators::electrochemistry::ELECTROLYSIS_CALCULATOR;
    use crate::Evaluator::report::{ReportEnum, ReportFormat};
    use crate::Evaluator::widget::FormulaWidget;
    use crate::constants::PhysicalConstants;
    use crate::settings::{AppConfig, Settings, SettingsError};
    use approx::assert_relative_eq;
    use log::LevelFilter;
    use std::fs;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let settings = Settings::with_config_file(path.to_str().unwrap());
        assert_eq!(settings.get_config(), &AppConfig::default());
        assert_eq!(settings.log_level_filter(), LevelFilter::Info);
        assert!(!path.exists());
    }

    #[test]
    fn test_round_trip_through_file() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let mut settings = Settings::with_config_file(path);
        settings.set_precision(6).unwrap();
        settings.set_report_format(ReportFormat::Json).unwrap();

        let reloaded = Settings::with_config_file(path);
        assert_eq!(reloaded.get_config().precision, 6);
        assert_eq!(reloaded.get_config().report_format, ReportFormat::Json);
        assert!(matches!(reloaded.reporter(), ReportEnum::Json(_)));
    }

    // the only test that moves the global log level
    #[test]
    fn test_log_level_applies_immediately() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let mut settings = Settings::with_config_file(path);
        settings.set_log_level("DEBUG").unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert_eq!(Settings::with_config_file(path).log_level_filter(), LevelFilter::Debug);

        settings.set_log_level("warn").unwrap();
        assert_eq!(log::max_level(), LevelFilter::Warn);
        assert!(settings.set_log_level("chatty").is_err());
        assert_eq!(log::max_level(), LevelFilter::Warn);

        settings.reset_to_defaults().unwrap();
        assert_eq!(log::max_level(), LevelFilter::Info);
        let reloaded = Settings::with_config_file(path);
        assert_eq!(reloaded.get_config(), &AppConfig::default());
    }

    #[test]
    fn test_open_hands_back_the_load_error() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{ not json").unwrap();
        let (settings, load_error) = Settings::open(file.path().to_str().unwrap());
        assert!(matches!(load_error, Some(SettingsError::Json(_))));
        assert_eq!(settings.get_config(), &AppConfig::default());
        assert_eq!(settings.config_file(), file.path().to_str().unwrap());

        let dir = tempdir().unwrap();
        let absent = dir.path().join("absent.json");
        let (_, load_error) = Settings::open(absent.to_str().unwrap());
        assert!(load_error.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), r#"{ "precision": 2, "constants": { "faraday": 96500.0 } }"#).unwrap();
        let config = Settings::load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.precision, 2);
        assert_eq!(config.log_level, "info");
        assert_relative_eq!(config.constants.faraday, 96500.0);
        assert_relative_eq!(config.constants.gas_constant, 8.314);
    }

    #[test]
    fn test_broken_file_falls_back() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "{ not json").unwrap();
        let path = file.path().to_str().unwrap();
        assert!(matches!(Settings::load_config(path), Err(SettingsError::Json(_))));
        let settings = Settings::with_config_file(path);
        assert_eq!(settings.get_config(), &AppConfig::default());

        fs::write(file.path(), r#"{ "constants": { "faraday": -1.0 } }"#).unwrap();
        assert!(matches!(
            Settings::load_config(path),
            Err(SettingsError::InvalidConstants(names)) if names == vec!["faraday"]
        ));
    }

    #[test]
    fn test_rejected_updates_leave_config_alone() {
        let file = NamedTempFile::new().unwrap();
        let mut settings = Settings::with_config_file(file.path().to_str().unwrap());
        assert!(matches!(
            settings.set_precision(40),
            Err(SettingsError::InvalidPrecision(40))
        ));
        assert!(matches!(
            settings.set_log_level("chatty"),
            Err(SettingsError::InvalidLogLevel(_))
        ));
        let broken = PhysicalConstants {
            planck: 0.0,
            ..PhysicalConstants::default()
        };
        assert!(settings.set_constants(broken).is_err());
        assert_eq!(settings.get_config(), &AppConfig::default());
    }

    #[test]
    fn test_constants_reach_the_widget() {
        let file = NamedTempFile::new().unwrap();
        let mut settings = Settings::with_config_file(file.path().to_str().unwrap());
        settings
            .set_constants(PhysicalConstants {
                faraday: 100000.0,
                ..PhysicalConstants::default()
            })
            .unwrap();
        let mut widget = FormulaWidget::with_constants(ELECTROLYSIS_CALCULATOR, settings.constants());
        let mass = widget.compute_from_primary(&["1", "200000", "50", "1"]).unwrap();
        assert_relative_eq!(mass.primary_value, 100.0, max_relative = 1e-12);

        let reloaded = Settings::with_config_file(file.path().to_str().unwrap());
        assert_relative_eq!(reloaded.constants().faraday, 100000.0);
    }
}
