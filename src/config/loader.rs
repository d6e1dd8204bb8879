//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings and the default rate card from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::calculation::{CalculationOptions, RateCard};
use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollSettings, RatesFile};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// ├── payroll.yaml   # Threshold, overtime policy, week start
/// └── rates.yaml     # Default rate card (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
/// println!("Daily threshold: {}", loader.settings().daily_threshold_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Wraps an already-built configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - `payroll.yaml` is missing or contains invalid YAML
    /// - `rates.yaml` exists but contains invalid YAML
    /// - the daily threshold is negative
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<PayrollSettings>(&path.join("payroll.yaml"))?;
        Self::validate(&settings)?;

        let rates_path = path.join("rates.yaml");
        let rates = if rates_path.exists() {
            Self::load_yaml::<RatesFile>(&rates_path)?
        } else {
            RatesFile::default()
        };

        let rate_card: RateCard = rates.rates.into_iter().collect();

        Ok(Self {
            config: PayrollConfig::new(settings, rate_card),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(settings: &PayrollSettings) -> EngineResult<()> {
        if settings.daily_threshold_hours < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "daily_threshold_hours".to_string(),
                message: format!(
                    "{} is negative; the threshold must be zero or more hours",
                    settings.daily_threshold_hours
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        self.config.settings()
    }

    /// Returns the default rate card.
    pub fn rate_card(&self) -> &RateCard {
        self.config.rate_card()
    }

    /// Returns the calculation options implied by the settings.
    pub fn options(&self) -> CalculationOptions {
        self.settings().options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::OvertimePolicy;
    use chrono::Weekday;
    use std::path::PathBuf;
    use std::str::FromStr;
    use uuid::Uuid;

    fn config_path() -> &'static str {
        "./config/payroll"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Writes the given files into a fresh temporary config directory.
    fn temp_config(files: &[(&str, &str)]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("payroll-engine-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        for (name, content) in files {
            fs::write(dir.join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().daily_threshold_hours, dec("8"));
        assert_eq!(loader.settings().overtime_policy, OvertimePolicy::PerEntry);
        assert_eq!(loader.settings().week_start, Weekday::Mon);
    }

    #[test]
    fn test_default_rate_card_is_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let rate = loader.rate_card().get("emp_001").unwrap();
        assert_eq!(rate.regular_rate, dec("20"));
        assert_eq!(rate.overtime_rate, dec("30"));
        assert!(loader.rate_card().get("unknown").is_none());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_rates_file_gives_empty_card() {
        let dir = temp_config(&[("payroll.yaml", "daily_threshold_hours: 10\n")]);
        let loader = ConfigLoader::load(&dir).unwrap();

        assert!(loader.rate_card().is_empty());
        assert_eq!(loader.options().daily_threshold, dec("10"));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let dir = temp_config(&[("payroll.yaml", "daily_threshold_hours: -1\n")]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "daily_threshold_hours");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let dir = temp_config(&[
            ("payroll.yaml", "week_start: monday\n"),
            ("rates.yaml", "rates: [unclosed\n"),
        ]);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("rates.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_default_loader_has_default_settings() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.settings(), &PayrollSettings::default());
        assert!(loader.rate_card().is_empty());
    }
}
