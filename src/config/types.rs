//! Configuration types for payroll computation.
//!
//! These structures are deserialized from the YAML files in a payroll
//! configuration directory.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{CalculationOptions, DEFAULT_DAILY_THRESHOLD, OvertimePolicy, RateCard};
use crate::models::EmployeeRate;

fn default_threshold() -> Decimal {
    DEFAULT_DAILY_THRESHOLD
}

fn default_week_start() -> Weekday {
    Weekday::Mon
}

/// Settings from `payroll.yaml`.
///
/// Every field is optional in the file and falls back to the source
/// system's behaviour: an 8 hour per-entry threshold and Monday weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Hours paid at the regular rate before overtime applies.
    #[serde(default = "default_threshold")]
    pub daily_threshold_hours: Decimal,
    /// Whether the threshold applies per entry or per employee-day.
    #[serde(default)]
    pub overtime_policy: OvertimePolicy,
    /// First day of the week for weekly reports.
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            daily_threshold_hours: default_threshold(),
            overtime_policy: OvertimePolicy::default(),
            week_start: default_week_start(),
        }
    }
}

impl PayrollSettings {
    /// The calculation options these settings describe.
    pub fn options(&self) -> CalculationOptions {
        CalculationOptions {
            daily_threshold: self.daily_threshold_hours,
            overtime_policy: self.overtime_policy,
        }
    }
}

/// Rate card file structure (`rates.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesFile {
    /// Rates for each employee.
    #[serde(default)]
    pub rates: Vec<EmployeeRate>,
}

/// The complete payroll configuration.
#[derive(Debug, Clone, Default)]
pub struct PayrollConfig {
    settings: PayrollSettings,
    rate_card: RateCard,
}

impl PayrollConfig {
    /// Creates a configuration from its parts.
    pub fn new(settings: PayrollSettings, rate_card: RateCard) -> Self {
        Self {
            settings,
            rate_card,
        }
    }

    /// Returns the payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the default rate card.
    pub fn rate_card(&self) -> &RateCard {
        &self.rate_card
    }
}
