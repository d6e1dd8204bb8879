//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/report` endpoints.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{CalculationOptions, OvertimePolicy, RateCard, ReportPeriod};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEntry, EmployeeRate};

/// Request body for the `/calculate` endpoint.
///
/// Only `entries` is required. Rates supplied here are layered over the
/// configured rate card, and the threshold and overtime policy fall back to
/// the configured settings when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The attendance entries to price.
    pub entries: Vec<AttendanceEntry>,
    /// Rates overriding the configured rate card.
    #[serde(default)]
    pub rates: Vec<EmployeeRate>,
    /// Overrides the configured daily threshold (hours).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_threshold: Option<Decimal>,
    /// Overrides the configured overtime policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_policy: Option<OvertimePolicy>,
}

impl CalculationRequest {
    /// Creates a request for the given entries using configured defaults.
    pub fn new(entries: Vec<AttendanceEntry>) -> Self {
        Self {
            entries,
            rates: Vec::new(),
            daily_threshold: None,
            overtime_policy: None,
        }
    }

    /// Resolves the calculation options against the configured settings.
    ///
    /// Returns [`EngineError::InvalidThreshold`] when the request supplies a
    /// negative threshold.
    pub fn options(&self, config: &ConfigLoader) -> EngineResult<CalculationOptions> {
        let defaults = config.options();
        let daily_threshold = self.daily_threshold.unwrap_or(defaults.daily_threshold);
        if daily_threshold < Decimal::ZERO {
            return Err(EngineError::InvalidThreshold {
                threshold: daily_threshold,
            });
        }

        Ok(CalculationOptions {
            daily_threshold,
            overtime_policy: self.overtime_policy.unwrap_or(defaults.overtime_policy),
        })
    }

    /// Builds the rate card for this request: request rates over configured ones.
    pub fn rate_card(&self, config: &ConfigLoader) -> RateCard {
        if self.rates.is_empty() {
            return config.rate_card().clone();
        }
        let overrides: RateCard = self.rates.iter().cloned().collect();
        overrides.merged_over(config.rate_card())
    }
}

/// Request body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// How lines are grouped into report rows.
    pub period: ReportPeriod,
    /// Overrides the configured first day of the week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_start: Option<Weekday>,
    /// The entries, rates and overrides to compute lines from.
    #[serde(flatten)]
    pub calculation: CalculationRequest,
}

impl ReportRequest {
    /// The week start to group weekly rows by.
    pub fn week_start(&self, config: &ConfigLoader) -> Weekday {
        self.week_start.unwrap_or(config.settings().week_start)
    }
}
