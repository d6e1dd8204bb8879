//! Payroll line and warning models.
//!
//! A [`PayrollLine`] is the computed pay for one attendance entry. Lines are
//! derived on demand and never persisted; every report is a fold over them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies the kind of data-quality problem found in an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCode {
    /// Start or end time was absent or blank.
    MissingTime,
    /// Start or end time could not be parsed as a time of day.
    InvalidTime,
    /// End time is earlier than start time (overnight shifts are not supported).
    EndBeforeStart,
    /// The minute deduction is longer than the shift itself.
    DeductionExceedsShift,
    /// No rate card entry exists for the employee.
    MissingRate,
    /// Hours times rate exceeded the decimal range; pay is saturated.
    PayOverflow,
}

impl WarningCode {
    /// The severity an operator should attach to this code.
    pub fn severity(self) -> Severity {
        match self {
            WarningCode::DeductionExceedsShift => Severity::Medium,
            WarningCode::MissingTime
            | WarningCode::InvalidTime
            | WarningCode::EndBeforeStart
            | WarningCode::MissingRate
            | WarningCode::PayOverflow => Severity::High,
        }
    }
}

/// How urgently a warning needs operator attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Figures are plausible but likely wrong.
    Medium,
    /// The line pays nothing (or nothing correct) because of bad input.
    High,
}

/// A data-quality diagnostic attached to a payroll line.
///
/// Warnings never stop a calculation. They exist so that a shift which
/// produced zero hours because of bad input is not reported as a correctly
/// unpaid shift.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollWarning, Severity, WarningCode};
///
/// let warning =
///     PayrollWarning::new(WarningCode::EndBeforeStart, "end 08:00 is before start 09:00");
/// assert_eq!(warning.severity, Severity::High);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollWarning {
    /// What went wrong.
    pub code: WarningCode,
    /// A human-readable description.
    pub message: String,
    /// How urgent the problem is.
    pub severity: Severity,
}

impl PayrollWarning {
    /// Creates a warning with the severity implied by its code.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            severity: code.severity(),
        }
    }
}

/// Computed pay for a single attendance entry.
///
/// # Invariants
///
/// - `total_hours >= 0`
/// - `regular_hours + overtime_hours == total_hours`
/// - `regular_hours <= daily threshold`
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollLine;
///
/// let json = r#"{
///     "employee_id": "emp_001",
///     "jobsite_id": null,
///     "date": "2026-03-02",
///     "shift_hours": "8",
///     "deducted_hours": "0.5",
///     "total_hours": "7.5",
///     "regular_hours": "7.5",
///     "overtime_hours": "0",
///     "regular_pay": "150.0",
///     "overtime_pay": "0",
///     "total_pay": "150.0"
/// }"#;
/// let line: PayrollLine = serde_json::from_str(json).unwrap();
/// assert!(line.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The employee the line is for.
    pub employee_id: String,
    /// The job site of the originating entry.
    pub jobsite_id: Option<String>,
    /// The date of the originating entry.
    pub date: NaiveDate,
    /// Elapsed hours between start and end, before deduction.
    pub shift_hours: Decimal,
    /// The minute deduction expressed in hours.
    pub deducted_hours: Decimal,
    /// Payable hours: shift hours less deduction, never negative.
    pub total_hours: Decimal,
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// `regular_hours * regular_rate`.
    pub regular_pay: Decimal,
    /// `overtime_hours * overtime_rate`.
    pub overtime_pay: Decimal,
    /// `regular_pay + overtime_pay`.
    pub total_pay: Decimal,
    /// Data-quality diagnostics raised while computing the line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PayrollWarning>,
}

impl PayrollLine {
    /// Returns true if any warning was raised for this line.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
