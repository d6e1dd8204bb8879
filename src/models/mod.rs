//! Core data models for the Payroll Engine.
//!
//! Inputs ([`AttendanceEntry`], [`EmployeeRate`]) are deserialized leniently
//! at the data boundary; outputs ([`PayrollLine`], [`AggregateTotals`]) carry
//! exact decimal figures.

mod attendance;
mod lenient;
mod payroll_line;
mod rate;
mod totals;

pub use attendance::AttendanceEntry;
pub use payroll_line::{PayrollLine, PayrollWarning, Severity, WarningCode};
pub use rate::{EmployeeRate, MAX_HOURLY_RATE};
pub use totals::{AggregateTotals, WorkedDay};
