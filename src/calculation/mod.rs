//! Payroll computation.
//!
//! This module turns attendance entries and employee rates into pay figures:
//! shift measurement, the regular/overtime split at a daily threshold,
//! per-entry pricing, batch computation against a rate card, and the folds
//! behind the daily, weekly, monthly and per-employee reports.
//!
//! Everything here is pure and synchronous. Nothing performs I/O or holds
//! shared state, so any function may be called concurrently.

mod aggregate;
mod batch;
mod daily_overtime;
mod line;
mod rate_card;
mod report;
mod shift_hours;

pub use aggregate::{aggregate, merge_groups, summarize};
pub use batch::{CalculationOptions, OvertimePolicy, compute_lines};
pub use daily_overtime::{DEFAULT_DAILY_THRESHOLD, DailyOvertimeDetection, detect_daily_overtime};
pub use line::compute_line;
pub use rate_card::RateCard;
pub use report::{
    PayrollReport, ReportKey, ReportPeriod, ReportRow, build_report, period_key, week_start_for,
};
pub use shift_hours::{ShiftHours, compute_shift_hours, parse_time_of_day};
