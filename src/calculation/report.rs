//! Periodic payroll reports.
//!
//! The daily, weekly, monthly and per-employee reports are the same fold over
//! payroll lines with a different grouping key: every row is one employee in
//! one period.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::{AggregateTotals, PayrollLine};

use super::aggregate::{aggregate, summarize};

/// The granularity of a payroll report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// One row per employee per date.
    Daily,
    /// One row per employee per week.
    Weekly,
    /// One row per employee per calendar month.
    Monthly,
    /// One row per employee over the whole batch.
    Employee,
}

/// Grouping key for a report row.
///
/// Orders by employee, then by period start.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReportKey {
    /// The employee.
    pub employee_id: String,
    /// First day of the period; `None` for the per-employee report.
    pub period_start: Option<NaiveDate>,
}

/// One employee's totals for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The employee.
    pub employee_id: String,
    /// First day of the period, inclusive.
    pub period_start: Option<NaiveDate>,
    /// Last day of the period, inclusive.
    pub period_end: Option<NaiveDate>,
    /// Summed figures for the period.
    pub totals: AggregateTotals,
}

/// A complete report over a batch of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// The report granularity.
    pub period: ReportPeriod,
    /// Rows ordered by employee, then period start.
    pub rows: Vec<ReportRow>,
    /// Grand total over every line.
    pub totals: AggregateTotals,
    /// Number of lines that carried at least one warning.
    pub lines_with_warnings: usize,
}

/// Returns the first day of the week containing `date`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::week_start_for;
/// use chrono::{NaiveDate, Weekday};
///
/// let thursday = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// assert_eq!(week_start_for(thursday, Weekday::Mon), monday);
/// assert_eq!(week_start_for(thursday, Weekday::Sun), sunday);
/// ```
pub fn week_start_for(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset =
        (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

fn month_start_for(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Computes the report key a line belongs to.
pub fn period_key(line: &PayrollLine, period: ReportPeriod, week_start: Weekday) -> ReportKey {
    let period_start = match period {
        ReportPeriod::Daily => Some(line.date),
        ReportPeriod::Weekly => Some(week_start_for(line.date, week_start)),
        ReportPeriod::Monthly => Some(month_start_for(line.date)),
        ReportPeriod::Employee => None,
    };

    ReportKey {
        employee_id: line.employee_id.clone(),
        period_start,
    }
}

fn period_end(period: ReportPeriod, start: NaiveDate) -> Option<NaiveDate> {
    match period {
        ReportPeriod::Daily => Some(start),
        ReportPeriod::Weekly => start.checked_add_days(Days::new(6)),
        ReportPeriod::Monthly => start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt()),
        ReportPeriod::Employee => None,
    }
}

/// Builds a report by grouping lines per employee per period.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{
///     build_report, compute_line, ReportPeriod, DEFAULT_DAILY_THRESHOLD,
/// };
/// use payroll_engine::models::{AttendanceEntry, EmployeeRate};
/// use chrono::{NaiveDate, Weekday};
/// use rust_decimal::Decimal;
///
/// let rate = EmployeeRate::new("emp_001", Decimal::new(20, 0), Decimal::new(30, 0));
/// let lines: Vec<_> = [2, 3, 9]
///     .iter()
///     .map(|day| {
///         let date = NaiveDate::from_ymd_opt(2026, 3, *day).unwrap();
///         let entry = AttendanceEntry::new("emp_001", date, "08:00", "16:00");
///         compute_line(&entry, &rate, DEFAULT_DAILY_THRESHOLD)
///     })
///     .collect();
///
/// let report = build_report(&lines, ReportPeriod::Weekly, Weekday::Mon);
/// assert_eq!(report.rows.len(), 2);
/// assert_eq!(report.rows[0].totals.total_days, 2);
/// assert_eq!(report.totals.total_pay, Decimal::new(480, 0));
/// ```
pub fn build_report(
    lines: &[PayrollLine],
    period: ReportPeriod,
    week_start: Weekday,
) -> PayrollReport {
    let rows = aggregate(lines, |line| period_key(line, period, week_start))
        .into_iter()
        .map(|(key, totals)| ReportRow {
            period_end: key.period_start.and_then(|start| period_end(period, start)),
            employee_id: key.employee_id,
            period_start: key.period_start,
            totals,
        })
        .collect();

    PayrollReport {
        period,
        rows,
        totals: summarize(lines),
        lines_with_warnings: lines.iter().filter(|l| l.has_warnings()).count(),
    }
}
