//! Batch computation of payroll lines.
//!
//! Every report starts here: a batch of attendance entries is priced against
//! a rate card under one set of [`CalculationOptions`]. A bad entry never
//! stops the batch; it produces a zero or partial line with warnings.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceEntry, EmployeeRate, PayrollLine, PayrollWarning, WarningCode};

use super::daily_overtime::DEFAULT_DAILY_THRESHOLD;
use super::line::compute_line;
use super::rate_card::RateCard;
use super::shift_hours::{minutes_of_day, parse_time_of_day};

/// How the daily threshold is applied when an employee has several entries
/// on one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimePolicy {
    /// Each entry is measured against the threshold on its own. Two 8-hour
    /// entries on the same date produce 16 regular hours.
    #[default]
    PerEntry,
    /// Regular hours for an employee on a date are capped at the threshold
    /// across all of that date's entries, allocated in start-time order.
    PerDay,
}

/// Parameters shared by every line in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOptions {
    /// Hours per entry (or per day, see `overtime_policy`) paid at the regular rate.
    pub daily_threshold: Decimal,
    /// How the threshold is applied.
    pub overtime_policy: OvertimePolicy,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            daily_threshold: DEFAULT_DAILY_THRESHOLD,
            overtime_policy: OvertimePolicy::PerEntry,
        }
    }
}

/// Computes one payroll line per entry, in input order.
///
/// Entries whose employee has no rate are computed at zero rates and carry a
/// `missing_rate` warning, so their hours still show up in reports.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{compute_lines, CalculationOptions, RateCard};
/// use payroll_engine::models::{AttendanceEntry, EmployeeRate, WarningCode};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let entries = vec![
///     AttendanceEntry::new("emp_001", date, "08:00", "16:00"),
///     AttendanceEntry::new("emp_999", date, "08:00", "16:00"),
/// ];
/// let rates: RateCard =
///     vec![EmployeeRate::new("emp_001", Decimal::new(20, 0), Decimal::new(30, 0))]
///         .into_iter()
///         .collect();
///
/// let lines = compute_lines(&entries, &rates, &CalculationOptions::default());
/// assert_eq!(lines[0].total_pay, Decimal::new(160, 0));
/// assert_eq!(lines[1].total_pay, Decimal::ZERO);
/// assert_eq!(lines[1].warnings[0].code, WarningCode::MissingRate);
/// ```
pub fn compute_lines(
    entries: &[AttendanceEntry],
    rates: &RateCard,
    options: &CalculationOptions,
) -> Vec<PayrollLine> {
    match options.overtime_policy {
        OvertimePolicy::PerEntry => entries
            .iter()
            .map(|entry| priced_line(entry, rates, options.daily_threshold))
            .collect(),
        OvertimePolicy::PerDay => compute_lines_per_day(entries, rates, options.daily_threshold),
    }
}

fn priced_line(entry: &AttendanceEntry, rates: &RateCard, threshold: Decimal) -> PayrollLine {
    match rates.get(&entry.employee_id) {
        Some(rate) => compute_line(entry, rate, threshold),
        None => {
            let mut line = compute_line(entry, &EmployeeRate::zero(&entry.employee_id), threshold);
            line.warnings.push(PayrollWarning::new(
                WarningCode::MissingRate,
                format!(
                    "No rate found for employee '{}'; hours priced at zero",
                    entry.employee_id
                ),
            ));
            line
        }
    }
}

fn compute_lines_per_day(
    entries: &[AttendanceEntry],
    rates: &RateCard,
    threshold: Decimal,
) -> Vec<PayrollLine> {
    let starts: Vec<Option<i64>> = entries
        .iter()
        .map(|e| {
            e.start_time
                .as_deref()
                .and_then(parse_time_of_day)
                .map(minutes_of_day)
        })
        .collect();

    // Allocate within each employee-day by start time; unparseable starts go
    // last and input order breaks ties.
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        entries[a]
            .employee_id
            .cmp(&entries[b].employee_id)
            .then(entries[a].date.cmp(&entries[b].date))
            .then_with(|| compare_starts(starts[a], starts[b]))
    });

    let threshold = threshold.max(Decimal::ZERO);
    let mut used: HashMap<(&str, NaiveDate), Decimal> = HashMap::new();
    let mut lines: Vec<Option<PayrollLine>> = vec![None; entries.len()];

    for index in order {
        let entry = &entries[index];
        let regular_used = used
            .entry((entry.employee_id.as_str(), entry.date))
            .or_insert(Decimal::ZERO);
        let remaining = (threshold - *regular_used).max(Decimal::ZERO);

        let line = priced_line(entry, rates, remaining);
        *regular_used += line.regular_hours;
        lines[index] = Some(line);
    }

    lines.into_iter().flatten().collect()
}

fn compare_starts(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
