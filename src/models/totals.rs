//! Aggregate totals over a group of payroll lines.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayrollLine;

/// A distinct day worked by an employee.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkedDay {
    /// The employee.
    pub employee_id: String,
    /// The date worked.
    pub date: NaiveDate,
}

/// Summed hours and pay across a group of payroll lines.
///
/// `total_days` counts distinct `(employee_id, date)` pairs, so two entries
/// for the same employee on the same date count once. The backing set is
/// carried in `worked_days` so that partial aggregates can be merged without
/// double counting.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AggregateTotals;
/// use rust_decimal::Decimal;
///
/// let totals = AggregateTotals::default();
/// assert_eq!(totals.total_days, 0);
/// assert_eq!(totals.total_pay, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTotals {
    /// Sum of payable hours.
    pub total_hours: Decimal,
    /// Number of distinct employee-days.
    pub total_days: usize,
    /// Sum of regular hours.
    pub regular_hours: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
    /// Sum of regular pay.
    pub regular_pay: Decimal,
    /// Sum of overtime pay.
    pub overtime_pay: Decimal,
    /// Sum of total pay.
    pub total_pay: Decimal,
    /// The distinct employee-days behind `total_days`.
    #[serde(default)]
    pub worked_days: BTreeSet<WorkedDay>,
}

impl AggregateTotals {
    /// Adds one line to the totals. Sums saturate at `Decimal::MAX`.
    pub fn add_line(&mut self, line: &PayrollLine) {
        self.total_hours = self.total_hours.saturating_add(line.total_hours);
        self.regular_hours = self.regular_hours.saturating_add(line.regular_hours);
        self.overtime_hours = self.overtime_hours.saturating_add(line.overtime_hours);
        self.regular_pay = self.regular_pay.saturating_add(line.regular_pay);
        self.overtime_pay = self.overtime_pay.saturating_add(line.overtime_pay);
        self.total_pay = self.total_pay.saturating_add(line.total_pay);
        self.worked_days.insert(WorkedDay {
            employee_id: line.employee_id.clone(),
            date: line.date,
        });
        self.total_days = self.worked_days.len();
    }

    /// Folds another partial aggregate into this one.
    pub fn merge(&mut self, other: &AggregateTotals) {
        self.total_hours = self.total_hours.saturating_add(other.total_hours);
        self.regular_hours = self.regular_hours.saturating_add(other.regular_hours);
        self.overtime_hours = self.overtime_hours.saturating_add(other.overtime_hours);
        self.regular_pay = self.regular_pay.saturating_add(other.regular_pay);
        self.overtime_pay = self.overtime_pay.saturating_add(other.overtime_pay);
        self.total_pay = self.total_pay.saturating_add(other.total_pay);
        self.worked_days.extend(other.worked_days.iter().cloned());
        self.total_days = self.worked_days.len();
    }
}

impl<'a> FromIterator<&'a PayrollLine> for AggregateTotals {
    fn from_iter<I: IntoIterator<Item = &'a PayrollLine>>(iter: I) -> Self {
        let mut totals = AggregateTotals::default();
        for line in iter {
            totals.add_line(line);
        }
        totals
    }
}
