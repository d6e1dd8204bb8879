//! Aggregation of payroll lines into grouped totals.

use std::collections::BTreeMap;

use crate::models::{AggregateTotals, PayrollLine};

/// Groups lines by a caller-supplied key and sums each group.
///
/// Each line lands in exactly one bucket, chosen by `group_key` from the
/// line alone; nothing is prorated across buckets. Within a group,
/// `total_days` counts distinct `(employee_id, date)` pairs.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{aggregate, compute_line, DEFAULT_DAILY_THRESHOLD};
/// use payroll_engine::models::{AttendanceEntry, EmployeeRate};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// let rate = EmployeeRate::new("emp_001", Decimal::new(20, 0), Decimal::new(30, 0));
/// let morning = AttendanceEntry::new("emp_001", date, "06:00", "14:00");
/// let evening = AttendanceEntry::new("emp_001", date, "14:00", "22:00");
/// let lines = vec![
///     compute_line(&morning, &rate, DEFAULT_DAILY_THRESHOLD),
///     compute_line(&evening, &rate, DEFAULT_DAILY_THRESHOLD),
/// ];
///
/// let by_employee = aggregate(&lines, |line| line.employee_id.clone());
/// let totals = &by_employee["emp_001"];
/// assert_eq!(totals.total_days, 1);
/// assert_eq!(totals.total_hours, Decimal::new(16, 0));
/// assert_eq!(totals.regular_hours, Decimal::new(16, 0));
/// ```
pub fn aggregate<K, F>(lines: &[PayrollLine], mut group_key: F) -> BTreeMap<K, AggregateTotals>
where
    K: Ord,
    F: FnMut(&PayrollLine) -> K,
{
    let mut groups: BTreeMap<K, AggregateTotals> = BTreeMap::new();
    for line in lines {
        groups.entry(group_key(line)).or_default().add_line(line);
    }
    groups
}

/// Sums all lines into a single total.
pub fn summarize(lines: &[PayrollLine]) -> AggregateTotals {
    lines.iter().collect()
}

/// Merges two grouped aggregates key by key.
pub fn merge_groups<K>(
    mut left: BTreeMap<K, AggregateTotals>,
    right: &BTreeMap<K, AggregateTotals>,
) -> BTreeMap<K, AggregateTotals>
where
    K: Ord + Clone,
{
    for (key, totals) in right {
        left.entry(key.clone()).or_default().merge(totals);
    }
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_line, DEFAULT_DAILY_THRESHOLD};
    use crate::models::{AttendanceEntry, EmployeeRate};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn line(employee_id: &str, date: &str, start: &str, end: &str) -> PayrollLine {
        let rate = EmployeeRate::new(employee_id, dec("20"), dec("30"));
        let entry = AttendanceEntry::new(employee_id, make_date(date), start, end);
        compute_line(&entry, &rate, DEFAULT_DAILY_THRESHOLD)
    }

    fn sample_lines() -> Vec<PayrollLine> {
        vec![
            line("emp_001", "2026-03-02", "07:00", "19:00"),
            line("emp_001", "2026-03-03", "08:00", "16:00"),
            line("emp_002", "2026-03-02", "08:00", "12:00"),
            line("emp_001", "2026-03-03", "17:00", "19:00"),
        ]
    }

    #[test]
    fn test_aggregate_by_employee() {
        let groups = aggregate(&sample_lines(), |l| l.employee_id.clone());

        assert_eq!(groups.len(), 2);
        let emp1 = &groups["emp_001"];
        assert_eq!(emp1.total_hours, dec("22"));
        assert_eq!(emp1.regular_hours, dec("18"));
        assert_eq!(emp1.overtime_hours, dec("4"));
        assert_eq!(emp1.total_pay, dec("480"));
        assert_eq!(emp1.total_days, 2);

        let emp2 = &groups["emp_002"];
        assert_eq!(emp2.total_hours, dec("4"));
        assert_eq!(emp2.total_days, 1);
    }

    #[test]
    fn test_two_entries_same_day_count_one_day_with_no_overtime() {
        let lines = vec![
            line("emp_001", "2026-03-02", "06:00", "14:00"),
            line("emp_001", "2026-03-02", "14:00", "22:00"),
        ];
        let groups = aggregate(&lines, |l| l.employee_id.clone());
        let totals = &groups["emp_001"];

        assert_eq!(totals.total_days, 1);
        assert_eq!(totals.total_hours, dec("16"));
        assert_eq!(totals.regular_hours, dec("16"));
        assert_eq!(totals.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_by_date_counts_employee_days() {
        let groups = aggregate(&sample_lines(), |l| l.date);
        let monday = &groups[&make_date("2026-03-02")];
        assert_eq!(monday.total_days, 2);
        assert_eq!(monday.total_hours, dec("16"));
    }

    #[test]
    fn test_aggregate_empty() {
        let groups = aggregate(&[], |l: &PayrollLine| l.employee_id.clone());
        assert!(groups.is_empty());
        assert_eq!(summarize(&[]), AggregateTotals::default());
    }

    #[test]
    fn test_summarize_equals_single_bucket() {
        let lines = sample_lines();
        let groups = aggregate(&lines, |_| ());
        assert_eq!(summarize(&lines), groups[&()]);
    }

    #[test]
    fn test_split_then_merge_equals_direct() {
        let lines = sample_lines();
        let (head, tail) = lines.split_at(2);

        let merged = merge_groups(
            aggregate(head, |l| l.employee_id.clone()),
            &aggregate(tail, |l| l.employee_id.clone()),
        );
        let direct = aggregate(&lines, |l| l.employee_id.clone());
        assert_eq!(merged, direct);
    }

    #[test]
    fn test_order_does_not_matter() {
        let lines = sample_lines();
        let mut reversed = lines.clone();
        reversed.reverse();
        assert_eq!(
            aggregate(&lines, |l| l.employee_id.clone()),
            aggregate(&reversed, |l| l.employee_id.clone())
        );
    }
}
