//! Rate card lookup.

use std::collections::HashMap;

use crate::models::EmployeeRate;

/// Per-employee regular and overtime rates, keyed by employee id.
///
/// Inserting a rate for an employee that already has one replaces it.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::RateCard;
/// use payroll_engine::models::EmployeeRate;
/// use rust_decimal::Decimal;
///
/// let card: RateCard = vec![
///     EmployeeRate::new("emp_001", Decimal::new(20, 0), Decimal::new(30, 0)),
///     EmployeeRate::new("emp_002", Decimal::new(25, 0), Decimal::new(375, 1)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(card.len(), 2);
/// assert_eq!(card.get("emp_002").unwrap().overtime_rate, Decimal::new(375, 1));
/// assert!(card.get("emp_003").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateCard {
    rates: HashMap<String, EmployeeRate>,
}

impl RateCard {
    /// Creates an empty rate card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an employee's rate.
    pub fn insert(&mut self, rate: EmployeeRate) {
        self.rates.insert(rate.employee_id.clone(), rate);
    }

    /// Looks up an employee's rate.
    pub fn get(&self, employee_id: &str) -> Option<&EmployeeRate> {
        self.rates.get(employee_id)
    }

    /// Number of employees with a rate.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the card has no rates.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns a card holding `base`'s rates overridden by this card's.
    pub fn merged_over(&self, base: &RateCard) -> RateCard {
        let mut merged = base.clone();
        for rate in self.rates.values() {
            merged.insert(rate.clone());
        }
        merged
    }
}

impl FromIterator<EmployeeRate> for RateCard {
    fn from_iter<I: IntoIterator<Item = EmployeeRate>>(iter: I) -> Self {
        let mut card = RateCard::new();
        for rate in iter {
            card.insert(rate);
        }
        card
    }
}
