//! Budget model
//!
//! A budget is an allocation for one category. Spending against it is not
//! stored here; it is recomputed from the expense collection every time it
//! is evaluated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{FinsightError, FinsightResult};

/// An allocation of money to a spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Category label; unique among the budgets of a snapshot
    pub category: String,

    /// Amount allocated to the category
    pub allocated: Money,

    /// When the allocation was last changed
    pub last_updated: NaiveDate,
}

impl Budget {
    pub fn new(category: impl Into<String>, allocated: Money, last_updated: NaiveDate) -> Self {
        Self {
            category: category.into(),
            allocated,
            last_updated,
        }
    }

    /// Check the record invariants
    ///
    /// A zero allocation is a valid record; it only fails once a percentage
    /// is requested for it.
    pub fn validate(&self) -> FinsightResult<()> {
        if self.category.trim().is_empty() {
            return Err(FinsightError::malformed_budget("category is required"));
        }
        if self.allocated.is_negative() {
            return Err(FinsightError::malformed_budget(format!(
                "allocation for '{}' is negative ({})",
                self.category, self.allocated
            )));
        }
        if !self.allocated.within_record_limit() {
            return Err(FinsightError::malformed_budget(format!(
                "allocation for '{}' is larger than the supported maximum",
                self.category
            )));
        }
        Ok(())
    }

    pub fn is_set(&self) -> bool {
        self.allocated.is_positive()
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.allocated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_validate() {
        assert!(Budget::new("Shopping", Money::from_units(400), date())
            .validate()
            .is_ok());
        assert!(Budget::new("Shopping", Money::zero(), date()).validate().is_ok());
        assert!(Budget::new("Shopping", Money::from_cents(-1), date())
            .validate()
            .unwrap_err()
            .is_malformed());
        assert!(Budget::new(" ", Money::from_units(1), date())
            .validate()
            .unwrap_err()
            .is_malformed());
        assert!(Budget::new("Shopping", Money::from_cents(i64::MAX), date())
            .validate()
            .unwrap_err()
            .is_malformed());
    }

    #[test]
    fn test_is_set() {
        assert!(Budget::new("Food", Money::from_units(1), date()).is_set());
        assert!(!Budget::new("Food", Money::zero(), date()).is_set());
    }

    #[test]
    fn test_serialization_has_no_spent_field() {
        let budget = Budget::new("Food & Dining", Money::from_units(500), date());
        let json = serde_json::to_value(&budget).unwrap();
        assert!(json.get("spent").is_none());
        assert_eq!(json["allocated"], 50000);
    }
}
