//! Budget evaluation
//!
//! Computes per-category and overall budget consumption. Spending is always
//! recomputed from the expense snapshot; budgets carry only allocations.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use super::aggregator::RecordAggregator;
use crate::error::{FinsightError, FinsightResult};
use crate::models::{Budget, Expense, Money};

/// Percentage at which a budget enters the warning tier
pub const WARNING_PERCENT: i64 = 80;

/// Percentage at which a budget is over
pub const OVER_PERCENT: i64 = 100;

/// Consumption tier of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// At or above 100% of the allocation
    Over,
    /// From 80% up to (not including) 100%
    Warning,
    /// Below 80%
    Good,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Over => write!(f, "Over"),
            Self::Warning => write!(f, "Warning"),
            Self::Good => write!(f, "Good"),
        }
    }
}

/// Evaluated state of one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetLine {
    pub category: String,
    pub allocated: Money,
    pub spent: Money,
    /// Positive when money is left, negative when overspent
    pub remaining: Money,
    /// `None` when no positive allocation is set
    pub progress: Option<f64>,
    /// `None` when no positive allocation is set
    pub status: Option<BudgetStatus>,
}

impl BudgetLine {
    pub fn is_overspent(&self) -> bool {
        self.status == Some(BudgetStatus::Over)
    }
}

/// Evaluates budgets against an expense snapshot
pub struct BudgetEvaluator<'a> {
    budgets: &'a [Budget],
    spent_by_category: BTreeMap<String, Money>,
}

impl<'a> BudgetEvaluator<'a> {
    pub fn new(budgets: &'a [Budget], expenses: &[Expense]) -> Self {
        Self {
            budgets,
            spent_by_category: RecordAggregator::new(expenses).by_category_totals(),
        }
    }

    /// `spent / allocated × 100`
    ///
    /// Fails with `InvalidBudget` when nothing positive is allocated.
    pub fn progress_percent(spent: Money, allocated: Money) -> FinsightResult<f64> {
        spent
            .percent_of(allocated)
            .ok_or_else(|| FinsightError::invalid_budget(allocated))
    }

    /// Classify consumption into Over / Warning / Good
    ///
    /// Thresholds are compared on exact cents, so 80% is Warning and 100% is
    /// Over with no floating-point drift at the boundaries.
    pub fn status_tier(spent: Money, allocated: Money) -> FinsightResult<BudgetStatus> {
        if !allocated.is_positive() {
            return Err(FinsightError::invalid_budget(allocated));
        }

        let spent_scaled = spent.cents() as i128 * 100;
        let allocated = allocated.cents() as i128;

        let status = if spent_scaled >= allocated * OVER_PERCENT as i128 {
            BudgetStatus::Over
        } else if spent_scaled >= allocated * WARNING_PERCENT as i128 {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        };
        Ok(status)
    }

    /// `allocated − spent`; negative means overspent
    pub fn remaining_or_overage(allocated: Money, spent: Money) -> Money {
        allocated - spent
    }

    /// Spending recorded against a category label
    pub fn spent_for(&self, category: &str) -> Money {
        self.spent_by_category
            .get(category)
            .copied()
            .unwrap_or_default()
    }

    pub fn total_allocated(&self) -> Money {
        self.budgets.iter().map(|b| b.allocated).sum()
    }

    /// Spending across budgeted categories only
    pub fn total_spent(&self) -> Money {
        self.budgets.iter().map(|b| self.spent_for(&b.category)).sum()
    }

    /// `Σspent / Σallocated × 100` across all budgets
    pub fn overall_progress(&self) -> FinsightResult<f64> {
        Self::progress_percent(self.total_spent(), self.total_allocated())
    }

    /// Tier of the combined budget
    pub fn overall_status(&self) -> FinsightResult<BudgetStatus> {
        Self::status_tier(self.total_spent(), self.total_allocated())
    }

    /// Evaluate a single budget
    pub fn evaluate_one(&self, budget: &Budget) -> BudgetLine {
        let spent = self.spent_for(&budget.category);
        BudgetLine {
            category: budget.category.clone(),
            allocated: budget.allocated,
            spent,
            remaining: Self::remaining_or_overage(budget.allocated, spent),
            progress: Self::progress_percent(spent, budget.allocated).ok(),
            status: Self::status_tier(spent, budget.allocated).ok(),
        }
    }

    /// Evaluate every budget, in snapshot order
    pub fn evaluate(&self) -> Vec<BudgetLine> {
        let lines: Vec<BudgetLine> = self.budgets.iter().map(|b| self.evaluate_one(b)).collect();
        debug!(
            budgets = lines.len(),
            unset = lines.iter().filter(|l| l.status.is_none()).count(),
            over = lines.iter().filter(|l| l.is_overspent()).count(),
            "evaluated budgets"
        );
        lines
    }

    /// Budgets at or above their allocation
    pub fn overspent(&self) -> Vec<BudgetLine> {
        self.evaluate()
            .into_iter()
            .filter(BudgetLine::is_overspent)
            .collect()
    }

    /// Spending in categories that have no budget
    pub fn unbudgeted(&self) -> BTreeMap<String, Money> {
        self.spent_by_category
            .iter()
            .filter(|(category, _)| !self.budgets.iter().any(|b| &b.category == *category))
            .map(|(category, amount)| (category.clone(), *amount))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpenseKind};
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    fn expense(category: &str, cents: i64) -> Expense {
        Expense {
            id: ExpenseId::new(),
            description: format!("{} purchase", category),
            amount: Money::from_cents(cents),
            category: category.into(),
            date: date(),
            kind: ExpenseKind::OneShot,
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(BudgetEvaluator::progress_percent(units(80), units(100)).unwrap(), 80.0);
        assert_eq!(BudgetEvaluator::progress_percent(units(0), units(100)).unwrap(), 0.0);
        assert_eq!(BudgetEvaluator::progress_percent(units(150), units(100)).unwrap(), 150.0);
    }

    #[test]
    fn test_progress_percent_zero_allocation_fails() {
        for spent in [units(0), units(10), units(1_000_000)] {
            let err = BudgetEvaluator::progress_percent(spent, Money::zero()).unwrap_err();
            assert!(err.is_invalid_budget());
        }
        assert!(BudgetEvaluator::progress_percent(units(1), units(-5))
            .unwrap_err()
            .is_invalid_budget());
    }

    #[test]
    fn test_status_tier_boundaries() {
        let tier = |spent: i64, allocated: i64| {
            BudgetEvaluator::status_tier(Money::from_cents(spent), Money::from_cents(allocated))
                .unwrap()
        };
        assert_eq!(tier(10000, 10000), BudgetStatus::Over);
        assert_eq!(tier(10001, 10000), BudgetStatus::Over);
        assert_eq!(tier(9999, 10000), BudgetStatus::Warning);
        assert_eq!(tier(8000, 10000), BudgetStatus::Warning);
        assert_eq!(tier(7999, 10000), BudgetStatus::Good);
        assert_eq!(tier(0, 10000), BudgetStatus::Good);
        // boundaries hold for allocations that are not round numbers
        assert_eq!(tier(42380, 42380), BudgetStatus::Over);
        assert_eq!(tier(80, 100), BudgetStatus::Warning);
        assert_eq!(tier(2, 3), BudgetStatus::Good);
    }

    #[test]
    fn test_status_tier_zero_allocation_fails() {
        assert!(BudgetEvaluator::status_tier(units(0), units(0))
            .unwrap_err()
            .is_invalid_budget());
    }

    #[test]
    fn test_remaining_or_overage() {
        assert_eq!(BudgetEvaluator::remaining_or_overage(units(500), units(420)), units(80));
        assert_eq!(
            BudgetEvaluator::remaining_or_overage(Money::from_cents(40000), Money::from_cents(43250)),
            Money::from_cents(-3250)
        );
    }

    #[test]
    fn test_spent_is_recomputed_from_expenses() {
        let budgets = vec![
            Budget::new("Food & Dining", units(500), date()),
            Budget::new("Shopping", units(400), date()),
        ];
        let expenses = vec![
            expense("Food & Dining", 411),
            expense("Food & Dining", 5599),
            expense("Shopping", 43250),
            expense("Travel", 9000),
        ];
        let evaluator = BudgetEvaluator::new(&budgets, &expenses);
        let lines = evaluator.evaluate();

        assert_eq!(lines[0].spent, Money::from_cents(6010));
        assert_eq!(lines[0].status, Some(BudgetStatus::Good));
        assert_eq!(lines[1].spent, Money::from_cents(43250));
        assert_eq!(lines[1].status, Some(BudgetStatus::Over));
        assert_eq!(lines[1].remaining, Money::from_cents(-3250));

        // unmatched categories do not count toward any budget
        assert_eq!(evaluator.total_spent(), Money::from_cents(49260));
        assert_eq!(evaluator.unbudgeted()["Travel"], Money::from_cents(9000));
        assert_eq!(evaluator.overspent().len(), 1);
    }

    #[test]
    fn test_unset_budget_line() {
        let budgets = vec![Budget::new("Education", Money::zero(), date())];
        let expenses = vec![expense("Education", 2000)];
        let line = BudgetEvaluator::new(&budgets, &expenses).evaluate_one(&budgets[0]);
        assert_eq!(line.progress, None);
        assert_eq!(line.status, None);
        assert_eq!(line.remaining, Money::from_cents(-2000));
    }

    #[test]
    fn test_overall_progress() {
        let budgets = vec![
            Budget::new("Food", units(300), date()),
            Budget::new("Fun", units(100), date()),
        ];
        let expenses = vec![expense("Food", 30000), expense("Fun", 2000)];
        let evaluator = BudgetEvaluator::new(&budgets, &expenses);
        assert_eq!(evaluator.overall_progress().unwrap(), 80.0);
        assert_eq!(evaluator.overall_status().unwrap(), BudgetStatus::Warning);
    }

    #[test]
    fn test_overall_progress_without_allocations_fails() {
        let none: Vec<Budget> = vec![];
        let expenses = vec![expense("Food", 100)];
        let evaluator = BudgetEvaluator::new(&none, &expenses);
        assert!(evaluator.overall_progress().unwrap_err().is_invalid_budget());

        let zeros = vec![Budget::new("Food", Money::zero(), date())];
        let evaluator = BudgetEvaluator::new(&zeros, &expenses);
        assert!(evaluator.overall_progress().unwrap_err().is_invalid_budget());
    }
}
