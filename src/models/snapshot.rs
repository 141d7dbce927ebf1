//! Record snapshot
//!
//! A snapshot is the immutable set of records handed to the engine for one
//! evaluation. Construction validates every record, so anything reachable
//! from a `Snapshot` is well-formed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use super::budget::Budget;
use super::expense::{Expense, ExpenseDraft};
use super::goal::Goal;
use super::money::Money;
use crate::error::{FinsightError, FinsightResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
    goals: Vec<Goal>,
}

impl Snapshot {
    /// Validate and freeze a set of records
    pub fn new(
        expenses: Vec<Expense>,
        budgets: Vec<Budget>,
        goals: Vec<Goal>,
    ) -> FinsightResult<Self> {
        let mut expense_ids = HashSet::new();
        for expense in &expenses {
            expense.validate()?;
            if !expense_ids.insert(expense.id) {
                return Err(FinsightError::malformed_expense(format!(
                    "duplicate expense id {}",
                    expense.id
                )));
            }
        }

        let mut categories = HashSet::new();
        for budget in &budgets {
            budget.validate()?;
            if !categories.insert(budget.category.as_str()) {
                return Err(FinsightError::malformed_budget(format!(
                    "duplicate budget for category '{}'",
                    budget.category
                )));
            }
        }

        let mut goal_ids = HashSet::new();
        for goal in &goals {
            goal.validate()?;
            if !goal_ids.insert(goal.id) {
                return Err(FinsightError::malformed_goal(format!(
                    "duplicate goal id {}",
                    goal.id
                )));
            }
        }

        // every total derived later is a sum over a subset of these
        if Money::checked_sum(expenses.iter().map(|e| e.amount)).is_none() {
            return Err(FinsightError::malformed_expense(OVERFLOW));
        }
        if Money::checked_sum(budgets.iter().map(|b| b.allocated)).is_none() {
            return Err(FinsightError::malformed_budget(OVERFLOW));
        }
        if Money::checked_sum(goals.iter().map(|g| g.target)).is_none()
            || Money::checked_sum(goals.iter().map(|g| g.current)).is_none()
        {
            return Err(FinsightError::malformed_goal(OVERFLOW));
        }

        Ok(Self {
            expenses,
            budgets,
            goals,
        })
    }

    /// Parse and validate a snapshot from JSON
    ///
    /// Invalid JSON is a `Json` error; a record that is present but wrong in
    /// any field is a `MalformedRecord`.
    pub fn from_json(json: &str) -> FinsightResult<Self> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        raw.into_snapshot()
    }

    pub fn to_json(&self) -> FinsightResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.budgets.is_empty() && self.goals.is_empty()
    }
}

const OVERFLOW: &str = "amounts add up to more than the supported range";

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawSnapshot::deserialize(deserializer)?
            .into_snapshot()
            .map_err(serde::de::Error::custom)
    }
}

/// Top-level shape only; records are decoded one by one
#[derive(Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    expenses: Vec<Value>,
    #[serde(default)]
    budgets: Vec<Value>,
    #[serde(default)]
    goals: Vec<Value>,
}

impl RawSnapshot {
    fn into_snapshot(self) -> FinsightResult<Snapshot> {
        let drafts: Vec<ExpenseDraft> =
            decode_records(self.expenses, FinsightError::malformed_expense)?;
        let expenses = drafts
            .iter()
            .map(Expense::from_draft)
            .collect::<FinsightResult<Vec<_>>>()?;
        let budgets = decode_records(self.budgets, FinsightError::malformed_budget)?;
        let goals = decode_records(self.goals, FinsightError::malformed_goal)?;
        Snapshot::new(expenses, budgets, goals)
    }
}

fn decode_records<T, F>(values: Vec<Value>, malformed: F) -> FinsightResult<Vec<T>>
where
    T: DeserializeOwned,
    F: Fn(String) -> FinsightError,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value)
                .map_err(|e| malformed(format!("record {}: {}", index + 1, e)))
        })
        .collect()
}
