//! Expense model
//!
//! Expenses are immutable once created. Raw user input arrives as an
//! [`ExpenseDraft`] and is checked before it can become an [`Expense`], so
//! the engine never discovers a bad amount mid-computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{FinsightError, FinsightResult};

/// Whether an expense happens once or repeats (subscriptions, passes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    #[default]
    #[serde(alias = "expense")]
    OneShot,
    #[serde(alias = "subscription")]
    Recurring,
}

impl ExpenseKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "oneshot" | "one-shot" | "expense" | "" => Some(Self::OneShot),
            "recurring" | "subscription" => Some(Self::Recurring),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneShot => write!(f, "One-shot"),
            Self::Recurring => write!(f, "Recurring"),
        }
    }
}

/// A single spending record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub kind: ExpenseKind,
}

impl Expense {
    /// Create a validated expense
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        kind: ExpenseKind,
    ) -> FinsightResult<Self> {
        let expense = Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category: category.into(),
            date,
            kind,
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Build an expense from raw input: form text or a snapshot record
    pub fn from_draft(draft: &ExpenseDraft) -> FinsightResult<Self> {
        let description = required(&draft.description, "description")?;
        let category = required(&draft.category, "category")?;

        let amount = match &draft.amount {
            Some(DraftAmount::Cents(cents)) => Money::from_cents(*cents),
            Some(DraftAmount::Text(raw)) if !raw.trim().is_empty() => Money::parse(raw)
                .map_err(|e| FinsightError::malformed_expense(e.to_string()))?,
            _ => return Err(FinsightError::malformed_expense("amount is required")),
        };

        let raw_date = required(&draft.date, "date")?;
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
            FinsightError::malformed_expense(format!("'{}' is not a YYYY-MM-DD date", raw_date))
        })?;

        let kind = match draft.kind.as_deref() {
            None => ExpenseKind::default(),
            Some(raw) => ExpenseKind::parse(raw).ok_or_else(|| {
                FinsightError::malformed_expense(format!("unknown expense kind '{}'", raw))
            })?,
        };

        let mut expense = Self::new(description, amount, category, date, kind)?;
        if let Some(id) = draft.id {
            expense.id = id;
        }
        Ok(expense)
    }

    /// Check the record invariants
    pub fn validate(&self) -> FinsightResult<()> {
        if self.amount.is_negative() {
            return Err(FinsightError::malformed_expense(format!(
                "amount {} is negative",
                self.amount
            )));
        }
        if !self.amount.within_record_limit() {
            return Err(FinsightError::malformed_expense(format!(
                "amount {} is larger than the supported maximum",
                self.amount
            )));
        }
        if self.description.trim().is_empty() {
            return Err(FinsightError::malformed_expense("description is required"));
        }
        if self.category.trim().is_empty() {
            return Err(FinsightError::malformed_expense("category is required"));
        }
        Ok(())
    }

    pub fn is_recurring(&self) -> bool {
        self.kind == ExpenseKind::Recurring
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Unvalidated expense input, from a form or a snapshot file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseDraft {
    #[serde(default)]
    pub id: Option<ExpenseId>,
    pub description: Option<String>,
    pub amount: Option<DraftAmount>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub kind: Option<String>,
}

/// A raw amount: whole cents as stored in snapshots, or typed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftAmount {
    Cents(i64),
    /// Currency units such as "10.50" or "$1,250"
    Text(String),
}

impl From<&str> for DraftAmount {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for DraftAmount {
    fn from(cents: i64) -> Self {
        Self::Cents(cents)
    }
}

fn required<'a>(field: &'a Option<String>, name: &str) -> FinsightResult<&'a str> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(FinsightError::malformed_expense(format!("{} is required", name))),
    }
}
