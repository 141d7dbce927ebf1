//! Record aggregation
//!
//! Filtering, sorting and summing over an expense snapshot. Everything here
//! borrows the caller's records and never mutates them.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::models::{CategoryFilter, Expense, ExpenseKind, Money};

/// Ordering applied to an expense list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recent first
    #[default]
    Date,
    /// Largest first
    Amount,
    /// Alphabetical
    Description,
}

impl SortKey {
    fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            Self::Date => b.date.cmp(&a.date),
            Self::Amount => b.amount.cmp(&a.amount),
            Self::Description => a
                .description
                .to_lowercase()
                .cmp(&b.description.to_lowercase())
                .then_with(|| a.description.cmp(&b.description)),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "description" | "name" => Ok(Self::Description),
            other => Err(format!(
                "unknown sort key '{}' (expected date, amount or description)",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Amount => write!(f, "amount"),
            Self::Description => write!(f, "description"),
        }
    }
}

/// One category's slice of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Percentage of total spending (0 when nothing was spent)
    pub percentage: f64,
}

/// Aggregates over a borrowed expense collection
pub struct RecordAggregator<'a> {
    expenses: &'a [Expense],
}

impl<'a> RecordAggregator<'a> {
    pub fn new(expenses: &'a [Expense]) -> Self {
        Self { expenses }
    }

    /// Filter by description search and category, then order by `sort_key`
    ///
    /// The search is a case-insensitive substring test; an empty search
    /// matches everything. Sorting is stable, so records that compare equal
    /// keep their input order.
    pub fn filter_and_sort(
        &self,
        search_text: &str,
        category_filter: &CategoryFilter,
        sort_key: SortKey,
    ) -> Vec<&'a Expense> {
        let needle = search_text.to_lowercase();

        let mut matched: Vec<&'a Expense> = self
            .expenses
            .iter()
            .filter(|e| e.description.to_lowercase().contains(&needle))
            .filter(|e| category_filter.matches(&e.category))
            .collect();

        matched.sort_by(|a, b| sort_key.compare(a, b));

        debug!(
            search = search_text,
            filter = %category_filter,
            sort = %sort_key,
            matched = matched.len(),
            total = self.expenses.len(),
            "filtered expenses"
        );

        matched
    }

    /// Sum of every expense in the snapshot
    pub fn total(&self) -> Money {
        Self::sum(self.expenses)
    }

    /// Sum of any expense sequence, 0 when empty
    pub fn sum<'b, I>(records: I) -> Money
    where
        I: IntoIterator<Item = &'b Expense>,
    {
        records.into_iter().map(|e| e.amount).sum()
    }

    /// Spending grouped by exact category label
    pub fn by_category_totals(&self) -> BTreeMap<String, Money> {
        let mut totals: BTreeMap<String, Money> = BTreeMap::new();
        for expense in self.expenses {
            *totals.entry(expense.category.clone()).or_default() += expense.amount;
        }
        totals
    }

    /// Per-category spending with its share of the total, largest first
    pub fn category_shares(&self) -> Vec<CategoryShare> {
        let total = self.total();
        let mut shares: Vec<CategoryShare> = self
            .by_category_totals()
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                percentage: amount.percent_of(total).unwrap_or(0.0),
                category,
                amount,
            })
            .collect();

        // BTreeMap order breaks ties alphabetically
        shares.sort_by(|a, b| b.amount.cmp(&a.amount));
        shares
    }

    /// Spending per calendar month, oldest first
    pub fn monthly_totals(&self) -> BTreeMap<(i32, u32), Money> {
        let mut totals: BTreeMap<(i32, u32), Money> = BTreeMap::new();
        for expense in self.expenses {
            *totals
                .entry((expense.date.year(), expense.date.month()))
                .or_default() += expense.amount;
        }
        totals
    }

    /// The `limit` most recent expenses
    pub fn recent(&self, limit: usize) -> Vec<&'a Expense> {
        let mut recent = self.filter_and_sort("", &CategoryFilter::All, SortKey::Date);
        recent.truncate(limit);
        recent
    }

    /// Sum of expenses of one kind
    pub fn total_by_kind(&self, kind: ExpenseKind) -> Money {
        Self::sum(self.expenses.iter().filter(|e| e.kind == kind))
    }
}
