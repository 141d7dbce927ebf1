//! Spending Report
//!
//! Breaks spending down by category share and by calendar month.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::error::FinsightResult;
use crate::models::{ExpenseKind, Money, Snapshot};
use crate::services::{CategoryShare, RecordAggregator};

/// Spending for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTotal {
    pub year: i32,
    pub month: u32,
    pub total: Money,
}

impl MonthTotal {
    /// Short label such as "Jan 2024"
    pub fn label(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpendingCategory {
    pub category: String,
    pub amount: Money,
    pub percentage: f64,
}

impl From<CategoryShare> for SpendingCategory {
    fn from(share: CategoryShare) -> Self {
        Self {
            category: share.category,
            amount: share.amount,
            percentage: share.percentage,
        }
    }
}

/// Spending Report
#[derive(Debug, Clone, Serialize)]
pub struct SpendingReport {
    pub categories: Vec<SpendingCategory>,
    pub months: Vec<MonthTotal>,
    pub total: Money,
    pub recurring_total: Money,
    pub expense_count: usize,
}

impl SpendingReport {
    pub fn generate(snapshot: &Snapshot) -> Self {
        let aggregator = RecordAggregator::new(snapshot.expenses());

        Self {
            categories: aggregator
                .category_shares()
                .into_iter()
                .map(SpendingCategory::from)
                .collect(),
            months: aggregator
                .monthly_totals()
                .into_iter()
                .map(|((year, month), total)| MonthTotal { year, month, total })
                .collect(),
            total: aggregator.total(),
            recurring_total: aggregator.total_by_kind(ExpenseKind::Recurring),
            expense_count: snapshot.expenses().len(),
        }
    }

    /// Keep only the `n` largest categories
    pub fn top(mut self, n: usize) -> Self {
        self.categories.truncate(n);
        self
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(52));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        for category in &self.categories {
            output.push_str(&format!(
                "{:<24} {:>14} {:>10}\n",
                category.category,
                category.amount.format_with_symbol(currency),
                format!("{:.1}%", category.percentage)
            ));
        }
        output.push_str(&"-".repeat(52));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            format!("TOTAL ({} expenses)", self.expense_count),
            self.total.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Recurring",
            self.recurring_total.format_with_symbol(currency)
        ));

        output.push_str("\nMonthly Trend\n");
        output.push_str(&"-".repeat(52));
        output.push('\n');
        for month in &self.months {
            output.push_str(&format!(
                "{:<24} {:>14}\n",
                month.label(),
                month.total.format_with_symbol(currency)
            ));
        }

        output
    }

    /// Export the report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> FinsightResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn snapshot() -> Snapshot {
        let expense = |desc: &str, cents: i64, category: &str, date: (i32, u32, u32), kind| {
            Expense::new(
                desc,
                Money::from_cents(cents),
                category,
                NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                kind,
            )
            .unwrap()
        };
        Snapshot::new(
            vec![
                expense("Pizza", 6000, "Food & Dining", (2023, 12, 20), ExpenseKind::OneShot),
                expense("Netflix", 1500, "Entertainment", (2024, 1, 13), ExpenseKind::Recurring),
                expense("Coffee", 2500, "Food & Dining", (2024, 1, 15), ExpenseKind::OneShot),
            ],
            vec![],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_generate() {
        let report = SpendingReport::generate(&snapshot());
        assert_eq!(report.total, Money::from_cents(10000));
        assert_eq!(report.recurring_total, Money::from_cents(1500));
        assert_eq!(report.categories[0].category, "Food & Dining");
        assert_eq!(report.categories[0].percentage, 85.0);
        assert_eq!(report.months.len(), 2);
        assert_eq!(report.months[0].label(), "Dec 2023");
        assert_eq!(report.months[1].total, Money::from_cents(4000));
    }

    #[test]
    fn test_top() {
        let report = SpendingReport::generate(&snapshot()).top(1);
        assert_eq!(report.categories.len(), 1);
    }

    #[test]
    fn test_terminal_format() {
        let output = SpendingReport::generate(&snapshot()).format_terminal("$");
        assert!(output.contains("Spending by Category"));
        assert!(output.contains("85.0%"));
        assert!(output.contains("Jan 2024"));

        let empty = Snapshot::default();
        let output = SpendingReport::generate(&empty).format_terminal("$");
        assert!(output.contains("No expenses recorded."));
    }
}
