//! Budget Overview Report
//!
//! Per-category allocation, spending, remaining amount and status, plus the
//! combined totals across every budget.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

use crate::error::FinsightResult;
use crate::models::{Money, Snapshot};
use crate::services::{BudgetEvaluator, BudgetLine, BudgetStatus};

/// Budget Overview Report
#[derive(Debug, Clone, Serialize)]
pub struct BudgetOverviewReport {
    pub lines: Vec<BudgetLine>,
    pub total_allocated: Money,
    pub total_spent: Money,
    /// Positive when money is left, negative when overspent
    pub total_remaining: Money,
    /// `None` when no positive allocation exists
    pub overall_progress: Option<f64>,
    pub overall_status: Option<BudgetStatus>,
    /// Spending in categories without a budget
    pub unbudgeted: BTreeMap<String, Money>,
}

impl BudgetOverviewReport {
    pub fn generate(snapshot: &Snapshot) -> Self {
        let evaluator = BudgetEvaluator::new(snapshot.budgets(), snapshot.expenses());
        let total_allocated = evaluator.total_allocated();
        let total_spent = evaluator.total_spent();

        Self {
            lines: evaluator.evaluate(),
            total_allocated,
            total_spent,
            total_remaining: BudgetEvaluator::remaining_or_overage(total_allocated, total_spent),
            overall_progress: evaluator.overall_progress().ok(),
            overall_status: evaluator.overall_status().ok(),
            unbudgeted: evaluator.unbudgeted(),
        }
    }

    pub fn overspent_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_overspent()).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Budget Overview\n");
        output.push_str(&"=".repeat(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>14} {:>6}  {}\n",
            "Category", "Allocated", "Spent", "Remaining", "Used", "Status"
        ));
        output.push_str(&"-".repeat(78));
        output.push('\n');

        for line in &self.lines {
            output.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>14} {:>6}  {}\n",
                line.category,
                line.allocated.format_with_symbol(currency),
                line.spent.format_with_symbol(currency),
                remaining_label(line.remaining, currency),
                percent_label(line.progress),
                status_label(line.status),
            ));
        }

        output.push_str(&"-".repeat(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>14} {:>6}  {}\n",
            "TOTAL",
            self.total_allocated.format_with_symbol(currency),
            self.total_spent.format_with_symbol(currency),
            remaining_label(self.total_remaining, currency),
            percent_label(self.overall_progress),
            status_label(self.overall_status),
        ));

        if !self.unbudgeted.is_empty() {
            output.push_str("\nUnbudgeted spending:\n");
            for (category, amount) in &self.unbudgeted {
                output.push_str(&format!(
                    "  {:<22} {:>12}\n",
                    category,
                    amount.format_with_symbol(currency)
                ));
            }
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

/// Absolute amount with a direction: "$20.00 left" / "$32.50 over"
pub fn remaining_label(remaining: Money, currency: &str) -> String {
    if remaining.is_negative() {
        format!("{} over", remaining.abs().format_with_symbol(currency))
    } else {
        format!("{} left", remaining.format_with_symbol(currency))
    }
}

pub fn percent_label(progress: Option<f64>) -> String {
    match progress {
        Some(p) => format!("{:.0}%", p),
        None => "-".to_string(),
    }
}

pub fn status_label(status: Option<BudgetStatus>) -> String {
    match status {
        Some(s) => s.to_string(),
        None => "Not set".to_string(),
    }
}
