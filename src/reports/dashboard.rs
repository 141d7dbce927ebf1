//! Dashboard Report
//!
//! The at-a-glance view: budget totals and status, per-category lines, the
//! latest expenses and a summary of savings goals.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::display::format_expense_row;
use crate::error::FinsightResult;
use crate::models::{Expense, Money, Snapshot};
use crate::reports::budget_overview::{percent_label, remaining_label, status_label};
use crate::services::{
    BudgetEvaluator, BudgetLine, BudgetStatus, GoalProjector, GoalSummary, RecordAggregator,
};

/// Dashboard Report
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub today: NaiveDate,
    /// Spending in budgeted categories
    pub total_spent: Money,
    /// Spending across every expense
    pub all_spending: Money,
    pub total_allocated: Money,
    pub remaining: Money,
    pub overall_progress: Option<f64>,
    pub overall_status: Option<BudgetStatus>,
    pub budget_lines: Vec<BudgetLine>,
    pub recent_expenses: Vec<Expense>,
    pub goals: GoalSummary,
}

impl DashboardReport {
    pub fn generate(snapshot: &Snapshot, today: NaiveDate, recent_limit: usize) -> Self {
        let aggregator = RecordAggregator::new(snapshot.expenses());
        let evaluator = BudgetEvaluator::new(snapshot.budgets(), snapshot.expenses());
        let projector = GoalProjector::new(snapshot.goals(), today);

        let total_spent = evaluator.total_spent();
        let total_allocated = evaluator.total_allocated();

        Self {
            today,
            total_spent,
            all_spending: aggregator.total(),
            total_allocated,
            remaining: BudgetEvaluator::remaining_or_overage(total_allocated, total_spent),
            overall_progress: evaluator.overall_progress().ok(),
            overall_status: evaluator.overall_status().ok(),
            budget_lines: evaluator.evaluate(),
            recent_expenses: aggregator.recent(recent_limit).into_iter().cloned().collect(),
            goals: projector.summary(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard for {}\n", self.today.format(date_format)));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        output.push_str(&format!(
            "Total spent:     {}\n",
            self.total_spent.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Total budget:    {}\n",
            self.total_allocated.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Remaining:       {}\n",
            remaining_label(self.remaining, currency)
        ));
        output.push_str(&format!(
            "Budget used:     {} ({})\n",
            percent_label(self.overall_progress),
            status_label(self.overall_status)
        ));
        if self.all_spending != self.total_spent {
            output.push_str(&format!(
                "All spending:    {}\n",
                self.all_spending.format_with_symbol(currency)
            ));
        }

        if !self.budget_lines.is_empty() {
            output.push_str("\nBudgets\n");
            output.push_str(&"-".repeat(72));
            output.push('\n');
            for line in &self.budget_lines {
                output.push_str(&format!(
                    "{:<24} {:>12} / {:<12} {:>6}  {}\n",
                    line.category,
                    line.spent.format_with_symbol(currency),
                    line.allocated.format_with_symbol(currency),
                    percent_label(line.progress),
                    status_label(line.status)
                ));
            }
        }

        output.push_str("\nRecent Expenses\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        if self.recent_expenses.is_empty() {
            output.push_str("No expenses recorded.\n");
        }
        for expense in &self.recent_expenses {
            output.push_str(&format_expense_row(expense, currency, date_format));
            output.push('\n');
        }

        output.push_str("\nSavings Goals\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{} goals, {} completed, {} of {} saved ({})\n",
            self.goals.goal_count,
            self.goals.completed_count,
            self.goals.total_saved.format_with_symbol(currency),
            self.goals.total_target.format_with_symbol(currency),
            percent_label(self.goals.overall_progress())
        ));

        output
    }

    /// Export the report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> FinsightResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
