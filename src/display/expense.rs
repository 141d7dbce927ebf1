//! Expense display formatting
//!
//! Register-style rows for expense lists in the terminal.

use crate::models::{Expense, Money};

const DESCRIPTION_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 16;

/// Format a single expense as one list row
pub fn format_expense_row(expense: &Expense, currency: &str, date_format: &str) -> String {
    let recurring = if expense.is_recurring() { "↻" } else { " " };

    format!(
        "{} {:10} {} {} {:>12}",
        recurring,
        expense.date.format(date_format),
        truncate(&expense.description, DESCRIPTION_WIDTH),
        truncate(&expense.category, CATEGORY_WIDTH),
        expense.amount.format_with_symbol(currency)
    )
}

/// Format a list of expenses with a header and a total line
pub fn format_expense_list(expenses: &[&Expense], currency: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:10} {:28} {:16} {:>12}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency, date_format));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(72));
    output.push('\n');
    output.push_str(&format!(
        "{:>59} {:>12}\n",
        format!("{} expenses", expenses.len()),
        total.format_with_symbol(currency)
    ));

    output
}

/// Pad or cut `s` to exactly `max_len` characters
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
