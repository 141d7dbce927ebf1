//! Expense list command
//!
//! Search, category filter and sort over the snapshot's expenses.

use clap::Args;
use std::io::Write;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::FinsightResult;
use crate::models::{CategoryFilter, Snapshot};
use crate::services::{RecordAggregator, SortKey};

/// Arguments for `finsight expenses`
#[derive(Args, Debug, Clone)]
pub struct ExpenseArgs {
    /// Case-insensitive text to look for in descriptions
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category to show, or "All"
    #[arg(short, long, default_value = CategoryFilter::ALL_LABEL)]
    pub category: String,

    /// Sort by date, amount or description (defaults to the configured sort)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Show at most this many expenses
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle `finsight expenses`
pub fn handle_expenses_command<W: Write>(
    snapshot: &Snapshot,
    settings: &Settings,
    args: &ExpenseArgs,
    out: &mut W,
) -> FinsightResult<()> {
    let aggregator = RecordAggregator::new(snapshot.expenses());
    let filter = CategoryFilter::parse(&args.category);
    let sort = args.sort.unwrap_or(settings.default_sort);

    let mut expenses = aggregator.filter_and_sort(&args.search, &filter, sort);
    if let Some(limit) = args.limit {
        expenses.truncate(limit);
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &expenses)?;
        writeln!(out)?;
    } else {
        write!(
            out,
            "{}",
            format_expense_list(&expenses, &settings.currency_symbol, &settings.date_format)
        )?;
    }

    Ok(())
}
