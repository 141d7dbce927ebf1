//! CLI commands for reports
//!
//! Budgets, goals, dashboard and spending views, printed for the terminal
//! or exported as JSON.

use chrono::NaiveDate;
use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{FinsightError, FinsightResult};
use crate::models::Snapshot;
use crate::reports::{BudgetOverviewReport, DashboardReport, GoalReport, SpendingReport};

/// Output options shared by every report command
#[derive(Args, Debug, Clone, Default)]
pub struct ReportOutput {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Export the report as JSON to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn create_export_file(path: &Path) -> FinsightResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FinsightError::Io(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle `finsight budgets`
pub fn handle_budgets_command<W: Write>(
    snapshot: &Snapshot,
    settings: &Settings,
    output: &ReportOutput,
    out: &mut W,
) -> FinsightResult<()> {
    let report = BudgetOverviewReport::generate(snapshot);

    if let Some(path) = &output.output {
        let mut writer = create_export_file(path)?;
        report.export_json(&mut writer)?;
        writer.flush()?;
        writeln!(out, "Budget report exported to: {}", path.display())?;
    } else if output.json {
        report.export_json(out)?;
    } else {
        write!(out, "{}", report.format_terminal(&settings.currency_symbol))?;
    }

    Ok(())
}

/// Handle `finsight goals`
pub fn handle_goals_command<W: Write>(
    snapshot: &Snapshot,
    settings: &Settings,
    today: NaiveDate,
    output: &ReportOutput,
    out: &mut W,
) -> FinsightResult<()> {
    let report = GoalReport::generate(snapshot, today);

    if let Some(path) = &output.output {
        let mut writer = create_export_file(path)?;
        report.export_json(&mut writer)?;
        writer.flush()?;
        writeln!(out, "Goal report exported to: {}", path.display())?;
    } else if output.json {
        report.export_json(out)?;
    } else {
        write!(
            out,
            "{}",
            report.format_terminal(&settings.currency_symbol, &settings.date_format)
        )?;
    }

    Ok(())
}

/// Handle `finsight dashboard`
pub fn handle_dashboard_command<W: Write>(
    snapshot: &Snapshot,
    settings: &Settings,
    today: NaiveDate,
    output: &ReportOutput,
    out: &mut W,
) -> FinsightResult<()> {
    let report = DashboardReport::generate(snapshot, today, settings.recent_expense_limit);

    if let Some(path) = &output.output {
        let mut writer = create_export_file(path)?;
        report.export_json(&mut writer)?;
        writer.flush()?;
        writeln!(out, "Dashboard exported to: {}", path.display())?;
    } else if output.json {
        report.export_json(out)?;
    } else {
        write!(
            out,
            "{}",
            report.format_terminal(&settings.currency_symbol, &settings.date_format)
        )?;
    }

    Ok(())
}

/// Handle `finsight spending`
pub fn handle_spending_command<W: Write>(
    snapshot: &Snapshot,
    settings: &Settings,
    top: Option<usize>,
    output: &ReportOutput,
    out: &mut W,
) -> FinsightResult<()> {
    let mut report = SpendingReport::generate(snapshot);
    if let Some(n) = top {
        report = report.top(n);
    }

    if let Some(path) = &output.output {
        let mut writer = create_export_file(path)?;
        report.export_json(&mut writer)?;
        writer.flush()?;
        writeln!(out, "Spending report exported to: {}", path.display())?;
    } else if output.json {
        report.export_json(out)?;
    } else {
        write!(out, "{}", report.format_terminal(&settings.currency_symbol))?;
    }

    Ok(())
}
