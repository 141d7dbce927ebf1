//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.
//! Handlers write to a caller-supplied writer so they can be exercised
//! without a terminal.

pub mod config;
pub mod expense;
pub mod report;
pub mod suggest;

use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

use crate::error::{FinsightError, FinsightResult};
use crate::models::Snapshot;

pub use config::{handle_config_command, ConfigCommands};
pub use expense::{handle_expenses_command, ExpenseArgs};
pub use report::{
    handle_budgets_command, handle_dashboard_command, handle_goals_command,
    handle_spending_command, ReportOutput,
};
pub use suggest::handle_suggest_command;

/// Read and validate a snapshot file
pub fn load_snapshot(path: &Path) -> FinsightResult<Snapshot> {
    if !path.exists() {
        return Err(FinsightError::Io(format!(
            "No snapshot found at {}",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| {
        FinsightError::Io(format!("Failed to read snapshot {}: {}", path.display(), e))
    })?;
    let snapshot = Snapshot::from_json(&contents)?;

    debug!(
        path = %path.display(),
        expenses = snapshot.expenses().len(),
        budgets = snapshot.budgets().len(),
        goals = snapshot.goals().len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Parse a `YYYY-MM-DD` command-line date
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD", s))
}
