//! Configuration CLI commands

use clap::Subcommand;
use std::io::Write;
use std::path::Path;

use crate::config::{FinsightPaths, Settings};
use crate::error::FinsightResult;

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,

    /// Change one setting and save it
    Set {
        /// currency_symbol, date_format, recent_expense_limit or default_sort
        key: String,
        value: String,
    },

    /// Print the settings file path
    Path,
}

/// Handle `finsight config`
pub fn handle_config_command<W: Write>(
    paths: &FinsightPaths,
    settings: &mut Settings,
    snapshot_path: &Path,
    cmd: ConfigCommands,
    out: &mut W,
) -> FinsightResult<()> {
    match cmd {
        ConfigCommands::Show => {
            writeln!(out, "Finsight Configuration")?;
            writeln!(out, "======================")?;
            writeln!(out, "Config directory: {}", paths.base_dir().display())?;
            writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
            writeln!(out, "Snapshot file:    {}", snapshot_path.display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  currency_symbol:      {}", settings.currency_symbol)?;
            writeln!(out, "  date_format:          {}", settings.date_format)?;
            writeln!(out, "  recent_expense_limit: {}", settings.recent_expense_limit)?;
            writeln!(out, "  default_sort:         {}", settings.default_sort)?;
        }
        ConfigCommands::Set { key, value } => {
            settings.set(&key, &value)?;
            settings.save(paths)?;
            writeln!(out, "Set {} = {}", key, value)?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", paths.settings_file().display())?;
        }
    }
    Ok(())
}
