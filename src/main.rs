//! Finsight CLI
//!
//! Usage:
//!   finsight dashboard                   Totals, budgets, recent expenses, goals
//!   finsight expenses --search coffee    Filtered, sorted expense list
//!   finsight budgets                     Budget overview
//!   finsight goals                       Savings goal projections
//!   finsight suggest "Uber to campus"    Suggest a category

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use finsight::cli::{
    handle_budgets_command, handle_config_command, handle_dashboard_command,
    handle_expenses_command, handle_goals_command, handle_spending_command,
    handle_suggest_command, load_snapshot, parse_date, ConfigCommands, ExpenseArgs, ReportOutput,
};
use finsight::config::{FinsightPaths, Settings};

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Personal finance insights from expenses, budgets and savings goals",
    long_about = "Finsight reads a snapshot of expenses, budgets and savings goals and \
                  derives totals, budget status, goal projections and category \
                  suggestions from it."
)]
struct Cli {
    /// Snapshot file to read (defaults to snapshot.json in the config directory)
    #[arg(long, global = true, env = "FINSIGHT_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Reference day for deadlines (YYYY-MM-DD, defaults to the local date)
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard
    #[command(alias = "dash")]
    Dashboard(ReportOutput),

    /// List expenses
    #[command(alias = "ls")]
    Expenses(ExpenseArgs),

    /// Show the budget overview
    Budgets(ReportOutput),

    /// Show savings goal projections
    Goals(ReportOutput),

    /// Show spending by category and month
    Spending {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        #[command(flatten)]
        output: ReportOutput,
    },

    /// Suggest a category for an expense description
    Suggest {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false).compact())
        .init();

    let paths = FinsightPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let snapshot_path = cli.snapshot.unwrap_or_else(|| paths.snapshot_file());
    let today = cli.today.unwrap_or_else(|| chrono::Local::now().date_naive());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Suggest { text } => handle_suggest_command(&text, &mut out)?,
        Commands::Config { action } => handle_config_command(
            &paths,
            &mut settings,
            &snapshot_path,
            action.unwrap_or(ConfigCommands::Show),
            &mut out,
        )?,
        Commands::Dashboard(output) => {
            let snapshot = load_snapshot(&snapshot_path)?;
            handle_dashboard_command(&snapshot, &settings, today, &output, &mut out)?;
        }
        Commands::Expenses(args) => {
            let snapshot = load_snapshot(&snapshot_path)?;
            handle_expenses_command(&snapshot, &settings, &args, &mut out)?;
        }
        Commands::Budgets(output) => {
            let snapshot = load_snapshot(&snapshot_path)?;
            handle_budgets_command(&snapshot, &settings, &output, &mut out)?;
        }
        Commands::Goals(output) => {
            let snapshot = load_snapshot(&snapshot_path)?;
            handle_goals_command(&snapshot, &settings, today, &output, &mut out)?;
        }
        Commands::Spending { top, output } => {
            let snapshot = load_snapshot(&snapshot_path)?;
            handle_spending_command(&snapshot, &settings, top, &output, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}
