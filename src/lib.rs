//! Finsight - personal finance aggregation and classification
//!
//! Turns an in-memory snapshot of expenses, budgets and savings goals into
//! derived values: totals, percentages, budget status tiers, goal deadline
//! projections and category suggestions. The engine is pure: it never reads
//! the clock, touches the disk or keeps state between calls.
//!
//! # Architecture
//!
//! - `models`: records and value types (`Money`, `Expense`, `Budget`, `Goal`, `Snapshot`)
//! - `services`: the computation engine
//! - `reports`: presentation-ready views built from the services
//! - `display`: terminal formatting helpers
//! - `config`: path resolution and user settings
//! - `cli`: command handlers for the `finsight` binary
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use finsight::models::Snapshot;
//! use finsight::reports::DashboardReport;
//!
//! let snapshot = Snapshot::from_json(&json)?;
//! let report = DashboardReport::generate(&snapshot, today, 5);
//! println!("{}", report.format_terminal("$", "%Y-%m-%d"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{FinsightError, FinsightResult};
