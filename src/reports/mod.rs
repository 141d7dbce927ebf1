//! Reports module for Finsight
//!
//! Presentation-ready views composed from the services: the dashboard,
//! budget overview, savings goals and spending breakdown. Each report can
//! render itself for the terminal or export as JSON.

pub mod budget_overview;
pub mod dashboard;
pub mod goals;
pub mod spending;

pub use budget_overview::BudgetOverviewReport;
pub use dashboard::DashboardReport;
pub use goals::{GoalReport, GoalRow};
pub use spending::{MonthTotal, SpendingCategory, SpendingReport};
