//! Core data models for Finsight
//!
//! Expenses, budgets and savings goals, plus the money and id types they are
//! built from. Records are plain data; all derived values live in
//! [`crate::services`].

pub mod budget;
pub mod category;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod money;
pub mod snapshot;

pub use budget::Budget;
pub use category::{CategoryFilter, DefaultCategory};
pub use expense::{DraftAmount, Expense, ExpenseDraft, ExpenseKind};
pub use goal::{Goal, GoalPriority};
pub use ids::{ExpenseId, GoalId};
pub use money::{Money, MoneyParseError};
pub use snapshot::Snapshot;
