//! Custom error types for Finsight
//!
//! This module defines the error hierarchy for the engine using thiserror.
//! Every error is a deterministic consequence of bad input; nothing here is
//! transient or retried.

use thiserror::Error;

use crate::models::Money;

/// The main error type for Finsight operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinsightError {
    /// A percentage was requested for a budget with no positive allocation
    #[error("Invalid budget{}: allocated amount {allocated} must be greater than zero", fmt_category(.category))]
    InvalidBudget {
        category: Option<String>,
        allocated: Money,
    },

    /// A projection was requested for a goal with no positive target
    #[error("Invalid goal{}: target amount {target} must be greater than zero", fmt_name(.name))]
    InvalidGoal { name: Option<String>, target: Money },

    /// A record was rejected at ingestion
    #[error("Malformed {record}: {reason}")]
    MalformedRecord {
        record: &'static str,
        reason: String,
    },

    /// Validation errors for operations on well-formed records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

fn fmt_category(category: &Option<String>) -> String {
    category
        .as_ref()
        .map(|c| format!(" '{}'", c))
        .unwrap_or_default()
}

fn fmt_name(name: &Option<String>) -> String {
    fmt_category(name)
}

impl FinsightError {
    /// Create an "invalid budget" error without category context
    pub fn invalid_budget(allocated: Money) -> Self {
        Self::InvalidBudget {
            category: None,
            allocated,
        }
    }

    /// Create an "invalid goal" error without goal context
    pub fn invalid_goal(target: Money) -> Self {
        Self::InvalidGoal { name: None, target }
    }

    /// Create a "malformed record" error for expenses
    pub fn malformed_expense(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: "expense",
            reason: reason.into(),
        }
    }

    /// Create a "malformed record" error for budgets
    pub fn malformed_budget(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: "budget",
            reason: reason.into(),
        }
    }

    /// Create a "malformed record" error for goals
    pub fn malformed_goal(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: "goal",
            reason: reason.into(),
        }
    }

    /// Attach a category name to an `InvalidBudget` error
    pub fn for_category(self, name: impl Into<String>) -> Self {
        match self {
            Self::InvalidBudget { allocated, .. } => Self::InvalidBudget {
                category: Some(name.into()),
                allocated,
            },
            other => other,
        }
    }

    /// Attach a goal name to an `InvalidGoal` error
    pub fn for_goal(self, name: impl Into<String>) -> Self {
        match self {
            Self::InvalidGoal { target, .. } => Self::InvalidGoal {
                name: Some(name.into()),
                target,
            },
            other => other,
        }
    }

    /// Check if this is an "invalid budget" error
    pub fn is_invalid_budget(&self) -> bool {
        matches!(self, Self::InvalidBudget { .. })
    }

    /// Check if this is an "invalid goal" error
    pub fn is_invalid_goal(&self) -> bool {
        matches!(self, Self::InvalidGoal { .. })
    }

    /// Check if this is a "malformed record" error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

impl From<std::io::Error> for FinsightError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinsightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Finsight operations
pub type FinsightResult<T> = Result<T, FinsightError>;
