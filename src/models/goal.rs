//! Savings goal model
//!
//! Goals track money saved toward a target by a deadline. The saved amount
//! only grows, through deposits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use crate::error::{FinsightError, FinsightResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl GoalPriority {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(default)]
    pub id: GoalId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub target: Money,
    #[serde(default)]
    pub current: Money,
    pub deadline: NaiveDate,
    /// Free-form tag such as "Savings" or "Travel"
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: GoalPriority,
    pub created_on: NaiveDate,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        target: Money,
        deadline: NaiveDate,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            description: String::new(),
            target,
            current: Money::zero(),
            deadline,
            category: String::new(),
            priority: GoalPriority::default(),
            created_on,
        }
    }

    pub fn with_current(mut self, current: Money) -> Self {
        self.current = current;
        self
    }

    pub fn with_priority(mut self, priority: GoalPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add saved money to the goal
    pub fn deposit(&mut self, amount: Money) -> FinsightResult<()> {
        if !amount.is_positive() {
            return Err(FinsightError::Validation(format!(
                "Deposit to '{}' must be positive, got {}",
                self.name, amount
            )));
        }
        let current = self
            .current
            .checked_add(amount)
            .filter(Money::within_record_limit)
            .ok_or_else(|| {
                FinsightError::Validation(format!(
                    "Deposit to '{}' would exceed the supported maximum",
                    self.name
                ))
            })?;
        self.current = current;
        Ok(())
    }

    /// Whether the saved amount has reached the target
    pub fn is_reached(&self) -> bool {
        self.current >= self.target
    }

    /// Amount still missing, never negative
    pub fn shortfall(&self) -> Money {
        if self.is_reached() {
            Money::zero()
        } else {
            self.target - self.current
        }
    }

    /// Check the record invariants
    ///
    /// A non-positive target is not rejected here; projections report it as
    /// an invalid goal.
    pub fn validate(&self) -> FinsightResult<()> {
        if self.name.trim().is_empty() {
            return Err(FinsightError::malformed_goal("name is required"));
        }
        if self.current.is_negative() {
            return Err(FinsightError::malformed_goal(format!(
                "saved amount for '{}' is negative ({})",
                self.name, self.current
            )));
        }
        if !self.current.within_record_limit() || !self.target.within_record_limit() {
            return Err(FinsightError::malformed_goal(format!(
                "amounts for '{}' are larger than the supported maximum",
                self.name
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} by {}",
            self.name,
            self.current,
            self.target,
            self.deadline.format("%Y-%m-%d")
        )
    }
}
