//! Savings goal projection
//!
//! Progress, deadline distance, urgency and the monthly saving needed to hit
//! a goal. "Today" is always supplied by the caller.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::error::{FinsightError, FinsightResult};
use crate::models::{Goal, GoalId, Money};

/// Days short of the deadline below which an unfinished goal is urgent
pub const URGENT_WITHIN_DAYS: i64 = 30;

/// Progress below which a goal close to its deadline is urgent
pub const URGENT_BELOW_PERCENT: i64 = 80;

/// Days counted as one month when spreading the remaining amount
pub const DAYS_PER_MONTH: i64 = 30;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Urgency classification of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalUrgency {
    Completed,
    Overdue,
    Urgent,
    OnTrack,
}

impl GoalUrgency {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Completed => "Goal achieved!",
            Self::Overdue => "Deadline passed",
            Self::Urgent => "Needs attention",
            Self::OnTrack => "On track",
        }
    }
}

impl fmt::Display for GoalUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Overdue => write!(f, "Overdue"),
            Self::Urgent => write!(f, "Urgent"),
            Self::OnTrack => write!(f, "On track"),
        }
    }
}

/// Derived view of one goal on a given day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProjection {
    pub goal_id: GoalId,
    pub name: String,
    pub current: Money,
    pub target: Money,
    /// Unclamped progress percentage
    pub progress: f64,
    /// Progress clamped to 0..=100 for display
    pub display_progress: f64,
    pub days_remaining: i64,
    pub urgency: GoalUrgency,
    pub monthly_contribution: Money,
}

/// Totals across a set of goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GoalSummary {
    pub goal_count: usize,
    pub total_target: Money,
    pub total_saved: Money,
    pub completed_count: usize,
}

impl GoalSummary {
    /// Saved share of all targets, `None` without a positive total target
    pub fn overall_progress(&self) -> Option<f64> {
        self.total_saved.percent_of(self.total_target)
    }
}

/// Projects a borrowed set of goals onto a reference day
pub struct GoalProjector<'a> {
    goals: &'a [Goal],
    today: NaiveDate,
}

impl<'a> GoalProjector<'a> {
    pub fn new(goals: &'a [Goal], today: NaiveDate) -> Self {
        Self { goals, today }
    }

    /// Raw `current / target × 100`; fails with `InvalidGoal` for a
    /// non-positive target
    pub fn progress_percent(current: Money, target: Money) -> FinsightResult<f64> {
        current
            .percent_of(target)
            .ok_or_else(|| FinsightError::invalid_goal(target))
    }

    /// Clamp a raw progress value to 0..=100
    pub fn display_progress(raw: f64) -> f64 {
        raw.clamp(0.0, 100.0)
    }

    /// Whole days from `today` to `deadline`; negative once it has passed
    pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
        (deadline - today).num_days()
    }

    /// Days from `now` to `deadline`, counting any partial day as a full one
    pub fn days_remaining_at(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
        ceil_div((deadline - now).num_milliseconds(), MILLIS_PER_DAY)
    }

    /// Classify a goal; the first matching rule wins:
    /// completed, overdue, urgent, on track
    pub fn urgency_tier(
        current: Money,
        target: Money,
        deadline: NaiveDate,
        today: NaiveDate,
    ) -> FinsightResult<GoalUrgency> {
        if !target.is_positive() {
            return Err(FinsightError::invalid_goal(target));
        }

        // exact cent comparisons for the percentage thresholds
        let current_scaled = current.cents() as i128 * 100;
        let target = target.cents() as i128;
        let days = Self::days_remaining(deadline, today);

        let urgency = if current_scaled >= target * 100 {
            GoalUrgency::Completed
        } else if days < 0 {
            GoalUrgency::Overdue
        } else if days < URGENT_WITHIN_DAYS && current_scaled < target * URGENT_BELOW_PERCENT as i128 {
            GoalUrgency::Urgent
        } else {
            GoalUrgency::OnTrack
        };
        Ok(urgency)
    }

    /// `(target − current) / max(1, ceil(days / 30))`
    ///
    /// The month count never drops below one, so a goal due today or already
    /// overdue asks for the whole remainder at once. The remainder is floored
    /// at zero and each month's share is rounded up to the cent.
    pub fn required_monthly_contribution(
        current: Money,
        target: Money,
        days_remaining: i64,
    ) -> FinsightResult<Money> {
        if !target.is_positive() {
            return Err(FinsightError::invalid_goal(target));
        }
        let remaining = if current >= target {
            Money::zero()
        } else {
            target - current
        };
        let months = ceil_div(days_remaining, DAYS_PER_MONTH).max(1);
        Ok(remaining.split_ceil(months))
    }

    /// Full projection of one goal
    pub fn project(&self, goal: &Goal) -> FinsightResult<GoalProjection> {
        let progress = Self::progress_percent(goal.current, goal.target)
            .map_err(|e| e.for_goal(goal.name.as_str()))?;
        let days_remaining = Self::days_remaining(goal.deadline, self.today);
        let urgency = Self::urgency_tier(goal.current, goal.target, goal.deadline, self.today)
            .map_err(|e| e.for_goal(goal.name.as_str()))?;
        let monthly_contribution =
            Self::required_monthly_contribution(goal.current, goal.target, days_remaining)
                .map_err(|e| e.for_goal(goal.name.as_str()))?;

        Ok(GoalProjection {
            goal_id: goal.id,
            name: goal.name.clone(),
            current: goal.current,
            target: goal.target,
            progress,
            display_progress: Self::display_progress(progress),
            days_remaining,
            urgency,
            monthly_contribution,
        })
    }

    /// Project every goal; each entry fails independently
    pub fn project_all(&self) -> Vec<FinsightResult<GoalProjection>> {
        let projections: Vec<_> = self.goals.iter().map(|g| self.project(g)).collect();
        debug!(
            goals = projections.len(),
            invalid = projections.iter().filter(|p| p.is_err()).count(),
            today = %self.today,
            "projected goals"
        );
        projections
    }

    /// Target, saved and completion totals
    pub fn summary(&self) -> GoalSummary {
        GoalSummary {
            goal_count: self.goals.len(),
            total_target: self.goals.iter().map(|g| g.target).sum(),
            total_saved: self.goals.iter().map(|g| g.current).sum(),
            completed_count: self
                .goals
                .iter()
                .filter(|g| g.target.is_positive() && g.is_reached())
                .count(),
        }
    }
}

/// Integer division rounding toward positive infinity
fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) > 0 {
        quotient + 1
    } else {
        quotient
    }
}
