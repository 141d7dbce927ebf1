//! Goal Report
//!
//! Projection of every savings goal on a reference day, with the totals
//! shown above the goal list.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::error::FinsightResult;
use crate::models::{GoalPriority, Snapshot};
use crate::services::{GoalProjection, GoalProjector, GoalSummary};

/// One goal in the report; exactly one of `projection` / `error` is set
#[derive(Debug, Clone, Serialize)]
pub struct GoalRow {
    pub name: String,
    pub category: String,
    pub priority: GoalPriority,
    pub deadline: NaiveDate,
    pub projection: Option<GoalProjection>,
    pub error: Option<String>,
}

/// Goal Report
#[derive(Debug, Clone, Serialize)]
pub struct GoalReport {
    pub today: NaiveDate,
    pub rows: Vec<GoalRow>,
    pub summary: GoalSummary,
}

impl GoalReport {
    pub fn generate(snapshot: &Snapshot, today: NaiveDate) -> Self {
        let projector = GoalProjector::new(snapshot.goals(), today);

        let rows = snapshot
            .goals()
            .iter()
            .zip(projector.project_all())
            .map(|(goal, projection)| {
                let (projection, error) = match projection {
                    Ok(p) => (Some(p), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                GoalRow {
                    name: goal.name.clone(),
                    category: goal.category.clone(),
                    priority: goal.priority,
                    deadline: goal.deadline,
                    projection,
                    error,
                }
            })
            .collect();

        Self {
            today,
            rows,
            summary: projector.summary(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str, date_format: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Savings Goals as of {}\n", self.today.format(date_format)));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "Saved {} of {} across {} goals ({} completed)\n\n",
            self.summary.total_saved.format_with_symbol(currency),
            self.summary.total_target.format_with_symbol(currency),
            self.summary.goal_count,
            self.summary.completed_count
        ));

        for row in &self.rows {
            output.push_str(&format!(
                "{} [{}] {}\n",
                row.name,
                row.priority,
                if row.category.is_empty() { "-" } else { row.category.as_str() }
            ));

            match (&row.projection, &row.error) {
                (Some(p), _) => {
                    output.push_str(&format!(
                        "  {} / {} ({:.0}%)  {}\n",
                        p.current.format_with_symbol(currency),
                        p.target.format_with_symbol(currency),
                        p.display_progress,
                        p.urgency.message()
                    ));
                    let deadline = row.deadline.format(date_format);
                    if p.days_remaining > 0 {
                        output.push_str(&format!(
                            "  Due {} ({} days left)\n",
                            deadline, p.days_remaining
                        ));
                    } else {
                        output.push_str(&format!("  Due {} (deadline passed)\n", deadline));
                    }
                    if !p.monthly_contribution.is_zero() {
                        output.push_str(&format!(
                            "  Save {} per month to reach your goal\n",
                            p.monthly_contribution.format_with_symbol(currency)
                        ));
                    }
                }
                (None, Some(error)) => {
                    output.push_str(&format!("  {}\n", error));
                }
                (None, None) => {}
            }
            output.push('\n');
        }

        output
    }

    /// Export the report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> FinsightResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
