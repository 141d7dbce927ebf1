//! Computation layer for Finsight
//!
//! Four stateless components turn snapshot records into derived values:
//! aggregation over expenses, budget evaluation, goal projection and
//! category suggestion. None of them keep state between calls or touch a
//! clock, so they are safe to call from any thread on any snapshot.

pub mod aggregator;
pub mod budget;
pub mod goal;
pub mod suggest;

pub use aggregator::{CategoryShare, RecordAggregator, SortKey};
pub use budget::{BudgetEvaluator, BudgetLine, BudgetStatus};
pub use goal::{GoalProjection, GoalProjector, GoalSummary, GoalUrgency};
pub use suggest::{CategorySuggester, SuggestionRule};
