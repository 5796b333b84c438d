//! Planner error taxonomy.

use thiserror::Error;

use crate::model::TransportMode;

/// Errors surfaced by the planning pipeline.
///
/// Degenerate-but-valid inputs (too few spots for a perturbation to apply)
/// are not errors: the search degrades to no-ops and returns the
/// construction result. These variants cover genuine contract violations
/// and whole-run failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("no spots provided")]
    NoSpots,
    #[error("day count must be at least 1")]
    NoDays,
    #[error("no daily time budget configured for mode `{0}`")]
    MissingDailyBudget(TransportMode),
    #[error("every transport mode failed to plan")]
    AllModesFailed,
}
