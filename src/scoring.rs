//! Soft-constraint scoring for candidate itineraries.
//!
//! Lower scores are better. The base term is total travel time; soft
//! constraint violations add penalties and a human-readable reason each,
//! but never reject an itinerary outright.

use std::collections::HashMap;

use crate::error::PlanError;
use crate::geometry::route_minutes;
use crate::model::{Itinerary, TransportMode};

/// Frozen scoring configuration, shared read-only across a comparison run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreConfig {
    /// Max allowed travel time per day (minutes), by transport mode.
    pub max_daily_minutes: HashMap<TransportMode, f64>,
    /// Penalty per minute over the daily budget.
    pub exceed_minute_penalty: f64,
    /// Flat penalty for a day with too few spots.
    pub one_spot_day_penalty: f64,
    /// Minimum expected spots per day (soft).
    pub min_spots_per_day: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            max_daily_minutes: HashMap::from([
                (TransportMode::Walk, 240.0),
                (TransportMode::Transit, 300.0),
                (TransportMode::Taxi, 360.0),
            ]),
            exceed_minute_penalty: 1.5,
            one_spot_day_penalty: 15.0,
            min_spots_per_day: 2,
        }
    }
}

impl ScoreConfig {
    /// Daily travel-time budget for a mode.
    ///
    /// A mode without a configured budget is a configuration error, not a
    /// silent default; the comparator records it as that mode's failure.
    pub fn daily_budget(&self, mode: TransportMode) -> Result<f64, PlanError> {
        self.max_daily_minutes
            .get(&mode)
            .copied()
            .ok_or(PlanError::MissingDailyBudget(mode))
    }
}

/// Score an itinerary for one transport mode.
///
/// Returns the scalar cost (lower is better) and the reasons for any
/// penalties applied, in day order. An itinerary with no violations
/// produces an empty reasons list.
pub fn score_itinerary(
    itinerary: &Itinerary,
    cfg: &ScoreConfig,
    mode: TransportMode,
) -> Result<(f64, Vec<String>), PlanError> {
    let limit = cfg.daily_budget(mode)?;

    // The minimum-spots penalty only makes sense when the spot set is big
    // enough to satisfy it in the first place.
    let total_spots = itinerary.total_spots();
    let expect_min = total_spots >= itinerary.days.len() * cfg.min_spots_per_day;

    let mut score = 0.0;
    let mut reasons = Vec::new();

    for day in &itinerary.days {
        let day_minutes = route_minutes(&day.spots, mode);
        score += day_minutes;

        if day_minutes > limit {
            let exceed = day_minutes - limit;
            let penalty = exceed * cfg.exceed_minute_penalty;
            score += penalty;
            reasons.push(format!(
                "Day {}: exceeded {limit:.0} min by {exceed:.1} (+{penalty:.1})",
                day.day
            ));
        }

        if expect_min && day.spots.len() < cfg.min_spots_per_day {
            score += cfg.one_spot_day_penalty;
            reasons.push(format!(
                "Day {}: only {} spot(s) (+{:.1})",
                day.day,
                day.spots.len(),
                cfg.one_spot_day_penalty
            ));
        }
    }

    Ok((score, reasons))
}
