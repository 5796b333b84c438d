//! Cross-mode comparison and recommendation.
//!
//! Runs the full construct-and-search pipeline once per transport mode,
//! derives per-day time/distance from geometry, and ranks the modes with a
//! weighted blend of normalized time, distance, and comfort. One failing
//! mode is recorded and skipped; it never aborts the comparison.

use crate::error::PlanError;
use crate::geometry::{route_km, route_minutes};
use crate::model::{Itinerary, Spot, TransportMode};
use crate::scoring::ScoreConfig;
use crate::search::{optimize, SearchOptions};

/// Rating assumed for a spot set where nothing carries a rating, so the
/// comfort metric always has a value.
const DEFAULT_RATING: f64 = 3.0;

/// Caller-supplied blend weights for the utility score.
///
/// They need not sum to 1; [`UtilityWeights::normalized`] takes care of
/// that before blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilityWeights {
    pub time: f64,
    pub distance: f64,
    pub comfort: f64,
}

impl Default for UtilityWeights {
    fn default() -> Self {
        Self { time: 0.5, distance: 0.2, comfort: 0.3 }
    }
}

impl UtilityWeights {
    /// Clamp negatives to zero and renormalize to sum 1. Degenerate input
    /// (all zero, or non-finite) falls back to the default split rather
    /// than dividing by zero.
    pub fn normalized(&self) -> UtilityWeights {
        let time = self.time.max(0.0);
        let distance = self.distance.max(0.0);
        let comfort = self.comfort.max(0.0);
        let sum = time + distance + comfort;
        if sum > 0.0 && sum.is_finite() {
            UtilityWeights { time: time / sum, distance: distance / sum, comfort: comfort / sum }
        } else {
            // Defaults already sum to 1.
            UtilityWeights::default()
        }
    }
}

/// Per-day derived metrics, computed from geometry after the search picks
/// a winner (independent of the cost units used during scoring).
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub day: u32,
    pub travel_minutes: f64,
    pub distance_km: f64,
}

/// One mode's planning outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeReport {
    pub mode: TransportMode,
    pub itinerary: Itinerary,
    /// Raw search cost (lower is better).
    pub cost: f64,
    /// Penalty reasons from scoring, or the synthesized summary when the
    /// plan is penalty-free. Never empty.
    pub reasons: Vec<String>,
    pub days: Vec<DaySummary>,
    pub total_minutes: f64,
    pub total_distance_km: f64,
    pub average_rating: f64,
    /// 0..=100 blended utility; `None` when it could not be computed.
    pub utility: Option<f64>,
}

/// A mode whose search failed, recorded instead of aborting the run.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeFailure {
    pub mode: TransportMode,
    pub error: PlanError,
}

/// The full cross-mode comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeComparison {
    pub reports: Vec<ModeReport>,
    pub failures: Vec<ModeFailure>,
    pub recommended: TransportMode,
}

impl ModeComparison {
    /// The report backing the recommendation.
    pub fn recommended_report(&self) -> Option<&ModeReport> {
        self.reports.iter().find(|r| r.mode == self.recommended)
    }
}

/// Plan every transport mode and pick a recommendation.
///
/// Modes run sequentially and independently; each gets its own seeded
/// search. The recommendation is the highest utility score, falling back
/// to the lowest raw cost when no finite utility exists. Only when every
/// mode fails does this return an error.
pub fn compare_modes(
    city: &str,
    spots: &[Spot],
    days: usize,
    cfg: &ScoreConfig,
    weights: &UtilityWeights,
    options: &SearchOptions,
) -> Result<ModeComparison, PlanError> {
    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for mode in TransportMode::ALL {
        match optimize(city, spots, days, cfg, mode, options) {
            Ok(result) => {
                tracing::info!(%mode, cost = result.cost, "mode planned");
                reports.push(build_report(mode, result.itinerary, result.cost, result.reasons));
            }
            Err(error) => {
                tracing::warn!(%mode, %error, "mode failed to plan");
                failures.push(ModeFailure { mode, error });
            }
        }
    }

    assign_utilities(&mut reports, weights);

    let recommended = recommend(&reports).ok_or(PlanError::AllModesFailed)?;

    Ok(ModeComparison { reports, failures, recommended })
}

/// Highest utility wins; ties go to the earlier mode in evaluation order.
/// When no mode has a finite utility, fall back to the lowest raw cost.
fn recommend(reports: &[ModeReport]) -> Option<TransportMode> {
    let mut best: Option<(TransportMode, f64)> = None;
    for report in reports {
        if let Some(utility) = report.utility {
            if best.is_none_or(|(_, u)| utility > u) {
                best = Some((report.mode, utility));
            }
        }
    }
    best.map(|(mode, _)| mode).or_else(|| {
        reports
            .iter()
            .min_by(|a, b| a.cost.total_cmp(&b.cost))
            .map(|r| r.mode)
    })
}

fn build_report(
    mode: TransportMode,
    itinerary: Itinerary,
    cost: f64,
    reasons: Vec<String>,
) -> ModeReport {
    let days: Vec<DaySummary> = itinerary
        .days
        .iter()
        .map(|d| DaySummary {
            day: d.day,
            travel_minutes: route_minutes(&d.spots, mode),
            distance_km: route_km(&d.spots),
        })
        .collect();

    let total_minutes: f64 = days.iter().map(|d| d.travel_minutes).sum();
    let total_distance_km: f64 = days.iter().map(|d| d.distance_km).sum();
    let average_rating = average_rating(&itinerary);

    // A report should always explain itself, even when nothing went wrong.
    let reasons = if reasons.is_empty() {
        vec![
            format!("Estimated travel time: {total_minutes:.0} min"),
            format!("Estimated total distance: {total_distance_km:.1} km"),
            "No penalties applied".to_string(),
        ]
    } else {
        reasons
    };

    ModeReport {
        mode,
        itinerary,
        cost,
        reasons,
        days,
        total_minutes,
        total_distance_km,
        average_rating,
        utility: None,
    }
}

fn average_rating(itinerary: &Itinerary) -> f64 {
    let ratings: Vec<f64> = itinerary
        .days
        .iter()
        .flat_map(|d| d.spots.iter().filter_map(|s| s.rating))
        .collect();
    if ratings.is_empty() {
        DEFAULT_RATING
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    }
}

/// Min-max normalize each metric across the planned modes and blend into a
/// 0-100 utility. Time and distance are inverted (lower is better); comfort
/// is the average rating as-is. When a metric is identical across modes it
/// contributes 1.0 for everyone.
fn assign_utilities(reports: &mut [ModeReport], weights: &UtilityWeights) {
    if reports.is_empty() {
        return;
    }

    let w = weights.normalized();
    let time = metric_bounds(reports.iter().map(|r| r.total_minutes));
    let dist = metric_bounds(reports.iter().map(|r| r.total_distance_km));
    let comfort = metric_bounds(reports.iter().map(|r| r.average_rating));

    for report in reports.iter_mut() {
        let t = inverted_norm(report.total_minutes, time);
        let d = inverted_norm(report.total_distance_km, dist);
        let c = direct_norm(report.average_rating, comfort);
        let utility = 100.0 * (w.time * t + w.distance * d + w.comfort * c);
        report.utility = utility.is_finite().then_some(utility);
    }
}

fn metric_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn inverted_norm(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo { (hi - value) / (hi - lo) } else { 1.0 }
}

fn direct_norm(value: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo { (value - lo) / (hi - lo) } else { 1.0 }
}
