//! Mode comparator tests.
//!
//! Covers utility normalization, weight handling, per-mode failure
//! isolation, and the recommendation rule.

mod fixtures;

use trip_planner::compare::{compare_modes, ModeComparison, UtilityWeights};
use trip_planner::error::PlanError;
use trip_planner::model::{Spot, TransportMode};
use trip_planner::scoring::ScoreConfig;
use trip_planner::search::SearchOptions;

use fixtures::tokyo_spots::tokyo_ten;

fn compare_default(spots: &[Spot], days: usize, cfg: &ScoreConfig) -> ModeComparison {
    compare_modes(
        "Tokyo",
        spots,
        days,
        cfg,
        &UtilityWeights::default(),
        &SearchOptions::default(),
    )
    .unwrap()
}

// ============================================================================
// Utility scores
// ============================================================================

#[test]
fn test_utilities_are_bounded_and_recommendation_is_argmax() {
    let comparison = compare_default(&tokyo_ten(), 3, &ScoreConfig::default());

    assert_eq!(comparison.reports.len(), 3);
    assert!(comparison.failures.is_empty());

    let mut best: Option<(TransportMode, f64)> = None;
    for report in &comparison.reports {
        let utility = report.utility.expect("every planned mode gets a utility");
        assert!((0.0..=100.0).contains(&utility), "{}: {utility}", report.mode);
        if best.is_none_or(|(_, u)| utility > u) {
            best = Some((report.mode, utility));
        }
    }

    assert_eq!(comparison.recommended, best.unwrap().0);
    assert!(comparison.recommended_report().is_some());
}

#[test]
fn test_report_totals_match_day_summaries() {
    let comparison = compare_default(&tokyo_ten(), 3, &ScoreConfig::default());

    for report in &comparison.reports {
        assert_eq!(report.days.len(), report.itinerary.days.len());
        let minutes: f64 = report.days.iter().map(|d| d.travel_minutes).sum();
        let km: f64 = report.days.iter().map(|d| d.distance_km).sum();
        assert!((report.total_minutes - minutes).abs() < 1e-9);
        assert!((report.total_distance_km - km).abs() < 1e-9);
    }
}

#[test]
fn test_comparison_is_deterministic() {
    let spots = tokyo_ten();
    let cfg = ScoreConfig::default();
    let a = compare_default(&spots, 3, &cfg);
    let b = compare_default(&spots, 3, &cfg);
    assert_eq!(a, b);
}

// ============================================================================
// Weights
// ============================================================================

#[test]
fn test_weights_renormalize_to_unit_sum() {
    let w = UtilityWeights { time: 2.0, distance: 1.0, comfort: 1.0 }.normalized();
    assert!((w.time + w.distance + w.comfort - 1.0).abs() < 1e-12);
    assert!((w.time - 0.5).abs() < 1e-12);

    // Negative components are clamped before renormalizing.
    let w = UtilityWeights { time: -3.0, distance: 1.0, comfort: 1.0 }.normalized();
    assert_eq!(w.time, 0.0);
    assert!((w.distance - 0.5).abs() < 1e-12);
}

#[test]
fn test_all_zero_weights_fall_back_to_defaults() {
    let w = UtilityWeights { time: 0.0, distance: 0.0, comfort: 0.0 }.normalized();
    assert_eq!(w, UtilityWeights::default());
}

#[test]
fn test_weights_do_not_change_bounds() {
    let comparison = compare_modes(
        "Tokyo",
        &tokyo_ten(),
        3,
        &ScoreConfig::default(),
        &UtilityWeights { time: 40.0, distance: 0.0, comfort: 2.0 },
        &SearchOptions::default(),
    )
    .unwrap();

    for report in &comparison.reports {
        let utility = report.utility.unwrap();
        assert!((0.0..=100.0).contains(&utility));
    }
}

// ============================================================================
// Per-mode failure isolation
// ============================================================================

#[test]
fn test_one_failing_mode_does_not_abort_comparison() {
    let mut cfg = ScoreConfig::default();
    cfg.max_daily_minutes.remove(&TransportMode::Transit);

    let comparison = compare_default(&tokyo_ten(), 3, &cfg);

    assert_eq!(comparison.reports.len(), 2);
    assert_eq!(comparison.failures.len(), 1);
    assert_eq!(comparison.failures[0].mode, TransportMode::Transit);
    assert_eq!(
        comparison.failures[0].error,
        PlanError::MissingDailyBudget(TransportMode::Transit)
    );
    assert_ne!(comparison.recommended, TransportMode::Transit);
}

#[test]
fn test_all_modes_failing_is_an_error() {
    let err = compare_modes(
        "Tokyo",
        &[],
        3,
        &ScoreConfig::default(),
        &UtilityWeights::default(),
        &SearchOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err, PlanError::AllModesFailed);
}

// ============================================================================
// Reasons
// ============================================================================

#[test]
fn test_penalty_free_modes_get_summary_reasons() {
    // Generous budgets so no penalties can fire anywhere.
    let mut cfg = ScoreConfig::default();
    for minutes in cfg.max_daily_minutes.values_mut() {
        *minutes = 100_000.0;
    }
    cfg.min_spots_per_day = 0;

    let comparison = compare_default(&tokyo_ten(), 3, &cfg);

    for report in &comparison.reports {
        assert_eq!(report.reasons.len(), 3, "{}: {:?}", report.mode, report.reasons);
        assert!(report.reasons[0].starts_with("Estimated travel time:"));
        assert!(report.reasons[1].starts_with("Estimated total distance:"));
        assert_eq!(report.reasons[2], "No penalties applied");
    }
}

// ============================================================================
// Serde boundary
// ============================================================================

#[test]
fn test_spots_deserialize_from_json() {
    let raw = r#"[
        {"name": "Senso-ji", "lat": 35.7148, "lon": 139.7967, "category": "temple"},
        {"name": "Tsukiji", "lat": 35.6655, "lon": 139.7708, "category": "food",
         "duration_minutes": 90, "rating": 4.4}
    ]"#;
    let spots: Vec<Spot> = serde_json::from_str(raw).unwrap();
    assert_eq!(spots.len(), 2);
    assert_eq!(spots[1].duration_minutes, Some(90));

    let comparison = compare_default(&spots, 1, &ScoreConfig::default());
    assert_eq!(comparison.reports.len(), 3);
}

#[test]
fn test_unknown_mode_string_is_rejected() {
    assert!(serde_json::from_str::<TransportMode>("\"bike\"").is_err());
    assert_eq!(
        serde_json::from_str::<TransportMode>("\"transit\"").unwrap(),
        TransportMode::Transit
    );
}
