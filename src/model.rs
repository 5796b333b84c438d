//! Core domain types for the itinerary planner.
//!
//! These are intentionally minimal. The surrounding application exchanges
//! them as JSON; inside the planner they are plain owned values, cloned
//! freely by the search and never shared mutably between candidates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the traveler moves between spots.
///
/// Closed set: geometry matches on it exhaustively, so adding a mode is a
/// compile-time-checked change. Unknown strings are rejected at the serde
/// boundary rather than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Walk,
    Transit,
    Taxi,
}

impl TransportMode {
    /// All modes, in the order the comparator evaluates them.
    pub const ALL: [TransportMode; 3] =
        [TransportMode::Walk, TransportMode::Transit, TransportMode::Taxi];

    pub fn name(&self) -> &'static str {
        match self {
            TransportMode::Walk => "walk",
            TransportMode::Transit => "transit",
            TransportMode::Taxi => "taxi",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spot category tag.
///
/// The planner itself never branches on this; it rides along for the
/// application layers (weather-aware replanning, visit-duration defaults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Outdoor,
    Indoor,
    Temple,
    Shopping,
    Museum,
    Food,
}

/// A single point of interest to visit.
///
/// Immutable once loaded for a planning run; `name` is the unique display
/// key within a city's spot set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub category: Category,
    /// Estimated visit duration in minutes, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Average visitor rating, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// One day's ordered visiting sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day index.
    pub day: u32,
    pub spots: Vec<Spot>,
    /// Filled by the finalize step after the winning itinerary is chosen;
    /// 0.0 while the search is still running.
    #[serde(default)]
    pub total_distance_km: f64,
}

/// A full multi-day plan: an ordered sequence of day plans that partitions
/// the input spot set (every spot in exactly one day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub city: String,
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    pub fn total_spots(&self) -> usize {
        self.days.iter().map(|d| d.spots.len()).sum()
    }

    /// Sorted spot names across all days. Two itineraries over the same
    /// input set must agree on this regardless of how the search shuffled
    /// spots between days.
    pub fn spot_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .days
            .iter()
            .flat_map(|d| d.spots.iter().map(|s| s.name.as_str()))
            .collect();
        names.sort_unstable();
        names
    }
}
