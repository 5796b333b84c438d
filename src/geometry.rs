//! Planar distance approximation and per-mode travel time.
//!
//! Uses Euclidean distance in degrees scaled by ~111 km/degree. Adequate
//! for intra-city spot sets; not geodesically exact and not meant to be.

use crate::model::{Spot, TransportMode};

/// Kilometers per degree of latitude (and, approximately, longitude at
/// mid latitudes).
const KM_PER_DEGREE: f64 = 111.0;

/// Average walking speed in km/h.
const WALK_SPEED_KMH: f64 = 4.5;

/// Average transit speed in km/h, door to door excluding the wait.
const TRANSIT_SPEED_KMH: f64 = 20.0;

/// Fixed wait overhead per transit hop, in minutes.
const TRANSIT_WAIT_MINUTES: f64 = 5.0;

/// Average taxi speed in km/h.
const TAXI_SPEED_KMH: f64 = 30.0;

/// Straight-line distance between two spots in kilometers.
pub fn distance_km(a: &Spot, b: &Spot) -> f64 {
    let dlat = a.lat - b.lat;
    let dlon = a.lon - b.lon;
    (dlat * dlat + dlon * dlon).sqrt() * KM_PER_DEGREE
}

/// Travel time between two spots in minutes for the given mode.
///
/// Transit pays a fixed per-hop wait on top of in-vehicle time; a
/// zero-length hop is no hop at all and costs nothing in any mode.
pub fn travel_minutes(a: &Spot, b: &Spot, mode: TransportMode) -> f64 {
    let km = distance_km(a, b);
    if km == 0.0 {
        return 0.0;
    }
    match mode {
        TransportMode::Walk => km / WALK_SPEED_KMH * 60.0,
        TransportMode::Transit => km / TRANSIT_SPEED_KMH * 60.0 + TRANSIT_WAIT_MINUTES,
        TransportMode::Taxi => km / TAXI_SPEED_KMH * 60.0,
    }
}

/// Sum of leg travel times along an ordered day, in minutes.
///
/// A day with zero or one spots has no legs and costs zero.
pub fn route_minutes(spots: &[Spot], mode: TransportMode) -> f64 {
    spots
        .windows(2)
        .map(|pair| travel_minutes(&pair[0], &pair[1], mode))
        .sum()
}

/// Sum of leg distances along an ordered day, in kilometers.
pub fn route_km(spots: &[Spot]) -> f64 {
    spots.windows(2).map(|pair| distance_km(&pair[0], &pair[1])).sum()
}
