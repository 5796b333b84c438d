//! Deterministic initial itinerary construction.
//!
//! Spots are sorted by a cheap geographic key, dealt round-robin into day
//! buckets, and each day is ordered with a nearest-neighbor chain. No
//! randomness anywhere in this module; the local search owns that.

use crate::geometry::{distance_km, route_km};
use crate::model::{DayPlan, Itinerary, Spot};

/// Greedy nearest-neighbor chain starting from the first spot.
///
/// Ties keep the earliest candidate in list order, which keeps the whole
/// construction deterministic.
pub fn nearest_neighbor_path(spots: Vec<Spot>) -> Vec<Spot> {
    if spots.is_empty() {
        return spots;
    }

    let mut unvisited = spots;
    let mut path = Vec::with_capacity(unvisited.len());
    path.push(unvisited.remove(0));

    while !unvisited.is_empty() {
        let last = &path[path.len() - 1];
        let mut best = 0;
        let mut best_km = f64::INFINITY;
        for (i, s) in unvisited.iter().enumerate() {
            let km = distance_km(last, s);
            if km < best_km {
                best_km = km;
                best = i;
            }
        }
        path.push(unvisited.remove(best));
    }

    path
}

/// Build the initial itinerary: sort by (lon, lat), round-robin into day
/// buckets, nearest-neighbor order within each day.
///
/// The (lon, lat) sort is a weak space-filling proxy that tends to land
/// nearby spots in the same bucket; day indices are 1-based and distances
/// are left at zero until the finalize step.
pub fn build_initial_itinerary(city: &str, spots: &[Spot], days: usize) -> Itinerary {
    let mut sorted: Vec<Spot> = spots.to_vec();
    sorted.sort_by(|a, b| a.lon.total_cmp(&b.lon).then(a.lat.total_cmp(&b.lat)));

    let mut buckets: Vec<Vec<Spot>> = vec![Vec::new(); days];
    for (i, spot) in sorted.into_iter().enumerate() {
        buckets[i % days].push(spot);
    }

    let day_plans = buckets
        .into_iter()
        .enumerate()
        .map(|(i, bucket)| DayPlan {
            day: (i + 1) as u32,
            spots: nearest_neighbor_path(bucket),
            total_distance_km: 0.0,
        })
        .collect();

    Itinerary { city: city.to_string(), days: day_plans }
}

/// Compute and store each day's total distance.
///
/// Called once after the best itinerary is selected; the search itself
/// never reads the stored field, so there is no staleness to worry about.
pub fn finalize_distances(itinerary: &mut Itinerary) {
    for day in &mut itinerary.days {
        day.total_distance_km = (route_km(&day.spots) * 100.0).round() / 100.0;
    }
}

/// Reorder a single day's spots in place to shorten its route.
///
/// Used by the application layer when one day changes (weather-triggered
/// replanning) and a full re-optimization would be overkill. Days with two
/// or fewer spots have nothing to improve.
pub fn replan_day(itinerary: &mut Itinerary, day_index: usize) {
    let Some(day) = itinerary.days.get_mut(day_index) else {
        return;
    };
    if day.spots.len() <= 2 {
        return;
    }
    day.spots = nearest_neighbor_path(std::mem::take(&mut day.spots));
}
