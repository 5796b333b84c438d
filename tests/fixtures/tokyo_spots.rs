//! Real Tokyo locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Spread across the city so that
//! day budgets actually bite in walking mode.

use trip_planner::model::{Category, Spot};

/// Builder for test spots with sensible defaults.
pub fn spot(name: &str, lat: f64, lon: f64) -> Spot {
    Spot {
        name: name.to_string(),
        lat,
        lon,
        category: Category::Outdoor,
        duration_minutes: None,
        rating: None,
    }
}

pub fn rated(name: &str, lat: f64, lon: f64, rating: f64) -> Spot {
    Spot { rating: Some(rating), ..spot(name, lat, lon) }
}

// ============================================================================
// Central Tokyo sights
// ============================================================================

pub fn tokyo_six() -> Vec<Spot> {
    vec![
        spot("Senso-ji", 35.7148, 139.7967),
        spot("Tokyo Skytree", 35.7101, 139.8107),
        spot("Meiji Shrine", 35.6764, 139.6993),
        spot("Shibuya Crossing", 35.6595, 139.7005),
        spot("Tokyo Tower", 35.6586, 139.7454),
        spot("Ueno Park", 35.7156, 139.7745),
    ]
}

pub fn tokyo_ten() -> Vec<Spot> {
    let mut spots = tokyo_six();
    spots.extend([
        rated("Tsukiji Outer Market", 35.6655, 139.7708, 4.4),
        rated("Akihabara", 35.6984, 139.7731, 4.2),
        rated("Shinjuku Gyoen", 35.6852, 139.7100, 4.6),
        rated("Roppongi Hills", 35.6605, 139.7292, 4.1),
    ]);
    spots
}
