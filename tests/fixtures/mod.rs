//! Test fixtures for trip-planner.
//!
//! Provides realistic test data including:
//! - Real Tokyo spot coordinates (from OpenStreetMap)
//! - Builders for spots with sensible defaults

pub mod tokyo_spots;

pub use tokyo_spots::*;
