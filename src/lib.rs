//! trip-planner core
//!
//! Multi-day itinerary optimization: partition a city's spots into daily
//! routes, score candidates against soft comfort constraints, improve with
//! a bounded stochastic local search, and compare outcomes across
//! transport modes to pick a recommendation.

pub mod model;
pub mod error;
pub mod geometry;
pub mod scoring;
pub mod construct;
pub mod search;
pub mod compare;
