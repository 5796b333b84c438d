//! Stochastic local search over itineraries.
//!
//! Perturb-and-accept loop with a fixed trial budget: clone the last
//! accepted itinerary, move one spot between days or swap a pair across
//! days, re-order the touched days, keep the candidate only when it scores
//! strictly better. Greedy acceptance, no annealing.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::construct::{build_initial_itinerary, finalize_distances, nearest_neighbor_path};
use crate::error::PlanError;
use crate::model::{Itinerary, Spot, TransportMode};
use crate::scoring::{score_itinerary, ScoreConfig};

/// Tunables for one optimize call.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Fixed trial budget; the sole bound on runtime.
    pub trials: usize,
    /// Probability of a move perturbation per trial (otherwise swap).
    pub move_probability: f64,
    /// RNG seed. Identical inputs plus identical seed reproduce the run
    /// exactly; the seed is scoped to the call, never global.
    pub seed: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            trials: 200,
            move_probability: 0.6,
            seed: 0,
        }
    }
}

/// The winning itinerary of a search, with its score and penalty reasons.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub itinerary: Itinerary,
    pub cost: f64,
    pub reasons: Vec<String>,
}

/// Plan one city for one transport mode.
///
/// Builds the deterministic initial itinerary, then runs the perturbation
/// loop. With `trials == 0` or degenerate input this returns the
/// construction result unchanged (aside from finalized distances).
pub fn optimize(
    city: &str,
    spots: &[Spot],
    days: usize,
    cfg: &ScoreConfig,
    mode: TransportMode,
    options: &SearchOptions,
) -> Result<SearchResult, PlanError> {
    if days == 0 {
        return Err(PlanError::NoDays);
    }
    if spots.is_empty() {
        return Err(PlanError::NoSpots);
    }

    let mut rng = SmallRng::seed_from_u64(options.seed);

    let base = build_initial_itinerary(city, spots, days);
    let (mut best_cost, mut best_reasons) = score_itinerary(&base, cfg, mode)?;
    let mut best = base.clone();
    let mut current = base;

    for trial in 0..options.trials {
        let mut candidate = current.clone();
        if rng.gen_bool(options.move_probability.clamp(0.0, 1.0)) {
            move_one_spot(&mut candidate, &mut rng);
        } else {
            swap_between_days(&mut candidate, &mut rng);
        }

        let (cost, reasons) = score_itinerary(&candidate, cfg, mode)?;
        if cost < best_cost {
            tracing::debug!(trial, %mode, cost, "accepted improving candidate");
            best_cost = cost;
            best_reasons = reasons;
            best = candidate.clone();
            current = candidate;
        }
        // Rejected candidates are dropped; the next trial perturbs the
        // last accepted state again.
    }

    finalize_distances(&mut best);
    Ok(SearchResult { itinerary: best, cost: best_cost, reasons: best_reasons })
}

/// Move one random spot from a day with at least two spots to another day,
/// then re-order both days. No-op when no day can spare a spot or there is
/// nowhere to move it.
fn move_one_spot(itin: &mut Itinerary, rng: &mut SmallRng) {
    let from_candidates: Vec<usize> = itin
        .days
        .iter()
        .enumerate()
        .filter(|(_, d)| d.spots.len() >= 2)
        .map(|(i, _)| i)
        .collect();
    if from_candidates.is_empty() || itin.days.len() < 2 {
        return;
    }

    let src = from_candidates[rng.gen_range(0..from_candidates.len())];
    let mut dst = rng.gen_range(0..itin.days.len() - 1);
    if dst >= src {
        dst += 1;
    }

    let idx = rng.gen_range(0..itin.days[src].spots.len());
    let moved = itin.days[src].spots.remove(idx);
    itin.days[dst].spots.push(moved);

    reorder(itin, src);
    reorder(itin, dst);
}

/// Exchange one random spot between two distinct random days, then
/// re-order both. No-op when fewer than two days exist or a chosen day is
/// empty.
fn swap_between_days(itin: &mut Itinerary, rng: &mut SmallRng) {
    if itin.days.len() < 2 {
        return;
    }

    let a = rng.gen_range(0..itin.days.len());
    let mut b = rng.gen_range(0..itin.days.len() - 1);
    if b >= a {
        b += 1;
    }
    if itin.days[a].spots.is_empty() || itin.days[b].spots.is_empty() {
        return;
    }

    let i = rng.gen_range(0..itin.days[a].spots.len());
    let j = rng.gen_range(0..itin.days[b].spots.len());

    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (left, right) = itin.days.split_at_mut(hi);
    let (first, second) = (&mut left[lo], &mut right[0]);
    if a < b {
        std::mem::swap(&mut first.spots[i], &mut second.spots[j]);
    } else {
        std::mem::swap(&mut second.spots[i], &mut first.spots[j]);
    }

    reorder(itin, a);
    reorder(itin, b);
}

fn reorder(itin: &mut Itinerary, day_index: usize) {
    let spots = std::mem::take(&mut itin.days[day_index].spots);
    itin.days[day_index].spots = nearest_neighbor_path(spots);
}
