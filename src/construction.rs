//! Potential-based constructive heuristics.
//!
//! A unit's potential is its total traffic `Σ_j (flow[i][j] + flow[j][i])`;
//! a location's potential is its total distance
//! `Σ_l (distance[k][l] + distance[l][k])`. High-traffic units go to central
//! (low-distance) locations.
//!
//! - [`greedy`]: deterministic rank-to-rank matching, O(n²).
//! - [`randomized_greedy`]: GRASP construction drawing each location from a
//!   restricted candidate list (LRC) of the best free locations.

use crate::instance::QapInstance;
use crate::random::RandomSource;

/// Unit indices ordered by descending traffic potential (stable on ties).
pub fn units_by_traffic(instance: &QapInstance) -> Vec<usize> {
    let n = instance.size();
    let potential: Vec<i64> = (0..n)
        .map(|i| (0..n).map(|j| instance.flow(i, j) + instance.flow(j, i)).sum())
        .collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| potential[b].cmp(&potential[a]));
    order
}

/// Location indices ordered by ascending distance potential (stable on ties).
pub fn locations_by_centrality(instance: &QapInstance) -> Vec<usize> {
    let n = instance.size();
    let potential: Vec<i64> = (0..n)
        .map(|k| {
            (0..n)
                .map(|l| instance.distance(k, l) + instance.distance(l, k))
                .sum()
        })
        .collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&k| potential[k]);
    order
}

/// Deterministic greedy assignment: the i-th busiest unit gets the i-th most
/// central location.
pub fn greedy(instance: &QapInstance) -> Vec<usize> {
    let units = units_by_traffic(instance);
    let locations = locations_by_centrality(instance);
    let mut solution = vec![0; instance.size()];
    for (&unit, &location) in units.iter().zip(&locations) {
        solution[unit] = location;
    }
    solution
}

/// Randomized greedy assignment with a restricted candidate list.
///
/// Units are processed in traffic order. For each one, the free locations are
/// listed in centrality order and the unit takes a uniformly random location
/// among the first `max(1, ⌊alpha · free⌋)`. `alpha = 0` reproduces
/// [`greedy`]; `alpha = 1` is a uniformly random assignment. `alpha` is
/// clamped into `[0, 1]`.
pub fn randomized_greedy(instance: &QapInstance, alpha: f64, rng: &mut RandomSource) -> Vec<usize> {
    let alpha = alpha.clamp(0.0, 1.0);
    let units = units_by_traffic(instance);
    let mut free = locations_by_centrality(instance);
    let mut solution = vec![0; instance.size()];

    for &unit in &units {
        let lrc = ((alpha * free.len() as f64).floor() as usize).max(1);
        let pick = rng.uniform_int(0, lrc - 1);
        // `remove` keeps the remaining locations in centrality order
        solution[unit] = free.remove(pick);
    }
    solution
}
