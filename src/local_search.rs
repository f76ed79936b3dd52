//! Hill climbing over the swap neighborhood.
//!
//! The neighborhood of a permutation is every exchange of two units' locations.
//! A swap is symmetric, so scanning unordered pairs `r < s` covers every
//! ordered move `(r, s)`, `r ≠ s`.
//!
//! Two strategies are provided, both implementing [`LocalSearch`] so
//! metaheuristics can take either one:
//!
//! - [`BestImprovement`]: scan the whole neighborhood, apply the best move.
//! - [`FirstImprovement`]: scan in a freshly shuffled order, apply the first
//!   improving move.
//!
//! Both stop at a swap local optimum: every pair has delta ≥ 0.

use crate::evaluator::CostEvaluator;
use crate::random::RandomSource;

/// Summary of one local search descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchOutcome {
    /// Number of improving swaps applied.
    pub moves: usize,
    /// Total cost change (≤ 0).
    pub delta: i64,
}

/// A descent strategy that drives a permutation to a swap local optimum.
pub trait LocalSearch {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Improves `solution` in place until no swap reduces its cost.
    ///
    /// Strategies that need no randomness leave `rng` untouched.
    fn improve(
        &self,
        evaluator: &CostEvaluator<'_>,
        solution: &mut [usize],
        rng: &mut RandomSource,
    ) -> LocalSearchOutcome;
}

/// Best-improvement descent.
///
/// Each round evaluates every pair in row-major order and applies the one
/// with the most negative delta; ties keep the first pair found.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestImprovement;

impl LocalSearch for BestImprovement {
    fn name(&self) -> &str {
        "best-improvement"
    }

    fn improve(
        &self,
        evaluator: &CostEvaluator<'_>,
        solution: &mut [usize],
        _rng: &mut RandomSource,
    ) -> LocalSearchOutcome {
        let n = solution.len();
        let mut outcome = LocalSearchOutcome::default();
        if n < 2 {
            return outcome;
        }

        loop {
            let mut best_delta = 0i64;
            let mut best_move = None;
            for r in 0..n {
                for s in (r + 1)..n {
                    let delta = evaluator.delta(r, s, solution);
                    if delta < best_delta {
                        best_delta = delta;
                        best_move = Some((r, s));
                    }
                }
            }

            match best_move {
                Some((r, s)) => {
                    solution.swap(r, s);
                    outcome.moves += 1;
                    outcome.delta += best_delta;
                }
                None => break,
            }
        }
        outcome
    }
}

/// First-improvement descent with a randomized scan order.
///
/// The full pair list is reshuffled at the start of every round; the first
/// improving pair is applied immediately and a new round begins. Ends after a
/// full pass with no improving pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstImprovement;

impl LocalSearch for FirstImprovement {
    fn name(&self) -> &str {
        "first-improvement"
    }

    fn improve(
        &self,
        evaluator: &CostEvaluator<'_>,
        solution: &mut [usize],
        rng: &mut RandomSource,
    ) -> LocalSearchOutcome {
        let n = solution.len();
        let mut outcome = LocalSearchOutcome::default();
        if n < 2 {
            return outcome;
        }

        let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(n * (n - 1) / 2);
        for r in 0..n {
            for s in (r + 1)..n {
                pairs.push((r, s));
            }
        }

        loop {
            rng.shuffle(&mut pairs);
            let mut improving = None;
            for &(r, s) in &pairs {
                let delta = evaluator.delta(r, s, solution);
                if delta < 0 {
                    improving = Some((r, s, delta));
                    break;
                }
            }

            match improving {
                Some((r, s, delta)) => {
                    solution.swap(r, s);
                    outcome.moves += 1;
                    outcome.delta += delta;
                }
                None => break,
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::QapInstance;
    use crate::solution::{is_permutation, random_permutation};

    fn random_instance(n: usize, seed: u32) -> QapInstance {
        let mut rng = RandomSource::new(seed);
        let mut flow = vec![vec![0i64; n]; n];
        let mut dist = vec![vec![0i64; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    flow[i][j] = rng.uniform_int(0, 50) as i64;
                    dist[i][j] = rng.uniform_int(1, 50) as i64;
                }
            }
        }
        QapInstance::new(flow, dist).unwrap()
    }

    fn assert_local_optimum(eval: &CostEvaluator<'_>, sol: &[usize]) {
        let n = sol.len();
        for r in 0..n {
            for s in 0..n {
                if r != s {
                    assert!(eval.delta(r, s, sol) >= 0, "pair ({r},{s}) still improves");
                }
            }
        }
    }

    #[test]
    fn test_best_improvement_reaches_local_optimum() {
        let inst = random_instance(12, 4);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(10);
        let mut sol = random_permutation(12, &mut rng);
        let before = eval.full_cost(&sol);

        let outcome = BestImprovement.improve(&eval, &mut sol, &mut rng);

        assert!(is_permutation(&sol, 12));
        assert_eq!(eval.full_cost(&sol), before + outcome.delta);
        assert!(outcome.delta <= 0);
        assert_local_optimum(&eval, &sol);
    }

    #[test]
    fn test_first_improvement_reaches_local_optimum() {
        let inst = random_instance(12, 5);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(11);
        let mut sol = random_permutation(12, &mut rng);
        let before = eval.full_cost(&sol);

        let outcome = FirstImprovement.improve(&eval, &mut sol, &mut rng);

        assert!(is_permutation(&sol, 12));
        assert_eq!(eval.full_cost(&sol), before + outcome.delta);
        assert_local_optimum(&eval, &sol);
    }

    #[test]
    fn test_best_improvement_leaves_rng_untouched() {
        let inst = random_instance(6, 1);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(3);
        let mut sol: Vec<usize> = (0..6).collect();
        BestImprovement.improve(&eval, &mut sol, &mut rng);
        let mut fresh = RandomSource::new(3);
        assert_eq!(rng.uniform_int(0, 999_999), fresh.uniform_int(0, 999_999));
    }

    #[test]
    fn test_first_improvement_deterministic_per_seed() {
        let inst = random_instance(10, 2);
        let eval = CostEvaluator::new(&inst);
        let start: Vec<usize> = (0..10).rev().collect();

        let mut a = start.clone();
        FirstImprovement.improve(&eval, &mut a, &mut RandomSource::new(77));
        let mut b = start.clone();
        FirstImprovement.improve(&eval, &mut b, &mut RandomSource::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tiny_instances_are_noops() {
        let inst = QapInstance::new(vec![vec![0]], vec![vec![0]]).unwrap();
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(1);
        let mut sol = vec![0];
        assert_eq!(
            BestImprovement.improve(&eval, &mut sol, &mut rng),
            LocalSearchOutcome::default()
        );
        assert_eq!(
            FirstImprovement.improve(&eval, &mut sol, &mut rng),
            LocalSearchOutcome::default()
        );
        assert_eq!(eval.evaluations(), 0);
    }

    #[test]
    fn test_names() {
        assert_eq!(BestImprovement.name(), "best-improvement");
        assert_eq!(FirstImprovement.name(), "first-improvement");
    }
}
