//! GRASP execution loop.

use super::config::GraspConfig;
use crate::construction::randomized_greedy;
use crate::diversity::hamming_distance;
use crate::error::QapError;
use crate::evaluator::CostEvaluator;
use crate::local_search::{BestImprovement, LocalSearch};
use crate::observer::{NoOpObserver, SearchEvent, SearchObserver};
use crate::random::RandomSource;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GRASP run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspResult {
    /// Best solution found.
    pub best: Vec<usize>,
    /// Cost of the best solution.
    pub best_cost: i64,
    /// Iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found.
    pub best_iteration: usize,
    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// GRASP runner.
pub struct GraspRunner;

impl GraspRunner {
    /// Runs GRASP with best-improvement local search.
    pub fn run(
        evaluator: &CostEvaluator<'_>,
        config: &GraspConfig,
        rng: &mut RandomSource,
    ) -> Result<GraspResult, QapError> {
        Self::run_with_cancel(
            evaluator,
            config,
            &BestImprovement,
            rng,
            &mut NoOpObserver,
            None,
        )
    }

    /// Runs GRASP with a chosen local search, one event per iteration, and
    /// a cancellation check between iterations.
    pub fn run_with_cancel(
        evaluator: &CostEvaluator<'_>,
        config: &GraspConfig,
        local_search: &dyn LocalSearch,
        rng: &mut RandomSource,
        observer: &mut dyn SearchObserver,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GraspResult, QapError> {
        config.validate().map_err(QapError::InvalidConfig)?;
        let instance = evaluator.instance();

        log::debug!(
            "grasp: n={} iterations={} alpha={} local_search={}",
            instance.size(),
            config.max_iterations,
            config.alpha,
            local_search.name()
        );

        let mut incumbent: Option<(Vec<usize>, i64)> = None;
        let mut best_iteration = 0;
        let mut iterations = 0;
        let mut cancelled = false;

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut solution = randomized_greedy(instance, config.alpha, rng);
            let constructed_cost = evaluator.full_cost(&solution);
            local_search.improve(evaluator, &mut solution, rng);
            let refined_cost = evaluator.full_cost(&solution);

            let distance_to_incumbent = incumbent
                .as_ref()
                .map(|(best, _)| hamming_distance(&solution, best));
            let improved = incumbent
                .as_ref()
                .is_none_or(|&(_, best_cost)| refined_cost < best_cost);
            if improved {
                incumbent = Some((solution, refined_cost));
                best_iteration = iteration;
            }
            iterations = iteration + 1;

            let best_cost = incumbent.as_ref().map_or(refined_cost, |&(_, c)| c);
            log::trace!(
                "grasp: iteration {iteration} constructed={constructed_cost} refined={refined_cost} best={best_cost}"
            );
            observer.on_event(&SearchEvent::Grasp {
                iteration,
                constructed_cost,
                refined_cost,
                distance_to_incumbent,
                improved,
                best_cost,
            });
        }

        // Cancelled before the first iteration: fall back to one greedy
        // construction so the result always holds a valid permutation.
        let (best, best_cost) = match incumbent {
            Some(found) => found,
            None => {
                let solution = randomized_greedy(instance, 0.0, rng);
                let cost = evaluator.full_cost(&solution);
                (solution, cost)
            }
        };

        log::debug!("grasp: finished after {iterations} iterations, best_cost={best_cost}");

        Ok(GraspResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            cancelled,
        })
    }
}
