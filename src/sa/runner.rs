//! SA execution loop.

use super::config::{CoolingSchedule, SaConfig};
use crate::error::QapError;
use crate::evaluator::CostEvaluator;
use crate::observer::{NoOpObserver, SearchEvent, SearchObserver};
use crate::random::RandomSource;
use crate::solution::is_permutation;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The best solution found.
    pub best: Vec<usize>,

    /// Cost of the best solution.
    pub best_cost: i64,

    /// Number of cooling stages executed.
    pub stages: usize,

    /// Total number of neighbors generated.
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes Simulated Annealing with swap moves.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `initial`.
    pub fn run(
        evaluator: &CostEvaluator<'_>,
        initial: Vec<usize>,
        config: &SaConfig,
        rng: &mut RandomSource,
    ) -> Result<SaResult, QapError> {
        Self::run_with_cancel(evaluator, initial, config, rng, &mut NoOpObserver, None)
    }

    /// Runs SA, reporting one event per cooling stage and checking `cancel`
    /// between stages.
    pub fn run_with_cancel(
        evaluator: &CostEvaluator<'_>,
        initial: Vec<usize>,
        config: &SaConfig,
        rng: &mut RandomSource,
        observer: &mut dyn SearchObserver,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult, QapError> {
        config.validate().map_err(QapError::InvalidConfig)?;
        let n = evaluator.size();
        if !is_permutation(&initial, n) {
            return Err(QapError::InvalidSolution { expected: n });
        }

        let mut current = initial;
        let mut current_cost = evaluator.full_cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let t0 = config.initial_temperature(current_cost);
        let mut temperature = t0;
        let max_stages = config.stages_factor * n;

        let mut stages = 0usize;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        log::debug!(
            "sa: n={n} initial_cost={current_cost} t0={t0:.4} max_stages={max_stages}"
        );

        if n >= 2 {
            for k in 0..max_stages {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        cancelled = true;
                        break;
                    }
                }

                let mut generated = 0usize;
                let mut successes = 0usize;

                // Markov chain at constant temperature
                while generated < config.max_neighbors && successes < config.max_successes {
                    generated += 1;
                    let (r, s) = rng.distinct_pair(n);
                    let delta = evaluator.delta(r, s, &current);

                    let accept = if delta < 0 {
                        improving_moves += 1;
                        true
                    } else if temperature > config.min_temperature {
                        let probability = (-(delta as f64) / temperature).exp();
                        rng.uniform_real() < probability
                    } else {
                        false
                    };

                    if accept {
                        current.swap(r, s);
                        current_cost += delta;
                        successes += 1;

                        if current_cost < best_cost {
                            best.copy_from_slice(&current);
                            best_cost = current_cost;
                        }
                    }
                }

                total_iterations += generated;
                accepted_moves += successes;
                stages += 1;

                observer.on_event(&SearchEvent::Annealing {
                    stage: k,
                    temperature,
                    generated,
                    accepted: successes,
                    current_cost,
                    best_cost,
                });

                temperature = cool(temperature, t0, k + 1, config);
                if temperature < config.min_temperature {
                    break;
                }
            }
        }

        log::debug!(
            "sa: finished after {stages} stages, best_cost={best_cost}, final_t={temperature:.6}"
        );

        Ok(SaResult {
            best,
            best_cost,
            stages,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
        })
    }
}

/// Temperature for stage `k` (k ≥ 1).
fn cool(temperature: f64, t0: f64, k: usize, config: &SaConfig) -> f64 {
    match config.cooling {
        CoolingSchedule::Cauchy => t0 / (1.0 + k as f64),
        CoolingSchedule::Geometric { alpha } => temperature * alpha,
    }
}
