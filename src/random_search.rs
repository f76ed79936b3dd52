//! Random sampling baseline.
//!
//! Draws independent uniform permutations and keeps the cheapest. Useful as
//! a floor when comparing the trajectory methods.

use crate::error::QapError;
use crate::evaluator::CostEvaluator;
use crate::observer::{NoOpObserver, SearchEvent, SearchObserver};
use crate::random::RandomSource;
use crate::solution::random_permutation;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration for random search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSearchConfig {
    /// Samples drawn = `samples_factor * n`.
    pub samples_factor: usize,
}

impl Default for RandomSearchConfig {
    fn default() -> Self {
        Self {
            samples_factor: 1000,
        }
    }
}

impl RandomSearchConfig {
    /// Sets the sample budget per unit.
    pub fn with_samples_factor(mut self, factor: usize) -> Self {
        self.samples_factor = factor;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.samples_factor == 0 {
            return Err("samples_factor must be at least 1".into());
        }
        Ok(())
    }
}

/// Result of a random search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomSearchResult {
    /// Cheapest sample.
    pub best: Vec<usize>,
    /// Its cost.
    pub best_cost: i64,
    /// Samples drawn.
    pub samples: usize,
    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Random search runner.
pub struct RandomSearchRunner;

impl RandomSearchRunner {
    /// Samples `samples_factor * n` permutations.
    pub fn run(
        evaluator: &CostEvaluator<'_>,
        config: &RandomSearchConfig,
        rng: &mut RandomSource,
    ) -> Result<RandomSearchResult, QapError> {
        Self::run_with_cancel(evaluator, config, rng, &mut NoOpObserver, None)
    }

    /// Samples permutations, emitting an event whenever the best improves.
    pub fn run_with_cancel(
        evaluator: &CostEvaluator<'_>,
        config: &RandomSearchConfig,
        rng: &mut RandomSource,
        observer: &mut dyn SearchObserver,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RandomSearchResult, QapError> {
        config.validate().map_err(QapError::InvalidConfig)?;
        let n = evaluator.size();
        let total = config.samples_factor * n;

        log::debug!("random search: n={n} samples={total}");

        let mut best = random_permutation(n, rng);
        let mut best_cost = evaluator.full_cost(&best);
        observer.on_event(&SearchEvent::RandomSample {
            sample: 0,
            best_cost,
        });

        let mut samples = 1;
        let mut cancelled = false;
        for sample in 1..total {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let candidate = random_permutation(n, rng);
            let cost = evaluator.full_cost(&candidate);
            if cost < best_cost {
                best = candidate;
                best_cost = cost;
                observer.on_event(&SearchEvent::RandomSample { sample, best_cost });
            }
            samples = sample + 1;
        }

        log::debug!("random search: finished after {samples} samples, best_cost={best_cost}");

        Ok(RandomSearchResult {
            best,
            best_cost,
            samples,
            cancelled,
        })
    }
}
