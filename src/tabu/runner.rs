//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the initial solution
//! 2. At each iteration:
//!    a. Sample a fixed number of random swap moves
//!    b. Select the lowest-delta move that is not tabu (or is tabu but
//!    satisfies aspiration)
//!    c. Apply it and forbid its reversal for `tenure` iterations
//!    d. Update the global best on strict improvement
//! 3. Every `restart_factor * n` iterations, restart from a random solution
//!    with an empty tabu memory
//! 4. Stop after `iterations_factor * n` iterations
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search - Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Taillard, É. (1991). "Robust taboo search for the quadratic assignment problem",
//! *Parallel Computing* 17, 443-455.

use super::config::TabuConfig;
use super::memory::TabuMemory;
use crate::error::QapError;
use crate::evaluator::CostEvaluator;
use crate::observer::{NoOpObserver, SearchEvent, SearchObserver};
use crate::random::RandomSource;
use crate::solution::{is_permutation, random_permutation};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best solution found.
    pub best: Vec<usize>,
    /// Cost of the best solution.
    pub best_cost: i64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found (0 = initial).
    pub best_iteration: usize,
    /// Number of diversification restarts performed.
    pub restarts: usize,
    /// Number of tabu moves applied through aspiration.
    pub aspirations: usize,
    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search from `initial`.
    pub fn run(
        evaluator: &CostEvaluator<'_>,
        initial: Vec<usize>,
        config: &TabuConfig,
        rng: &mut RandomSource,
    ) -> Result<TabuResult, QapError> {
        Self::run_with_cancel(evaluator, initial, config, rng, &mut NoOpObserver, None)
    }

    /// Executes Tabu Search, emitting one event per iteration and checking
    /// `cancel` at every iteration boundary.
    pub fn run_with_cancel(
        evaluator: &CostEvaluator<'_>,
        initial: Vec<usize>,
        config: &TabuConfig,
        rng: &mut RandomSource,
        observer: &mut dyn SearchObserver,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabuResult, QapError> {
        config.validate().map_err(QapError::InvalidConfig)?;
        let n = evaluator.size();
        if !is_permutation(&initial, n) {
            return Err(QapError::InvalidSolution { expected: n });
        }

        let mut current = initial;
        let mut current_cost = evaluator.full_cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut best_iteration = 0;

        let tenure = config.tenure_for(n);
        let total_iterations = config.iterations_factor * n;
        let restart_period = config.restart_factor * n;
        let mut memory = TabuMemory::new(n);

        let mut iterations = 0;
        let mut restarts = 0;
        let mut aspirations = 0;
        let mut cancelled = false;

        log::debug!(
            "tabu: n={n} initial_cost={current_cost} tenure={tenure} iterations={total_iterations}"
        );

        if n >= 2 {
            for iteration in 1..=total_iterations {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        cancelled = true;
                        break;
                    }
                }

                // Sample the neighborhood and keep the best admissible move
                let mut chosen: Option<(usize, usize, i64)> = None;
                for _ in 0..config.candidates {
                    let (r, s) = rng.distinct_pair(n);
                    let delta = evaluator.delta(r, s, &current);
                    let admissible = memory.admits(
                        r,
                        s,
                        iteration,
                        current_cost + delta,
                        best_cost,
                        config.aspiration,
                    );
                    if !admissible {
                        continue;
                    }
                    if chosen.is_none_or(|(_, _, d)| delta < d) {
                        chosen = Some((r, s, delta));
                    }
                }

                let mut moved = false;
                let mut aspiration = false;
                if let Some((r, s, delta)) = chosen {
                    let candidate_cost = current_cost + delta;
                    // legality is re-checked against the memory at the point of application
                    let admissible = memory.admits(
                        r,
                        s,
                        iteration,
                        candidate_cost,
                        best_cost,
                        config.aspiration,
                    );
                    if admissible {
                        aspiration = memory.is_tabu(r, s, iteration);
                        current.swap(r, s);
                        current_cost = candidate_cost;
                        memory.forbid(r, s, iteration, tenure);
                        moved = true;
                        if aspiration {
                            aspirations += 1;
                        }

                        if current_cost < best_cost {
                            best.copy_from_slice(&current);
                            best_cost = current_cost;
                            best_iteration = iteration;
                        }
                    }
                }

                let mut restarted = false;
                if restart_period > 0 && iteration % restart_period == 0 {
                    current = random_permutation(n, rng);
                    current_cost = evaluator.full_cost(&current);
                    memory.clear();
                    restarts += 1;
                    restarted = true;
                    log::debug!(
                        "tabu: restart #{restarts} at iteration {iteration}, best_cost={best_cost}"
                    );
                }

                iterations = iteration;
                observer.on_event(&SearchEvent::Tabu {
                    iteration,
                    current_cost,
                    best_cost,
                    moved,
                    aspiration,
                    restarted,
                });
            }
        }

        log::debug!("tabu: finished after {iterations} iterations, best_cost={best_cost}");

        Ok(TabuResult {
            best,
            best_cost,
            iterations,
            best_iteration,
            restarts,
            aspirations,
            cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::QapInstance;
    use crate::observer::EventLog;

    fn random_instance(n: usize, seed: u32) -> QapInstance {
        let mut rng = RandomSource::new(seed);
        let mut flow = vec![vec![0i64; n]; n];
        let mut dist = vec![vec![0i64; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    flow[i][j] = rng.uniform_int(1, 100) as i64;
                    dist[i][j] = rng.uniform_int(1, 100) as i64;
                }
            }
        }
        QapInstance::new(flow, dist).unwrap()
    }

    #[test]
    fn test_tabu_improves_on_start() {
        let inst = random_instance(12, 7);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(123456);
        let start = random_permutation(12, &mut rng);
        let start_cost = eval.full_cost(&start);

        let result = TabuRunner::run(&eval, start, &TabuConfig::default(), &mut rng).unwrap();

        assert!(is_permutation(&result.best, 12));
        assert!(result.best_cost < start_cost);
        assert_eq!(eval.full_cost(&result.best), result.best_cost);
        assert_eq!(result.iterations, 1200);
        assert!(result.best_iteration > 0 && result.best_iteration <= 1200);
    }

    #[test]
    fn test_tabu_restart_schedule() {
        let inst = random_instance(5, 2);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(1);
        let start = random_permutation(5, &mut rng);
        let mut log = EventLog::new();

        let result = TabuRunner::run_with_cancel(
            &eval,
            start,
            &TabuConfig::default(),
            &mut rng,
            &mut log,
            None,
        )
        .unwrap();

        // 500 iterations, restart every 40
        assert_eq!(result.restarts, 12);
        let restart_iterations: Vec<usize> = log
            .events()
            .iter()
            .filter_map(|e| match *e {
                SearchEvent::Tabu {
                    iteration,
                    restarted: true,
                    ..
                } => Some(iteration),
                _ => None,
            })
            .collect();
        assert_eq!(restart_iterations, (1..=12).map(|k| k * 40).collect::<Vec<_>>());
    }

    #[test]
    fn test_tabu_best_cost_history_non_increasing() {
        let inst = random_instance(9, 3);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(5);
        let start = random_permutation(9, &mut rng);
        let mut log = EventLog::new();

        TabuRunner::run_with_cancel(&eval, start, &TabuConfig::default(), &mut rng, &mut log, None)
            .unwrap();

        let history = log.best_cost_history();
        assert_eq!(history.len(), 900);
        for window in history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_tabu_deterministic() {
        let inst = random_instance(10, 11);
        let eval = CostEvaluator::new(&inst);
        let run = || {
            let mut rng = RandomSource::new(987654);
            let start = random_permutation(10, &mut rng);
            TabuRunner::run(&eval, start, &TabuConfig::default(), &mut rng).unwrap()
        };
        let a = run();
        let b = run();
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost, b.best_cost);
        assert_eq!(a.best_iteration, b.best_iteration);
    }

    #[test]
    fn test_tabu_without_restarts() {
        let inst = random_instance(6, 4);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(8);
        let start = random_permutation(6, &mut rng);
        let config = TabuConfig::default()
            .with_restart_factor(0)
            .with_iterations_factor(10);

        let result = TabuRunner::run(&eval, start, &config, &mut rng).unwrap();
        assert_eq!(result.restarts, 0);
        assert_eq!(result.iterations, 60);
    }

    #[test]
    fn test_tabu_cancellation() {
        let inst = random_instance(6, 4);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(8);
        let start = random_permutation(6, &mut rng);
        let cancel = Arc::new(AtomicBool::new(true));

        let result = TabuRunner::run_with_cancel(
            &eval,
            start.clone(),
            &TabuConfig::default(),
            &mut rng,
            &mut NoOpObserver,
            Some(cancel),
        )
        .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best, start);
    }

    #[test]
    fn test_tabu_aspiration_sets_new_best() {
        let mut total_aspirations = 0;
        for (n, seed) in [(15, 7), (16, 3), (18, 11), (20, 5)] {
            let inst = random_instance(n, seed);
            let eval = CostEvaluator::new(&inst);
            let mut rng = RandomSource::new(seed);
            let start = random_permutation(n, &mut rng);
            let start_cost = eval.full_cost(&start);
            let mut log = EventLog::new();
            let config = TabuConfig::default().with_tenure(n);

            let result =
                TabuRunner::run_with_cancel(&eval, start, &config, &mut rng, &mut log, None)
                    .unwrap();

            let mut previous_best = start_cost;
            let mut flagged = 0;
            for event in log.events() {
                if let SearchEvent::Tabu {
                    best_cost,
                    moved,
                    aspiration,
                    ..
                } = *event
                {
                    if aspiration {
                        // a tabu move is only allowed when it beats the best
                        assert!(moved);
                        assert!(best_cost < previous_best);
                        flagged += 1;
                    }
                    previous_best = best_cost;
                }
            }
            assert_eq!(flagged, result.aspirations);
            total_aspirations += result.aspirations;
        }
        assert!(total_aspirations > 0);
    }

    #[test]
    fn test_tabu_without_aspiration() {
        for (n, seed) in [(15, 7), (16, 3), (18, 11), (20, 5)] {
            let inst = random_instance(n, seed);
            let eval = CostEvaluator::new(&inst);
            let mut rng = RandomSource::new(seed);
            let start = random_permutation(n, &mut rng);
            let mut log = EventLog::new();
            let config = TabuConfig::default()
                .with_tenure(n)
                .with_aspiration(false);

            let result =
                TabuRunner::run_with_cancel(&eval, start, &config, &mut rng, &mut log, None)
                    .unwrap();

            assert_eq!(result.aspirations, 0);
            assert!(log.events().iter().all(|e| matches!(
                e,
                SearchEvent::Tabu {
                    aspiration: false,
                    ..
                }
            )));
            assert_eq!(eval.full_cost(&result.best), result.best_cost);
        }
    }

    #[test]
    fn test_tabu_single_unit() {
        let inst = QapInstance::new(vec![vec![3]], vec![vec![4]]).unwrap();
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(1);
        let result = TabuRunner::run(&eval, vec![0], &TabuConfig::default(), &mut rng).unwrap();
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.best_cost, 0);
        assert_eq!(result.iterations, 0);
    }
}
