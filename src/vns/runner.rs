//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm (Basic VNS)
//!
//! 1. Generate a random solution x, apply local search
//! 2. Set k = 1, round = 0
//! 3. While round < max_rounds:
//!    a. **Shaking**: shuffle a circular sublist of a copy of x, with a
//!    width that grows with k
//!    b. **Local search**: refine the copy into x'
//!    c. **Move or not**: if f(x') < f(x), set x = x', k = 1 and count a
//!    round; otherwise k = k + 1
//!    d. If k > k_max, reset k = 1 and count a round (one full sweep done)
//! 4. Return x
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use super::config::VnsConfig;
use crate::error::QapError;
use crate::evaluator::CostEvaluator;
use crate::local_search::{BestImprovement, LocalSearch};
use crate::observer::{NoOpObserver, SearchEvent, SearchObserver};
use crate::perturbation::mutate_sublist;
use crate::random::RandomSource;
use crate::solution::random_permutation;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a VNS run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsResult {
    /// Best solution found.
    pub best: Vec<usize>,
    /// Cost of the best solution.
    pub best_cost: i64,
    /// Total shake + local search steps executed.
    pub steps: usize,
    /// Rounds completed.
    pub rounds: usize,
    /// Step at which the best solution was found (`None` = initial optimum).
    pub best_step: Option<usize>,
    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Executes Basic VNS with best-improvement local search.
    ///
    /// # Examples
    ///
    /// ```
    /// use qap_metaheur::vns::{VnsConfig, VnsRunner};
    /// use qap_metaheur::{CostEvaluator, QapInstance, RandomSource};
    ///
    /// let m: Vec<Vec<i64>> = (0..6)
    ///     .map(|i| (0..6).map(|j| if i == j { 0 } else { ((i + j) % 7) as i64 }).collect())
    ///     .collect();
    /// let instance = QapInstance::new(m.clone(), m).unwrap();
    /// let evaluator = CostEvaluator::new(&instance);
    /// let mut rng = RandomSource::new(17);
    ///
    /// let config = VnsConfig::default().with_max_rounds(5);
    /// let result = VnsRunner::run(&evaluator, &config, &mut rng).unwrap();
    /// assert_eq!(result.rounds, 5);
    /// assert_eq!(evaluator.full_cost(&result.best), result.best_cost);
    /// ```
    pub fn run(
        evaluator: &CostEvaluator<'_>,
        config: &VnsConfig,
        rng: &mut RandomSource,
    ) -> Result<VnsResult, QapError> {
        Self::run_with_cancel(
            evaluator,
            config,
            &BestImprovement,
            rng,
            &mut NoOpObserver,
            None,
        )
    }

    /// Executes Basic VNS with a chosen local search, emitting one event per
    /// step and checking `cancel` between steps.
    pub fn run_with_cancel(
        evaluator: &CostEvaluator<'_>,
        config: &VnsConfig,
        local_search: &dyn LocalSearch,
        rng: &mut RandomSource,
        observer: &mut dyn SearchObserver,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<VnsResult, QapError> {
        config.validate().map_err(QapError::InvalidConfig)?;
        let n = evaluator.size();

        let mut current = random_permutation(n, rng);
        local_search.improve(evaluator, &mut current, rng);
        let mut current_cost = evaluator.full_cost(&current);

        log::debug!(
            "vns: n={n} initial_cost={current_cost} k_max={} rounds={} local_search={}",
            config.k_max,
            config.max_rounds,
            local_search.name()
        );

        let mut k = 1;
        let mut round = 0;
        let mut step = 0;
        let mut best_step = None;
        let mut cancelled = false;
        let mut candidate = current.clone();

        while round < config.max_rounds {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            candidate.copy_from_slice(&current);
            mutate_sublist(&mut candidate, config.shake_size(k, n), rng);
            local_search.improve(evaluator, &mut candidate, rng);
            let candidate_cost = evaluator.full_cost(&candidate);

            let improved = candidate_cost < current_cost;
            observer.on_event(&SearchEvent::Vns {
                step,
                round,
                k,
                candidate_cost,
                current_cost,
                improved,
            });

            if improved {
                std::mem::swap(&mut current, &mut candidate);
                current_cost = candidate_cost;
                best_step = Some(step);
                k = 1;
                round += 1;
                log::trace!("vns: step {step} improved to {current_cost}");
            } else {
                k += 1;
                if k > config.k_max {
                    k = 1;
                    round += 1;
                }
            }
            step += 1;
        }

        log::debug!("vns: finished after {step} steps ({round} rounds), best_cost={current_cost}");

        Ok(VnsResult {
            best: current,
            best_cost: current_cost,
            steps: step,
            rounds: round,
            best_step,
            cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::QapInstance;
    use crate::local_search::FirstImprovement;
    use crate::observer::EventLog;
    use crate::solution::is_permutation;

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
    fn test_vns_returns_local_optimum() {
        let inst = random_instance(12, 31);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(123456);

        let result = VnsRunner::run(&eval, &VnsConfig::default(), &mut rng).unwrap();

        assert!(is_permutation(&result.best, 12));
        assert_eq!(eval.full_cost(&result.best), result.best_cost);
        assert_eq!(result.rounds, 50);
        for r in 0..12 {
            for s in (r + 1)..12 {
                assert!(eval.delta(r, s, &result.best) >= 0);
            }
        }
    }

    #[test]
    fn test_vns_round_counting() {
        let inst = random_instance(10, 8);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(77);
        let mut log = EventLog::new();
        let config = VnsConfig::default().with_max_rounds(20);

        let result = VnsRunner::run_with_cancel(
            &eval,
            &config,
            &BestImprovement,
            &mut rng,
            &mut log,
            None,
        )
        .unwrap();

        let events = log.events();
        assert_eq!(events.len(), result.steps);

        // Replay the neighborhood / round bookkeeping from the events
        let mut expected_k = 1;
        let mut expected_round = 0;
        for (i, event) in events.iter().enumerate() {
            match *event {
                SearchEvent::Vns {
                    step,
                    round,
                    k,
                    candidate_cost,
                    current_cost,
                    improved,
                } => {
                    assert_eq!(step, i);
                    assert_eq!(k, expected_k);
                    assert_eq!(round, expected_round);
                    assert_eq!(improved, candidate_cost < current_cost);
                    if improved {
                        expected_k = 1;
                        expected_round += 1;
                    } else if expected_k == 5 {
                        expected_k = 1;
                        expected_round += 1;
                    } else {
                        expected_k += 1;
                    }
                }
                ref other => panic!("unexpected event {other:?}"),
            }
        }
        assert_eq!(expected_round, 20);

        let history = log.best_cost_history();
        for w in history.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn test_vns_deterministic() {
        let inst = random_instance(9, 12);
        let eval = CostEvaluator::new(&inst);
        let config = VnsConfig::default().with_max_rounds(10);
        let a = VnsRunner::run(&eval, &config, &mut RandomSource::new(42)).unwrap();
        let b = VnsRunner::run(&eval, &config, &mut RandomSource::new(42)).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.steps, b.steps);
        assert_eq!(a.best_step, b.best_step);
    }

    #[test]
    fn test_vns_with_first_improvement() {
        let inst = random_instance(8, 3);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(5);
        let result = VnsRunner::run_with_cancel(
            &eval,
            &VnsConfig::default().with_max_rounds(5),
            &FirstImprovement,
            &mut rng,
            &mut NoOpObserver,
            None,
        )
        .unwrap();
        assert!(is_permutation(&result.best, 8));
    }

    #[test]
    fn test_vns_single_unit() {
        let inst = QapInstance::new(vec![vec![1]], vec![vec![1]]).unwrap();
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(1);
        let result = VnsRunner::run(&eval, &VnsConfig::default(), &mut rng).unwrap();
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.best_cost, 0);
        // nothing ever improves: every round is a full sweep
        assert_eq!(result.steps, 250);
        assert!(result.best_step.is_none());
    }

    #[test]
    fn test_vns_cancellation() {
        let inst = random_instance(6, 1);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(2);
        let result = VnsRunner::run_with_cancel(
            &eval,
            &VnsConfig::default(),
            &BestImprovement,
            &mut rng,
            &mut NoOpObserver,
            Some(Arc::new(AtomicBool::new(true))),
        )
        .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.steps, 0);
        assert!(is_permutation(&result.best, 6));
    }

    #[test]
    fn test_vns_rejects_bad_config() {
        let inst = random_instance(4, 1);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(2);
        let err = VnsRunner::run(&eval, &VnsConfig::default().with_k_max(0), &mut rng);
        assert!(matches!(err, Err(QapError::InvalidConfig(_))));
    }
}
