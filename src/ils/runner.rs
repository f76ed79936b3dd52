//! Iterated Local Search execution loop.

use super::config::IlsConfig;
use crate::diversity::hamming_distance;
use crate::error::QapError;
use crate::evaluator::CostEvaluator;
use crate::local_search::{BestImprovement, LocalSearch};
use crate::observer::{NoOpObserver, SearchEvent, SearchObserver};
use crate::perturbation::mutate_sublist;
use crate::random::RandomSource;
use crate::solution::random_permutation;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an ILS run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsResult {
    /// Best solution found.
    pub best: Vec<usize>,
    /// Cost of the best solution.
    pub best_cost: i64,
    /// Cost of the initial local optimum.
    pub initial_cost: i64,
    /// Rounds executed.
    pub rounds: usize,
    /// Rounds whose candidate replaced the incumbent.
    pub accepted: usize,
    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Iterated Local Search runner.
pub struct IlsRunner;

impl IlsRunner {
    /// Runs ILS with best-improvement local search.
    pub fn run(
        evaluator: &CostEvaluator<'_>,
        config: &IlsConfig,
        rng: &mut RandomSource,
    ) -> Result<IlsResult, QapError> {
        Self::run_with_cancel(
            evaluator,
            config,
            &BestImprovement,
            rng,
            &mut NoOpObserver,
            None,
        )
    }

    /// Runs ILS with a chosen local search, one event per round, and a
    /// cancellation check between rounds.
    pub fn run_with_cancel(
        evaluator: &CostEvaluator<'_>,
        config: &IlsConfig,
        local_search: &dyn LocalSearch,
        rng: &mut RandomSource,
        observer: &mut dyn SearchObserver,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<IlsResult, QapError> {
        config.validate().map_err(QapError::InvalidConfig)?;
        let n = evaluator.size();
        let kick = config.kick_size(n);

        let mut incumbent = random_permutation(n, rng);
        local_search.improve(evaluator, &mut incumbent, rng);
        let mut incumbent_cost = evaluator.full_cost(&incumbent);
        let initial_cost = incumbent_cost;

        log::debug!(
            "ils: n={n} initial_cost={initial_cost} rounds={} kick={kick}",
            config.rounds
        );

        let mut candidate = incumbent.clone();
        let mut rounds = 0;
        let mut accepted_rounds = 0;
        let mut cancelled = false;

        for round in 0..config.rounds {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Always kick the incumbent, never the previous candidate
            candidate.copy_from_slice(&incumbent);
            mutate_sublist(&mut candidate, kick, rng);
            local_search.improve(evaluator, &mut candidate, rng);
            let candidate_cost = evaluator.full_cost(&candidate);

            let distance_to_incumbent = hamming_distance(&candidate, &incumbent);
            let accepted = candidate_cost < incumbent_cost;
            observer.on_event(&SearchEvent::Ils {
                round,
                candidate_cost,
                incumbent_cost,
                distance_to_incumbent,
                accepted,
            });

            if accepted {
                std::mem::swap(&mut incumbent, &mut candidate);
                incumbent_cost = candidate_cost;
                accepted_rounds += 1;
            }
            rounds = round + 1;
        }

        log::debug!(
            "ils: finished after {rounds} rounds ({accepted_rounds} accepted), best_cost={incumbent_cost}"
        );

        Ok(IlsResult {
            best: incumbent,
            best_cost: incumbent_cost,
            initial_cost,
            rounds,
            accepted: accepted_rounds,
            cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::QapInstance;
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
    fn test_ils_never_worse_than_initial_optimum() {
        let inst = random_instance(16, 40);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(2024);

        let result = IlsRunner::run(&eval, &IlsConfig::default(), &mut rng).unwrap();

        assert!(is_permutation(&result.best, 16));
        assert!(result.best_cost <= result.initial_cost);
        assert_eq!(eval.full_cost(&result.best), result.best_cost);
        assert_eq!(result.rounds, 9);
        assert!(result.accepted <= 9);
    }

    #[test]
    fn test_ils_events_track_incumbent() {
        let inst = random_instance(12, 6);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(99);
        let mut log = EventLog::new();
        let config = IlsConfig::default().with_rounds(20);

        let result = IlsRunner::run_with_cancel(
            &eval,
            &config,
            &BestImprovement,
            &mut rng,
            &mut log,
            None,
        )
        .unwrap();

        let mut incumbent = result.initial_cost;
        let mut accepted = 0;
        for (i, event) in log.events().iter().enumerate() {
            match *event {
                SearchEvent::Ils {
                    round,
                    candidate_cost,
                    incumbent_cost,
                    distance_to_incumbent,
                    accepted: ok,
                } => {
                    assert_eq!(round, i);
                    assert_eq!(incumbent_cost, incumbent);
                    assert_eq!(ok, candidate_cost < incumbent_cost);
                    assert!(distance_to_incumbent <= 12);
                    if ok {
                        incumbent = candidate_cost;
                        accepted += 1;
                    }
                }
                ref other => panic!("unexpected event {other:?}"),
            }
        }
        assert_eq!(incumbent, result.best_cost);
        assert_eq!(accepted, result.accepted);
    }

    #[test]
    fn test_ils_small_instance_has_no_kick() {
        // n / 4 = 1: the kick is a no-op, so every candidate equals the
        // incumbent and nothing is ever accepted
        let inst = random_instance(7, 2);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(3);
        let mut log = EventLog::new();

        let result = IlsRunner::run_with_cancel(
            &eval,
            &IlsConfig::default(),
            &BestImprovement,
            &mut rng,
            &mut log,
            None,
        )
        .unwrap();

        assert_eq!(result.accepted, 0);
        assert_eq!(result.best_cost, result.initial_cost);
        assert!(log.events().iter().all(|e| matches!(
            e,
            SearchEvent::Ils {
                distance_to_incumbent: 0,
                accepted: false,
                ..
            }
        )));
    }

    #[test]
    fn test_ils_deterministic() {
        let inst = random_instance(10, 19);
        let eval = CostEvaluator::new(&inst);
        let a = IlsRunner::run(&eval, &IlsConfig::default(), &mut RandomSource::new(8)).unwrap();
        let b = IlsRunner::run(&eval, &IlsConfig::default(), &mut RandomSource::new(8)).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.accepted, b.accepted);
    }

    #[test]
    fn test_ils_cancellation() {
        let inst = random_instance(8, 1);
        let eval = CostEvaluator::new(&inst);
        let mut rng = RandomSource::new(4);
        let result = IlsRunner::run_with_cancel(
            &eval,
            &IlsConfig::default(),
            &BestImprovement,
            &mut rng,
            &mut NoOpObserver,
            Some(Arc::new(AtomicBool::new(true))),
        )
        .unwrap();
        assert!(result.cancelled);
        assert_eq!(result.rounds, 0);
        assert_eq!(result.best_cost, result.initial_cost);
    }
}
