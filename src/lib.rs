//! Trajectory metaheuristics for the Quadratic Assignment Problem (QAP).
//!
//! A QAP instance assigns `n` units to `n` locations; the cost of an
//! assignment `π` is `Σ_{i≠j} flow[i][j] · distance[π(i)][π(j)]`. Solutions
//! are permutations stored as `Vec<usize>` with `solution[unit] = location`.
//!
//! Provides the shared building blocks and the searches built from them:
//!
//! - **Evaluation**: [`CostEvaluator`] with O(n²) full cost, O(n) swap delta
//!   and an effort counter.
//! - **Construction**: potential-based [`greedy`] and
//!   [`randomized_greedy`] (restricted candidate list).
//! - **Local search**: [`BestImprovement`] and [`FirstImprovement`] over the
//!   swap neighborhood.
//! - **Simulated Annealing (SA)**: Metropolis acceptance with Cauchy cooling.
//! - **Tabu Search (TS)**: sampled neighborhood, recency memory, aspiration
//!   and periodic restarts.
//! - **GRASP**: randomized construction followed by local search.
//! - **Iterated Local Search (ILS)**: sublist kicks on the incumbent.
//! - **Variable Neighborhood Search (VNS)**: shakes of growing width.
//! - **Random search**: sampling baseline.
//!
//! Every search takes its randomness as an explicit [`RandomSource`], so a
//! nonzero seed reproduces a run exactly. Per-iteration diagnostics are
//! delivered as [`SearchEvent`]s to a [`SearchObserver`].
//!
//! # Example
//!
//! ```
//! use qap_metaheur::tabu::{TabuConfig, TabuRunner};
//! use qap_metaheur::{greedy, CostEvaluator, QapInstance, RandomSource};
//!
//! let m: Vec<Vec<i64>> = (0..5)
//!     .map(|i| (0..5).map(|j| if i == j { 0 } else { ((i + j) % 7) as i64 }).collect())
//!     .collect();
//! let instance = QapInstance::new(m.clone(), m).unwrap();
//! let evaluator = CostEvaluator::new(&instance);
//!
//! let start = greedy(&instance);
//! assert_eq!(evaluator.full_cost(&start), 252);
//!
//! let mut rng = RandomSource::new(123456);
//! let result = TabuRunner::run(&evaluator, start, &TabuConfig::default(), &mut rng).unwrap();
//! assert!(result.best_cost <= 252);
//! ```

pub mod construction;
pub mod diversity;
pub mod error;
pub mod evaluator;
pub mod grasp;
pub mod ils;
pub mod instance;
pub mod local_search;
pub mod observer;
pub mod perturbation;
pub mod random;
pub mod random_search;
pub mod sa;
pub mod solution;
pub mod tabu;
pub mod vns;

pub use construction::{greedy, randomized_greedy};
pub use diversity::{hamming_distance, population_diversity};
pub use error::{InstanceError, QapError};
pub use evaluator::{CostEvaluator, EffortWeights};
pub use instance::QapInstance;
pub use local_search::{BestImprovement, FirstImprovement, LocalSearch, LocalSearchOutcome};
pub use observer::{EventLog, LogObserver, NoOpObserver, SearchEvent, SearchObserver};
pub use perturbation::mutate_sublist;
pub use random::RandomSource;
pub use solution::{is_permutation, random_permutation};
