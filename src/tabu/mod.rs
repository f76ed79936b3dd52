//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that uses a recency memory to
//! forbid reversing recent swaps, preventing cycling and pushing the search
//! into new regions. Each iteration samples a fixed number of random swap
//! moves rather than the full neighborhood, and the search periodically
//! restarts from a random solution with a cleared memory.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search - Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search - Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use runner::{TabuResult, TabuRunner};
