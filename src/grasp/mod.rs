//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! A multi-start metaheuristic: every iteration builds a fresh solution with
//! the randomized potential-based heuristic, drives it to a swap local
//! optimum, and keeps the best one seen. Iterations are independent of each
//! other apart from the shared random stream.
//!
//! # References
//!
//! - Feo, T. & Resende, M. (1995). "Greedy Randomized Adaptive Search
//!   Procedures", *Journal of Global Optimization* 6, 109-133.
//! - Li, Pardalos & Resende (1994). "A greedy randomized adaptive search
//!   procedure for the quadratic assignment problem".

mod config;
mod runner;

pub use config::GraspConfig;
pub use runner::{GraspResult, GraspRunner};
