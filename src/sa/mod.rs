//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Random swap moves are evaluated incrementally; worsening
//! moves are accepted with the Metropolis probability `exp(-delta / T)`, and
//! the temperature follows a Cauchy schedule from a cost-derived `T_0`.
//!
//! Each temperature stage runs a short Markov chain that ends after a fixed
//! number of generated neighbors or accepted moves, whichever comes first.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Szu & Hartley (1987), "Fast Simulated Annealing"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
