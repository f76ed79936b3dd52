//! Variable Neighborhood Search (VNS).
//!
//! A single-solution metaheuristic that systematically changes the
//! neighborhood used for perturbation. Each step shakes a copy of the current
//! local optimum with a circular sublist shuffle whose width depends on `k`,
//! then applies local search. On improvement the search moves there and
//! returns to the smallest neighborhood; otherwise it tries the next, wider
//! one.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod runner;

pub use config::VnsConfig;
pub use runner::{VnsResult, VnsRunner};
