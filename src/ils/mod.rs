//! Iterated Local Search (ILS).
//!
//! Repeatedly kicks the incumbent local optimum with a circular sublist
//! shuffle and re-optimizes it; the result replaces the incumbent only on
//! strict improvement.
//!
//! # References
//!
//! - Lourenço, Martin & Stützle (2003). "Iterated Local Search",
//!   *Handbook of Metaheuristics*, 321-353.
//! - Stützle, T. (2006). "Iterated local search for the quadratic assignment
//!   problem", *European Journal of Operational Research* 174(3), 1519-1539.

mod config;
mod runner;

pub use config::IlsConfig;
pub use runner::{IlsResult, IlsRunner};
