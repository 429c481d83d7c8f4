//! Ant Colony Optimization for open single-vehicle paths.
//!
//! Ants start at the fixed root (index 0) and build Hamiltonian paths over
//! the stops `1..=n`, choosing each next stop with probability proportional
//! to `τ^α · (1/d)^β`. After every iteration all pheromone evaporates by a
//! factor `1 - ρ`, then every ant deposits `1/length` on the edges it used.
//! The best path ever seen is retained.
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L.M. (1997). "Ant colonies for the travelling
//! salesman problem", *BioSystems* 43(2), 73-81.

mod cancel;
mod config;
mod pheromone;
mod runner;

pub use cancel::CancellationToken;
pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
