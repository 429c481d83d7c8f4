//! # u-delivery
//!
//! Single-vehicle delivery route sequencing. Orders a set of geocoded stops
//! after a start point so that total great-circle travel distance is small,
//! using Ant Colony Optimization, and estimates travel and service time.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoPoint, Stop, Route, RouteEstimate)
//! - [`distance`] — Haversine distance and the distance matrix
//! - [`aco`] — Ant colony solver with pheromone matrix and cancellation
//! - [`constructive`] — Fallback ordering and nearest-neighbor baseline
//! - [`local_search`] — Open-path 2-opt
//! - [`evaluation`] — Distance and time estimates
//! - [`optimizer`] — [`RouteOptimizer`], the entry point
//!
//! Units: kilometers, minutes, decimal degrees (WGS84).

pub mod aco;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod optimizer;

pub use error::{Result, RoutingError};
pub use optimizer::{OptimizeOutcome, RouteOptimizer};
