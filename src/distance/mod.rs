//! Great-circle distances and the dense distance matrix.
//!
//! Provides the haversine distance between coordinates and a matrix over
//! the start point (index 0) and the delivery stops (indices 1..=n).

mod haversine;
mod matrix;

pub use haversine::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
