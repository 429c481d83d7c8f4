//! Route distance and time estimation.

mod estimator;

pub use estimator::{estimate, EstimateConfig};
