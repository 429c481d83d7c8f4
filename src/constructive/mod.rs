//! Constructive heuristics for ordering delivery stops.
//!
//! - [`fallback_order`] — Input order for two or fewer stops, O(n)
//! - [`nearest_neighbor_path`] — Greedy open path from the start point, O(n²)

mod fallback;
mod nearest_neighbor;

pub use fallback::{fallback_order, FALLBACK_MAX_STOPS};
pub use nearest_neighbor::nearest_neighbor_path;
