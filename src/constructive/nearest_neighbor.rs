//! Nearest-neighbor constructive heuristic.
//!
//! Builds an open path greedily: starting from the start point, always visit
//! the nearest unvisited stop.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP-like problems. It is
//! deterministic and typically 15-25% above optimal, which makes it a handy
//! baseline against the randomized colony.

use crate::distance::DistanceMatrix;

/// Constructs an open path using the nearest-neighbor heuristic.
///
/// Returns matrix indices `1..=n` in visiting order; ties go to the lowest
/// index.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::DistanceMatrix;
/// use u_delivery::constructive::nearest_neighbor_path;
///
/// // Start at 0; stops at positions 3, 1, 2 on a line.
/// let pos: [f64; 4] = [0.0, 3.0, 1.0, 2.0];
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (pos[i] - pos[j]).abs());
///     }
/// }
///
/// assert_eq!(nearest_neighbor_path(&dm), vec![2, 3, 1]);
/// ```
pub fn nearest_neighbor_path(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size().saturating_sub(1);
    let mut unvisited: Vec<usize> = (1..=n).collect();
    let mut path = Vec::with_capacity(n);
    let mut current = 0;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        path.push(next);
        current = next;
    }

    path
}
