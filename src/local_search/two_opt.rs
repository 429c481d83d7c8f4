//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! The path starts at the fixed root (index 0) and has no return leg. For
//! each segment `[i..=j]`, compute the change in distance from reversing it:
//!
//! ```text
//! delta = d(prev_i, r[j]) + d(r[i], next_j) - d(prev_i, r[i]) - d(r[j], next_j)
//! ```
//!
//! where `prev_i` is the root when `i == 0`, and the `next_j` terms vanish
//! when `j` is the last position. If delta < 0, reverse the segment.
//! Repeat until no further improvements are found (first-improvement strategy).
//!
//! Assumes a symmetric distance matrix, so the interior of a reversed segment
//! keeps its length.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

/// Applies 2-opt improvement to an open path rooted at index 0.
///
/// Returns the improved path and its length.
///
/// # Arguments
///
/// * `path` — Ordered matrix indices (excluding the root)
/// * `distances` — Symmetric distance matrix
///
/// # Examples
///
/// ```
/// use u_delivery::distance::DistanceMatrix;
/// use u_delivery::local_search::two_opt_open;
///
/// // Points on a line at 0, 1, 2, 3.
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// let (improved, dist) = two_opt_open(&[3, 2, 1], &dm);
/// assert_eq!(improved, vec![1, 2, 3]);
/// assert_eq!(dist, 3.0);
/// ```
pub fn two_opt_open(path: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = path.to_vec();
    if current.len() < 2 {
        let dist = distances.path_distance(&current);
        return (current, dist);
    }

    let mut improved = true;
    while improved {
        improved = false;
        let n = current.len();

        for i in 0..n - 1 {
            for j in i + 1..n {
                let delta = two_opt_delta(&current, distances, i, j);
                if delta < -1e-10 {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let dist = distances.path_distance(&current);
    (current, dist)
}

/// Distance change from reversing `path[i..=j]`.
fn two_opt_delta(path: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let prev_i = if i == 0 { 0 } else { path[i - 1] };

    let mut old_cost = distances.get(prev_i, path[i]);
    let mut new_cost = distances.get(prev_i, path[j]);
    if let Some(&next_j) = path.get(j + 1) {
        old_cost += distances.get(path[j], next_j);
        new_cost += distances.get(path[i], next_j);
    }

    new_cost - old_cost
}
