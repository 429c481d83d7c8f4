//! Route, estimate, and plan types.

use serde::{Deserialize, Serialize};

use super::Stop;
use crate::error::{Result, RoutingError};

/// A visiting order over delivery stops.
///
/// Holds 0-based indices into the caller's stop slice, in the order the
/// vehicle should visit them after leaving the start point. The start point
/// itself is implicit and not stored.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Route;
///
/// let route = Route::new(vec![2, 0, 1]);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.stop_indices(), &[2, 0, 1]);
/// assert!(route.is_permutation());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    order: Vec<usize>,
}

impl Route {
    /// Creates a route from stop indices in visiting order.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Creates an empty route.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a route from distance-matrix indices (`1..=n`, 0 = start).
    pub(crate) fn from_matrix_indices(indices: &[usize]) -> Self {
        Self::new(indices.iter().map(|&i| i - 1).collect())
    }

    /// Stop indices in visiting order.
    pub fn stop_indices(&self) -> &[usize] {
        &self.order
    }

    /// Distance-matrix indices in visiting order (stop index + 1).
    pub fn matrix_indices(&self) -> Vec<usize> {
        self.order.iter().map(|&i| i + 1).collect()
    }

    /// Number of stops in this route.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the route visits no stops.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if every index in `0..len` appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.order.len();
        let mut seen = vec![false; n];
        for &i in &self.order {
            if i >= n || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    /// Returns the caller's stops in visiting order.
    ///
    /// Fails with [`RoutingError::DimensionMismatch`] if the route was built
    /// for a different number of stops.
    pub fn apply<'a, T>(&self, stops: &'a [Stop<T>]) -> Result<Vec<&'a Stop<T>>> {
        if stops.len() != self.order.len() {
            return Err(RoutingError::DimensionMismatch {
                expected: self.order.len(),
                actual: stops.len(),
            });
        }
        self.order
            .iter()
            .map(|&i| {
                stops.get(i).ok_or(RoutingError::DimensionMismatch {
                    expected: i + 1,
                    actual: stops.len(),
                })
            })
            .collect()
    }
}

/// Distance and time estimate for a route.
///
/// All durations are whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    /// Start to first stop plus every consecutive leg, in kilometers.
    pub distance_km: f64,
    /// Driving time at the configured average speed.
    pub travel_minutes: u32,
    /// Per-stop service time summed over all stops.
    pub service_minutes: u32,
    /// `travel_minutes + service_minutes`.
    pub total_minutes: u32,
}

/// An optimized route together with its estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Visiting order.
    pub route: Route,
    /// Distance and time for `route`.
    pub estimate: RouteEstimate,
}
