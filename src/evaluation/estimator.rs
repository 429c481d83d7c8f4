//! Route estimator that computes distance, travel time, and service time.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::models::{Route, RouteEstimate};

/// Speed and service-time assumptions for [`estimate`].
///
/// # Examples
///
/// ```
/// use u_delivery::evaluation::EstimateConfig;
///
/// let config = EstimateConfig::default();
/// assert_eq!(config.average_speed_kmh, 30.0);
/// assert_eq!(config.service_minutes_per_stop, 15);
///
/// let fast = EstimateConfig::default().with_average_speed_kmh(60.0);
/// assert!(fast.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Constant average driving speed in km/h.
    pub average_speed_kmh: f64,
    /// Time spent at each stop, in minutes.
    pub service_minutes_per_stop: u32,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: 30.0,
            service_minutes_per_stop: 15,
        }
    }
}

impl EstimateConfig {
    /// Sets the average driving speed.
    pub fn with_average_speed_kmh(mut self, speed: f64) -> Self {
        self.average_speed_kmh = speed;
        self
    }

    /// Sets the per-stop service time.
    pub fn with_service_minutes_per_stop(mut self, minutes: u32) -> Self {
        self.service_minutes_per_stop = minutes;
        self
    }

    /// Rejects a non-positive or non-finite speed.
    pub fn validate(&self) -> Result<()> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(RoutingError::invalid(format!(
                "average_speed_kmh must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        Ok(())
    }
}

/// Estimates distance and time for a route.
///
/// Distance is the start-to-first leg plus every consecutive leg (no return
/// to the start). Travel time is derived from the configured average speed
/// and rounded to whole minutes; service time is the per-stop time times the
/// number of stops.
///
/// Fails with [`RoutingError::DimensionMismatch`] if the matrix is not sized
/// `route.len() + 1` or the route is not a permutation of its stops, and with
/// [`RoutingError::InvalidInput`] if any minute count does not fit in `u32`.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::DistanceMatrix;
/// use u_delivery::evaluation::{estimate, EstimateConfig};
/// use u_delivery::models::Route;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 10.0, 25.0,
///     10.0, 0.0, 5.0,
///     25.0, 5.0, 0.0,
/// ]).unwrap();
///
/// let est = estimate(&Route::new(vec![0, 1]), &dm, &EstimateConfig::default()).unwrap();
/// assert_eq!(est.distance_km, 15.0);
/// assert_eq!(est.travel_minutes, 30);
/// assert_eq!(est.service_minutes, 30);
/// assert_eq!(est.total_minutes, 60);
/// ```
pub fn estimate(
    route: &Route,
    distances: &DistanceMatrix,
    config: &EstimateConfig,
) -> Result<RouteEstimate> {
    config.validate()?;
    check_dimensions(route, distances)?;

    let distance_km = distances.path_distance(&route.matrix_indices());
    let travel = (distance_km / config.average_speed_kmh * 60.0).round();
    if !travel.is_finite() || travel > f64::from(u32::MAX) {
        return Err(minutes_overflow("travel"));
    }
    let travel_minutes = travel as u32;
    let service_minutes = u32::try_from(route.len())
        .ok()
        .and_then(|n| n.checked_mul(config.service_minutes_per_stop))
        .ok_or_else(|| minutes_overflow("service"))?;
    let total_minutes = travel_minutes
        .checked_add(service_minutes)
        .ok_or_else(|| minutes_overflow("total"))?;

    Ok(RouteEstimate {
        distance_km,
        travel_minutes,
        service_minutes,
        total_minutes,
    })
}

fn minutes_overflow(what: &str) -> RoutingError {
    RoutingError::invalid(format!("{what} minutes exceed u32::MAX"))
}

fn check_dimensions(route: &Route, distances: &DistanceMatrix) -> Result<()> {
    let expected = route.len() + 1;
    if distances.size() != expected {
        return Err(RoutingError::DimensionMismatch {
            expected,
            actual: distances.size(),
        });
    }
    if !route.is_permutation() {
        let mut distinct: Vec<usize> = route
            .stop_indices()
            .iter()
            .copied()
            .filter(|&i| i < route.len())
            .collect();
        distinct.sort_unstable();
        distinct.dedup();
        return Err(RoutingError::DimensionMismatch {
            expected: route.len(),
            actual: distinct.len(),
        });
    }
    Ok(())
}
