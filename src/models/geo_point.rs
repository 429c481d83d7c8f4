//! Geographic point type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;
use crate::error::{Result, RoutingError};

/// A WGS84 coordinate in decimal degrees.
///
/// Used both for the vehicle's starting location and for delivery stops.
/// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use u_delivery::models::GeoPoint;
///
/// let p = GeoPoint::new(37.5665, 126.9780).unwrap();
/// assert_eq!(p.latitude(), 37.5665);
///
/// assert!(GeoPoint::new(95.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, -200.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a validated point.
    ///
    /// Returns [`RoutingError::InvalidInput`] if either value is non-finite
    /// or out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let p = Self::new_unchecked(latitude, longitude);
        p.validate()?;
        Ok(p)
    }

    /// Creates a point without range checks.
    ///
    /// The optimizer validates every point it receives, so an invalid point
    /// built here is rejected there.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Checks that both coordinates are finite and within range.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(RoutingError::invalid(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(RoutingError::invalid(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_km(self, other)
    }
}
