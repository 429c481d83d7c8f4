//! Haversine great-circle distance.
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! d = 2R · atan2(√a, √(1−a))
//! ```
//!
//! The formula is symmetric in its arguments, so `d(a, b) == d(b, a)`
//! bit-for-bit, and `d(a, a) == 0`.

use crate::models::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometers.
///
/// # Examples
///
/// ```
/// use u_delivery::models::GeoPoint;
/// use u_delivery::distance::haversine_km;
///
/// let a = GeoPoint::new(0.0, 0.0).unwrap();
/// let b = GeoPoint::new(0.0, 1.0).unwrap();
/// // One degree of longitude on the equator ≈ 111.19 km
/// assert!((haversine_km(&a, &b) - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.latitude().to_radians();
    let phi2 = b.latitude().to_radians();
    let d_phi = phi2 - phi1;
    let d_lambda = (b.longitude() - a.longitude()).to_radians();

    let s_phi = (d_phi / 2.0).sin();
    let s_lambda = (d_lambda / 2.0).sin();
    // cos φ1 · cos φ2 is commutative; squares erase the sign of the deltas.
    let h = s_phi * s_phi + phi1.cos() * phi2.cos() * s_lambda * s_lambda;
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
