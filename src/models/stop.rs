//! Delivery stop type.

use super::GeoPoint;

/// A delivery stop: a location plus an opaque caller payload.
///
/// The payload is never inspected by the optimizer. It travels with the stop
/// so the caller can map each position of the resulting route back to its
/// own record (for example a delivery id).
///
/// # Examples
///
/// ```
/// use u_delivery::models::{GeoPoint, Stop};
///
/// let stop = Stop::new(GeoPoint::new(37.5, 127.0).unwrap(), "order-17");
/// assert_eq!(*stop.payload(), "order-17");
/// assert_eq!(stop.location().latitude(), 37.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stop<T> {
    location: GeoPoint,
    payload: T,
}

impl<T> Stop<T> {
    /// Creates a stop at `location` carrying `payload`.
    pub fn new(location: GeoPoint, payload: T) -> Self {
        Self { location, payload }
    }

    /// Location of this stop.
    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    /// Caller-supplied payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consumes the stop, returning its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl Stop<()> {
    /// Creates a stop with no payload.
    pub fn at(location: GeoPoint) -> Self {
        Self::new(location, ())
    }
}
