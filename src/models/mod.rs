//! Domain model types for delivery route sequencing.
//!
//! Provides geographic points, delivery stops carrying an opaque caller
//! payload, and routes as orderings of stops together with their time
//! estimates.

mod geo_point;
mod route;
mod stop;

pub use geo_point::GeoPoint;
pub use route::{Route, RouteEstimate, RoutePlan};
pub use stop::Stop;
