//! Delivery route optimizer.
//!
//! Ties validation, the distance matrix, the fallback ordering, and the ant
//! colony together behind one entry point. Each call allocates its own
//! matrices and random generator, so a single [`RouteOptimizer`] can serve
//! concurrent callers without locking.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::aco::{AcoConfig, AcoRunner, CancellationToken};
use crate::constructive::{fallback_order, FALLBACK_MAX_STOPS};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::{estimate, EstimateConfig};
use crate::models::{GeoPoint, Route, RouteEstimate, RoutePlan, Stop};

/// Everything an optimization run produced.
#[derive(Debug, Clone)]
pub struct OptimizeOutcome {
    /// Visiting order over the input stops.
    pub route: Route,
    /// Distance matrix the run was computed on (index 0 = start).
    pub distances: DistanceMatrix,
    /// Open-path length of `route` in kilometers.
    pub distance_km: f64,
    /// ACO iterations completed; zero when the fallback ordering was used.
    pub iterations_run: usize,
    /// `true` if the run was cut short and `route` is the best found so far.
    pub cancelled: bool,
}

/// Sequences delivery stops for a single vehicle.
///
/// Inputs with more than two stops are solved with the ant colony, which is
/// randomized: repeated calls on the same input may return different orders
/// of comparable length. Use [`optimize_with_rng`] with a seeded generator
/// for reproducible output.
///
/// [`optimize_with_rng`]: RouteOptimizer::optimize_with_rng
///
/// # Examples
///
/// ```
/// use u_delivery::models::{GeoPoint, Stop};
/// use u_delivery::RouteOptimizer;
///
/// let start = GeoPoint::new(37.50, 127.00).unwrap();
/// let stops = vec![
///     Stop::new(GeoPoint::new(37.52, 127.02).unwrap(), "A"),
///     Stop::new(GeoPoint::new(37.55, 127.05).unwrap(), "B"),
///     Stop::new(GeoPoint::new(37.51, 127.01).unwrap(), "C"),
/// ];
///
/// let optimizer = RouteOptimizer::default();
/// let plan = optimizer.plan(&stops, start).unwrap();
/// assert_eq!(plan.route.len(), 3);
/// assert!(plan.route.is_permutation());
/// assert_eq!(plan.estimate.service_minutes, 45);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    aco: AcoConfig,
    estimate: EstimateConfig,
}

impl RouteOptimizer {
    /// Creates an optimizer with the given colony and estimate settings.
    pub fn new(aco: AcoConfig, estimate: EstimateConfig) -> Self {
        Self { aco, estimate }
    }

    /// Replaces the colony settings.
    pub fn with_aco_config(mut self, aco: AcoConfig) -> Self {
        self.aco = aco;
        self
    }

    /// Replaces the estimate settings.
    pub fn with_estimate_config(mut self, estimate: EstimateConfig) -> Self {
        self.estimate = estimate;
        self
    }

    /// Colony settings.
    pub fn aco_config(&self) -> &AcoConfig {
        &self.aco
    }

    /// Estimate settings.
    pub fn estimate_config(&self) -> &EstimateConfig {
        &self.estimate
    }

    /// Returns a visiting order for `stops` after leaving `start`.
    ///
    /// Uses a generator seeded from the thread-local RNG, independent per call.
    pub fn optimize<T>(&self, stops: &[Stop<T>], start: GeoPoint) -> Result<Route> {
        let mut rng = StdRng::from_rng(&mut rand::rng());
        self.optimize_with_rng(stops, start, &mut rng)
            .map(|outcome| outcome.route)
    }

    /// Like [`optimize`](Self::optimize) with an injected random source.
    pub fn optimize_with_rng<T, R: Rng>(
        &self,
        stops: &[Stop<T>],
        start: GeoPoint,
        rng: &mut R,
    ) -> Result<OptimizeOutcome> {
        self.optimize_until(stops, start, rng, &CancellationToken::new())
    }

    /// Like [`optimize_with_rng`](Self::optimize_with_rng), stopping early
    /// when `cancel` fires.
    ///
    /// The token is polled between iterations. A cancelled run still returns
    /// a complete route, the best found so far.
    pub fn optimize_until<T, R: Rng>(
        &self,
        stops: &[Stop<T>],
        start: GeoPoint,
        rng: &mut R,
        cancel: &CancellationToken,
    ) -> Result<OptimizeOutcome> {
        self.validate(stops, &start)?;

        let distances = DistanceMatrix::from_stops(&start, stops);

        if stops.len() <= FALLBACK_MAX_STOPS {
            let route = fallback_order(stops.len());
            let distance_km = distances.path_distance(&route.matrix_indices());
            debug!(stops = stops.len(), distance_km, "using fallback order");
            return Ok(OptimizeOutcome {
                route,
                distances,
                distance_km,
                iterations_run: 0,
                cancelled: false,
            });
        }

        let result = AcoRunner::new(&distances, &self.aco).run(rng, cancel);
        Ok(OptimizeOutcome {
            route: Route::from_matrix_indices(&result.best),
            distance_km: result.best_distance,
            iterations_run: result.iterations_run,
            cancelled: result.cancelled,
            distances,
        })
    }

    /// Estimates distance and time for `route` using this optimizer's
    /// estimate settings.
    pub fn estimate(&self, route: &Route, distances: &DistanceMatrix) -> Result<RouteEstimate> {
        estimate(route, distances, &self.estimate)
    }

    /// Optimizes `stops` and estimates the resulting route.
    pub fn plan<T>(&self, stops: &[Stop<T>], start: GeoPoint) -> Result<RoutePlan> {
        let mut rng = StdRng::from_rng(&mut rand::rng());
        let outcome = self.optimize_with_rng(stops, start, &mut rng)?;
        let estimate = self.estimate(&outcome.route, &outcome.distances)?;
        Ok(RoutePlan {
            route: outcome.route,
            estimate,
        })
    }

    fn validate<T>(&self, stops: &[Stop<T>], start: &GeoPoint) -> Result<()> {
        self.aco.validate()?;
        self.estimate.validate()?;
        start.validate()?;
        for stop in stops {
            stop.location().validate()?;
        }
        Ok(())
    }
}
