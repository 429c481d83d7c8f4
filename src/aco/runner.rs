//! ACO iteration loop.

use rand::Rng;
use tracing::{debug, trace};

use super::{AcoConfig, CancellationToken, PheromoneMatrix};
use crate::distance::DistanceMatrix;
use crate::local_search::two_opt_open;

/// Floor applied to zero distances so visibility and deposits stay finite.
const MIN_DISTANCE_KM: f64 = 1e-10;

/// Outcome of an ACO run.
#[derive(Debug, Clone, PartialEq)]
pub struct AcoResult {
    /// Best open path found, as matrix indices `1..=n` (root excluded).
    pub best: Vec<usize>,
    /// Length of `best` in kilometers.
    pub best_distance: f64,
    /// Iterations that completed (construction plus pheromone update).
    pub iterations_run: usize,
    /// `true` if the run stopped early on cancellation.
    pub cancelled: bool,
}

/// Runs the ant colony over a distance matrix.
///
/// Index 0 of the matrix is the fixed root: every ant starts there and it is
/// never a candidate. The pheromone matrix is private to one [`run`] call.
///
/// [`run`]: AcoRunner::run
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_delivery::aco::{AcoConfig, AcoRunner, CancellationToken};
/// use u_delivery::distance::DistanceMatrix;
///
/// // Points on a line at 0, 1, 2, 3: the best open path is 1 → 2 → 3.
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let config = AcoConfig::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = AcoRunner::new(&dm, &config).run(&mut rng, &CancellationToken::new());
/// assert_eq!(result.best, vec![1, 2, 3]);
/// assert_eq!(result.best_distance, 3.0);
/// assert_eq!(result.iterations_run, 50);
/// ```
pub struct AcoRunner<'a> {
    distances: &'a DistanceMatrix,
    config: &'a AcoConfig,
}

impl<'a> AcoRunner<'a> {
    /// Creates a runner. `config` is assumed valid (see [`AcoConfig::validate`]).
    pub fn new(distances: &'a DistanceMatrix, config: &'a AcoConfig) -> Self {
        Self { distances, config }
    }

    /// Runs the colony until the iteration budget is spent or `cancel` fires.
    ///
    /// Cancellation is checked between iterations only, and never before the
    /// first, so the result always holds a complete path.
    pub fn run<R: Rng>(&self, rng: &mut R, cancel: &CancellationToken) -> AcoResult {
        let size = self.distances.size();
        let mut tau = PheromoneMatrix::new(size);
        let mut best: Vec<usize> = Vec::new();
        let mut best_distance = f64::INFINITY;
        let mut iterations_run = 0;
        let mut cancelled = false;
        let mut paths: Vec<(Vec<usize>, f64)> = Vec::with_capacity(self.config.num_ants);

        debug!(
            stops = size.saturating_sub(1),
            ants = self.config.num_ants,
            iterations = self.config.num_iterations,
            alpha = self.config.alpha,
            beta = self.config.beta,
            rho = self.config.evaporation_rate,
            "starting ant colony"
        );

        for iteration in 0..self.config.num_iterations {
            if iteration > 0 && cancel.is_cancelled() {
                cancelled = true;
                break;
            }

            paths.clear();
            for _ in 0..self.config.num_ants {
                let path = self.construct_path(&tau, rng);
                let dist = self.distances.path_distance(&path);
                if dist < best_distance {
                    best.clone_from(&path);
                    best_distance = dist;
                }
                paths.push((path, dist));
            }

            tau.evaporate(self.config.evaporation_rate);
            for (path, dist) in &paths {
                tau.deposit_path(path, 1.0 / dist.max(MIN_DISTANCE_KM));
            }
            iterations_run += 1;

            trace!(
                iteration,
                iteration_best = paths.iter().map(|p| p.1).fold(f64::INFINITY, f64::min),
                best_distance,
                "iteration complete"
            );
        }

        if self.config.two_opt && best.len() > 2 {
            let (polished, dist) = two_opt_open(&best, self.distances);
            if dist < best_distance {
                best = polished;
                best_distance = dist;
            }
        }

        debug!(best_distance, iterations_run, cancelled, "ant colony finished");

        AcoResult {
            best,
            best_distance,
            iterations_run,
            cancelled,
        }
    }

    /// Builds one ant's path from the root over all stops.
    fn construct_path<R: Rng>(&self, tau: &PheromoneMatrix, rng: &mut R) -> Vec<usize> {
        let n = self.distances.size().saturating_sub(1);
        let mut unvisited: Vec<usize> = (1..=n).collect();
        let mut path = Vec::with_capacity(n);
        let mut weights = Vec::with_capacity(n);
        let mut current = 0;

        while !unvisited.is_empty() {
            weights.clear();
            weights.extend(
                unvisited
                    .iter()
                    .map(|&j| self.log_attractiveness(tau, current, j)),
            );
            normalize_log_weights(&mut weights);
            let pick = roulette(&weights, rng);
            let next = unvisited.swap_remove(pick);
            path.push(next);
            current = next;
        }
        path
    }

    /// `ln(τ[i][j]^α · (1/d[i][j])^β)`
    fn log_attractiveness(&self, tau: &PheromoneMatrix, from: usize, to: usize) -> f64 {
        let d = self.distances.get(from, to).max(MIN_DISTANCE_KM);
        scaled_ln(self.config.alpha, tau.get(from, to)) - scaled_ln(self.config.beta, d)
    }
}

/// `exponent · ln(value)`, with a zero exponent contributing nothing even
/// when `value` is zero.
fn scaled_ln(exponent: f64, value: f64) -> f64 {
    if exponent == 0.0 {
        0.0
    } else {
        exponent * value.ln()
    }
}

/// Turns log-weights into weights scaled so the largest is exactly 1.
///
/// Scaling leaves the selection probabilities unchanged, so large `alpha` or
/// `beta` cannot overflow the sum or underflow every weight to zero. If no
/// candidate has a finite log-weight all weights become zero.
fn normalize_log_weights(weights: &mut [f64]) {
    let max = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    for w in weights.iter_mut() {
        *w = if max.is_finite() { (*w - max).exp() } else { 0.0 };
    }
}

/// Roulette-wheel selection over non-negative weights.
///
/// Falls back to a uniform pick when the weights carry no usable signal
/// (all zero, or the sum is not finite).
fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..weights.len());
    }
    let draw = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (k, &w) in weights.iter().enumerate() {
        cumulative += w;
        if draw < cumulative {
            return k;
        }
    }
    // Rounding left the draw past the sum: take the last candidate that can win.
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}
