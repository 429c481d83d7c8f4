//! ACO parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Tunable parameters for the ant colony solver.
///
/// # Examples
///
/// ```
/// use u_delivery::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_num_iterations(100);
/// assert_eq!(config.num_ants, 20);
/// assert_eq!(config.alpha, 1.0);
/// assert!(config.validate().is_ok());
///
/// assert!(AcoConfig::default().with_num_ants(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Candidate paths constructed per iteration.
    pub num_ants: usize,
    /// Number of iterations to run.
    pub num_iterations: usize,
    /// Exponent on pheromone strength.
    pub alpha: f64,
    /// Exponent on visibility (inverse distance).
    ///
    /// Weights are compared in log space, so large values make selection
    /// greedier without overflowing.
    pub beta: f64,
    /// Fraction of pheromone removed each iteration, in `[0, 1)`.
    pub evaporation_rate: f64,
    /// Polish the best path with open-path 2-opt after the colony finishes.
    pub two_opt: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            num_iterations: 50,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.1,
            two_opt: false,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the visibility exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate ρ.
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Enables or disables 2-opt polishing of the final path.
    pub fn with_two_opt(mut self, enabled: bool) -> Self {
        self.two_opt = enabled;
        self
    }

    /// Rejects degenerate parameters.
    ///
    /// Zero ants or zero iterations are errors rather than a silent
    /// fallback to an unoptimized order.
    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(RoutingError::invalid("num_ants must be greater than zero"));
        }
        if self.num_iterations == 0 {
            return Err(RoutingError::invalid(
                "num_iterations must be greater than zero",
            ));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(RoutingError::invalid(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(RoutingError::invalid(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(RoutingError::invalid(format!(
                "evaporation_rate must be in [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = AcoConfig::default();
        assert_eq!(c.num_ants, 10);
        assert_eq!(c.num_iterations, 50);
        assert_eq!(c.alpha, 1.0);
        assert_eq!(c.beta, 2.0);
        assert_eq!(c.evaporation_rate, 0.1);
        assert!(!c.two_opt);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = AcoConfig::default().with_num_iterations(0).validate();
        assert!(matches!(err, Err(RoutingError::InvalidInput(_))));
    }

    #[test]
    fn test_evaporation_bounds() {
        assert!(AcoConfig::default().with_evaporation_rate(0.0).validate().is_ok());
        assert!(AcoConfig::default().with_evaporation_rate(1.0).validate().is_err());
        assert!(AcoConfig::default().with_evaporation_rate(-0.1).validate().is_err());
        assert!(AcoConfig::default().with_evaporation_rate(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_negative_exponents_rejected() {
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let c: AcoConfig = serde_json::from_str(r#"{"num_ants": 4}"#).expect("parse");
        assert_eq!(c.num_ants, 4);
        assert_eq!(c.num_iterations, 50);
    }
}
