//! Ordering for trivially small inputs.
//!
//! With two or fewer stops the colony has nothing to learn: zero or one stop
//! admit a single order, and under a symmetric distance model the two orders
//! of a pair differ only in which stop is reached first. Input order is kept
//! as a deterministic tie-break.

use crate::models::Route;

/// Largest stop count handled without running the ant colony.
pub const FALLBACK_MAX_STOPS: usize = 2;

/// Returns the stops in input order.
///
/// Intended for `num_stops <= FALLBACK_MAX_STOPS`, though any count yields
/// the identity order.
///
/// # Examples
///
/// ```
/// use u_delivery::constructive::fallback_order;
///
/// assert!(fallback_order(0).is_empty());
/// assert_eq!(fallback_order(1).stop_indices(), &[0]);
/// assert_eq!(fallback_order(2).stop_indices(), &[0, 1]);
/// ```
pub fn fallback_order(num_stops: usize) -> Route {
    Route::new((0..num_stops).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_empty() {
        assert!(fallback_order(0).is_empty());
    }

    #[test]
    fn test_fallback_keeps_input_order() {
        assert_eq!(fallback_order(2).stop_indices(), &[0, 1]);
        assert!(fallback_order(2).is_permutation());
    }
}
