//! Spot-price pricing abstraction.
//!
//! [`SpotPricer`] is the seam between option facades and the batch
//! machinery: implement the scalar [`SpotPricer::price`] and the sequence
//! and mesh forms come for free through a [`BatchEvaluator`].

use crate::batch::BatchEvaluator;
use crate::types::PricingError;

/// Anything priced as a pure function of the underlying spot price.
///
/// # Examples
/// ```
/// use pricer_core::batch::BatchEvaluator;
/// use pricer_core::traits::SpotPricer;
///
/// struct Forward {
///     strike: f64,
/// }
///
/// impl SpotPricer for Forward {
///     fn price(&self, spot: f64) -> f64 {
///         spot - self.strike
///     }
/// }
///
/// let fwd = Forward { strike: 100.0 };
/// let evaluator = BatchEvaluator::default();
/// assert_eq!(fwd.price_batch_with(&evaluator, &[90.0, 110.0]), vec![-10.0, 10.0]);
/// assert_eq!(fwd.price_mesh_with(&evaluator, 100.0, 102.0, 1.0).unwrap(), vec![0.0, 1.0, 2.0]);
/// ```
pub trait SpotPricer {
    /// Prices at a single spot.
    ///
    /// Must be pure: the same spot always yields the same value.
    fn price(&self, spot: f64) -> f64;

    /// Prices at each spot of an explicit sequence.
    fn price_batch_with(&self, evaluator: &BatchEvaluator, spots: &[f64]) -> Vec<f64>
    where
        Self: Sync,
    {
        evaluator.map(spots, |spot| self.price(spot))
    }

    /// Prices at each spot of the mesh `(start, end, step)`.
    ///
    /// # Errors
    /// Returns the mesh validation error before any pricing.
    fn price_mesh_with(
        &self,
        evaluator: &BatchEvaluator,
        start: f64,
        end: f64,
        step: f64,
    ) -> Result<Vec<f64>, PricingError>
    where
        Self: Sync,
    {
        evaluator.map_mesh(start, end, step, |spot| self.price(spot))
    }
}
