//! Batch and sweep evaluation of scalar kernels.
//!
//! [`BatchEvaluator`] lifts any scalar function to
//! - explicit input sequences ([`BatchEvaluator::map`])
//! - mesh-defined input sequences ([`BatchEvaluator::map_mesh`])
//! - explicit sequences of one swept parameter ([`BatchEvaluator::sweep`])
//! - mesh-defined sequences of one swept parameter ([`BatchEvaluator::sweep_mesh`])
//!
//! Elements are independent. Large batches are mapped with rayon; the
//! indexed `collect` writes each result to the slot of its input, so output
//! order always equals input order.
//!
//! All validation (mesh recipe, configuration) happens before the first
//! element is evaluated, so a batch either fails as a whole or returns one
//! value per input.

use rayon::prelude::*;

use super::config::BatchConfig;
use crate::math::mesh::Mesh;
use crate::types::{OptionParams, PricingError, SweepParameter};

/// Maps scalar kernels over sequences, meshes and parameter sweeps.
///
/// # Examples
/// ```
/// use pricer_core::batch::BatchEvaluator;
///
/// let evaluator = BatchEvaluator::default();
/// let squares = evaluator.map(&[1.0, 2.0, 3.0], |x| x * x);
/// assert_eq!(squares, vec![1.0, 4.0, 9.0]);
///
/// let mesh = evaluator.map_mesh(0.0, 1.0, 0.5, |x| 2.0 * x).unwrap();
/// assert_eq!(mesh, vec![0.0, 1.0, 2.0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BatchEvaluator {
    config: BatchConfig,
}

impl BatchEvaluator {
    /// Creates an evaluator from a validated configuration.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: BatchConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the evaluator configuration.
    #[inline]
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Builds a mesh bounded by the configured point limit.
    ///
    /// # Errors
    /// Returns an invalid-argument [`PricingError`] for a mesh that would not
    /// terminate, is unbounded, or exceeds `max_mesh_points`.
    pub fn mesh(&self, start: f64, end: f64, step: f64) -> Result<Mesh, PricingError> {
        Mesh::with_limit(start, end, step, self.config.max_mesh_points)
    }

    /// Applies `f` to every input, preserving order.
    pub fn map<F>(&self, inputs: &[f64], f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        if self.config.should_parallelize(inputs.len()) {
            tracing::debug!(len = inputs.len(), "parallel batch evaluation");
            inputs.par_iter().map(|&x| f(x)).collect()
        } else {
            inputs.iter().map(|&x| f(x)).collect()
        }
    }

    /// Applies `f` to every point of the mesh `(start, end, step)`.
    ///
    /// Equivalent to generating the mesh and calling [`BatchEvaluator::map`]
    /// on the resulting points.
    ///
    /// # Errors
    /// Returns the mesh validation error before any evaluation.
    pub fn map_mesh<F>(&self, start: f64, end: f64, step: f64, f: F) -> Result<Vec<f64>, PricingError>
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        let points = self.mesh_points(start, end, step)?;
        Ok(self.map(&points, f))
    }

    fn mesh_points(&self, start: f64, end: f64, step: f64) -> Result<Vec<f64>, PricingError> {
        let points = self.mesh(start, end, step)?.to_vec();
        tracing::debug!(start, end, step, points = points.len(), "generated mesh");
        Ok(points)
    }

    /// Evaluates `f` on copies of `params` with `param` set to each value.
    ///
    /// `params` itself is never modified.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::batch::BatchEvaluator;
    /// use pricer_core::types::{OptionParams, SweepParameter};
    ///
    /// let params = OptionParams::market(1.0, 100.0, 0.2, 0.0, 0.0);
    /// let strikes = BatchEvaluator::default().sweep(
    ///     &params,
    ///     SweepParameter::Strike,
    ///     &[90.0, 110.0],
    ///     |p| p.strike,
    /// );
    /// assert_eq!(strikes, vec![90.0, 110.0]);
    /// assert_eq!(params.strike, 100.0);
    /// ```
    pub fn sweep<F>(
        &self,
        params: &OptionParams,
        param: SweepParameter,
        values: &[f64],
        f: F,
    ) -> Vec<f64>
    where
        F: Fn(&OptionParams) -> f64 + Sync + Send,
    {
        tracing::debug!(parameter = %param, count = values.len(), "parametric sweep");
        self.map(values, |value| f(&params.with_value(param, value)))
    }

    /// Sweeps `param` over the mesh `(start, end, step)`.
    ///
    /// # Errors
    /// Returns the mesh validation error before any evaluation.
    pub fn sweep_mesh<F>(
        &self,
        params: &OptionParams,
        param: SweepParameter,
        start: f64,
        end: f64,
        step: f64,
        f: F,
    ) -> Result<Vec<f64>, PricingError>
    where
        F: Fn(&OptionParams) -> f64 + Sync + Send,
    {
        let values = self.mesh_points(start, end, step)?;
        Ok(self.sweep(params, param, &values, f))
    }
}
