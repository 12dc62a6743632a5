//! Batch evaluation configuration.
//!
//! Provides [`BatchConfig`] controlling when batches switch to parallel
//! evaluation and how large a generated mesh may grow.

use crate::math::mesh::DEFAULT_MAX_MESH_POINTS;
use crate::types::PricingError;

/// Default minimum batch length for parallel evaluation.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Configuration for batch and sweep evaluation.
///
/// Use the builder pattern via [`BatchConfig::builder()`] for construction.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `parallel_threshold` | 4096 | Minimum element count mapped with rayon |
/// | `max_mesh_points` | 10,000,000 | Largest mesh the evaluator will generate |
///
/// # Examples
///
/// ```rust
/// use pricer_core::batch::BatchConfig;
///
/// let config = BatchConfig::default();
/// assert!(!config.should_parallelize(10));
///
/// let config = BatchConfig::builder()
///     .parallel_threshold(2)
///     .build()
///     .unwrap();
/// assert!(config.should_parallelize(10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BatchConfig {
    /// Minimum number of elements before the map runs in parallel.
    pub parallel_threshold: usize,

    /// Maximum number of points in a generated mesh.
    pub max_mesh_points: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_mesh_points: DEFAULT_MAX_MESH_POINTS,
        }
    }
}

impl BatchConfig {
    /// Creates a new builder for constructing a `BatchConfig`.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder::default()
    }

    /// Configuration that never parallelises.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidConfig`] if any field is zero.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.parallel_threshold == 0 {
            return Err(PricingError::InvalidConfig(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        if self.max_mesh_points == 0 {
            return Err(PricingError::InvalidConfig(
                "max_mesh_points must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns whether a batch of `n_items` elements runs in parallel.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }

    /// Parses and validates a configuration from a TOML fragment.
    ///
    /// Unspecified fields keep their defaults.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_core::batch::BatchConfig;
    ///
    /// let config = BatchConfig::from_toml_str("parallel_threshold = 128").unwrap();
    /// assert_eq!(config.parallel_threshold, 128);
    /// assert_eq!(config.max_mesh_points, BatchConfig::default().max_mesh_points);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, PricingError> {
        let config: BatchConfig = toml::from_str(content).map_err(|e| {
            PricingError::InvalidConfig(format!("Failed to parse TOML: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`BatchConfig`].
#[derive(Clone, Debug, Default)]
pub struct BatchConfigBuilder {
    parallel_threshold: Option<usize>,
    max_mesh_points: Option<usize>,
}

impl BatchConfigBuilder {
    /// Sets the minimum element count for parallel evaluation.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Sets the maximum number of points in a generated mesh.
    pub fn max_mesh_points(mut self, limit: usize) -> Self {
        self.max_mesh_points = Some(limit);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidConfig`] if validation fails.
    pub fn build(self) -> Result<BatchConfig, PricingError> {
        let defaults = BatchConfig::default();
        let config = BatchConfig {
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            max_mesh_points: self.max_mesh_points.unwrap_or(defaults.max_mesh_points),
        };
        config.validate()?;
        Ok(config)
    }
}
