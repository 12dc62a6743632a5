//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Input-validation failures raised at the boundary of the
//!   smallest operation able to detect them (facade construction, sweep
//!   dispatch, mesh generation, batch configuration)
//!
//! Numerical degeneracy inside the closed-form kernels (zero volatility,
//! zero expiry) is not an error: IEEE NaN/Inf propagate to the caller.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every variant is an invalid-argument failure. Pricing kernels are pure
/// and deterministic, so none of these errors is retryable.
///
/// # Variants
/// - `InvalidOptionKind`: option kind token other than `C`/`c`/`P`/`p`
/// - `InvalidSweepParameter`: sweep parameter name other than `T`/`K`/`sig`
/// - `NonTerminatingMesh`: mesh step does not advance towards the upper bound
/// - `UnboundedMesh`: mesh bound or step is not finite
/// - `MeshTooLarge`: mesh would exceed the configured point budget
/// - `InvalidConfig`: batch configuration out of range
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidOptionKind { token: "X".to_string() };
/// assert!(err.is_invalid_argument());
/// assert!(format!("{}", err).contains("option kind"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Option kind token is neither call (`C`/`c`) nor put (`P`/`p`).
    #[error("Invalid option kind: {token:?} (expected \"C\" or \"P\")")]
    InvalidOptionKind {
        /// The rejected token
        token: String,
    },

    /// Sweep parameter name is not one of `T`, `K`, `sig`.
    #[error("Invalid sweep parameter: {name:?} (expected \"T\", \"K\" or \"sig\")")]
    InvalidSweepParameter {
        /// The rejected parameter name
        name: String,
    },

    /// Mesh step would never move past the upper bound.
    #[error("Non-terminating mesh: step {step} does not advance from {start} to {end}")]
    NonTerminatingMesh {
        /// First mesh point
        start: f64,
        /// Inclusive upper bound
        end: f64,
        /// Increment between points
        step: f64,
    },

    /// Mesh bound or step is infinite or NaN.
    #[error("Unbounded mesh: start = {start}, end = {end}, step = {step}")]
    UnboundedMesh {
        /// First mesh point
        start: f64,
        /// Inclusive upper bound
        end: f64,
        /// Increment between points
        step: f64,
    },

    /// Mesh would hold more points than the configured limit.
    #[error("Mesh too large: {points} points exceeds limit of {limit}")]
    MeshTooLarge {
        /// Estimated number of points
        points: f64,
        /// Configured maximum number of points
        limit: usize,
    },

    /// Batch configuration out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PricingError {
    /// Returns whether this error is an invalid-argument failure.
    ///
    /// Always true for the current taxonomy; kept as a method so callers do
    /// not need to match on every variant.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidOptionKind { .. }
                | PricingError::InvalidSweepParameter { .. }
                | PricingError::NonTerminatingMesh { .. }
                | PricingError::UnboundedMesh { .. }
                | PricingError::MeshTooLarge { .. }
                | PricingError::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_kind_display() {
        let err = PricingError::InvalidOptionKind {
            token: "X".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid option kind: \"X\" (expected \"C\" or \"P\")"
        );
    }

    #[test]
    fn test_invalid_sweep_parameter_display() {
        let err = PricingError::InvalidSweepParameter {
            name: "r".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Invalid sweep parameter: \"r\" (expected \"T\", \"K\" or \"sig\")"
        );
    }

    #[test]
    fn test_non_terminating_mesh_display() {
        let err = PricingError::NonTerminatingMesh {
            start: 0.0,
            end: 1.0,
            step: 0.0,
        };
        assert_eq!(
            format!("{}", err),
            "Non-terminating mesh: step 0 does not advance from 0 to 1"
        );
    }

    #[test]
    fn test_mesh_too_large_display() {
        let err = PricingError::MeshTooLarge {
            points: 1e9,
            limit: 1000,
        };
        assert!(format!("{}", err).contains("exceeds limit of 1000"));
    }

    #[test]
    fn test_all_variants_are_invalid_argument() {
        let errors = [
            PricingError::InvalidOptionKind {
                token: String::new(),
            },
            PricingError::InvalidSweepParameter {
                name: String::new(),
            },
            PricingError::NonTerminatingMesh {
                start: 0.0,
                end: 1.0,
                step: -1.0,
            },
            PricingError::UnboundedMesh {
                start: 0.0,
                end: f64::INFINITY,
                step: 1.0,
            },
            PricingError::MeshTooLarge {
                points: 1e12,
                limit: 10,
            },
            PricingError::InvalidConfig("bad".to_string()),
        ];
        for err in errors {
            assert!(err.is_invalid_argument(), "{err} should be invalid-argument");
        }
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidConfig("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidSweepParameter {
            name: "q".to_string(),
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
