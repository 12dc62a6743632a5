//! Regularly spaced mesh generation.
//!
//! A mesh is the ascending sequence `start, start + h, start + 2h, ...`
//! produced by repeated accumulation of the step `h` while the running value
//! stays `<= end`.
//!
//! ## Floating-point drift
//!
//! Points are accumulated (`x += h`), not re-anchored to `start + i * h`, so
//! rounding error builds up along the mesh. The last point may therefore
//! overshoot or undershoot `end` by a rounding error, and whether `end`
//! itself is included can depend on that drift. For example
//! `Mesh::new(0.25, 0.7, 0.05)` accumulates to `0.7000000000000001` after
//! nine steps and stops at `0.65`.
//!
//! ## Validation
//!
//! Construction fails fast instead of looping unboundedly:
//! - `step <= 0` (with `start <= end`) is a [`PricingError::NonTerminatingMesh`]
//! - a step too small to move `start` is a [`PricingError::NonTerminatingMesh`]
//! - an infinite bound or non-finite step is a [`PricingError::UnboundedMesh`]
//! - more than the configured number of points is a [`PricingError::MeshTooLarge`]
//!
//! `start > end` (or a NaN bound) is valid and yields an empty mesh.

use std::iter::FusedIterator;

use crate::types::PricingError;

/// Default upper bound on the number of points in one mesh.
pub const DEFAULT_MAX_MESH_POINTS: usize = 10_000_000;

/// Validated mesh recipe `(start, end, step)`.
///
/// The mesh is restartable: every call to [`Mesh::iter`] replays the same
/// sequence from `start`.
///
/// # Examples
/// ```
/// use pricer_core::math::mesh::Mesh;
///
/// let mesh = Mesh::new(60.0, 100.0, 5.0).unwrap();
/// let points = mesh.to_vec();
/// assert_eq!(points.len(), 9);
/// assert_eq!(points[0], 60.0);
/// assert_eq!(points[8], 100.0);
///
/// assert!(Mesh::new(0.0, 1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    start: f64,
    end: f64,
    step: f64,
}

impl Mesh {
    /// Creates a mesh limited to [`DEFAULT_MAX_MESH_POINTS`] points.
    ///
    /// # Errors
    /// See the module documentation.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, PricingError> {
        Self::with_limit(start, end, step, DEFAULT_MAX_MESH_POINTS)
    }

    /// Creates a mesh holding at most `max_points` points.
    ///
    /// The point count is estimated as `floor((end - start) / step) + 1`;
    /// drift may add one more point than the estimate.
    ///
    /// # Errors
    /// See the module documentation.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn with_limit(
        start: f64,
        end: f64,
        step: f64,
        max_points: usize,
    ) -> Result<Self, PricingError> {
        let mesh = Self { start, end, step };

        // Empty mesh: the loop condition fails on the first point. Also
        // catches a NaN bound.
        if !(start <= end) {
            return Ok(mesh);
        }

        if !start.is_finite() || !end.is_finite() || !step.is_finite() {
            return Err(PricingError::UnboundedMesh { start, end, step });
        }

        if step <= 0.0 || start + step == start {
            return Err(PricingError::NonTerminatingMesh { start, end, step });
        }

        let points = ((end - start) / step).floor() + 1.0;
        if points > max_points as f64 {
            return Err(PricingError::MeshTooLarge {
                points,
                limit: max_points,
            });
        }

        Ok(mesh)
    }

    /// First point of the mesh.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Inclusive upper bound of the mesh.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Increment between consecutive points.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Iterates over the mesh points from `start`.
    #[inline]
    pub fn iter(&self) -> MeshIter {
        MeshIter {
            next: self.start,
            end: self.end,
            step: self.step,
            done: false,
        }
    }

    /// Collects the mesh points.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

impl IntoIterator for &Mesh {
    type Item = f64;
    type IntoIter = MeshIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`Mesh`].
///
/// Stops early if accumulation stalls (the step falls below half an ulp of
/// the running value), so iteration always terminates.
#[derive(Debug, Clone)]
pub struct MeshIter {
    next: f64,
    end: f64,
    step: f64,
    done: bool,
}

impl Iterator for MeshIter {
    type Item = f64;

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn next(&mut self) -> Option<f64> {
        if self.done || !(self.next <= self.end) {
            return None;
        }
        let current = self.next;
        self.next = current + self.step;
        if self.next == current {
            self.done = true;
        }
        Some(current)
    }
}

impl FusedIterator for MeshIter {}

/// Generates the points of the mesh `(start, end, step)`.
///
/// The mesh is capped at [`DEFAULT_MAX_MESH_POINTS`] points. Larger meshes
/// go through [`Mesh::with_limit`], or a `BatchEvaluator` configured with a
/// higher `max_mesh_points`.
///
/// # Errors
/// Returns an invalid-argument [`PricingError`] for a mesh that would not
/// terminate or is unbounded, and [`PricingError::MeshTooLarge`] when the
/// estimated point count exceeds [`DEFAULT_MAX_MESH_POINTS`].
///
/// # Examples
/// ```
/// use pricer_core::math::mesh::generate_mesh;
///
/// let mesh = generate_mesh(90.0, 130.0, 1.0).unwrap();
/// assert_eq!(mesh.len(), 41);
/// assert!(generate_mesh(1.0, 0.0, 0.5).unwrap().is_empty());
/// ```
pub fn generate_mesh(start: f64, end: f64, step: f64) -> Result<Vec<f64>, PricingError> {
    let points = Mesh::new(start, end, step)?.to_vec();
    tracing::debug!(start, end, step, points = points.len(), "generated mesh");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_generate_mesh_caps_at_default_limit() {
        // floor(1 / 1e-8) + 1 points, ten times the default cap
        let err = generate_mesh(0.0, 1.0, 1e-8).unwrap_err();
        assert!(matches!(
            err,
            PricingError::MeshTooLarge {
                limit: DEFAULT_MAX_MESH_POINTS,
                ..
            }
        ));
        assert!(err.is_invalid_argument());

        // The same mesh is accepted under an explicit larger limit
        let mesh = Mesh::with_limit(0.0, 1.0, 1e-8, 200_000_000).unwrap();
        assert_eq!(mesh.step(), 1e-8);
    }

    #[test]
    fn test_integer_step_includes_end() {
        let points = generate_mesh(60.0, 100.0, 5.0).unwrap();
        assert_eq!(
            points,
            vec![60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0, 100.0]
        );
    }

    #[test]
    fn test_single_point_when_start_equals_end() {
        assert_eq!(generate_mesh(5.0, 5.0, 1.0).unwrap(), vec![5.0]);
    }

    #[test]
    fn test_empty_when_start_above_end() {
        assert!(generate_mesh(2.0, 1.0, 0.5).unwrap().is_empty());
        // Direction of step is irrelevant once the mesh is empty
        assert!(generate_mesh(2.0, 1.0, -0.5).unwrap().is_empty());
    }

    #[test]
    fn test_nan_bound_is_empty() {
        assert!(generate_mesh(f64::NAN, 1.0, 0.5).unwrap().is_empty());
        assert!(generate_mesh(0.0, f64::NAN, 0.5).unwrap().is_empty());
    }

    #[test]
    fn test_zero_step_rejected() {
        assert!(matches!(
            generate_mesh(0.0, 1.0, 0.0),
            Err(PricingError::NonTerminatingMesh { .. })
        ));
    }

    #[test]
    fn test_negative_step_rejected() {
        match generate_mesh(0.0, 1.0, -0.1) {
            Err(PricingError::NonTerminatingMesh { start, end, step }) => {
                assert_eq!(start, 0.0);
                assert_eq!(end, 1.0);
                assert_eq!(step, -0.1);
            }
            other => panic!("Expected NonTerminatingMesh, got {other:?}"),
        }
    }

    #[test]
    fn test_step_below_resolution_rejected() {
        assert!(matches!(
            generate_mesh(1e20, 1e20, 1.0),
            Err(PricingError::NonTerminatingMesh { .. })
        ));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert!(matches!(
            generate_mesh(0.0, f64::INFINITY, 1.0),
            Err(PricingError::UnboundedMesh { .. })
        ));
        assert!(matches!(
            generate_mesh(f64::NEG_INFINITY, 0.0, 1.0),
            Err(PricingError::UnboundedMesh { .. })
        ));
        assert!(matches!(
            generate_mesh(0.0, 1.0, f64::NAN),
            Err(PricingError::UnboundedMesh { .. })
        ));
    }

    #[test]
    fn test_point_limit() {
        assert!(Mesh::with_limit(0.0, 10.0, 1.0, 11).is_ok());
        assert!(matches!(
            Mesh::with_limit(0.0, 10.0, 1.0, 10),
            Err(PricingError::MeshTooLarge { limit: 10, .. })
        ));
        assert!(matches!(
            generate_mesh(0.0, 1.0, 1e-12),
            Err(PricingError::MeshTooLarge { .. })
        ));
    }

    #[test]
    fn test_accumulation_drift_is_preserved() {
        // 0.25 + 9 * 0.05 accumulates past 0.7, so 0.7 itself is not reached
        let points = generate_mesh(0.25, 0.7, 0.05).unwrap();
        assert_eq!(points.len(), 9);
        let mut expected = 0.25;
        for &p in &points {
            assert_eq!(p, expected);
            expected += 0.05;
        }
        assert_relative_eq!(*points.last().unwrap(), 0.65, epsilon = 1e-12);
    }

    #[test]
    fn test_mesh_is_restartable() {
        let mesh = Mesh::new(0.3, 1.0, 0.1).unwrap();
        let first: Vec<f64> = mesh.iter().collect();
        let second: Vec<f64> = (&mesh).into_iter().collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_iterator_is_fused() {
        let mesh = Mesh::new(0.0, 1.0, 0.5).unwrap();
        let mut it = mesh.iter();
        assert_eq!(it.next(), Some(0.0));
        assert_eq!(it.next(), Some(0.5));
        assert_eq!(it.next(), Some(1.0));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_accessors() {
        let mesh = Mesh::new(1.0, 2.0, 0.25).unwrap();
        assert_eq!(mesh.start(), 1.0);
        assert_eq!(mesh.end(), 2.0);
        assert_eq!(mesh.step(), 0.25);
    }

    // Property-based tests for mesh generation
    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_mesh_strictly_ascending_and_bounded(
                start in -1000.0_f64..1000.0,
                span in 0.0_f64..500.0,
                step in 0.01_f64..50.0
            ) {
                let end = start + span;
                let points = generate_mesh(start, end, step).unwrap();
                prop_assert!(!points.is_empty());
                prop_assert_eq!(points[0], start);
                for w in points.windows(2) {
                    prop_assert!(w[1] > w[0]);
                }
                for &p in &points {
                    prop_assert!(p <= end);
                }
            }

            #[test]
            fn test_mesh_length_matches_estimate(
                start in -100.0_f64..100.0,
                n in 0_usize..200,
                step in 0.1_f64..10.0
            ) {
                // Place end half a step past the n-th point so drift cannot flip inclusion
                let end = start + (n as f64 + 0.5) * step;
                let points = generate_mesh(start, end, step).unwrap();
                prop_assert_eq!(points.len(), n + 1);
            }
        }
    }
}
