//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function N(x)
//! - `norm_pdf`: Probability density function n(x)
//!
//! The CDF is evaluated through the complementary error function from
//! `statrs`. Its absolute error is around 1e-11 (about 1.4e-11 at x = 1),
//! far below the 1e-7 of a low-order polynomial approximation, and it keeps
//! relative precision in the lower tail. The error is a smooth function of
//! x, so it cancels in the central differences used by the finite-difference
//! Greeks.

use statrs::function::erf::erfc;

/// 1 / sqrt(2)
const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// N(x) = (1/2) * erfc(-x / sqrt(2))
///
/// Absolute error is around 1e-11. Evaluating through erfc keeps relative
/// precision in the lower tail, and N(x) + N(-x) = 1 holds to rounding.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-10);
/// assert!(norm_cdf(-10.0) > 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// n(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // n(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // N(-x) + N(x) = 1 for all x
        let test_values = [-6.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 6.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // statrs erfc carries an absolute error of order 1e-11
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(-2.0), 0.022750131948179195, epsilon = 1e-10);
        assert_relative_eq!(norm_cdf(3.0), 0.9986501019683699, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_cdf_error_within_documented_bound() {
        // Exact N(x) at points spread over the body of the distribution
        let reference = [
            (-3.0, 0.0013498980316300946),
            (-1.5, 0.06680720126885807),
            (-0.5, 0.3085375387259869),
            (0.25, 0.5987063256829237),
            (1.0, 0.8413447460685429),
            (2.5, 0.9937903346742238),
        ];
        for (x, expected) in reference {
            let err = (norm_cdf(x) - expected).abs();
            assert!(err < 1e-10, "N({}) off by {:e}", x, err);
        }
    }

    #[test]
    fn test_norm_cdf_lower_tail_relative_precision() {
        // N(-8) ≈ 6.22e-16, must not collapse to zero
        let tail = norm_cdf(-8.0);
        assert_relative_eq!(tail, 6.220960574271785e-16, max_relative = 1e-10);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let values: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.1).collect();
        for w in values.windows(2) {
            assert!(norm_cdf(w[1]) > norm_cdf(w[0]), "CDF not monotonic at x = {}", w[0]);
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        for i in -100..=100 {
            let x = i as f64 * 0.1;
            let result = norm_cdf(x);
            assert!((0.0..=1.0).contains(&result), "CDF out of [0, 1] at x = {}", x);
        }
    }

    #[test]
    fn test_norm_cdf_nan_propagates() {
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_pdf_symmetry() {
        for x in [0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0), 0.24197072451914337, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(2.0), 0.05399096651318806, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(3.0), 0.004431848411938008, epsilon = 1e-15);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        // Central difference of the CDF approximates the PDF to O(h²)
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numerical_derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numerical_derivative, norm_pdf(x), epsilon = 1e-9);
        }
    }
}
