//! Generalised Black-Scholes-Merton kernel for European options.
//!
//! Every function is a pure function of an [`OptionParams`] and a spot
//! price. Intermediate terms (`d1`, `d2`, discount factors) are recomputed on
//! each call; nothing is cached between calls.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The cost of carry `b` selects the model variant: `b = r` is
//! Black-Scholes (1973), `b = r - q` is Merton (1973), `b = 0` is Black
//! (1976) and `b = r - r_f` is Garman-Kohlhagen (1983).
//!
//! ## Degenerate Inputs
//!
//! `T = 0` and `σ = 0` are not guarded. The `σ√T` denominator makes `d1`
//! infinite or NaN and the IEEE result propagates to the caller.

use pricer_core::batch::BatchEvaluator;
use pricer_core::types::{OptionKind, OptionParams, PricingError, SweepParameter};

use super::distributions::{norm_cdf, norm_pdf};

/// Absolute tolerance used by [`is_parity`].
pub const PARITY_TOLERANCE: f64 = 1e-5;

/// σ√T
#[inline]
fn vol_sqrt_t(params: &OptionParams) -> f64 {
    params.volatility * params.expiry.sqrt()
}

/// e^((b-r)T)
#[inline]
fn carry_factor(params: &OptionParams) -> f64 {
    ((params.carry - params.rate) * params.expiry).exp()
}

/// K·e^(-rT)
#[inline]
fn discounted_strike(params: &OptionParams) -> f64 {
    params.strike * (-params.rate * params.expiry).exp()
}

/// Computes the d1 term.
///
/// d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
#[inline]
pub fn d1(params: &OptionParams, spot: f64) -> f64 {
    let sig = params.volatility;
    ((spot / params.strike).ln() + (params.carry + 0.5 * sig * sig) * params.expiry)
        / vol_sqrt_t(params)
}

/// Computes the d2 term.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(params: &OptionParams, spot: f64) -> f64 {
    d1(params, spot) - vol_sqrt_t(params)
}

/// Prices a European option of the given kind.
///
/// Call and put share `d1`, `d2` and both discount factors; only the sign of
/// the CDF arguments and of the two legs differs.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, OptionParams};
/// use pricer_models::analytical::european;
///
/// let params = OptionParams::market(0.25, 65.0, 0.30, 0.08, 0.08);
/// let call = european::price(&params, OptionKind::Call, 60.0);
/// let put = european::price(&params, OptionKind::Put, 60.0);
/// assert!((call - 2.13337).abs() < 1e-5);
/// assert!((put - 5.84628).abs() < 1e-5);
/// ```
pub fn price(params: &OptionParams, kind: OptionKind, spot: f64) -> f64 {
    let d1 = d1(params, spot);
    let d2 = d1 - vol_sqrt_t(params);
    let forward_leg = spot * carry_factor(params);
    let strike_leg = discounted_strike(params);

    match kind {
        OptionKind::Call => forward_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2),
        OptionKind::Put => strike_leg * norm_cdf(-d2) - forward_leg * norm_cdf(-d1),
    }
}

/// Prices a European call.
#[inline]
pub fn call_price(params: &OptionParams, spot: f64) -> f64 {
    price(params, OptionKind::Call, spot)
}

/// Prices a European put.
#[inline]
pub fn put_price(params: &OptionParams, spot: f64) -> f64 {
    price(params, OptionKind::Put, spot)
}

/// Put price implied by a call price: `C + K·e^(-rT) - S`.
#[inline]
pub fn call_to_put(params: &OptionParams, call: f64, spot: f64) -> f64 {
    call + discounted_strike(params) - spot
}

/// Call price implied by a put price: `P + S - K·e^(-rT)`.
#[inline]
pub fn put_to_call(params: &OptionParams, put: f64, spot: f64) -> f64 {
    put + spot - discounted_strike(params)
}

/// Prices the option of kind `kind`, then converts that price to the
/// opposite kind through parity.
///
/// A call yields the parity put and a put yields the parity call.
pub fn put_call_parity(params: &OptionParams, kind: OptionKind, spot: f64) -> f64 {
    let own = price(params, kind, spot);
    match kind {
        OptionKind::Call => call_to_put(params, own, spot),
        OptionKind::Put => put_to_call(params, own, spot),
    }
}

/// Returns true iff `|put_call_parity(S) - observed| < 1e-5`.
///
/// The tolerance is absolute, not relative.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, OptionParams};
/// use pricer_models::analytical::european;
///
/// let params = OptionParams::market(0.25, 65.0, 0.30, 0.08, 0.08);
/// assert!(european::is_parity(&params, OptionKind::Call, 60.0, 5.84628));
/// assert!(!european::is_parity(&params, OptionKind::Call, 60.0, 5.85));
/// ```
pub fn is_parity(params: &OptionParams, kind: OptionKind, spot: f64, observed: f64) -> bool {
    (put_call_parity(params, kind, spot) - observed).abs() < PARITY_TOLERANCE
}

/// Put prices implied by one fixed call price at each spot.
pub fn call_to_put_with_price(
    evaluator: &BatchEvaluator,
    params: &OptionParams,
    call: f64,
    spots: &[f64],
) -> Vec<f64> {
    evaluator.map(spots, |spot| call_to_put(params, call, spot))
}

/// Put prices implied by one fixed call price over a spot mesh.
///
/// # Errors
/// Returns the mesh validation error.
pub fn call_to_put_with_price_mesh(
    evaluator: &BatchEvaluator,
    params: &OptionParams,
    call: f64,
    start: f64,
    end: f64,
    step: f64,
) -> Result<Vec<f64>, PricingError> {
    evaluator.map_mesh(start, end, step, |spot| call_to_put(params, call, spot))
}

/// Call prices implied by one fixed put price at each spot.
pub fn put_to_call_with_price(
    evaluator: &BatchEvaluator,
    params: &OptionParams,
    put: f64,
    spots: &[f64],
) -> Vec<f64> {
    evaluator.map(spots, |spot| put_to_call(params, put, spot))
}

/// Call prices implied by one fixed put price over a spot mesh.
///
/// # Errors
/// Returns the mesh validation error.
pub fn put_to_call_with_price_mesh(
    evaluator: &BatchEvaluator,
    params: &OptionParams,
    put: f64,
    start: f64,
    end: f64,
    step: f64,
) -> Result<Vec<f64>, PricingError> {
    evaluator.map_mesh(start, end, step, |spot| put_to_call(params, put, spot))
}

/// Analytic call delta: e^((b-r)T)·N(d₁).
#[inline]
pub fn call_delta(params: &OptionParams, spot: f64) -> f64 {
    carry_factor(params) * norm_cdf(d1(params, spot))
}

/// Analytic put delta: e^((b-r)T)·(N(d₁) - 1).
#[inline]
pub fn put_delta(params: &OptionParams, spot: f64) -> f64 {
    carry_factor(params) * (norm_cdf(d1(params, spot)) - 1.0)
}

/// Analytic delta for the given kind.
pub fn delta(params: &OptionParams, kind: OptionKind, spot: f64) -> f64 {
    match kind {
        OptionKind::Call => call_delta(params, spot),
        OptionKind::Put => put_delta(params, spot),
    }
}

/// Analytic gamma: e^((b-r)T)·n(d₁) / (S·σ√T).
///
/// Gamma is the same for calls and puts.
pub fn gamma(params: &OptionParams, spot: f64) -> f64 {
    carry_factor(params) * norm_pdf(d1(params, spot)) / (spot * vol_sqrt_t(params))
}

/// Central-difference delta with bump `h`.
///
/// `(V(S+h) - V(S-h)) / 2h`. `h` is not validated; `h = 0` yields NaN.
pub fn delta_fd(params: &OptionParams, kind: OptionKind, spot: f64, h: f64) -> f64 {
    (price(params, kind, spot + h) - price(params, kind, spot - h)) / (2.0 * h)
}

/// Central-difference gamma with bump `h`.
///
/// `(V(S+h) - 2V(S) + V(S-h)) / h²`. `h` is not validated.
pub fn gamma_fd(params: &OptionParams, kind: OptionKind, spot: f64, h: f64) -> f64 {
    (price(params, kind, spot + h) - 2.0 * price(params, kind, spot)
        + price(params, kind, spot - h))
        / (h * h)
}

/// Prices at a fixed spot while `param` takes each of `values`.
///
/// Every element prices its own copy of `params`; the caller's set is never
/// touched.
///
/// # Examples
/// ```
/// use pricer_core::batch::BatchEvaluator;
/// use pricer_core::types::{OptionKind, OptionParams, SweepParameter};
/// use pricer_models::analytical::european;
///
/// let params = OptionParams::market(0.25, 65.0, 0.30, 0.08, 0.08);
/// let prices = european::price_over_parameter(
///     &BatchEvaluator::default(),
///     &params,
///     OptionKind::Call,
///     SweepParameter::Expiry,
///     &[0.25, 0.5],
///     60.0,
/// );
/// assert_eq!(prices[0], european::call_price(&params, 60.0));
/// assert!(prices[1] > prices[0]);
/// ```
pub fn price_over_parameter(
    evaluator: &BatchEvaluator,
    params: &OptionParams,
    kind: OptionKind,
    param: SweepParameter,
    values: &[f64],
    spot: f64,
) -> Vec<f64> {
    evaluator.sweep(params, param, values, |p| price(p, kind, spot))
}

/// Prices at a fixed spot while `param` runs over a mesh.
///
/// # Errors
/// Returns the mesh validation error before any pricing.
#[allow(clippy::too_many_arguments)]
pub fn price_over_mesh(
    evaluator: &BatchEvaluator,
    params: &OptionParams,
    kind: OptionKind,
    param: SweepParameter,
    start: f64,
    end: f64,
    step: f64,
    spot: f64,
) -> Result<Vec<f64>, PricingError> {
    evaluator.sweep_mesh(params, param, start, end, step, |p| price(p, kind, spot))
}

/// Like [`price_over_parameter`] with the parameter given by its token
/// (`"T"`, `"K"` or `"sig"`).
///
/// # Errors
/// Returns [`PricingError::InvalidSweepParameter`] for any other token; no
/// prices are computed in that case.
pub fn price_over_named(
    evaluator: &BatchEvaluator,
    params: &OptionParams,
    kind: OptionKind,
    name: &str,
    values: &[f64],
    spot: f64,
) -> Result<Vec<f64>, PricingError> {
    let param: SweepParameter = name.parse()?;
    Ok(price_over_parameter(evaluator, params, kind, param, values, spot))
}
