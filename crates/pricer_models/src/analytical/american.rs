//! Closed-form perpetual American options.
//!
//! A perpetual American option never expires, so its value solves a
//! time-independent ODE whose characteristic equation has two roots:
//!
//! - α = b / σ²
//! - y₁ = 1/2 - α + √((α - 1/2)² + 2r/σ²)  (call)
//! - y₂ = 1/2 - α - √((α - 1/2)² + 2r/σ²)  (put)
//!
//! **Call Price**: C = K/(y₁-1) · ((y₁-1)/y₁ · S/K)^y₁
//! **Put Price**: P = K/(1-y₂) · ((y₂-1)/y₂ · S/K)^y₂
//!
//! When a root is exactly 1.0 the formula is singular and the limiting value
//! is the spot itself, which both kernels return directly.
//!
//! The call has a finite value only when b < r, which puts y₁ above 1. For
//! b > r the base of the power is negative and the call kernel returns NaN.
//! At b = r the root is 1 up to rounding, so the result is either spot or
//! dominated by rounding error. The put is finite whenever r > 0.
//!
//! Expiry, valuation date and dividend yield play no part in the price.

use pricer_core::types::{OptionKind, OptionParams};

/// The two roots `(y1, y2)` of the perpetual-option characteristic equation.
///
/// # Examples
/// ```
/// use pricer_models::analytical::american::characteristic_roots;
///
/// // α = 1 and 2r/σ² = 2 put the call root exactly on 1.0
/// let (y1, y2) = characteristic_roots(0.5, 0.25, 0.25);
/// assert_eq!(y1, 1.0);
/// assert_eq!(y2, -2.0);
/// ```
pub fn characteristic_roots(volatility: f64, rate: f64, carry: f64) -> (f64, f64) {
    let var = volatility * volatility;
    let alpha = carry / var;
    let root = ((alpha - 0.5) * (alpha - 0.5) + 2.0 * rate / var).sqrt();
    (0.5 - alpha + root, 0.5 - alpha - root)
}

/// Perpetual American call on bare arguments.
pub fn perpetual_call_price(strike: f64, volatility: f64, rate: f64, carry: f64, spot: f64) -> f64 {
    let (y1, _) = characteristic_roots(volatility, rate, carry);
    if y1 == 1.0 {
        return spot;
    }
    strike / (y1 - 1.0) * ((y1 - 1.0) / y1 * spot / strike).powf(y1)
}

/// Perpetual American put on bare arguments.
pub fn perpetual_put_price(strike: f64, volatility: f64, rate: f64, carry: f64, spot: f64) -> f64 {
    let (_, y2) = characteristic_roots(volatility, rate, carry);
    if y2 == 1.0 {
        return spot;
    }
    strike / (1.0 - y2) * ((y2 - 1.0) / y2 * spot / strike).powf(y2)
}

/// Prices a perpetual American option of the given kind.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, OptionParams};
/// use pricer_models::analytical::american;
///
/// let params = OptionParams::market(0.0, 100.0, 0.1, 0.1, 0.02);
/// let call = american::price(&params, OptionKind::Call, 110.0);
/// assert!((call - 18.5035).abs() < 1e-4);
/// ```
pub fn price(params: &OptionParams, kind: OptionKind, spot: f64) -> f64 {
    match kind {
        OptionKind::Call => call_price(params, spot),
        OptionKind::Put => put_price(params, spot),
    }
}

/// Perpetual American call.
#[inline]
pub fn call_price(params: &OptionParams, spot: f64) -> f64 {
    perpetual_call_price(params.strike, params.volatility, params.rate, params.carry, spot)
}

/// Perpetual American put.
#[inline]
pub fn put_price(params: &OptionParams, spot: f64) -> f64 {
    perpetual_put_price(params.strike, params.volatility, params.rate, params.carry, spot)
}
