//! Option pricing parameter set.
//!
//! [`OptionParams`] bundles the seven scalar inputs consumed by every
//! closed-form kernel. It is a plain value type: no derived or cached
//! quantities are stored, so kernels recompute `d1`, `d2`, discount factors
//! and characteristic roots from scratch on every call.

use super::carry::CarryModel;
use super::sweep::SweepParameter;

/// Scalar inputs of a single-asset option.
///
/// | Field | Symbol | Meaning |
/// |-------|--------|---------|
/// | `expiry` | T | Time to expiry in years |
/// | `strike` | K | Strike price |
/// | `volatility` | σ | Annualised volatility |
/// | `rate` | r | Risk-free rate |
/// | `carry` | b | Cost of carry |
/// | `valuation_date` | t | Valuation date (not used by any formula) |
/// | `dividend_yield` | q | Dividend yield (not used by any formula) |
///
/// No field is validated: degenerate inputs such as `volatility == 0.0` or
/// `expiry == 0.0` propagate IEEE NaN/Inf through the kernels.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParams, SweepParameter};
///
/// let params = OptionParams::market(0.25, 65.0, 0.30, 0.08, 0.08);
/// let bumped = params.with_value(SweepParameter::Volatility, 0.35);
///
/// assert_eq!(params.volatility, 0.30);
/// assert_eq!(bumped.volatility, 0.35);
/// assert_eq!(bumped.strike, params.strike);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    /// Time to expiry in years (T).
    pub expiry: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Annualised volatility (σ).
    pub volatility: f64,
    /// Risk-free interest rate (r).
    pub rate: f64,
    /// Cost of carry (b).
    pub carry: f64,
    /// Valuation date (t).
    #[cfg_attr(feature = "serde", serde(default))]
    pub valuation_date: f64,
    /// Continuous dividend yield (q).
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: f64,
}

impl OptionParams {
    /// Creates a parameter set from all seven inputs.
    pub fn new(
        expiry: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        carry: f64,
        valuation_date: f64,
        dividend_yield: f64,
    ) -> Self {
        Self {
            expiry,
            strike,
            volatility,
            rate,
            carry,
            valuation_date,
            dividend_yield,
        }
    }

    /// Creates a parameter set from the five inputs used by the formulas.
    ///
    /// `valuation_date` and `dividend_yield` are set to zero.
    pub fn market(expiry: f64, strike: f64, volatility: f64, rate: f64, carry: f64) -> Self {
        Self::new(expiry, strike, volatility, rate, carry, 0.0, 0.0)
    }

    /// Returns the value of a sweepable parameter.
    #[inline]
    pub fn value(&self, param: SweepParameter) -> f64 {
        match param {
            SweepParameter::Expiry => self.expiry,
            SweepParameter::Strike => self.strike,
            SweepParameter::Volatility => self.volatility,
        }
    }

    /// Returns a copy with one sweepable parameter replaced.
    ///
    /// `self` is never modified, so a sweep never needs to restore state.
    #[inline]
    #[must_use]
    pub fn with_value(&self, param: SweepParameter, value: f64) -> Self {
        let mut copy = *self;
        match param {
            SweepParameter::Expiry => copy.expiry = value,
            SweepParameter::Strike => copy.strike = value,
            SweepParameter::Volatility => copy.volatility = value,
        }
        copy
    }

    /// Returns a copy whose cost of carry follows a classical model variant.
    ///
    /// The engine itself never derives `carry`; this only fills the field
    /// from `rate` according to the chosen convention.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{CarryModel, OptionParams};
    ///
    /// let params = OptionParams::market(1.0, 100.0, 0.2, 0.05, 0.0)
    ///     .with_carry_model(CarryModel::BlackScholesStock);
    /// assert_eq!(params.carry, 0.05);
    /// ```
    #[must_use]
    pub fn with_carry_model(&self, model: CarryModel) -> Self {
        let mut copy = *self;
        copy.carry = model.carry(self.rate);
        copy
    }
}
