//! Perpetual American option facade.

use pricer_core::batch::BatchEvaluator;
use pricer_core::traits::SpotPricer;
use pricer_core::types::{OptionKind, OptionParams, PricingError};

use crate::analytical::american;

/// A perpetual American call or put.
///
/// Only strike, volatility, rate and cost of carry enter the price. Expiry,
/// valuation date and dividend yield are stored but inert.
///
/// # Examples
/// ```
/// use pricer_models::instruments::AmericanOption;
///
/// let mut option = AmericanOption::perpetual(100.0, 0.1, 0.1, 0.02, 0.0, 0.0, "C").unwrap();
/// assert!((option.price(110.0) - 18.5035).abs() < 1e-4);
///
/// option.toggle();
/// assert!((option.price(110.0) - 3.03106).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmericanOption {
    params: OptionParams,
    kind: OptionKind,
}

impl AmericanOption {
    /// Creates an option from all seven inputs and a kind token.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidOptionKind`] unless `kind` is `"C"`,
    /// `"c"`, `"P"` or `"p"`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        expiry: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        carry: f64,
        valuation_date: f64,
        dividend_yield: f64,
        kind: &str,
    ) -> Result<Self, PricingError> {
        let params = OptionParams::new(
            expiry,
            strike,
            volatility,
            rate,
            carry,
            valuation_date,
            dividend_yield,
        );
        Ok(Self::from_params(params, kind.parse()?))
    }

    /// Creates an option without an expiry, which is set to zero.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidOptionKind`] for an unknown token.
    pub fn perpetual(
        strike: f64,
        volatility: f64,
        rate: f64,
        carry: f64,
        valuation_date: f64,
        dividend_yield: f64,
        kind: &str,
    ) -> Result<Self, PricingError> {
        Self::new(
            0.0,
            strike,
            volatility,
            rate,
            carry,
            valuation_date,
            dividend_yield,
            kind,
        )
    }

    /// Creates an option from a parameter set and kind.
    #[inline]
    pub fn from_params(params: OptionParams, kind: OptionKind) -> Self {
        Self { params, kind }
    }

    /// Creates an option with all-zero parameters and the given kind token.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidOptionKind`] for an unknown token.
    pub fn from_kind_str(kind: &str) -> Result<Self, PricingError> {
        Ok(Self::from_params(OptionParams::default(), kind.parse()?))
    }

    /// Returns the parameter set.
    #[inline]
    pub fn params(&self) -> &OptionParams {
        &self.params
    }

    /// Replaces the parameter set.
    #[inline]
    pub fn set_params(&mut self, params: OptionParams) {
        self.params = params;
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Sets the option kind.
    #[inline]
    pub fn set_kind(&mut self, kind: OptionKind) {
        self.kind = kind;
    }

    /// Sets the option kind from a token, leaving it unchanged on error.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidOptionKind`] for an unknown token.
    pub fn set_kind_str(&mut self, kind: &str) -> Result<(), PricingError> {
        self.kind = kind.parse()?;
        Ok(())
    }

    /// Flips call to put and put to call.
    #[inline]
    pub fn toggle(&mut self) {
        self.kind = self.kind.toggled();
    }

    /// Time to expiry (T). Not used in pricing.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.params.expiry
    }

    /// Sets the time to expiry (T).
    #[inline]
    pub fn set_expiry(&mut self, expiry: f64) {
        self.params.expiry = expiry;
    }

    /// Strike (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.params.strike
    }

    /// Sets the strike (K).
    #[inline]
    pub fn set_strike(&mut self, strike: f64) {
        self.params.strike = strike;
    }

    /// Volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.params.volatility
    }

    /// Sets the volatility (σ).
    #[inline]
    pub fn set_volatility(&mut self, volatility: f64) {
        self.params.volatility = volatility;
    }

    /// Risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.params.rate
    }

    /// Sets the risk-free rate (r).
    #[inline]
    pub fn set_rate(&mut self, rate: f64) {
        self.params.rate = rate;
    }

    /// Cost of carry (b).
    #[inline]
    pub fn carry(&self) -> f64 {
        self.params.carry
    }

    /// Sets the cost of carry (b).
    #[inline]
    pub fn set_carry(&mut self, carry: f64) {
        self.params.carry = carry;
    }

    /// Valuation date (t).
    #[inline]
    pub fn valuation_date(&self) -> f64 {
        self.params.valuation_date
    }

    /// Sets the valuation date (t).
    #[inline]
    pub fn set_valuation_date(&mut self, valuation_date: f64) {
        self.params.valuation_date = valuation_date;
    }

    /// Dividend yield (q).
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.params.dividend_yield
    }

    /// Sets the dividend yield (q).
    #[inline]
    pub fn set_dividend_yield(&mut self, dividend_yield: f64) {
        self.params.dividend_yield = dividend_yield;
    }

    /// Price at one spot.
    #[inline]
    pub fn price(&self, spot: f64) -> f64 {
        american::price(&self.params, self.kind, spot)
    }

    /// Prices at each spot.
    pub fn price_batch(&self, spots: &[f64]) -> Vec<f64> {
        self.price_batch_with(&BatchEvaluator::default(), spots)
    }

    /// Prices over a spot mesh.
    ///
    /// # Errors
    /// Returns the mesh validation error before any pricing.
    pub fn price_mesh(&self, start: f64, end: f64, step: f64) -> Result<Vec<f64>, PricingError> {
        self.price_mesh_with(&BatchEvaluator::default(), start, end, step)
    }
}

impl SpotPricer for AmericanOption {
    #[inline]
    fn price(&self, spot: f64) -> f64 {
        AmericanOption::price(self, spot)
    }
}
