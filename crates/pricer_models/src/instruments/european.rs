//! European option facade.
//!
//! [`EuropeanOption`] owns one [`OptionParams`] and one [`OptionKind`], and
//! dispatches every operation to the matching branch of
//! [`analytical::european`](crate::analytical::european). Batch forms go
//! through the default [`BatchEvaluator`]; use the [`SpotPricer`] methods to
//! supply a custom one.

use pricer_core::batch::BatchEvaluator;
use pricer_core::traits::SpotPricer;
use pricer_core::types::{OptionKind, OptionParams, PricingError, SweepParameter};

use crate::analytical::european;

/// A European call or put priced with the generalised Black-Scholes-Merton
/// formula.
///
/// Value type: cloning copies the parameters and kind, equality compares
/// them.
///
/// # Examples
/// ```
/// use pricer_models::instruments::EuropeanOption;
///
/// let mut option = EuropeanOption::new(0.25, 65.0, 0.30, 0.08, 0.08, 0.0, 0.0, "C").unwrap();
/// assert!((option.price(60.0) - 2.13337).abs() < 1e-5);
///
/// // The parity price of a call is the put
/// assert!((option.put_call_parity(60.0) - 5.84628).abs() < 1e-5);
///
/// option.toggle();
/// assert!((option.price(60.0) - 5.84628).abs() < 1e-5);
///
/// assert!(EuropeanOption::new(0.25, 65.0, 0.30, 0.08, 0.08, 0.0, 0.0, "X").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanOption {
    params: OptionParams,
    kind: OptionKind,
}

impl EuropeanOption {
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

    // ==========================================================
    // Accessors
    // ==========================================================

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

    /// Sets the option kind from a token.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidOptionKind`] for an unknown token and
    /// leaves the current kind unchanged.
    pub fn set_kind_str(&mut self, kind: &str) -> Result<(), PricingError> {
        self.kind = kind.parse()?;
        Ok(())
    }

    /// Flips call to put and put to call.
    #[inline]
    pub fn toggle(&mut self) {
        self.kind = self.kind.toggled();
    }

    /// Time to expiry (T).
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

    // ==========================================================
    // Price
    // ==========================================================

    /// Price at one spot.
    #[inline]
    pub fn price(&self, spot: f64) -> f64 {
        european::price(&self.params, self.kind, spot)
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

    /// Prices at `spot` while `param` takes each of `values`.
    ///
    /// The option's own parameters are unchanged afterwards.
    pub fn price_over_parameter(&self, param: SweepParameter, values: &[f64], spot: f64) -> Vec<f64> {
        european::price_over_parameter(
            &BatchEvaluator::default(),
            &self.params,
            self.kind,
            param,
            values,
            spot,
        )
    }

    /// Prices at `spot` while `param` runs over a mesh.
    ///
    /// # Errors
    /// Returns the mesh validation error before any pricing.
    pub fn price_over_mesh(
        &self,
        param: SweepParameter,
        start: f64,
        end: f64,
        step: f64,
        spot: f64,
    ) -> Result<Vec<f64>, PricingError> {
        european::price_over_mesh(
            &BatchEvaluator::default(),
            &self.params,
            self.kind,
            param,
            start,
            end,
            step,
            spot,
        )
    }

    /// Prices at `spot` while the parameter named `"T"`, `"K"` or `"sig"`
    /// takes each of `values`.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidSweepParameter`] for any other name.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::EuropeanOption;
    ///
    /// let option = EuropeanOption::new(0.25, 65.0, 0.30, 0.08, 0.08, 0.0, 0.0, "C").unwrap();
    /// let by_strike = option.price_over_named("K", &[60.0, 65.0, 70.0], 60.0).unwrap();
    /// assert!(by_strike[0] > by_strike[2]);
    /// assert!(option.price_over_named("r", &[0.05], 60.0).is_err());
    /// ```
    pub fn price_over_named(
        &self,
        name: &str,
        values: &[f64],
        spot: f64,
    ) -> Result<Vec<f64>, PricingError> {
        european::price_over_named(
            &BatchEvaluator::default(),
            &self.params,
            self.kind,
            name,
            values,
            spot,
        )
    }

    // ==========================================================
    // Put-call parity
    // ==========================================================

    /// Opposite-kind price implied by parity at one spot.
    #[inline]
    pub fn put_call_parity(&self, spot: f64) -> f64 {
        european::put_call_parity(&self.params, self.kind, spot)
    }

    /// Opposite-kind prices implied by parity at each spot.
    pub fn put_call_parity_batch(&self, spots: &[f64]) -> Vec<f64> {
        BatchEvaluator::default().map(spots, |spot| self.put_call_parity(spot))
    }

    /// Opposite-kind prices implied by parity over a spot mesh.
    ///
    /// # Errors
    /// Returns the mesh validation error.
    pub fn put_call_parity_mesh(
        &self,
        start: f64,
        end: f64,
        step: f64,
    ) -> Result<Vec<f64>, PricingError> {
        BatchEvaluator::default().map_mesh(start, end, step, |spot| self.put_call_parity(spot))
    }

    /// Whether `observed` matches the parity price within an absolute 1e-5.
    #[inline]
    pub fn is_parity(&self, spot: f64, observed: f64) -> bool {
        european::is_parity(&self.params, self.kind, spot, observed)
    }

    // ==========================================================
    // Greeks
    // ==========================================================

    /// Analytic delta at one spot.
    #[inline]
    pub fn delta(&self, spot: f64) -> f64 {
        european::delta(&self.params, self.kind, spot)
    }

    /// Analytic delta at each spot.
    pub fn delta_batch(&self, spots: &[f64]) -> Vec<f64> {
        BatchEvaluator::default().map(spots, |spot| self.delta(spot))
    }

    /// Analytic delta over a spot mesh.
    ///
    /// # Errors
    /// Returns the mesh validation error.
    pub fn delta_mesh(&self, start: f64, end: f64, step: f64) -> Result<Vec<f64>, PricingError> {
        BatchEvaluator::default().map_mesh(start, end, step, |spot| self.delta(spot))
    }

    /// Central-difference delta with bump `h` at one spot.
    #[inline]
    pub fn delta_fd(&self, spot: f64, h: f64) -> f64 {
        european::delta_fd(&self.params, self.kind, spot, h)
    }

    /// Central-difference delta at each spot.
    pub fn delta_fd_batch(&self, spots: &[f64], h: f64) -> Vec<f64> {
        BatchEvaluator::default().map(spots, |spot| self.delta_fd(spot, h))
    }

    /// Central-difference delta over a spot mesh.
    ///
    /// # Errors
    /// Returns the mesh validation error.
    pub fn delta_fd_mesh(
        &self,
        start: f64,
        end: f64,
        step: f64,
        h: f64,
    ) -> Result<Vec<f64>, PricingError> {
        BatchEvaluator::default().map_mesh(start, end, step, |spot| self.delta_fd(spot, h))
    }

    /// Analytic gamma at one spot. Identical for calls and puts.
    #[inline]
    pub fn gamma(&self, spot: f64) -> f64 {
        european::gamma(&self.params, spot)
    }

    /// Analytic gamma at each spot.
    pub fn gamma_batch(&self, spots: &[f64]) -> Vec<f64> {
        BatchEvaluator::default().map(spots, |spot| self.gamma(spot))
    }

    /// Analytic gamma over a spot mesh.
    ///
    /// # Errors
    /// Returns the mesh validation error.
    pub fn gamma_mesh(&self, start: f64, end: f64, step: f64) -> Result<Vec<f64>, PricingError> {
        BatchEvaluator::default().map_mesh(start, end, step, |spot| self.gamma(spot))
    }

    /// Central-difference gamma with bump `h` at one spot.
    #[inline]
    pub fn gamma_fd(&self, spot: f64, h: f64) -> f64 {
        european::gamma_fd(&self.params, self.kind, spot, h)
    }

    /// Central-difference gamma at each spot.
    pub fn gamma_fd_batch(&self, spots: &[f64], h: f64) -> Vec<f64> {
        BatchEvaluator::default().map(spots, |spot| self.gamma_fd(spot, h))
    }

    /// Central-difference gamma over a spot mesh.
    ///
    /// # Errors
    /// Returns the mesh validation error.
    pub fn gamma_fd_mesh(
        &self,
        start: f64,
        end: f64,
        step: f64,
        h: f64,
    ) -> Result<Vec<f64>, PricingError> {
        BatchEvaluator::default().map_mesh(start, end, step, |spot| self.gamma_fd(spot, h))
    }
}

impl SpotPricer for EuropeanOption {
    #[inline]
    fn price(&self, spot: f64) -> f64 {
        EuropeanOption::price(self, spot)
    }
}
