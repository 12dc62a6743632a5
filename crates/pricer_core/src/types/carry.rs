//! Cost-of-carry conventions of the generalised Black-Scholes formula.
//!
//! With risk-free rate `r`, continuous dividend yield `q` and foreign rate
//! `r_f`, the classical models are recovered by choosing:
//!
//! | Model | Cost of carry |
//! |-------|---------------|
//! | Black-Scholes (1973) stock | b = r |
//! | Merton (1973) dividend-paying stock | b = r - q |
//! | Black (1976) futures | b = 0 |
//! | Garman-Kohlhagen (1983) currency | b = r - r_f |

/// Classical model variant selecting the cost of carry.
///
/// # Examples
/// ```
/// use pricer_core::types::CarryModel;
///
/// let merton = CarryModel::MertonDividend { dividend_yield: 0.02 }.carry(0.05);
/// assert!((merton - 0.03).abs() < 1e-15);
/// assert_eq!(CarryModel::BlackFutures.carry(0.05), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarryModel {
    /// Non-dividend stock option: b = r.
    BlackScholesStock,
    /// Stock option with continuous dividend yield: b = r - q.
    MertonDividend {
        /// Continuous dividend yield (q)
        dividend_yield: f64,
    },
    /// Futures option: b = 0.
    BlackFutures,
    /// Currency option: b = r - r_f.
    GarmanKohlhagen {
        /// Foreign risk-free rate (r_f)
        foreign_rate: f64,
    },
}

impl CarryModel {
    /// Cost of carry implied by this model for a domestic rate `rate`.
    #[inline]
    pub fn carry(&self, rate: f64) -> f64 {
        match *self {
            CarryModel::BlackScholesStock => rate,
            CarryModel::MertonDividend { dividend_yield } => rate - dividend_yield,
            CarryModel::BlackFutures => 0.0,
            CarryModel::GarmanKohlhagen { foreign_rate } => rate - foreign_rate,
        }
    }
}
