//! Parameters that can be swept while the others are held constant.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Pricing input varied by a parametric sweep.
///
/// The closed set replaces the string-keyed selection of the short tokens
/// `"T"`, `"K"` and `"sig"`, which are still accepted through [`FromStr`].
///
/// # Examples
/// ```
/// use pricer_core::types::SweepParameter;
///
/// let p: SweepParameter = "sig".parse().unwrap();
/// assert_eq!(p, SweepParameter::Volatility);
/// assert!("r".parse::<SweepParameter>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SweepParameter {
    /// Time to expiry (`T`).
    Expiry,
    /// Strike price (`K`).
    Strike,
    /// Volatility (`sig`).
    Volatility,
}

impl SweepParameter {
    /// All sweepable parameters.
    pub const ALL: [SweepParameter; 3] = [
        SweepParameter::Expiry,
        SweepParameter::Strike,
        SweepParameter::Volatility,
    ];

    /// Short token used in formulas (`"T"`, `"K"`, `"sig"`).
    #[inline]
    pub fn token(self) -> &'static str {
        match self {
            SweepParameter::Expiry => "T",
            SweepParameter::Strike => "K",
            SweepParameter::Volatility => "sig",
        }
    }
}

impl FromStr for SweepParameter {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "T" => Ok(SweepParameter::Expiry),
            "K" => Ok(SweepParameter::Strike),
            "sig" => Ok(SweepParameter::Volatility),
            _ => {
                tracing::warn!(name = s, "rejected sweep parameter name");
                Err(PricingError::InvalidSweepParameter {
                    name: s.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
