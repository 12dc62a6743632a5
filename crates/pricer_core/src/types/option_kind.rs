//! Option kind discriminator (call or put).

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Kind of a plain option: call or put.
///
/// Parsed case-insensitively from the single-letter tokens `"C"` and `"P"`.
/// Any other token is rejected with [`PricingError::InvalidOptionKind`].
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// let kind: OptionKind = "c".parse().unwrap();
/// assert_eq!(kind, OptionKind::Call);
/// assert_eq!(kind.toggled(), OptionKind::Put);
/// assert!("x".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionKind {
    /// Right to buy the underlying at the strike.
    #[default]
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionKind {
    /// Returns the opposite kind.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            OptionKind::Call => OptionKind::Put,
            OptionKind::Put => OptionKind::Call,
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(self) -> bool {
        matches!(self, OptionKind::Put)
    }

    /// Canonical single-letter token (`"C"` or `"P"`).
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Call => "C",
            OptionKind::Put => "P",
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" | "c" => Ok(OptionKind::Call),
            "P" | "p" => Ok(OptionKind::Put),
            _ => {
                tracing::warn!(token = s, "rejected option kind token");
                Err(PricingError::InvalidOptionKind {
                    token: s.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
