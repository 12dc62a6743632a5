//! Core pricing input types.
//!
//! This module provides:
//! - `params`: The seven-field option parameter set consumed by every kernel
//! - `option_kind`: Call/put discriminator parsed from `"C"`/`"P"` tokens
//! - `sweep`: Closed set of parameters a parametric sweep may vary
//! - `carry`: Cost-of-carry conventions (stock, dividend, futures, currency)
//! - `error`: Structured invalid-argument errors
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionParams`] from `params`
//! - [`OptionKind`] from `option_kind`
//! - [`SweepParameter`] from `sweep`
//! - [`CarryModel`] from `carry`
//! - [`PricingError`] from `error`

pub mod carry;
pub mod error;
pub mod option_kind;
pub mod params;
pub mod sweep;

// Re-export commonly used types at module level
pub use carry::CarryModel;
pub use error::PricingError;
pub use option_kind::OptionKind;
pub use params::OptionParams;
pub use sweep::SweepParameter;
