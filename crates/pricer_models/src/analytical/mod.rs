//! Analytical pricing formulas.
//!
//! This module provides closed-form kernels:
//! - `european`: generalised Black-Scholes-Merton prices, parity
//!   conversions, analytic and finite-difference delta/gamma, parameter sweeps
//! - `american`: perpetual American call/put
//! - `distributions`: standard normal CDF and PDF
//!
//! Kernels are free functions of an [`OptionParams`](pricer_core::types::OptionParams)
//! and a spot price. Call and put share one function per quantity, selected
//! by [`OptionKind`](pricer_core::types::OptionKind).

pub mod american;
pub mod distributions;
pub mod european;

pub use distributions::{norm_cdf, norm_pdf};
pub use european::PARITY_TOLERANCE;
