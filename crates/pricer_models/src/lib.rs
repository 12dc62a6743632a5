//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option kernels and the facades built on them.
//!
//! This crate provides:
//! - Generalised Black-Scholes-Merton pricing for European options, with
//!   parity conversions, analytic and finite-difference delta/gamma and
//!   parameter sweeps (`analytical::european`)
//! - Perpetual American pricing (`analytical::american`)
//! - Option facades holding one parameter set and a call/put kind
//!   (`instruments`)
//!
//! ## Design Principles
//!
//! - **Enum dispatch on kind**: one kernel function per quantity, branching
//!   on [`OptionKind`](pricer_core::types::OptionKind)
//! - **Value semantics**: parameter sets and facades are `Copy`; sweeps price
//!   modified copies and never mutate the caller's state
//! - **Fail fast**: invalid kind tokens, sweep names and mesh recipes are
//!   rejected with [`PricingError`](pricer_core::types::PricingError) before
//!   any pricing
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::EuropeanOption;
//!
//! let option = EuropeanOption::new(30.0, 100.0, 0.30, 0.08, 0.08, 0.0, 0.0, "P").unwrap();
//! assert!((option.price(100.0) - 1.24750).abs() < 1e-5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
