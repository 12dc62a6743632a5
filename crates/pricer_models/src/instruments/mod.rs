//! Option facades.
//!
//! Each facade owns one [`OptionParams`](pricer_core::types::OptionParams)
//! by value plus an [`OptionKind`](pricer_core::types::OptionKind), and
//! dispatches to the call or put branch of its analytical kernel.
//!
//! - [`EuropeanOption`]: price, parity, analytic and bumped delta/gamma,
//!   parameter sweeps
//! - [`AmericanOption`]: perpetual closed-form price
//!
//! Both implement [`SpotPricer`](pricer_core::traits::SpotPricer), so their
//! batch forms accept a custom [`BatchEvaluator`](pricer_core::batch::BatchEvaluator).
//!
//! # Examples
//!
//! ```
//! use pricer_core::batch::BatchEvaluator;
//! use pricer_core::traits::SpotPricer;
//! use pricer_models::instruments::{AmericanOption, EuropeanOption};
//!
//! let european = EuropeanOption::new(1.0, 100.0, 0.2, 0.0, 0.0, 0.0, 0.0, "C").unwrap();
//! let american = AmericanOption::perpetual(100.0, 0.1, 0.1, 0.02, 0.0, 0.0, "P").unwrap();
//!
//! let evaluator = BatchEvaluator::default();
//! let spots = [90.0, 100.0, 110.0];
//! assert_eq!(european.price_batch_with(&evaluator, &spots).len(), 3);
//! assert_eq!(american.price_batch_with(&evaluator, &spots).len(), 3);
//! ```

pub mod american;
pub mod european;

pub use american::AmericanOption;
pub use european::EuropeanOption;
