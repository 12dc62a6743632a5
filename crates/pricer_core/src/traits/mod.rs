//! Traits shared across pricing layers.
//!
//! - `pricer`: [`SpotPricer`], scalar pricing in the spot with batch forms

pub mod pricer;

pub use pricer::SpotPricer;
