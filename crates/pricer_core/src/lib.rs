//! # pricer_core: Foundation for closed-form option pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the pricing workspace, providing:
//! - Pricing inputs: `OptionParams`, `OptionKind`, `SweepParameter`, `CarryModel` (`types`)
//! - Error types: `PricingError` (`types::error`)
//! - Mesh generation: `Mesh`, `generate_mesh` (`math::mesh`)
//! - Batch and sweep evaluation: `BatchConfig`, `BatchEvaluator` (`batch`)
//! - The spot-pricing seam: `SpotPricer` (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - rayon: Parallel batch evaluation
//! - tracing: Structured diagnostics
//! - serde / toml: Serialisation and configuration loading (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::batch::BatchEvaluator;
//! use pricer_core::types::{OptionKind, OptionParams, SweepParameter};
//!
//! let params = OptionParams::market(0.25, 65.0, 0.30, 0.08, 0.08);
//! let kind: OptionKind = "C".parse().unwrap();
//! assert!(kind.is_call());
//!
//! // Vary the strike while holding everything else fixed
//! let strikes = BatchEvaluator::default()
//!     .sweep_mesh(&params, SweepParameter::Strike, 60.0, 70.0, 5.0, |p| p.strike)
//!     .unwrap();
//! assert_eq!(strikes, vec![60.0, 65.0, 70.0]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameter types and TOML batch configuration

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod batch;
pub mod math;
pub mod traits;
pub mod types;
