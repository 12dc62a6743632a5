//! Batch and sweep evaluation.
//!
//! - `config`: [`BatchConfig`] (parallel threshold, mesh point budget)
//! - `evaluator`: [`BatchEvaluator`] lifting scalar kernels to sequences,
//!   meshes and one-parameter sweeps

pub mod config;
pub mod evaluator;

pub use config::{BatchConfig, BatchConfigBuilder, DEFAULT_PARALLEL_THRESHOLD};
pub use evaluator::BatchEvaluator;
