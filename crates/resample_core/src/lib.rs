//! Bootstrap scenario generation for a single simulated price path
//!
//! This crate turns one simulated daily price path into a base sequence of
//! transactions and resamples it into scenario sets for bootstrap analysis.
//! It supports:
//! - Pluggable price path generators (geometric Brownian motion stand-in)
//! - Non-overlapping extraction of daily transactions from a price path
//! - Resampling without replacement (seeded Fisher-Yates permutation)
//! - Resampling with replacement (seeded uniform index draws)
//! - A diagnostic report over the resulting return matrix
//!
//! Every scenario is seeded independently, so the same seeds always reproduce
//! the same scenario set, sequentially or in parallel.
//!
//! ```ignore
//! use resample_core::{ExperimentConfig, GbmPriceGenerator, ReplacementMode, inspect, run_experiment};
//!
//! let config = ExperimentConfig::default();
//! let set = run_experiment(&GbmPriceGenerator, &config, ReplacementMode::WithoutReplacement)?;
//! println!("{}", inspect(&set)?);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod experiment;
pub mod extract;
pub mod generator;
pub mod inspect;
pub mod sampler;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{
    ConfigError, ExperimentError, GeneratorError, InspectError, PathError, SamplingError,
};
pub use experiment::{ExperimentConfig, run_experiment, simulated_path};
pub use extract::extract_transactions;
pub use generator::{GbmPriceGenerator, MarketParameters, PriceGenerator};
pub use inspect::{ScenarioReport, inspect};
pub use model::{ReplacementMode, Scenario, ScenarioSet, Transaction};
pub use sampler::{
    draw_indices, generate_scenarios, sample_scenario, sample_with_replacement,
    sample_without_replacement, seed_sequence,
};
