//! End-to-end resampling experiment
//!
//! Generates one simulated daily path, extracts its transactions and resamples
//! them into a scenario set.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ExperimentError};
use crate::extract::extract_transactions;
use crate::generator::{MarketParameters, PriceGenerator};
use crate::model::{ReplacementMode, ScenarioSet, Transaction};
use crate::sampler::{generate_scenarios, seed_sequence};

/// Upper bound on `days`; each day costs two generated prices
pub const MAX_DAYS: usize = 1_000_000;

/// Inputs for one experiment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Trading days in the simulated path; one transaction per day.
    ///
    /// Each day is an (open, close) pair of half-day steps, and pairs do not
    /// overlap. A transaction therefore covers half of `time_step`, and the
    /// move from one close to the next open is not part of any transaction.
    /// Base returns carry about half the variance of full-step daily returns.
    pub days: usize,
    pub market_price: f64,
    /// Length of one day in the drift/volatility time unit
    pub time_step: f64,
    pub drift: f64,
    pub volatility: f64,
    /// Seed for the simulated price path (not the scenario seeds)
    pub path_seed: u64,
    pub num_scenarios: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            days: 7,
            market_price: 100.0,
            time_step: 1.0,
            drift: 0.15,
            volatility: 0.25,
            path_seed: 106,
            num_scenarios: 15,
        }
    }
}

impl ExperimentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days == 0 {
            return Err(ConfigError::ZeroDays);
        }
        if self.days > MAX_DAYS {
            return Err(ConfigError::TooManyDays {
                days: self.days,
                max: MAX_DAYS,
            });
        }
        if !(self.market_price.is_finite() && self.market_price > 0.0) {
            return Err(ConfigError::NonPositivePrice(self.market_price));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::NonPositiveTimeStep(self.time_step));
        }
        if self.volatility.is_nan() || self.volatility < 0.0 {
            return Err(ConfigError::NegativeVolatility(self.volatility));
        }
        Ok(())
    }

    /// Generator request for the daily path.
    ///
    /// Each day is observed as an (open, close) pair, so the path is sampled at
    /// half-day steps: `2 * days` steps of `time_step / 2`.
    #[must_use]
    pub fn market_parameters(&self) -> MarketParameters {
        MarketParameters {
            initial_price: self.market_price,
            steps: self.days.saturating_mul(2),
            time_step: self.time_step / 2.0,
            drift: self.drift,
            volatility: self.volatility,
        }
    }
}

/// Build the base transaction sequence of `config.days` daily transactions.
pub fn simulated_path<G: PriceGenerator + ?Sized>(
    generator: &G,
    config: &ExperimentConfig,
) -> Result<Vec<Transaction>, ExperimentError> {
    config.validate()?;

    let params = config.market_parameters();
    let prices = generator.generate_prices(&params, config.path_seed)?;
    let transactions = extract_transactions(&prices)?;

    tracing::debug!(
        path_seed = config.path_seed,
        prices = prices.len(),
        transactions = transactions.len(),
        "simulated path built"
    );

    Ok(transactions)
}

/// Run one experiment: simulate the path, then resample it with seeds
/// `0..config.num_scenarios`.
pub fn run_experiment<G: PriceGenerator + ?Sized>(
    generator: &G,
    config: &ExperimentConfig,
    mode: ReplacementMode,
) -> Result<ScenarioSet, ExperimentError> {
    let base = simulated_path(generator, config)?;
    let seeds = seed_sequence(config.num_scenarios);
    let set = generate_scenarios(&base, &seeds, mode)?;

    tracing::info!(
        %mode,
        scenarios = set.len(),
        days = config.days,
        "experiment complete"
    );

    Ok(set)
}
