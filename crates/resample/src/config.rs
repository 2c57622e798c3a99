//! Run configuration
//!
//! An optional YAML file supplies any subset of the experiment fields; the
//! rest take their defaults. Command-line flags are applied on top.
//!
//! ```yaml
//! days: 21
//! drift: 0.08
//! num_scenarios: 500
//! ```

use std::fs;
use std::path::Path;

use resample_core::ExperimentConfig;

/// Error types for loading a run configuration
#[derive(Debug)]
pub enum RunConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for RunConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunConfigError::Io(msg) => write!(f, "IO error: {msg}"),
            RunConfigError::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for RunConfigError {}

/// Parse an experiment configuration from YAML text
pub fn parse_config(yaml: &str) -> Result<ExperimentConfig, RunConfigError> {
    serde_saphyr::from_str(yaml)
        .map_err(|e| RunConfigError::Parse(format!("Failed to parse config: {e}")))
}

/// Load the configuration file at `path`, or the defaults when there is none
pub fn load_config(path: Option<&Path>) -> Result<ExperimentConfig, RunConfigError> {
    let Some(path) = path else {
        return Ok(ExperimentConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        RunConfigError::Io(format!("Failed to read config {}: {e}", path.display()))
    })?;

    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), ?config, "Loaded run configuration");
    Ok(config)
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub days: Option<usize>,
    pub market_price: Option<f64>,
    pub drift: Option<f64>,
    pub volatility: Option<f64>,
    pub path_seed: Option<u64>,
    pub num_scenarios: Option<usize>,
}

impl ConfigOverrides {
    #[must_use]
    pub fn apply(&self, mut config: ExperimentConfig) -> ExperimentConfig {
        if let Some(days) = self.days {
            config.days = days;
        }
        if let Some(price) = self.market_price {
            config.market_price = price;
        }
        if let Some(drift) = self.drift {
            config.drift = drift;
        }
        if let Some(volatility) = self.volatility {
            config.volatility = volatility;
        }
        if let Some(seed) = self.path_seed {
            config.path_seed = seed;
        }
        if let Some(n) = self.num_scenarios {
            config.num_scenarios = n;
        }
        config
    }
}
