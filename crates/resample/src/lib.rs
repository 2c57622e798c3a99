//! Command-line front end for the resampling engine
//!
//! Loads a run configuration, runs the experiments in `resample_core` and
//! renders their diagnostic reports.

pub mod config;
pub mod logging;
pub mod report;

pub use config::{ConfigOverrides, RunConfigError, load_config};
pub use logging::init_logging;
pub use report::{OutputFormat, render_report};
