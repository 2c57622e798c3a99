use std::path::PathBuf;

use clap::Parser;
use resample::{ConfigOverrides, OutputFormat, init_logging, load_config, render_report};
use resample_core::{GbmPriceGenerator, ReplacementMode, inspect, run_experiment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ModeArg {
    /// Sample with replacement only
    With,
    /// Permute without replacement only
    Without,
    /// Without replacement, then with replacement
    Both,
}

impl ModeArg {
    fn modes(self) -> &'static [ReplacementMode] {
        match self {
            ModeArg::With => &[ReplacementMode::WithReplacement],
            ModeArg::Without => &[ReplacementMode::WithoutReplacement],
            ModeArg::Both => &ReplacementMode::ALL,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "resample")]
#[command(about = "Bootstrap scenario generation from a simulated daily price path")]
struct Args {
    /// Path to a YAML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Trading days in the simulated path
    #[arg(long)]
    days: Option<usize>,

    /// Starting market price
    #[arg(long)]
    market_price: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    drift: Option<f64>,

    #[arg(long)]
    volatility: Option<f64>,

    /// Seed for the simulated price path
    #[arg(long)]
    seed: Option<u64>,

    /// Number of scenarios (seeds 0..N)
    #[arg(short = 'n', long)]
    scenarios: Option<usize>,

    /// Which resampling discipline to run
    #[arg(short, long, value_enum, default_value_t = ModeArg::Both)]
    mode: ModeArg,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let overrides = ConfigOverrides {
        days: args.days,
        market_price: args.market_price,
        drift: args.drift,
        volatility: args.volatility,
        path_seed: args.seed,
        num_scenarios: args.scenarios,
    };
    let config = overrides.apply(load_config(args.config.as_deref())?);
    config.validate()?;

    tracing::info!(?config, mode = ?args.mode, "Starting resampling run");

    for &mode in args.mode.modes() {
        let set = run_experiment(&GbmPriceGenerator, &config, mode)?;
        let report = inspect(&set)?;
        print!("{}", render_report(&report, args.format)?);
        if args.format == OutputFormat::Json {
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selection_order() {
        assert_eq!(ModeArg::With.modes(), &[ReplacementMode::WithReplacement]);
        assert_eq!(
            ModeArg::Without.modes(),
            &[ReplacementMode::WithoutReplacement]
        );
        assert_eq!(
            ModeArg::Both.modes(),
            &[
                ReplacementMode::WithoutReplacement,
                ReplacementMode::WithReplacement
            ]
        );
    }

    #[test]
    fn test_default_mode_is_both() {
        let args = Args::try_parse_from(["resample"]).unwrap();
        assert_eq!(args.mode, ModeArg::Both);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_oversized_days_fail_validation() {
        let args = Args::try_parse_from(["resample", "--days", "9300000000000000000"]).unwrap();
        let overrides = ConfigOverrides {
            days: args.days,
            ..Default::default()
        };
        let config = overrides.apply(resample_core::ExperimentConfig::default());
        assert!(matches!(
            config.validate(),
            Err(resample_core::ConfigError::TooManyDays { .. })
        ));
    }
}
