use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// Reports are written to stdout, so logs never mix with them. The level can be
/// set with `level` or overridden entirely with the `RUST_LOG` environment
/// variable.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("resample={level},resample_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!(level, "Logging initialized");
    Ok(())
}
