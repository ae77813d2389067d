//! Logging setup
//!
//! The rendered report owns stdout, so diagnostics go to stderr. The level
//! comes from the `RUST_LOG` environment variable when set, otherwise from
//! the `--log-level` flag.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("finsight={level},finsight_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    Ok(())
}
