use anyhow::{Context, Result};
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset. sqlx logs every statement at info, which
/// is too chatty for request-per-statement handlers.
pub const DEFAULT_LOG_FILTER: &str = "info,blog_server=debug,sqlx=warn";

/// Installs the global subscriber. actix-web's `Logger` writes through the
/// `log` facade and is picked up by the same subscriber.
pub fn init_logging() -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(std::io::stdout().is_terminal());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("Logging initialized");
    Ok(())
}
