//! `tracing` subscriber setup.
//!
//! Human-readable output for development, JSON for containers. Logs go to
//! stderr so stdout stays clean for command output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{TelemetryConfig, TelemetryError};

/// Build the filter from the configured level.
///
/// `RUST_LOG` is not read here: [`TelemetryConfig::from_env`] already folds it
/// in below `ETH_SIG_LOG_LEVEL`, and callers may override it afterwards.
pub fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Install the global subscriber.
///
/// # Errors
/// `TelemetryError::Config` for an unparseable filter, and
/// `TelemetryError::SubscriberInit` if a global subscriber is already set.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    let fmt_layer = if !config.console_output {
        None
    } else if config.json_logs {
        // JSON output for containers/production
        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        )
    } else {
        // Pretty output for development
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(true)
                .boxed(),
        )
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Tracing initialized"
    );

    Ok(())
}
