//! # Signing Telemetry
//!
//! Structured logging for the eth-sig tools.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use signing_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() {
//!     init_tracing(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     // Log lines from the signing crates now reach stderr
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `eth-sig` | Service name in log lines |
//! | `ETH_SIG_LOG_LEVEL` | `info` | Log level filter |
//! | `ETH_SIG_JSON_LOGS` | `false` | JSON output |
//! | `ETH_SIG_CONSOLE_OUTPUT` | `true` | Write logs at all |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{build_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    /// The log filter could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}
