//! # Custody Telemetry
//!
//! Structured logging setup for Custody-Chain services.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use custody_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_telemetry(&config).expect("failed to init telemetry");
//!
//!     // Application code; tracing events are now collected.
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CUSTODY_SERVICE_NAME` | `custody-chain` | Service name in log lines |
//! | `CUSTODY_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `CUSTODY_JSON_LOGS` | `false` (true in containers) | JSON formatted logs |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_telemetry;

use thiserror::Error;

/// Telemetry initialization errors.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber was already installed.
    #[error("failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
