//! Logging setup for the `tabsplit` binary.
//!
//! `RUST_LOG` wins when set; otherwise the configured filter applies.
//! Events go to stderr so stdout stays clean for summaries and JSON.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the filter: `RUST_LOG` first, then `config.log_filter`.
pub fn build_filter(config: &CliConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_filter).map_err(|source| {
            TelemetryError::EnvFilter {
                value: config.log_filter.clone(),
                source,
            }
        }),
    }
}

/// Installs the global subscriber. Call once, before any work.
pub fn init(config: &CliConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
