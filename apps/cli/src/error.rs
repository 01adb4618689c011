//! CLI error types.

use std::path::PathBuf;

use tabsplit_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Everything that can stop the `tabsplit` binary.
///
/// Unassigned items are not an error here: they are an expected outcome
/// and are reported through the exit status instead.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to encode result: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

/// Convenience type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
