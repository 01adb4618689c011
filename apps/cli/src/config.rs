//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what is loaded here.

use std::env;

use tabsplit_core::money::DEFAULT_CURRENCY_SYMBOL;

/// Log filter used when neither `RUST_LOG` nor `TABSPLIT_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing` filter directive, e.g. `"warn"` or `"tabsplit_core=debug"`
    pub log_filter: String,

    /// Symbol printed in front of amounts in text output
    pub currency_symbol: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("TABSPLIT_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        if log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue("TABSPLIT_LOG".to_string()));
        }

        let currency_symbol = lookup("TABSPLIT_CURRENCY_SYMBOL")
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());
        validate_symbol("TABSPLIT_CURRENCY_SYMBOL", &currency_symbol)?;

        Ok(CliConfig {
            log_filter,
            currency_symbol,
        })
    }

    /// Apply a `--currency-symbol` flag, if one was given.
    pub fn with_currency_symbol(mut self, symbol: Option<String>) -> Result<Self, ConfigError> {
        if let Some(symbol) = symbol {
            validate_symbol("--currency-symbol", &symbol)?;
            self.currency_symbol = symbol;
        }
        Ok(self)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// A symbol must be non-blank and contain no digits, so amounts stay
/// readable.
fn validate_symbol(name: &str, symbol: &str) -> Result<(), ConfigError> {
    if symbol.trim().is_empty() || symbol.chars().any(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidValue(name.to_string()));
    }
    Ok(())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
