//! Tracing setup for the kutuphane CLI
//!
//! Usage:
//!   kutuphane --debug serve                 # Debug logging to console
//!   RUST_LOG=kutuphane_server=debug kutuphane serve   # Fine-grained log control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets debug level if RUST_LOG is not set)
    pub debug: bool,
}

fn default_filter(config: &TracingConfig) -> &'static str {
    if config.debug {
        "debug"
    } else {
        "info,tower_http=info,sqlx=warn"
    }
}

/// Initialize console tracing.
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_parse() {
        for debug in [false, true] {
            let directives = default_filter(&TracingConfig { debug });
            assert!(EnvFilter::try_new(directives).is_ok());
        }
    }
}
