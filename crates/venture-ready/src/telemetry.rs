//! Tracing setup for the scoring service.
//!
//! The filter is resolved once at startup: an explicit `RUST_LOG` wins,
//! otherwise the configured application level applies and the HTTP client
//! used for text generation is quieted to `warn` so fallback-path retries
//! do not flood the log.

use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("cannot build a log filter from level '{level}'")]
    Filter {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global subscriber. Call exactly once, before any request
/// handling or generation traffic starts.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(config)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

fn resolve_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    configured_filter(&config.log_level)
}

fn configured_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(default_directives(level)).map_err(|source| TelemetryError::Filter {
        level: level.to_string(),
        source,
    })
}

/// Application level for our crates, `warn` for the generation HTTP stack.
fn default_directives(level: &str) -> String {
    format!("{level},hyper=warn,reqwest=warn")
}
