//! Shared tracing configuration utilities for the residue workspace.
//!
//! The helpers in this crate centralise how examples, integration tests, and
//! benches install `tracing` subscribers. Routing setup through a single
//! crate avoids copy-pasting builder logic and keeps the logging surface
//! consistent across binaries.

pub mod performance;

#[macro_use]
pub mod macros;

use std::env;

pub use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::fmt as tracing_fmt;
use tracing_subscriber::EnvFilter;

/// Output format for the formatter layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingOutput {
    /// Human-oriented multi-line output for local development.
    Pretty,
    /// Single-line output for terminals with limited space.
    Compact,
    /// Machine-readable JSON for CI and log collection.
    Json,
}

/// Configuration describing how the shared tracing subscriber should behave.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Optional tracing directives (e.g. `residue_backends=debug,info`).
    /// When absent the crate falls back to `RUST_LOG` and finally to
    /// [`default_directive`](Self::default_directive).
    pub directives: Option<String>,
    /// Fallback directive used when neither `directives` nor `RUST_LOG`
    /// resolve to a valid filter.
    pub default_directive: String,
    /// Controls whether event targets (module paths) appear in output.
    pub include_targets: bool,
    /// Controls ANSI formatting. Disable for CI logs that strip colour codes.
    pub ansi: bool,
    /// Output format for the formatter layer.
    pub output: TracingOutput,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::for_local()
    }
}

impl TracingConfig {
    /// Returns a configuration tuned for local development (pretty, ANSI-enabled output).
    pub fn for_local() -> Self {
        Self {
            directives: None,
            default_directive: "info".to_string(),
            include_targets: true,
            ansi: true,
            output: TracingOutput::Pretty,
        }
    }

    /// Returns a configuration tuned for CI or log collection environments (JSON, no ANSI).
    pub fn for_ci() -> Self {
        Self {
            directives: None,
            default_directive: "info".to_string(),
            include_targets: true,
            ansi: false,
            output: TracingOutput::Json,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        if let Some(directives) = &self.directives {
            if let Ok(filter) = EnvFilter::try_new(directives) {
                return filter;
            }
        }
        if let Ok(rust_log) = env::var(EnvFilter::DEFAULT_ENV) {
            if let Ok(filter) = EnvFilter::try_new(&rust_log) {
                return filter;
            }
        }
        EnvFilter::new(&self.default_directive)
    }
}

/// Installs the global subscriber described by `config`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed. Tests and other
/// callers that may race on installation should use [`try_init`].
pub fn init(config: TracingConfig) {
    try_init(config).expect("global tracing subscriber already installed");
}

/// Installs the global subscriber, returning an error if one is already set.
pub fn try_init(config: TracingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let builder = tracing_fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.include_targets)
        .with_ansi(config.ansi);

    match config.output {
        TracingOutput::Pretty => builder.pretty().try_init(),
        TracingOutput::Compact => builder.compact().try_init(),
        TracingOutput::Json => builder.json().try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_preset_is_pretty_and_ansi() {
        let config = TracingConfig::for_local();
        assert!(config.ansi);
        assert_eq!(config.output, TracingOutput::Pretty);
        assert_eq!(config.default_directive, "info");
    }

    #[test]
    fn test_ci_preset_is_json_without_ansi() {
        let config = TracingConfig::for_ci();
        assert!(!config.ansi);
        assert_eq!(config.output, TracingOutput::Json);
    }

    #[test]
    fn test_explicit_directives_win_over_default() {
        let config = TracingConfig {
            directives: Some("residue_backends=trace".to_string()),
            ..TracingConfig::for_local()
        };
        // Construction must not panic; the directive string is valid.
        let _filter = config.env_filter();
    }
}
