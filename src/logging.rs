//! Logging setup for the catalogue server.
//!
//! Logs go to stdout through a `tracing-subscriber` fmt layer. The filter
//! comes from [`LogConfig`] only; no environment variable is consulted.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error, off).
    pub level: String,
    /// Whether to colour the output.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            ansi: true,
        }
    }
}

impl LogConfig {
    /// Parses log level from string.
    #[must_use]
    pub fn parse_level(value: &str) -> String {
        match value.to_lowercase().as_str() {
            "trace" => "trace".to_string(),
            "debug" => "debug".to_string(),
            "info" => "info".to_string(),
            "warn" | "warning" => "warn".to_string(),
            "error" => "error".to_string(),
            "off" | "none" | "disabled" => "off".to_string(),
            _ => DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Builds the filter for this configuration.
    ///
    /// Request spans from `tower_http` are kept at debug so the per-request
    /// access line stays the only info-level record of a request.
    #[must_use]
    pub fn filter(&self) -> EnvFilter {
        let level = Self::parse_level(&self.level);
        if level == "off" {
            return EnvFilter::new("off");
        }
        EnvFilter::new(format!("{level},tower_http=warn"))
    }
}

/// Initializes the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(config: &LogConfig) {
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(config.ansi)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(false);

    let _ = tracing_subscriber::registry()
        .with(config.filter())
        .with(stdout_layer)
        .try_init();
}
