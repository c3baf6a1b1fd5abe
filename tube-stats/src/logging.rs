//! Structured logging setup for applications embedding the engine.
//!
//! The library only emits `tracing` events (computations are instrumented at
//! debug level); installing a subscriber is left to the application. This
//! module offers a ready-made subscriber configuration for binaries and
//! examples.

use tracing::Level;

/// Configuration for the logging subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level for every target outside this crate.
    pub level: Level,
    /// Level for `tube_stats` events, such as the per-computation debug output.
    pub engine_level: Level,
    /// Emit one JSON object per event instead of human-readable lines.
    pub json_format: bool,
    /// Raw filter directives that replace the two levels above.
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            engine_level: Level::INFO,
            json_format: false,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration for production use.
    pub fn production() -> Self {
        Self {
            level: Level::WARN,
            engine_level: Level::INFO,
            json_format: true,
            env_filter: None,
        }
    }

    /// Creates a configuration for development use, including per-computation
    /// debug events.
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            engine_level: Level::DEBUG,
            json_format: false,
            env_filter: None,
        }
    }

    /// Sets the log level for the application.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the log level for the statistics engine.
    pub fn with_engine_level(mut self, level: Level) -> Self {
        self.engine_level = level;
        self
    }

    /// Sets whether to use JSON output format.
    pub fn with_json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }

    /// Sets a custom environment filter.
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the environment filter string.
    pub fn env_filter(&self) -> String {
        if let Some(ref filter) = self.env_filter {
            filter.clone()
        } else {
            format!(
                "{},tube_stats={}",
                self.level.as_str().to_lowercase(),
                self.engine_level.as_str().to_lowercase()
            )
        }
    }
}

/// Installs a global subscriber. `RUST_LOG` takes precedence over the
/// configured filter.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
///
/// # Examples
///
/// ```rust,no_run
/// use tube_stats::logging::{init_logging, LoggingConfig};
///
/// init_logging(LoggingConfig::development().with_json_format(true)).unwrap();
/// ```
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

    let fmt_layer = if config.json_format {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
