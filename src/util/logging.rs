//! Structured logging setup for cfconnector
//!
//! Initializes a `tracing` subscriber with an `EnvFilter`, pretty or JSON
//! output, and runtime configuration via environment variables. Output goes
//! to stderr so it never mixes with descriptor output on stdout.
//!
//! # Example
//!
//! ```no_run
//! use cfconnector::util::logging;
//!
//! // Initialize from CFCONNECTOR_LOG_LEVEL / CFCONNECTOR_LOG_JSON
//! logging::init_from_env();
//!
//! use tracing::{debug, info};
//!
//! info!("Connector started");
//! debug!(variable = "VCAP_SERVICES", "Reading services descriptor");
//! ```

use crate::env::{EnvironmentAccessor, ProcessEnvironment};
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

/// Configuration for logging initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., cfconnector::connector) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    /// Defaults: INFO level, pretty output, targets on, locations off
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Reads `CFCONNECTOR_LOG_LEVEL` and `CFCONNECTOR_LOG_JSON`
    pub fn from_accessor(env: &impl EnvironmentAccessor) -> Self {
        let level = env
            .get_value("CFCONNECTOR_LOG_LEVEL")
            .map(|v| parse_level(&v))
            .unwrap_or(Level::INFO);

        let use_json = env
            .get_value("CFCONNECTOR_LOG_JSON")
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            ..Default::default()
        }
    }
}

/// Parses a log level, case-insensitively; unknown values become INFO
///
/// ```
/// use cfconnector::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// assert_eq!(parse_level("invalid"), Level::INFO);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn build_filter(level: Level) -> EnvFilter {
    // RUST_LOG, when set, takes precedence over the configured level
    if std::env::var_os("RUST_LOG").is_some() {
        return EnvFilter::from_default_env();
    }

    match format!("cfconnector={}", level).parse::<Directive>() {
        Ok(directive) => EnvFilter::new("warn").add_directive(directive),
        Err(_) => EnvFilter::new(level.to_string()),
    }
}

/// Initializes the global subscriber; later calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        let result = if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location),
                )
                .try_init()
        };

        if let Err(e) = result {
            eprintln!("Logging already initialized elsewhere: {}", e);
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

/// Initializes logging from `CFCONNECTOR_LOG_LEVEL` and `CFCONNECTOR_LOG_JSON`
pub fn init_from_env() {
    init_logging(LoggingConfig::from_accessor(&ProcessEnvironment::new()));
}
