//! Configuration management for cfconnector
//!
//! Settings are read from environment variables with sensible defaults. They
//! go through an [`EnvironmentAccessor`] like everything else, so tests can
//! supply them without touching the process environment.
//!
//! # Environment Variables
//!
//! - `CFCONNECTOR_APPLICATION_VAR`: Name of the application descriptor variable
//!   - default: "VCAP_APPLICATION"
//! - `CFCONNECTOR_SERVICES_VAR`: Name of the services descriptor variable
//!   - default: "VCAP_SERVICES"
//! - `CFCONNECTOR_STRICT_BINDINGS`: Fail on malformed bindings of known kinds
//!   (true|false|1|0, any case) - default: "true"
//! - `CFCONNECTOR_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```
//! use cfconnector::{ConnectorConfig, MockEnvironment};
//!
//! let env = MockEnvironment::with_vars([("CFCONNECTOR_STRICT_BINDINGS", "False")]);
//! let config = ConnectorConfig::try_from_accessor(&env)?;
//!
//! assert!(!config.strict_bindings);
//! assert_eq!(config.services_var, "VCAP_SERVICES");
//! # Ok::<(), cfconnector::ConfigError>(())
//! ```

use crate::env::{EnvironmentAccessor, ProcessEnvironment};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub const DEFAULT_APPLICATION_VAR: &str = "VCAP_APPLICATION";
pub const DEFAULT_SERVICES_VAR: &str = "VCAP_SERVICES";
const DEFAULT_STRICT_BINDINGS: bool = true;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Variable holding the application descriptor
    pub application_var: String,

    /// Variable holding the services descriptor
    pub services_var: String,

    /// Fail on recognised bindings with missing fields instead of skipping them
    pub strict_bindings: bool,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ConnectorConfig {
    /// Loads configuration from the process environment with defaults
    fn default() -> Self {
        Self::from_accessor(&ProcessEnvironment::new())
    }
}

impl ConnectorConfig {
    /// Configuration with built-in defaults, ignoring the environment
    pub fn builtin() -> Self {
        Self {
            application_var: DEFAULT_APPLICATION_VAR.to_string(),
            services_var: DEFAULT_SERVICES_VAR.to_string(),
            strict_bindings: DEFAULT_STRICT_BINDINGS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    /// Loads configuration through an accessor, falling back to defaults
    ///
    /// Unparseable values fall back to defaults; use [`ConnectorConfig::try_from_accessor`]
    /// to surface them as errors.
    pub fn from_accessor(env: &impl EnvironmentAccessor) -> Self {
        let application_var = env
            .get_value("CFCONNECTOR_APPLICATION_VAR")
            .unwrap_or_else(|| DEFAULT_APPLICATION_VAR.to_string());

        let services_var = env
            .get_value("CFCONNECTOR_SERVICES_VAR")
            .unwrap_or_else(|| DEFAULT_SERVICES_VAR.to_string());

        let strict_bindings = env
            .get_value("CFCONNECTOR_STRICT_BINDINGS")
            .and_then(|v| parse_bool(&v).ok())
            .unwrap_or(DEFAULT_STRICT_BINDINGS);

        let log_level = env
            .get_value("CFCONNECTOR_LOG_LEVEL")
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            application_var,
            services_var,
            strict_bindings,
            log_level,
        }
    }

    /// Like [`ConnectorConfig::from_accessor`], but rejects unparseable values
    pub fn try_from_accessor(env: &impl EnvironmentAccessor) -> Result<Self, ConfigError> {
        let mut config = Self::from_accessor(env);

        if let Some(raw) = env.get_value("CFCONNECTOR_STRICT_BINDINGS") {
            config.strict_bindings = parse_bool(&raw).map_err(|error| ConfigError::ParseError {
                field: "CFCONNECTOR_STRICT_BINDINGS".to_string(),
                error,
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    ///
    /// Checks that:
    /// - Both variable names are non-empty and distinct
    /// - Log level is valid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application_var.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Application descriptor variable name cannot be empty".to_string(),
            ));
        }
        if self.services_var.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Services descriptor variable name cannot be empty".to_string(),
            ));
        }
        if self.application_var == self.services_var {
            return Err(ConfigError::ValidationFailed(format!(
                "Application and services descriptors cannot share the variable {}",
                self.application_var
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Converts configuration to a display map for output formatting
    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("application_var".to_string(), self.application_var.clone());
        map.insert("services_var".to_string(), self.services_var.clone());
        map.insert(
            "strict_bindings".to_string(),
            self.strict_bindings.to_string(),
        );
        map.insert("log_level".to_string(), self.log_level.clone());

        map
    }
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(format!("expected true or false, got '{}'", raw)),
    }
}

impl fmt::Display for ConnectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Connector Configuration:")?;
        writeln!(f, "  Application Variable: {}", self.application_var)?;
        writeln!(f, "  Services Variable: {}", self.services_var)?;
        writeln!(f, "  Strict Bindings: {}", self.strict_bindings)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
