use thiserror::Error;

/// Errors raised while reading the Cloud Foundry environment
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The application descriptor variable is not set
    #[error("Not running in a Cloud Foundry environment: {variable} is not set")]
    NotInCloud { variable: String },

    /// The variable holds text that is not valid JSON
    #[error("Failed to parse {variable}: {source}")]
    Parse {
        variable: String,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but not the document shape the platform injects
    #[error("Invalid {variable} descriptor: {message}")]
    InvalidDescriptor { variable: String, message: String },

    /// A recognised service binding lacks a required field
    #[error("Invalid binding '{service}': {field} {message}")]
    InvalidBinding {
        service: String,
        field: String,
        message: String,
    },

    #[error("Duplicate service id: {0}")]
    DuplicateServiceId(String),
}

impl ConnectorError {
    pub(crate) fn invalid_descriptor(variable: &str, message: impl Into<String>) -> Self {
        ConnectorError::InvalidDescriptor {
            variable: variable.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_binding(service: &str, field: &str, message: impl Into<String>) -> Self {
        ConnectorError::InvalidBinding {
            service: service.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True when the failure means "no Cloud Foundry environment detected"
    pub fn is_not_in_cloud(&self) -> bool {
        matches!(self, ConnectorError::NotInCloud { .. })
    }
}

pub type Result<T> = std::result::Result<T, ConnectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_in_cloud_message_names_variable() {
        let err = ConnectorError::NotInCloud {
            variable: "VCAP_APPLICATION".to_string(),
        };
        assert!(err.to_string().contains("VCAP_APPLICATION"));
        assert!(err.is_not_in_cloud());
    }

    #[test]
    fn test_parse_error_names_variable() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ConnectorError::Parse {
            variable: "VCAP_SERVICES".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Failed to parse VCAP_SERVICES"));
        assert!(!err.is_not_in_cloud());
    }

    #[test]
    fn test_invalid_binding_display() {
        let err = ConnectorError::invalid_binding("mysql-1", "port", "is missing");
        assert_eq!(err.to_string(), "Invalid binding 'mysql-1': port is missing");
    }
}
