//! The running application's own descriptor

use crate::error::{ConnectorError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Identity and properties of the running application instance
///
/// `properties` holds the whole descriptor object with its key order intact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationInstanceInfo {
    app_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    uris: Vec<String>,
    properties: Map<String, Value>,
}

impl ApplicationInstanceInfo {
    /// Parses the raw value of the application descriptor variable
    pub fn parse(variable: &str, raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|source| ConnectorError::Parse {
            variable: variable.to_string(),
            source,
        })?;

        match value {
            Value::Object(properties) => Self::from_properties(variable, properties),
            other => Err(ConnectorError::invalid_descriptor(
                variable,
                format!("expected a JSON object, found {}", json_type(&other)),
            )),
        }
    }

    fn from_properties(variable: &str, properties: Map<String, Value>) -> Result<Self> {
        let app_id = match first_present(&properties, &["name", "application_name"]) {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            Some(_) => {
                return Err(ConnectorError::invalid_descriptor(
                    variable,
                    "application name must be a non-empty string",
                ))
            }
            None => {
                return Err(ConnectorError::invalid_descriptor(
                    variable,
                    "missing application name",
                ))
            }
        };

        let instance_id = properties
            .get("instance_id")
            .and_then(Value::as_str)
            .map(str::to_string);

        let uris = match first_present(&properties, &["uris", "application_uris"]) {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        ConnectorError::invalid_descriptor(variable, "uris must contain strings")
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => {
                return Err(ConnectorError::invalid_descriptor(
                    variable,
                    "uris must be an array",
                ))
            }
        };

        Ok(Self {
            app_id,
            instance_id,
            uris,
            properties,
        })
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    /// Externally reachable addresses, in descriptor order
    pub fn uris(&self) -> &[String] {
        &self.uris
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

fn first_present<'a>(properties: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| properties.get(*key).filter(|value| !value.is_null()))
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
