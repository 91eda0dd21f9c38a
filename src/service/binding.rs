use super::Credentials;
use crate::error::{ConnectorError, Result};
use serde_json::{Map, Value};

/// A single entry of the services descriptor, borrowed from the parsed JSON
///
/// Only the fields used for kind discrimination are read eagerly; malformed
/// values there are ignored so that unrecognised entries can still be skipped.
#[derive(Debug, Clone)]
pub struct ServiceBinding<'a> {
    /// Outer key of the services descriptor, e.g. `mysql-5.1`
    pub category: &'a str,
    pub name: Option<&'a str>,
    pub label: Option<&'a str>,
    pub plan: Option<&'a str>,
    pub tags: Vec<&'a str>,
    credentials: Option<&'a Value>,
}

impl<'a> ServiceBinding<'a> {
    pub fn from_entry(category: &'a str, entry: &'a Map<String, Value>) -> Self {
        let str_field = |key: &str| entry.get(key).and_then(Value::as_str);

        let tags = entry
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        Self {
            category,
            name: str_field("name"),
            label: str_field("label"),
            plan: str_field("plan"),
            tags,
            credentials: entry.get("credentials"),
        }
    }

    /// Label, then category, then tags
    pub fn discriminators(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.label
            .into_iter()
            .chain(std::iter::once(self.category))
            .chain(self.tags.iter().copied())
    }

    /// Display name for diagnostics, even when the entry has no usable name
    pub fn display_name(&self) -> &'a str {
        match self.name {
            Some(name) if !name.is_empty() => name,
            _ => self.category,
        }
    }

    /// The service identifier; must be present and non-empty
    pub fn id(&self) -> Result<&'a str> {
        match self.name {
            Some(name) if !name.trim().is_empty() => Ok(name),
            Some(_) => Err(ConnectorError::invalid_binding(
                self.category,
                "name",
                "is empty",
            )),
            None => Err(ConnectorError::invalid_binding(
                self.category,
                "name",
                "is missing",
            )),
        }
    }

    pub fn credentials(&self) -> Result<Credentials<'a>> {
        match self.credentials {
            Some(Value::Object(fields)) => Ok(Credentials::new(self.display_name(), fields)),
            Some(_) => Err(ConnectorError::invalid_binding(
                self.display_name(),
                "credentials",
                "must be an object",
            )),
            None => Err(ConnectorError::invalid_binding(
                self.display_name(),
                "credentials",
                "is missing",
            )),
        }
    }
}
