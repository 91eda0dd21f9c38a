use crate::error::{ConnectorError, Result};
use serde_json::{Map, Value};

/// Read-only view over a binding's `credentials` object
///
/// Every lookup takes a list of keys tried in order, covering both the
/// `hostname`/`user`/`pass` and `host`/`username`/`password` spellings.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    service: &'a str,
    fields: &'a Map<String, Value>,
}

impl<'a> Credentials<'a> {
    pub fn new(service: &'a str, fields: &'a Map<String, Value>) -> Self {
        Self { service, fields }
    }

    fn lookup<'k>(&self, keys: &[&'k str]) -> Option<(&'k str, &'a Value)> {
        let fields = self.fields;
        keys.iter().find_map(|key| {
            fields
                .get(*key)
                .filter(|value| !value.is_null())
                .map(|value| (*key, value))
        })
    }

    pub fn optional_str(&self, keys: &[&str]) -> Result<Option<String>> {
        match self.lookup(keys) {
            None => Ok(None),
            Some((_, Value::String(s))) => Ok(Some(s.clone())),
            Some((_, Value::Number(n))) => Ok(Some(n.to_string())),
            Some((key, _)) => Err(ConnectorError::invalid_binding(
                self.service,
                key,
                "must be a string",
            )),
        }
    }

    pub fn required_str(&self, keys: &[&str]) -> Result<String> {
        self.optional_str(keys)?
            .ok_or_else(|| ConnectorError::invalid_binding(self.service, keys[0], "is missing"))
    }

    /// Port as a JSON number or a numeric string
    pub fn port(&self) -> Result<u16> {
        let (key, value) = self
            .lookup(&["port"])
            .ok_or_else(|| ConnectorError::invalid_binding(self.service, "port", "is missing"))?;

        let port = match value {
            Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
            Value::String(s) => s.trim().parse::<u16>().ok(),
            _ => None,
        };

        port.ok_or_else(|| {
            ConnectorError::invalid_binding(
                self.service,
                key,
                format!("is not a valid port: {}", value),
            )
        })
    }

    pub fn host(&self) -> Result<String> {
        self.required_str(&["hostname", "host"])
    }

    pub fn username(&self) -> Result<String> {
        self.required_str(&["username", "user"])
    }

    pub fn password(&self) -> Result<String> {
        self.required_str(&["password", "pass"])
    }
}
