use super::EnvironmentAccessor;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory environment for tests and embedding
pub struct MockEnvironment {
    vars: RwLock<HashMap<String, String>>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        self.vars
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(name.into(), value.into());
    }

    pub fn unset(&self, name: &str) {
        self.vars
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(name);
    }
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentAccessor for MockEnvironment {
    fn get_value(&self, name: &str) -> Option<String> {
        self.vars
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }
}
