use super::EnvironmentAccessor;
use std::env;

/// Reads variables from the live process environment on every call
#[derive(Debug, Clone, Copy)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentAccessor for ProcessEnvironment {
    fn get_value(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}
