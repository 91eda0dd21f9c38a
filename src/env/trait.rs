//! EnvironmentAccessor trait definition

use std::sync::Arc;

/// Abstraction over named environment lookups for testability
///
/// `None` means the variable is not set at all; an empty value is
/// `Some(String::new())`.
pub trait EnvironmentAccessor: Send + Sync {
    /// Read the current value of a variable
    fn get_value(&self, name: &str) -> Option<String>;

    /// Check if a variable is set, regardless of its value
    fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }
}

impl<T: EnvironmentAccessor + ?Sized> EnvironmentAccessor for &T {
    fn get_value(&self, name: &str) -> Option<String> {
        (**self).get_value(name)
    }
}

impl<T: EnvironmentAccessor + ?Sized> EnvironmentAccessor for Box<T> {
    fn get_value(&self, name: &str) -> Option<String> {
        (**self).get_value(name)
    }
}

impl<T: EnvironmentAccessor + ?Sized> EnvironmentAccessor for Arc<T> {
    fn get_value(&self, name: &str) -> Option<String> {
        (**self).get_value(name)
    }
}
