//! Environment abstraction for testable variable lookups

mod mock;
mod process;
mod r#trait;

pub use mock::MockEnvironment;
pub use process::ProcessEnvironment;
pub use r#trait::EnvironmentAccessor;
