//! cfconnector - typed access to a Cloud Foundry style runtime environment
//!
//! The platform injects two environment variables into every application:
//! an application descriptor (`VCAP_APPLICATION`) and a services descriptor
//! (`VCAP_SERVICES`). This library detects whether the process runs in such
//! an environment and turns both JSON documents into typed records that
//! configuration code can consume.
//!
//! # Core Concepts
//!
//! - **Environment Accessor**: a single-method abstraction over named variable
//!   lookups, injected into the connector so tests never touch the process
//!   environment
//! - **Service Binding**: one entry of the services descriptor, describing a
//!   backing service and its credentials
//! - **Service Kind**: the discriminator (label, category or tag) that selects
//!   the extractor for a binding
//!
//! # Example Usage
//!
//! ```no_run
//! use cfconnector::{CloudFoundryConnector, ServiceInfo};
//!
//! let connector = CloudFoundryConnector::from_process();
//! if connector.is_in_matching_cloud() {
//!     let app = connector.application_instance_info()?;
//!     println!("Running as {}", app.app_id());
//!
//!     for service in connector.service_infos()? {
//!         if let ServiceInfo::Postgresql(db) = &service {
//!             println!("{} -> {}:{}/{}", db.id, db.host, db.port, db.database);
//!         }
//!     }
//! }
//! # Ok::<(), cfconnector::ConnectorError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`env`]: environment accessor trait with process and mock implementations
//! - [`connector`]: detection and descriptor parsing
//! - [`service`]: service kinds, records, extractors and their registry
//! - [`application`]: the application instance record

pub mod application;
pub mod cli;
pub mod config;
pub mod connector;
pub mod env;
pub mod error;
pub mod service;
pub mod util;

pub use application::ApplicationInstanceInfo;
pub use config::{ConfigError, ConnectorConfig};
pub use connector::CloudFoundryConnector;
pub use env::{EnvironmentAccessor, MockEnvironment, ProcessEnvironment};
pub use error::ConnectorError;
pub use service::{
    ExtractorRegistry, MongoServiceInfo, RabbitServiceInfo, RedisServiceInfo,
    RelationalServiceInfo, ServiceBinding, ServiceInfo, ServiceKind,
};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_cfconnector() {
        assert_eq!(NAME, "cfconnector");
    }
}
