//! Cloud Foundry environment detection and descriptor parsing
//!
//! The connector reads the application and services descriptors through an
//! injected [`EnvironmentAccessor`] and turns them into typed records. Every
//! call re-reads the environment; nothing is cached.
//!
//! # Example
//!
//! ```
//! use cfconnector::{CloudFoundryConnector, MockEnvironment};
//!
//! let env = MockEnvironment::with_vars([
//!     ("VCAP_APPLICATION", r#"{"name":"my-app","uris":["my-app.example.com"]}"#),
//!     (
//!         "VCAP_SERVICES",
//!         r#"{"redis-2.2":[{"name":"cache","credentials":{"hostname":"10.0.0.1","port":6379,"password":"s3cret","name":"redis-db"}}]}"#,
//!     ),
//! ]);
//! let connector = CloudFoundryConnector::new(env);
//!
//! assert!(connector.is_in_matching_cloud());
//! assert_eq!(connector.application_instance_info()?.app_id(), "my-app");
//!
//! let services = connector.service_infos()?;
//! assert_eq!(services.len(), 1);
//! assert_eq!(services[0].uri()?, "redis://:s3cret@10.0.0.1:6379");
//! # Ok::<(), cfconnector::ConnectorError>(())
//! ```

use crate::application::{json_type, ApplicationInstanceInfo};
use crate::config::{ConfigError, ConnectorConfig};
use crate::env::{EnvironmentAccessor, ProcessEnvironment};
use crate::error::{ConnectorError, Result};
use crate::service::{ExtractorRegistry, ServiceBinding, ServiceInfo, ServiceKind};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info, warn};

pub struct CloudFoundryConnector<E: EnvironmentAccessor = ProcessEnvironment> {
    env: E,
    config: ConnectorConfig,
    registry: ExtractorRegistry,
}

impl CloudFoundryConnector<ProcessEnvironment> {
    /// Connector over the live process environment
    pub fn from_process() -> Self {
        Self::new(ProcessEnvironment::new())
    }

    /// Like [`CloudFoundryConnector::from_process`], but rejects invalid configuration
    pub fn try_from_process() -> std::result::Result<Self, ConfigError> {
        Self::try_new(ProcessEnvironment::new())
    }
}

impl<E: EnvironmentAccessor> CloudFoundryConnector<E> {
    /// Creates a connector, reading its configuration through the same accessor
    pub fn new(env: E) -> Self {
        let config = ConnectorConfig::from_accessor(&env);
        Self::with_config(env, config)
    }

    /// Creates a connector, failing on unparseable or inconsistent configuration
    pub fn try_new(env: E) -> std::result::Result<Self, ConfigError> {
        let config = ConnectorConfig::try_from_accessor(&env)?;
        Ok(Self::with_config(env, config))
    }

    pub fn with_config(env: E, config: ConnectorConfig) -> Self {
        debug!(
            application_var = %config.application_var,
            services_var = %config.services_var,
            strict = config.strict_bindings,
            "Cloud Foundry connector initialized"
        );

        Self {
            env,
            config,
            registry: ExtractorRegistry::with_defaults(),
        }
    }

    /// Replaces the extractor table, e.g. to support additional service kinds
    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    /// True when the application descriptor variable is set, whatever its value
    pub fn is_in_matching_cloud(&self) -> bool {
        self.env.is_set(&self.config.application_var)
    }

    pub fn application_instance_info(&self) -> Result<ApplicationInstanceInfo> {
        let variable = &self.config.application_var;
        let raw = self
            .env
            .get_value(variable)
            .ok_or_else(|| ConnectorError::NotInCloud {
                variable: variable.clone(),
            })?;

        let info = ApplicationInstanceInfo::parse(variable, &raw)?;
        debug!(
            app_id = info.app_id(),
            uris = info.uris().len(),
            "Parsed application descriptor"
        );
        Ok(info)
    }

    /// All recognised service bindings, in descriptor order
    ///
    /// An absent services descriptor yields an empty list. Bindings whose
    /// label, category and tags name no registered kind are skipped.
    pub fn service_infos(&self) -> Result<Vec<ServiceInfo>> {
        let variable = &self.config.services_var;
        let raw = match self.env.get_value(variable) {
            Some(raw) => raw,
            None => {
                debug!(variable = %variable, "Services descriptor not set, no bound services");
                return Ok(Vec::new());
            }
        };

        let value: Value = serde_json::from_str(&raw).map_err(|source| ConnectorError::Parse {
            variable: variable.clone(),
            source,
        })?;
        let categories = match value {
            Value::Object(categories) => categories,
            other => {
                return Err(ConnectorError::invalid_descriptor(
                    variable,
                    format!("expected a JSON object, found {}", json_type(&other)),
                ))
            }
        };

        let mut infos = Vec::new();
        let mut seen = HashSet::new();

        for (category, entries) in &categories {
            let entries = entries.as_array().ok_or_else(|| {
                ConnectorError::invalid_descriptor(
                    variable,
                    format!(
                        "bindings under '{}' must be an array, found {}",
                        category,
                        json_type(entries)
                    ),
                )
            })?;

            for entry in entries {
                let entry = entry.as_object().ok_or_else(|| {
                    ConnectorError::invalid_descriptor(
                        variable,
                        format!(
                            "binding under '{}' must be an object, found {}",
                            category,
                            json_type(entry)
                        ),
                    )
                })?;
                let binding = ServiceBinding::from_entry(category, entry);

                let info = match self.registry.extract(&binding) {
                    Some(Ok(info)) => info,
                    Some(Err(e)) if !self.config.strict_bindings => {
                        warn!(
                            service = binding.display_name(),
                            error = %e,
                            "Skipping invalid service binding"
                        );
                        continue;
                    }
                    Some(Err(e)) => return Err(e),
                    None => {
                        debug!(
                            service = binding.display_name(),
                            category = %category,
                            label = binding.label.unwrap_or(""),
                            plan = binding.plan.unwrap_or(""),
                            "Skipping unsupported service binding"
                        );
                        continue;
                    }
                };

                if !seen.insert(info.id().to_string()) {
                    return Err(ConnectorError::DuplicateServiceId(info.id().to_string()));
                }

                debug!(
                    service = info.id(),
                    kind = %info.kind(),
                    host = info.host(),
                    port = info.port(),
                    "Extracted service binding"
                );
                infos.push(info);
            }
        }

        info!(count = infos.len(), "Parsed services descriptor");
        Ok(infos)
    }

    /// Looks up a single service by identifier
    pub fn service_info(&self, id: &str) -> Result<Option<ServiceInfo>> {
        Ok(self
            .service_infos()?
            .into_iter()
            .find(|info| info.id() == id))
    }

    /// Services of one kind, in descriptor order
    pub fn service_infos_of_kind(&self, kind: &ServiceKind) -> Result<Vec<ServiceInfo>> {
        Ok(self
            .service_infos()?
            .into_iter()
            .filter(|info| &info.kind() == kind)
            .collect())
    }
}
