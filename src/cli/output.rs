//! Output formatting for multiple formats
//!
//! JSON and YAML output are meant for scripts and carry every field,
//! credentials included. Human output masks passwords.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ApplicationInstanceInfo;
use crate::config::ConnectorConfig;
use crate::service::ServiceInfo;

const MASK: &str = "****";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

#[derive(Serialize)]
struct DetectView<'a> {
    in_cloud: bool,
    variable: &'a str,
}

#[derive(Serialize)]
struct ServiceView<'a> {
    #[serde(flatten)]
    info: &'a ServiceInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn serialize<T: Serialize>(&self, value: &T, what: &str) -> Result<String> {
        match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(value)
                .with_context(|| format!("Failed to serialize {} to YAML", what)),
            OutputFormat::Json | OutputFormat::Human => serde_json::to_string_pretty(value)
                .with_context(|| format!("Failed to serialize {} to JSON", what)),
        }
    }

    pub fn format_detect(&self, in_cloud: bool, variable: &str) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(if in_cloud {
                format!("\u{2713} Cloud Foundry environment detected ({} is set)", variable)
            } else {
                format!("\u{2717} Not a Cloud Foundry environment ({} is not set)", variable)
            }),
            _ => self.serialize(&DetectView { in_cloud, variable }, "detection result"),
        }
    }

    pub fn format_app(&self, info: &ApplicationInstanceInfo) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(Self::format_app_human(info)),
            _ => self.serialize(info, "application info"),
        }
    }

    pub fn format_services(&self, services: &[ServiceInfo], show_uri: bool) -> Result<String> {
        match self.format {
            OutputFormat::Human => Self::format_services_human(services, show_uri),
            _ => {
                let views = services
                    .iter()
                    .map(|info| {
                        let uri = show_uri.then(|| info.uri()).transpose()?;
                        Ok(ServiceView { info, uri })
                    })
                    .collect::<Result<Vec<_>>>()?;
                self.serialize(&views, "services")
            }
        }
    }

    pub fn format_config(&self, config: &ConnectorConfig) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(config.to_string()),
            _ => {
                let map: std::collections::BTreeMap<_, _> =
                    config.to_display_map().into_iter().collect();
                self.serialize(&map, "config")
            }
        }
    }

    fn format_app_human(info: &ApplicationInstanceInfo) -> String {
        let mut output = String::new();

        output.push_str(&format!("Application:  {}\n", info.app_id()));
        if let Some(instance_id) = info.instance_id() {
            output.push_str(&format!("Instance:     {}\n", instance_id));
        }

        if info.uris().is_empty() {
            output.push_str("URIs:         (none)\n");
        } else {
            output.push_str("URIs:\n");
            for uri in info.uris() {
                output.push_str(&format!("\u{251C}\u{2500} {}\n", uri));
            }
        }

        output
    }

    fn format_services_human(services: &[ServiceInfo], show_uri: bool) -> Result<String> {
        if services.is_empty() {
            return Ok("No bound services\n".to_string());
        }

        let mut output = format!("Bound services ({}):\n\n", services.len());

        for service in services {
            output.push_str(&format!(
                "{} [{}]\n\u{251C}\u{2500} Endpoint: {}:{}\n",
                service.id(),
                service.kind(),
                service.host(),
                service.port()
            ));

            match service {
                ServiceInfo::Mysql(db) | ServiceInfo::Postgresql(db) => {
                    output.push_str(&format!("\u{251C}\u{2500} Database: {}\n", db.database));
                    output.push_str(&format!("\u{251C}\u{2500} User:     {}\n", db.username));
                }
                ServiceInfo::Redis(redis) => {
                    output.push_str(&format!("\u{251C}\u{2500} Name:     {}\n", redis.name));
                    let password = if redis.password.is_some() { MASK } else { "(none)" };
                    output.push_str(&format!("\u{251C}\u{2500} Password: {}\n", password));
                }
                ServiceInfo::MongoDb(mongo) => {
                    output.push_str(&format!("\u{251C}\u{2500} Name:     {}\n", mongo.name));
                    output.push_str(&format!("\u{251C}\u{2500} Database: {}\n", mongo.database));
                    output.push_str(&format!("\u{251C}\u{2500} User:     {}\n", mongo.username));
                }
                ServiceInfo::RabbitMq(rabbit) => {
                    output.push_str(&format!("\u{251C}\u{2500} Name:     {}\n", rabbit.name));
                    output.push_str(&format!(
                        "\u{251C}\u{2500} VHost:    {}\n",
                        rabbit.virtual_host
                    ));
                    output.push_str(&format!("\u{251C}\u{2500} User:     {}\n", rabbit.username));
                }
            }

            if show_uri {
                output.push_str(&format!("\u{2514}\u{2500} URI:      {}\n", service.uri()?));
            }
            output.push('\n');
        }

        Ok(output)
    }
}
