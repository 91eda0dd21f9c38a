//! Command execution, separated from process exit handling for testing

use super::commands::{AppArgs, Commands, ConfigArgs, DetectArgs, ServicesArgs};
use super::output::{OutputFormat, OutputFormatter};
use crate::connector::CloudFoundryConnector;
use crate::env::EnvironmentAccessor;
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Rendered command output plus the process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self { text, exit_code: 0 }
    }
}

pub fn execute<E: EnvironmentAccessor>(
    connector: &CloudFoundryConnector<E>,
    command: &Commands,
) -> Result<CommandOutput> {
    match command {
        Commands::Detect(args) => handle_detect(connector, args),
        Commands::App(args) => handle_app(connector, args),
        Commands::Services(args) => handle_services(connector, args),
        Commands::Config(args) => handle_config(connector, args),
    }
}

fn handle_detect<E: EnvironmentAccessor>(
    connector: &CloudFoundryConnector<E>,
    args: &DetectArgs,
) -> Result<CommandOutput> {
    let in_cloud = connector.is_in_matching_cloud();
    debug!(in_cloud, "Environment detection finished");

    let formatter = OutputFormatter::new(OutputFormat::from(args.format));
    let text = formatter.format_detect(in_cloud, &connector.config().application_var)?;

    Ok(CommandOutput {
        text,
        exit_code: if in_cloud { 0 } else { 1 },
    })
}

fn handle_app<E: EnvironmentAccessor>(
    connector: &CloudFoundryConnector<E>,
    args: &AppArgs,
) -> Result<CommandOutput> {
    let info = connector
        .application_instance_info()
        .context("Failed to read application info")?;
    info!(app_id = info.app_id(), "Application descriptor loaded");

    let formatter = OutputFormatter::new(OutputFormat::from(args.format));
    Ok(CommandOutput::success(formatter.format_app(&info)?))
}

fn handle_services<E: EnvironmentAccessor>(
    connector: &CloudFoundryConnector<E>,
    args: &ServicesArgs,
) -> Result<CommandOutput> {
    let services = match &args.kind {
        Some(kind) => connector.service_infos_of_kind(kind),
        None => connector.service_infos(),
    }
    .context("Failed to read bound services")?;

    let formatter = OutputFormatter::new(OutputFormat::from(args.format));
    Ok(CommandOutput::success(
        formatter.format_services(&services, args.show_uri)?,
    ))
}

fn handle_config<E: EnvironmentAccessor>(
    connector: &CloudFoundryConnector<E>,
    args: &ConfigArgs,
) -> Result<CommandOutput> {
    let config = connector.config();
    config.validate().context("Invalid configuration")?;

    let formatter = OutputFormatter::new(OutputFormat::from(args.format));
    Ok(CommandOutput::success(formatter.format_config(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::CliArgs;
    use crate::env::MockEnvironment;
    use clap::Parser;

    const SERVICES: &str = r#"{
        "mysql-5.1": [{"name": "orders", "credentials": {"name": "db", "hostname": "h", "port": 3306, "user": "u", "password": "p"}}],
        "redis-2.2": [{"name": "cache", "credentials": {"hostname": "h", "port": 6379, "password": "p", "name": "r"}}]
    }"#;

    fn run(env: MockEnvironment, argv: &[&str]) -> Result<CommandOutput> {
        let args = CliArgs::parse_from(argv);
        execute(&CloudFoundryConnector::new(env), &args.command)
    }

    #[test]
    fn test_detect_exit_codes() {
        let output = run(MockEnvironment::new(), &["cfconnector", "detect"]).unwrap();
        assert_eq!(output.exit_code, 1);

        let env = MockEnvironment::with_vars([("VCAP_APPLICATION", "{}")]);
        let output = run(env, &["cfconnector", "detect"]).unwrap();
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn test_app_outside_cloud_fails() {
        let err = run(MockEnvironment::new(), &["cfconnector", "app"]).unwrap_err();
        assert!(format!("{:#}", err).contains("VCAP_APPLICATION is not set"));
    }

    #[test]
    fn test_services_filtered_by_kind() {
        let env = MockEnvironment::with_vars([("VCAP_SERVICES", SERVICES)]);
        let output = run(
            env,
            &["cfconnector", "services", "--kind", "redis", "--format", "json"],
        )
        .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output.text).unwrap();
        let ids: Vec<&str> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["cache"]);
        assert_eq!(output.exit_code, 0);
    }

    #[test]
    fn test_config_command() {
        let env = MockEnvironment::with_vars([("CFCONNECTOR_SERVICES_VAR", "BOUND")]);
        let output = run(env, &["cfconnector", "config"]).unwrap();
        assert!(output.text.contains("Services Variable: BOUND"));
    }
}
