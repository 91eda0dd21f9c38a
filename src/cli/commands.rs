use crate::service::ServiceKind;
use clap::{Parser, Subcommand, ValueEnum};

/// Inspect the Cloud Foundry environment of the current process
#[derive(Parser, Debug)]
#[command(
    name = "cfconnector",
    about = "Inspect the Cloud Foundry environment of the current process",
    version,
    author,
    long_about = "cfconnector reads the VCAP_APPLICATION and VCAP_SERVICES environment \
                  variables injected by the platform and prints the application info \
                  and bound services as typed records."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Check whether the process runs in a Cloud Foundry environment",
        long_about = "Exits with status 0 when the application descriptor is present \
                      and 1 otherwise.\n\n\
                      Examples:\n  \
                      cfconnector detect\n  \
                      cfconnector detect --format json"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Show the application instance info",
        long_about = "Parses the application descriptor and prints the application id, \
                      instance id and reachable URIs.\n\n\
                      Examples:\n  \
                      cfconnector app\n  \
                      cfconnector app --format yaml"
    )]
    App(AppArgs),

    #[command(
        about = "List bound services",
        long_about = "Parses the services descriptor and prints every recognised binding \
                      in descriptor order.\n\n\
                      Examples:\n  \
                      cfconnector services\n  \
                      cfconnector services --kind postgresql --show-uri\n  \
                      cfconnector services --format json"
    )]
    Services(ServicesArgs),

    #[command(about = "Show the effective connector configuration")]
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct AppArgs {
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ServicesArgs {
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,

    #[arg(
        short = 'k',
        long,
        value_parser = parse_service_kind,
        help = "Only list services of this kind (mysql, postgresql, redis, mongodb, rabbitmq)"
    )]
    pub kind: Option<ServiceKind>,

    #[arg(long, help = "Include connection URIs (with credentials)")]
    pub show_uri: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_service_kind(s: &str) -> Result<ServiceKind, String> {
    ServiceKind::from_name(&s.to_lowercase()).ok_or_else(|| {
        format!(
            "Invalid service kind: {}. Valid options: mysql, postgresql, redis, mongodb, rabbitmq",
            s
        )
    })
}
