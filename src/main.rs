use cfconnector::cli::commands::CliArgs;
use cfconnector::cli::handlers::execute;
use cfconnector::util::logging::{init_logging, parse_level, LoggingConfig};
use cfconnector::{CloudFoundryConnector, EnvironmentAccessor, ProcessEnvironment, VERSION};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("cfconnector v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(args: &CliArgs) -> Result<i32> {
    let connector =
        CloudFoundryConnector::try_from_process().context("Invalid connector configuration")?;

    let output = execute(&connector, &args.command)?;
    if !args.quiet || output.exit_code != 0 {
        println!("{}", output.text.trim_end());
    }
    Ok(output.exit_code)
}

fn init_logging_from_args(args: &CliArgs) {
    let mut config = LoggingConfig::from_accessor(&ProcessEnvironment::new());

    config.level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else if ProcessEnvironment::new().is_set("CFCONNECTOR_LOG_LEVEL") {
        config.level
    } else {
        Level::WARN
    };

    init_logging(config);
}
