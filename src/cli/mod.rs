pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{AppArgs, CliArgs, Commands, ConfigArgs, DetectArgs, ServicesArgs};
pub use output::{OutputFormat, OutputFormatter};
