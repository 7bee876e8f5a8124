//! Command implementations for the CLI

use crate::{cli::Command, config::Config, core::builder::BinaryBuilder};
use anyhow::Context;
use std::process::ExitCode;
use tracing::{debug, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<ExitCode> {
    match command {
        Command::Binary { .. } => execute_binary_command(config),
    }
}

/// Execute the binary command
#[instrument(skip(config))]
fn execute_binary_command(config: &Config) -> anyhow::Result<ExitCode> {
    debug!("Building binary package from {}", config.dsc_path.display());

    let builder = BinaryBuilder::new(config.clone());
    let code = builder.build().context("Failed to parse dsc file")?;

    debug!("Binary build finished with exit code {}", code);
    Ok(ExitCode::from(code))
}
