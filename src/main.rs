#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use debpkg_builder::{cli, config::Config, setup_logging};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on verbose flag
    setup_logging(args.verbose)?;

    // Initialize configuration
    let config = Config::from_args(&args);

    // Execute the appropriate command
    cli::execute_command(&config, &args.command)
}
