//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build debian packages.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "build-package")]
pub struct Args {
    /// Increase the verbosity of the output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a binary package
    Binary {
        /// The dsc file to build
        dsc: PathBuf,

        /// The location to build in
        location: PathBuf,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
