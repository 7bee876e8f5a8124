//! Configuration management for the package builder
//!
//! Collects the options of a run.

use crate::cli::{Args, Command};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable verbose logging
    pub verbose: bool,
    /// dsc file describing the source package
    pub dsc_path: PathBuf,
    /// Directory to build in
    pub location: PathBuf,
}

impl Config {
    /// Create configuration from command line arguments.
    ///
    /// The dsc file is not checked for existence here; the parser reports it.
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        match &args.command {
            Command::Binary { dsc, location } => Self {
                verbose: args.verbose,
                dsc_path: dsc.clone(),
                location: location.clone(),
            },
        }
    }
}
