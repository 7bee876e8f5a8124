//! # Debian Package Builder
//!
//! Builds Debian binary packages from a source package's `.dsc` file.
//! This library parses the `Checksums-Sha256` section of the control file
//! to find the source artifacts a build needs.
//!
//! ## Example
//!
//! ```no_run
//! use debpkg_builder::core::DscParser;
//!
//! let parser = DscParser::new();
//! for file in parser.parse("/tmp/pkg/foo.dsc")? {
//!     println!("{} {} {}", file.checksum, file.size, file.path.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| error::BuilderError::config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
