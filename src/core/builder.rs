//! Binary package building
//!
//! Reads the source package description ahead of the build. The build step
//! itself is not performed yet.

use crate::{
    config::Config,
    core::dsc::{DscParser, SourceFileEntry},
    error::Result,
};
use tracing::{debug, instrument};

/// Exit code reported for a successful binary build
pub const EXIT_SUCCESS: u8 = 0;

/// Builds binary packages from a dsc file
pub struct BinaryBuilder {
    config: Config,
    parser: DscParser,
}

impl BinaryBuilder {
    /// Create a new binary builder with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            parser: DscParser,
        }
    }

    /// Read the source files listed by the configured dsc file
    #[instrument(skip(self))]
    pub fn source_files(&self) -> Result<Vec<SourceFileEntry>> {
        self.parser.parse(&self.config.dsc_path)
    }

    /// Run the binary build and return the process exit code
    #[instrument(skip(self))]
    pub fn build(&self) -> Result<u8> {
        let source_files = self.source_files()?;

        debug!(
            "Source package {} lists {} file(s)",
            self.config.dsc_path.display(),
            source_files.len()
        );
        for file in &source_files {
            debug!("  {} {} {}", file.checksum, file.size, file.path.display());
        }
        debug!("Build location: {}", self.config.location.display());

        Ok(EXIT_SUCCESS)
    }
}
