//! Debian source control (`.dsc`) file parsing
//!
//! Extracts the `Checksums-Sha256` table listing the files that make up a
//! source package.

use crate::error::{BuilderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Field header that opens the SHA-256 checksum section
pub const CHECKSUMS_SHA256_HEADER: &str = "Checksums-Sha256:";

/// A source file referenced by a dsc file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceFileEntry {
    /// Hex SHA-256 digest, as written (not validated)
    pub checksum: String,
    /// Size in bytes; a non-decimal size in the file is a format error
    pub size: u64,
    /// File name as written in the dsc file
    pub name: String,
    /// Location of the file next to the dsc file
    pub path: PathBuf,
}

/// Parser for the checksum section of dsc files
#[derive(Debug, Default)]
pub struct DscParser;

impl DscParser {
    /// Create a new dsc parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a dsc file and list the source files it references.
    ///
    /// A file without a `Checksums-Sha256` section yields an empty list.
    #[instrument(skip(self))]
    pub fn parse<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> Result<Vec<SourceFileEntry>> {
        let path = path.as_ref();
        debug!("Parsing dsc file: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| BuilderError::file_system("read", path, e))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        self.parse_content(&content, base_dir, path)
    }

    /// Parse dsc text, resolving file names against `base_dir`
    pub fn parse_str(&self, content: &str, base_dir: &Path) -> Result<Vec<SourceFileEntry>> {
        self.parse_content(content, base_dir, Path::new("<input>"))
    }

    fn parse_content(
        &self,
        content: &str,
        base_dir: &Path,
        origin: &Path,
    ) -> Result<Vec<SourceFileEntry>> {
        let mut entries = Vec::new();
        let mut in_section = false;

        for (index, line) in content.lines().enumerate() {
            if in_section {
                if !line.starts_with([' ', '\t']) {
                    break;
                }
                let entry = self.parse_row(line, base_dir, origin, index + 1)?;
                debug!("Found source file: {} ({} bytes)", entry.name, entry.size);
                entries.push(entry);
            } else if line.starts_with(CHECKSUMS_SHA256_HEADER) {
                debug!("Checksum section starts at line {}", index + 1);
                in_section = true;
            }
        }

        if !in_section {
            debug!("No {} section in {}", CHECKSUMS_SHA256_HEADER, origin.display());
        }
        debug!("Parsed {} source file(s)", entries.len());
        Ok(entries)
    }

    /// Split a checksum row into its three fields
    fn parse_row(
        &self,
        line: &str,
        base_dir: &Path,
        origin: &Path,
        line_no: usize,
    ) -> Result<SourceFileEntry> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[checksum, size, name] = fields.as_slice() else {
            return Err(BuilderError::dsc_format(
                format!("expected 3 fields, found {}: '{}'", fields.len(), line.trim()),
                origin,
                line_no,
            ));
        };

        let size = size.parse::<u64>().map_err(|e| {
            BuilderError::dsc_format(format!("invalid size '{}': {}", size, e), origin, line_no)
        })?;

        Ok(SourceFileEntry {
            checksum: checksum.to_string(),
            size,
            name: name.to_string(),
            path: base_dir.join(name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
Format: 3.0 (quilt)
Source: foo
Checksums-Sha256:
 abcdef0123456789 100 foo.tar.gz
 fedcba9876543210 200 foo.dsc
Other-Field: x
";

    fn write_dsc(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_checksum_section() {
        let dir = TempDir::new().unwrap();
        let dsc = write_dsc(&dir, "foo.dsc", SAMPLE);

        let entries = DscParser::new().parse(&dsc).unwrap();

        assert_eq!(
            entries,
            vec![
                SourceFileEntry {
                    checksum: "abcdef0123456789".to_string(),
                    size: 100,
                    name: "foo.tar.gz".to_string(),
                    path: dir.path().join("foo.tar.gz"),
                },
                SourceFileEntry {
                    checksum: "fedcba9876543210".to_string(),
                    size: 200,
                    name: "foo.dsc".to_string(),
                    path: dir.path().join("foo.dsc"),
                },
            ]
        );
    }

    #[test]
    fn test_paths_keep_file_name() {
        let entries = DscParser::new()
            .parse_str(SAMPLE, Path::new("/tmp/pkg"))
            .unwrap();

        assert_eq!(entries[0].path, PathBuf::from("/tmp/pkg/foo.tar.gz"));
        assert_eq!(entries[1].path, PathBuf::from("/tmp/pkg/foo.dsc"));
        for entry in &entries {
            assert_eq!(entry.path.file_name().unwrap(), entry.name.as_str());
        }
    }

    #[test]
    fn test_missing_section_is_empty() {
        let content = "Format: 3.0 (native)\nSource: foo\nFiles:\n 0123 10 foo.tar.xz\n";
        let entries = DscParser::new().parse_str(content, Path::new("")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_section() {
        let content = "Checksums-Sha256:\nFiles:\n 0123 10 foo.tar.xz\n";
        let entries = DscParser::new().parse_str(content, Path::new("")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_section_ends_at_unindented_line() {
        let content = "\
Checksums-Sha256:
 aaaa 1 a.tar.gz
Files:
 bbbb 2 b.tar.gz
";
        let entries = DscParser::new().parse_str(content, Path::new("")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "a.tar.gz");
    }

    #[test]
    fn test_section_at_end_of_file() {
        let content = "Source: foo\nChecksums-Sha256:\n aaaa 1 a.tar.gz\n\tbbbb 2 b.debian.tar.xz";
        let entries = DscParser::new().parse_str(content, Path::new("")).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.tar.gz", "b.debian.tar.xz"]);
    }

    #[test]
    fn test_bare_name_has_relative_path() {
        let entries = DscParser::new()
            .parse_str("Checksums-Sha256:\n aaaa 1 a.tar.gz\n", Path::new(""))
            .unwrap();
        assert_eq!(entries[0].path, PathBuf::from("a.tar.gz"));
    }

    #[test]
    fn test_malformed_row_fails() {
        let dir = TempDir::new().unwrap();
        let content = "Checksums-Sha256:\n aaaa 1 a.tar.gz\n abc123 1024\n";
        let dsc = write_dsc(&dir, "bad.dsc", content);

        let err = DscParser::new().parse(&dsc).unwrap_err();

        match err {
            BuilderError::DscFormat { line, .. } => assert_eq!(line, 3),
            other => panic!("Expected DscFormat error, got {other:?}"),
        }
    }

    #[test]
    fn test_too_many_fields_fails() {
        let content = "Checksums-Sha256:\n aaaa 1 a.tar.gz extra\n";
        let err = DscParser::new().parse_str(content, Path::new("")).unwrap_err();
        assert!(matches!(err, BuilderError::DscFormat { .. }));
    }

    #[test]
    fn test_non_numeric_size_fails() {
        let content = "Checksums-Sha256:\n aaaa big a.tar.gz\n";
        let err = DscParser::new().parse_str(content, Path::new("")).unwrap_err();
        assert!(err.to_string().contains("invalid size 'big'"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = DscParser::new()
            .parse(dir.path().join("nonexistent.dsc"))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
