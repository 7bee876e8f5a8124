//! Core functionality for package building
//!
//! Contains the dsc parser and the binary package builder.

pub mod builder;
pub mod dsc;

pub use builder::BinaryBuilder;
pub use dsc::{DscParser, SourceFileEntry};
