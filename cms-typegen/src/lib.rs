//! # cms-typegen
//!
//! Library behind the `cms-typegen` CLI: generate TypeScript types from
//! serialized headless-CMS API schema documents.
//!
//! The generator reads documents as plain data and has no dependency on the
//! builder crate that produced them; any JSON of the documented shape works,
//! including exports taken straight from the CMS.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration file handling
//! - [`scanner`] - Schema document discovery in a source directory
//! - [`document`] - Read-side model of a schema document
//! - [`generator`] - Type generation and reference resolution
//! - [`writer`] - File and stdout output with dry-run support
//! - [`error`] - Error types

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod scanner;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use document::SchemaDocument;
pub use error::{CliError, CliResult};
pub use generator::TypeGenerator;
pub use scanner::{DiscoveredSchema, SchemaScanner};
pub use writer::{EmitResult, OutputTarget, OutputWriter};
