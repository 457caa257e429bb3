//! Error types for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error while discovering schema files.
    #[error("failed to scan schema directory: {0}")]
    Scan(#[from] ScanError),

    /// Error while reading or parsing a schema file.
    #[error("failed to read schema file: {0}")]
    Parse(#[from] ParseError),

    /// Error while generating type definitions.
    #[error("failed to generate types: {0}")]
    Generate(#[from] GenerateError),

    /// Error loading configuration.
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error while discovering schema files.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Source directory does not exist or is not a directory.
    #[error("schema directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Error from the directory walker.
    #[error("failed to list {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Error while reading or parsing a schema file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Schema file is not valid JSON of the expected shape.
    #[error("invalid schema document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error reading a schema file.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error while generating type definitions.
///
/// A dangling block reference is fatal for the schema it occurs in; the
/// generator never substitutes a placeholder type for it.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A custom or repeater field references a block that is not present in
    /// the document's `customFields`.
    #[error(
        "field '{field_id}' of schema '{schema}' references unknown custom field block '{created_at}'"
    )]
    UnresolvedReference {
        schema: String,
        field_id: String,
        created_at: String,
    },
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid TOML syntax or shape.
    #[error("invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading the config file.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create the destination directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Create an unresolved-reference error.
    pub fn unresolved(
        schema: impl Into<String>,
        field_id: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self::UnresolvedReference {
            schema: schema.into(),
            field_id: field_id.into(),
            created_at: created_at.into(),
        }
    }
}
