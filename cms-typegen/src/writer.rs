//! Output handling for generated TypeScript sources.
//!
//! Generated files either land in a destination directory or go to standard
//! output when the caller gave none. Writes happen synchronously, one after
//! the other, so when a run returns every emitted file is on disk — there is
//! no pending work a caller would have to wait for.

use crate::error::{CliResult, WriteError};
use std::path::{Path, PathBuf};

/// Where generated sources go.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write one file per schema into this directory.
    Directory(PathBuf),
    /// Print generated sources to standard output.
    Stdout,
}

/// Result of emitting one generated source.
#[derive(Debug)]
pub enum EmitResult {
    /// File was written.
    Written { path: PathBuf, bytes: usize },
    /// Content went to standard output.
    Printed,
    /// Dry run: nothing was written.
    DryRun { path: PathBuf, content: String },
}

/// Emits generated sources to the configured target, with dry-run support.
#[derive(Debug)]
pub struct OutputWriter {
    target: OutputTarget,
    dry_run: bool,
}

impl OutputWriter {
    pub fn new(target: OutputTarget, dry_run: bool) -> Self {
        Self { target, dry_run }
    }

    /// Whether this writer produces files rather than stdout output.
    pub fn targets_directory(&self) -> bool {
        matches!(self.target, OutputTarget::Directory(_))
    }

    /// Emit one generated source under `file_name`.
    pub fn emit(&self, file_name: &str, content: &str) -> CliResult<EmitResult> {
        match &self.target {
            OutputTarget::Stdout => {
                println!("{content}");
                Ok(EmitResult::Printed)
            }
            OutputTarget::Directory(dir) => {
                let path = dir.join(file_name);
                if self.dry_run {
                    return Ok(EmitResult::DryRun {
                        path,
                        content: content.to_string(),
                    });
                }
                self.write_file(&path, content)?;
                Ok(EmitResult::Written {
                    bytes: content.len(),
                    path,
                })
            }
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), WriteError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        std::fs::write(path, content).map_err(|source| WriteError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl EmitResult {
    /// Whether the content ended up on disk.
    pub fn was_written(&self) -> bool {
        matches!(self, EmitResult::Written { .. })
    }
}
