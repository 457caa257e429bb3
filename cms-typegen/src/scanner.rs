//! Discovery of schema document files.
//!
//! A source directory holds exported documents named
//! `api-<name>-<suffix>.json`, typically one export per content type and
//! date. The scanner lists the directory (flat, no recursion), walks the
//! sorted listing in reverse so the newest export of a name comes first, and
//! keeps the first file seen per `<name>`.

use crate::error::{CliResult, ScanError};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A schema document file picked up by the scanner.
#[derive(Debug, Clone)]
pub struct DiscoveredSchema {
    /// The `<name>` segment of the file name.
    pub name: String,

    /// File name the schema was discovered under.
    pub file_name: String,

    /// Full path of the document.
    pub path: PathBuf,
}

/// Scanner for schema document files.
#[derive(Debug)]
pub struct SchemaScanner {
    root: PathBuf,
    pattern: Regex,
}

impl SchemaScanner {
    /// Create a scanner for the given source directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            // <name> runs up to the last hyphen before the suffix.
            pattern: Regex::new(r"^api-(.*)-.*\.json$").expect("valid literal pattern"),
        }
    }

    /// Discover schema files, one per `<name>`.
    pub fn scan(&self) -> CliResult<Vec<DiscoveredSchema>> {
        if !self.root.is_dir() {
            return Err(ScanError::DirectoryNotFound {
                path: self.root.clone(),
            }
            .into());
        }

        let mut file_names = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| ScanError::Walk {
                path: self.root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            file_names.push(entry.file_name().to_string_lossy().into_owned());
        }

        let mut seen = HashSet::new();
        let mut schemas = Vec::new();
        for file_name in file_names.iter().rev() {
            let Some(captures) = self.pattern.captures(file_name) else {
                continue;
            };
            let name = &captures[1];
            if name.is_empty() || seen.contains(name) {
                continue;
            }
            seen.insert(name.to_string());
            schemas.push(DiscoveredSchema {
                name: name.to_string(),
                file_name: file_name.clone(),
                path: self.root.join(file_name),
            });
        }

        Ok(schemas)
    }

    /// Get the scanned directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_source_dir(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in files {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        dir
    }

    #[test]
    fn finds_schema_files_by_naming_convention() {
        let dir = create_source_dir(&[
            "api-posts-20240101.json",
            "api-categories-1.json",
            "README.md",
        ]);
        let schemas = SchemaScanner::new(dir.path()).scan().unwrap();

        let names: Vec<&str> = schemas.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["posts", "categories"]);
    }

    #[test]
    fn keeps_the_first_match_in_reverse_listing_order() {
        let dir = create_source_dir(&[
            "api-posts-00000000.json",
            "api-posts-20240101.json",
            "api-categories-1.json",
        ]);
        let schemas = SchemaScanner::new(dir.path()).scan().unwrap();

        let posts = schemas.iter().find(|s| s.name == "posts").unwrap();
        assert_eq!(posts.file_name, "api-posts-20240101.json");
        assert_eq!(schemas.len(), 2);
    }

    #[test]
    fn name_runs_up_to_the_last_hyphen() {
        let dir = create_source_dir(&["api-blog-posts-20240101.json"]);
        let schemas = SchemaScanner::new(dir.path()).scan().unwrap();

        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].name, "blog-posts");
    }

    #[test]
    fn skips_files_outside_the_convention() {
        let dir = create_source_dir(&[
            "api-posts.json",
            "api--20240101.json",
            "schema.json",
            "api-posts-1.txt",
        ]);
        let schemas = SchemaScanner::new(dir.path()).scan().unwrap();
        assert!(schemas.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let result = SchemaScanner::new("/nonexistent/schemas").scan();
        assert!(matches!(
            result.unwrap_err(),
            crate::error::CliError::Scan(ScanError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn empty_directory_yields_no_schemas() {
        let dir = TempDir::new().unwrap();
        let schemas = SchemaScanner::new(dir.path()).scan().unwrap();
        assert!(schemas.is_empty());
    }
}
