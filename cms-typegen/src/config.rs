//! Configuration for the generator.
//!
//! An optional `cms-typegen.toml` next to the invocation can adjust output
//! and naming; everything has a sensible default so the tool works without
//! any configuration at all.

use crate::error::{CliResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "cms-typegen.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Naming conventions.
    pub naming: NamingConfig,
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Module name of the shared reference-type file, written once per run
    /// and imported by every generated schema file.
    pub shared_module: String,
}

/// Naming convention configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Singularize the schema name before pascal-casing it into the type
    /// name (`posts` becomes `Post`).
    pub singularize: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            shared_module: "cms-schema".to_string(),
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self { singularize: true }
    }
}

/// Loads configuration from disk.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// With no explicit path the default location is tried; a missing file
    /// yields the default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
            path: config_path.clone(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::InvalidToml {
            path: config_path,
            message: e.to_string(),
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.output.shared_module, "cms-schema");
        assert!(config.naming.singularize);
    }

    #[test]
    fn parses_a_full_config() {
        let toml = r#"
[output]
shared_module = "common-types"

[naming]
singularize = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.output.shared_module, "common-types");
        assert!(!config.naming.singularize);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[naming]\nsingularize = false\n").unwrap();
        assert_eq!(config.output.shared_module, "cms-schema");
        assert!(!config.naming.singularize);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ConfigManager::load(Some(Path::new("/nonexistent/cms-typegen.toml"))).unwrap();
        assert_eq!(config.output.shared_module, "cms-schema");
    }
}
