//! Configuration management for the linter
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (cfglint.toml)
//! - Environment variables (CFGLINT__*)
//!
//! ## Example config file (cfglint.toml):
//! ```toml
//! [resources]
//! gamedata = ["~/KSP/GameData"]
//! files = ["extra/resources.cfg"]
//! extension = "cfg"
//!
//! [lint]
//! extension = "cfg"
//! deny_warnings = false
//!
//! [output]
//! format = "text"
//! summary = true
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::resources::ResourceTable;

/// Main configuration for the linter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    /// Where resource definitions come from
    #[serde(default)]
    pub resources: ResourceConfig,

    /// Lint behaviour
    #[serde(default)]
    pub lint: LintSettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Resource table sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Directories scanned recursively for RESOURCE_DEFINITION blocks
    #[serde(default)]
    pub gamedata: Vec<PathBuf>,

    /// Individual files holding RESOURCE_DEFINITION blocks
    #[serde(default)]
    pub files: Vec<PathBuf>,

    /// Extension of files picked up while scanning `gamedata`
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Lint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintSettings {
    /// Extension of files picked up when a directory is linted
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Fail the run on warnings as well as errors
    #[serde(default)]
    pub deny_warnings: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print a one-line count after the diagnostics
    #[serde(default)]
    pub summary: bool,
}

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_extension() -> String {
    "cfg".to_string()
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            gamedata: Vec::new(),
            files: Vec::new(),
            extension: default_extension(),
        }
    }
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            deny_warnings: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            summary: false,
        }
    }
}

impl LintConfig {
    /// Load configuration from default locations
    pub fn load() -> std::result::Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, adding a specific file on top of the defaults
    pub fn load_from(config_path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["cfglint.toml", ".cfglint.toml", "config/cfglint.toml"];
        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // Load from XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("dev", "cfglint", "cfglint") {
            let xdg_config = config_dir.config_dir().join("cfglint.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }

        // CFGLINT__OUTPUT__FORMAT=json and friends
        builder = builder.add_source(
            Environment::with_prefix("CFGLINT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the resource table from every configured source.
    ///
    /// Directories go first, then single files, so a file can override a
    /// definition found while scanning.
    pub fn build_resource_table(&self) -> Result<ResourceTable> {
        let mut table = ResourceTable::new();
        for root in &self.resources.gamedata {
            table.load_directory(&expand_home(root), &self.resources.extension)?;
        }
        for file in &self.resources.files {
            table.load_file(&expand_home(file));
        }
        Ok(table)
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match directories::BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert_eq!(config.lint.extension, "cfg");
        assert_eq!(config.resources.extension, "cfg");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.lint.deny_warnings);
    }

    #[test]
    fn test_serialize_config() {
        let config = LintConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[resources]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("format = \"text\""));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lint.toml");
        std::fs::write(
            &path,
            "[output]\nformat = \"json\"\nsummary = true\n\n[resources]\nfiles = [\"res.cfg\"]\n",
        )
        .unwrap();

        let config = LintConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.summary);
        assert_eq!(config.resources.files, vec![PathBuf::from("res.cfg")]);
        assert_eq!(config.lint.extension, "cfg");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.toml");
        let mut config = LintConfig::default();
        config.lint.deny_warnings = true;
        config.save(&path).unwrap();

        let loaded = LintConfig::load_from(Some(&path)).unwrap();
        assert!(loaded.lint.deny_warnings);
    }

    #[test]
    fn test_build_resource_table_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("fuel.cfg");
        std::fs::write(
            &file,
            "RESOURCE_DEFINITION\n{\n name = MonoPropellant\n unitCost = 1.2\n}\n",
        )
        .unwrap();

        let mut config = LintConfig::default();
        config.resources.files.push(file);
        let table = config.build_resource_table().unwrap();
        assert_eq!(table.unit_cost("MonoPropellant"), 1.2);
    }

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        assert_eq!(expand_home(Path::new("GameData")), PathBuf::from("GameData"));
    }
}
