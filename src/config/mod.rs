//! Configuration module for notesort
//!
//! Holds the rule configuration the engine evaluates plus output defaults.
//! Configuration is read-only: it is loaded from a TOML (or `.json`) file
//! and never written back.

use crate::rules::{HideRule, IconColorRule, SortSettings};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Result output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable, colored when attached to a terminal
    #[default]
    Text,
    /// One JSON document
    Json,
    /// Comma separated rows with a header
    Csv,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct NotesortConfig {
    /// Icon/color rules, evaluated in order
    #[serde(default)]
    pub visual_rules: Vec<IconColorRule>,

    /// Rules hiding notes from lists
    #[serde(default)]
    pub hide_rules: Vec<HideRule>,

    /// Sort key composition
    #[serde(default)]
    pub sort: SortSettings,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl NotesortConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("notesort").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location
    ///
    /// A missing file at the default location yields the default
    /// configuration; an explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        let default_path = Self::config_path()?;
        if default_path.exists() {
            Self::load_from(&default_path)
        } else {
            tracing::debug!(path = %default_path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(file_format(path)))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(
            path = %path.display(),
            visual_rules = config.visual_rules.len(),
            hide_rules = config.hide_rules.len(),
            buckets = config.sort.buckets.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be serialized.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}

/// JSON for `.json` files, TOML otherwise
fn file_format(path: &Path) -> FileFormat {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json { FileFormat::Json } else { FileFormat::Toml }
}
