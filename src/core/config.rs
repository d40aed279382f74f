//! Assistant configuration
//!
//! Every field has a default so a config file only needs to name what it
//! changes. Command-line flags are applied on top of the loaded values.

use crate::core::error::{AssistError, Result};
use crate::core::types::ExtractionMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the assistant binaries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// JSON file mapping product names to shelf locations
    pub catalog_path: PathBuf,

    /// Whether candidates include lemmas as well as surface forms
    ///
    /// `surface` reproduces plain surface matching: "breads" will not
    /// match a catalog entry keyed "bread".
    pub extraction: ExtractionMode,

    /// Add lemma forms of catalog keys as aliases for the same shelf
    ///
    /// Lets a catalog keyed "apples" answer a request for "apple".
    /// Aliases never replace an existing key.
    pub alias_lemmas: bool,

    /// Where `export` writes the shopping list when no path is given
    pub export_path: PathBuf,

    /// `tracing` filter directive for the subscriber
    pub log_filter: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/database.json"),
            extraction: ExtractionMode::LemmaAware,
            alias_lemmas: true,
            export_path: PathBuf::from("shopping_list.csv"),
            log_filter: "aisle_assistant=info".to_string(),
        }
    }
}

impl AssistantConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AssistantConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AssistError::Config(format!("Failed to read config {:?}: {}", path, e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Log filter directives, with `RUST_LOG` taking precedence when set
    pub fn log_directives<'a>(&'a self, rust_log: Option<&'a str>) -> &'a str {
        match rust_log {
            Some(directives) if !directives.trim().is_empty() => directives,
            _ => &self.log_filter,
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(AssistError::Config("catalog_path must not be empty".into()));
        }

        if self.export_path.as_os_str().is_empty() {
            return Err(AssistError::Config("export_path must not be empty".into()));
        }

        if self.log_filter.trim().is_empty() {
            return Err(AssistError::Config("log_filter must not be empty".into()));
        }

        Ok(())
    }
}
