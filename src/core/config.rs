use crate::errors::DedupeError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default option values read from a TOML configuration file.
///
/// Every field is optional; unset fields fall through to the next layer.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    #[serde(default)]
    pub key_value_separator: Option<String>,
    #[serde(default)]
    pub item_separator: Option<String>,
    #[serde(default)]
    pub value_separator: Option<String>,
    /// Mode name; kept as text so unknown values reach the caller unparsed
    #[serde(default, rename = "type")]
    pub mode: Option<String>,
    #[serde(default)]
    pub trim_whitespace: Option<bool>,
}

/// Layered configuration loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DedupeConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

impl DedupeConfig {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> Result<Self, DedupeError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DedupeError::config(path, e))?;
        Self::from_toml(&content).map_err(|e| DedupeError::config(path, e.message()))
    }

    /// `<config_dir>/dedupe/config.toml`, if a config directory exists on this platform.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dedupe").join("config.toml"))
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults
    /// 2. `~/.config/dedupe/config.toml` (user overrides)
    /// 3. `./dedupe.toml` (project-local overrides)
    pub fn load_with_overrides() -> Self {
        let mut layers = Vec::new();
        if let Some(user) = Self::user_config_path() {
            layers.push(user);
        }
        layers.push(PathBuf::from("dedupe.toml"));
        Self::load_layered(&layers)
    }

    /// Merges every existing file in `paths`, later files winning.
    ///
    /// Missing files are skipped silently; unreadable or malformed files are
    /// skipped with a warning.
    pub fn load_layered(paths: &[PathBuf]) -> Self {
        let mut config = Self::default();
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(layer) => {
                    tracing::debug!(path = %path.display(), "loaded config layer");
                    config.merge(layer);
                }
                Err(e) => {
                    tracing::warn!("Failed to load config from {:?}: {}", path, e);
                }
            }
        }
        config
    }

    /// Merges another configuration into this one.
    ///
    /// Values set in `other` override values in `self`.
    pub fn merge(&mut self, other: DedupeConfig) {
        let ours = &mut self.defaults;
        let theirs = other.defaults;
        if theirs.key_value_separator.is_some() {
            ours.key_value_separator = theirs.key_value_separator;
        }
        if theirs.item_separator.is_some() {
            ours.item_separator = theirs.item_separator;
        }
        if theirs.value_separator.is_some() {
            ours.value_separator = theirs.value_separator;
        }
        if theirs.mode.is_some() {
            ours.mode = theirs.mode;
        }
        if theirs.trim_whitespace.is_some() {
            ours.trim_whitespace = theirs.trim_whitespace;
        }
    }
}
