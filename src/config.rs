//! Configuration module for galleria
//!
//! Settings come from `~/.config/galleria/config.toml` (if present),
//! overlaid by `GALLERIA_*` environment variables, overlaid by CLI flags.
//! The file is only read, never written.

use crate::catalog::DEFAULT_MANIFEST;
use crate::filter::CategoryMatch;
use crate::render::ViewOptions;
use crate::session::SessionOptions;
use crate::viewer::ResyncPolicy;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix (`GALLERIA_MANIFEST`, ...)
pub const ENV_PREFIX: &str = "GALLERIA";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GalleriaConfig {
    /// Manifest URL or path
    pub manifest: String,

    /// How category buttons match item directories
    pub category_match: CategoryMatch,

    /// Viewer behavior when the open item is filtered away
    pub resync: ResyncPolicy,

    /// Display label for the `ALL` category
    pub all_label: String,

    /// Whether the category side panel starts expanded
    pub sidebar_open: bool,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for GalleriaConfig {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.to_string(),
            category_match: CategoryMatch::default(),
            resync: ResyncPolicy::default(),
            all_label: "All".to_string(),
            sidebar_open: true,
            quiet: false,
        }
    }
}

impl GalleriaConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("galleria").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed, or an
    /// environment override has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::build(&path, false, Self::environment())
    }

    /// Load configuration from an explicit file, which must exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(path, true, Self::environment())
    }

    /// `GALLERIA_*` variables, lowercased into field names
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
    }

    fn build(path: &Path, required: bool, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env)
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Parse configuration from TOML text, without file or environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not valid configuration.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Render as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Session behavior derived from this configuration
    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            category_match: self.category_match,
            resync: self.resync,
        }
    }

    /// Presentation settings derived from this configuration
    #[must_use]
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            all_label: self.all_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = GalleriaConfig::default();
        assert_eq!(config.manifest, "gallery.json");
        assert_eq!(config.category_match, CategoryMatch::Prefix);
        assert_eq!(config.resync, ResyncPolicy::Clamp);
        assert!(config.sidebar_open);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GalleriaConfig::from_toml(
            r#"
            manifest = "https://example.com/gallery.json"
            category_match = "segment"
            "#,
        )
        .unwrap();

        assert_eq!(config.manifest, "https://example.com/gallery.json");
        assert_eq!(config.category_match, CategoryMatch::Segment);
        assert_eq!(config.all_label, "All");
    }

    #[test]
    fn test_from_toml_rejects_unknown_variant() {
        assert!(GalleriaConfig::from_toml(r#"resync = "wrap""#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "resync = \"close\"\nall_label = \"Everything\"\n").unwrap();

        let config = GalleriaConfig::load_from(&path).unwrap();
        assert_eq!(config.resync, ResyncPolicy::Close);
        assert_eq!(config.all_label, "Everything");
        assert_eq!(config.view_options().all_label, "Everything");
    }

    #[test]
    fn test_environment_overrides_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "resync = \"clamp\"\nall_label = \"Everything\"\n").unwrap();

        let mut vars = config::Map::new();
        vars.insert("GALLERIA_RESYNC".to_string(), "close".to_string());
        vars.insert("GALLERIA_SIDEBAR_OPEN".to_string(), "false".to_string());
        vars.insert("OTHER_RESYNC".to_string(), "clamp".to_string());
        let env = GalleriaConfig::environment().source(Some(vars));

        let config = GalleriaConfig::build(&path, true, env).unwrap();
        assert_eq!(config.resync, ResyncPolicy::Close);
        assert!(!config.sidebar_open);
        assert_eq!(config.all_label, "Everything");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        assert!(GalleriaConfig::load_from(&tmp.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = GalleriaConfig {
            category_match: CategoryMatch::Segment,
            ..GalleriaConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(GalleriaConfig::from_toml(&text).unwrap(), config);
    }
}
