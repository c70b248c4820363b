//! Configuration management for comicgen.
//!
//! Loads configuration from ${COMICGEN_HOME}/config.toml with sensible
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::store::DEFAULT_STORAGE_DIR;

/// Default configuration file contents.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for comicgen configuration directories.
    //!
    //! COMICGEN_HOME resolution order:
    //! 1. COMICGEN_HOME environment variable (if set)
    //! 2. ~/.config/comicgen (default)

    use std::path::PathBuf;

    /// Returns the comicgen home directory.
    ///
    /// Checks COMICGEN_HOME env var first, falls back to ~/.config/comicgen
    pub fn comicgen_home() -> PathBuf {
        if let Ok(home) = std::env::var("COMICGEN_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("comicgen"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        comicgen_home().join("config.toml")
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory where saved prompts live. Defaults to `saved_prompts`.
    pub storage_dir: Option<String>,
    /// UI language for labels and messages.
    pub language: Language,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the effective storage directory.
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .as_deref()
            .unwrap_or(DEFAULT_STORAGE_DIR)
            .into()
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert!(config.storage_dir.is_none());
        assert_eq!(config.language, Language::English);
        assert_eq!(config.storage_dir(), PathBuf::from("saved_prompts"));
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "storage_dir = \"my_prompts\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.storage_dir(), PathBuf::from("my_prompts"));
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_load_language() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "language = \"zh\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.language, Language::Chinese);
    }

    #[test]
    fn test_load_invalid_toml_errors() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "storage_dir = [not toml").unwrap();

        assert!(Config::load_from(&config_path).is_err());
    }

    #[test]
    fn test_init_creates_parseable_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.storage_dir(), PathBuf::from("saved_prompts"));
        assert_eq!(config.language, Language::English);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }
}
