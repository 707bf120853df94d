//! Configuration file for the namescout CLI.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use namescout_search::{SearchConfig, UnifiedOptions};

use crate::error::{Result, ScoutError};
use crate::names::EmailOptions;

/// Top-level configuration.
///
/// ```toml
/// [search]
/// engines = ["google", "bing"]
/// request_delay_ms = [1000, 3000]
///
/// [emails]
/// domain_hints = ["acme.io"]
/// max_per_domain = 4
///
/// [unified]
/// limit = 20
/// include_repos = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    /// Search transport, throttling and engine selection.
    pub search: SearchConfig,
    /// Email candidate generation.
    pub emails: EmailOptions,
    /// Defaults for unified searches.
    pub unified: UnifiedOptions,
}

impl ScoutConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ScoutError::Config(e.to_string()))
    }

    /// Load `path` if given, else the default path if it exists, else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a file is found but cannot be read or parsed, or
    /// if the resulting configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    tracing::debug!(path = %default_path.display(), "loading default config");
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Config`] if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ScoutError::Config(e.to_string()))
    }

    /// Validate the search section.
    ///
    /// # Errors
    ///
    /// Returns [`ScoutError::Search`] wrapping the first invalid search setting.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/namescout/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("namescout").join("config.toml")
        } else if let Some(home) = dirs::home_dir() {
            home.join(".config").join("namescout").join("config.toml")
        } else {
            PathBuf::from("/tmp/namescout-config/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use namescout_search::SearchEngine;

    #[test]
    fn default_config_is_valid() {
        let config = ScoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.emails.max_per_domain, 6);
        assert_eq!(config.unified.limit, 10);
        assert!(config.unified.include_socials && config.unified.include_repos);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ScoutConfig::default();
        config.search.engines = vec![SearchEngine::Bing, SearchEngine::Yandex];
        config.search.proxy = Some("socks5://127.0.0.1:9050".into());
        config.emails.domain_hints = vec!["acme.io".into()];
        config.unified.limit = 25;
        config.unified.include_repos = false;

        config.save_to_file(&path).expect("save");
        assert!(path.exists());

        let loaded = ScoutConfig::from_file(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_takes_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[search]\nengines = [\"google\"]\n\n[unified]\nlimit = 3\n",
        )
        .expect("write");

        let loaded = ScoutConfig::from_file(&path).expect("load");
        assert_eq!(loaded.search.engines, vec![SearchEngine::Google]);
        assert_eq!(loaded.search.timeout_seconds, 10);
        assert_eq!(loaded.unified.limit, 3);
        assert!(loaded.unified.include_socials);
        assert_eq!(loaded.emails, EmailOptions::default());
    }

    #[test]
    fn load_rejects_invalid_search_settings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\nengines = []\n").expect("write");

        let err = ScoutConfig::load(Some(path.as_path())).expect_err("empty engines");
        assert!(matches!(err, ScoutError::Search(_)));
        assert!(err.to_string().contains("engine"));
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result = ScoutConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ScoutError::Io(_))));
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").expect("write");

        let result = ScoutConfig::from_file(&path);
        assert!(matches!(result, Err(ScoutError::Config(_))));
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = ScoutConfig::default_config_path();
        let path_str = path.to_string_lossy();
        assert!(path_str.ends_with("config.toml"));
        assert!(path_str.contains("namescout"));
    }

    #[test]
    fn config_serializes_to_toml() {
        let toml_str = ScoutConfig::default().to_toml().expect("serialize");
        assert!(toml_str.contains("[search]"));
        assert!(toml_str.contains("[emails]"));
        assert!(toml_str.contains("[unified]"));
        assert!(toml_str.contains("max_per_domain = 6"));
    }
}
