//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/drive-distance/config.toml
//!
//! The library client never reads this file itself; the CLI turns it into
//! [`ClientOptions`](crate::client::ClientOptions) and an HTTP transport.

pub mod defaults;

use crate::coord::units::DistanceUnit;
use crate::error::{Error, Result};
use crate::geo::DistanceExtraction;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Mapbox credentials
    #[serde(default)]
    pub mapbox: MapboxConfig,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Default values for CLI commands
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Mapbox credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapboxConfig {
    /// Access token (empty means not configured)
    #[serde(default)]
    pub access_token: String,
}

/// HTTP transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default values for CLI commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Unit distances are reported in
    #[serde(default = "default_unit")]
    pub unit: DistanceUnit,

    /// Output format
    #[serde(default = "default_format")]
    pub format: String,

    /// How the distance is read from the matrix response
    #[serde(default)]
    pub extraction: DistanceExtraction,
}

// Default value functions for serde
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_unit() -> DistanceUnit {
    DEFAULT_UNIT.parse().unwrap_or_default()
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            format: default_format(),
            extraction: DistanceExtraction::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating it with defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["mapbox", "access_token"] => Some(self.mapbox.access_token.clone()),

            ["http", "timeout_secs"] => Some(self.http.timeout_secs.to_string()),
            ["http", "user_agent"] => Some(self.http.user_agent.clone()),

            ["defaults", "unit"] => Some(self.defaults.unit.to_string()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),
            ["defaults", "extraction"] => Some(self.defaults.extraction.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["mapbox", "access_token"] => {
                self.mapbox.access_token = value.to_string();
            }

            ["http", "timeout_secs"] => {
                self.http.timeout_secs = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid timeout value: {}", value))
                })?;
            }
            ["http", "user_agent"] => {
                self.http.user_agent = value.to_string();
            }

            ["defaults", "unit"] => {
                self.defaults.unit = value.parse().map_err(Error::Config)?;
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }
            ["defaults", "extraction"] => {
                self.defaults.extraction = value.parse().map_err(Error::Config)?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "mapbox.access_token",
            "http.timeout_secs",
            "http.user_agent",
            "defaults.unit",
            "defaults.format",
            "defaults.extraction",
        ]
    }

    /// Pick the access token to use
    ///
    /// Precedence: explicit flag, then environment, then config file.
    /// Empty values are skipped.
    pub fn resolve_access_token(
        &self,
        flag: Option<&str>,
        env: Option<&str>,
    ) -> Option<String> {
        [flag, env, Some(self.mapbox.access_token.as_str())]
            .into_iter()
            .flatten()
            .find(|token| !token.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.mapbox.access_token.is_empty());
        assert_eq!(config.http.timeout_secs, 30);
        assert!(config.http.user_agent.starts_with("drive-distance/"));
        assert_eq!(config.defaults.unit, DistanceUnit::Miles);
        assert_eq!(config.defaults.format, "text");
        assert_eq!(config.defaults.extraction, DistanceExtraction::FirstNonZero);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("defaults.unit"), Some("miles".to_string()));

        config.set("defaults.unit", "km").unwrap();
        assert_eq!(config.get("defaults.unit"), Some("kilometers".to_string()));

        config.set("http.timeout_secs", "5").unwrap();
        assert_eq!(config.http.timeout_secs, 5);

        config.set("defaults.extraction", "destination_index").unwrap();
        assert_eq!(config.defaults.extraction, DistanceExtraction::DestinationIndex);

        config.set("mapbox.access_token", "pk.abc").unwrap();
        assert_eq!(config.get("mapbox.access_token"), Some("pk.abc".to_string()));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("http.timeout_secs", "soon").is_err());
        assert!(config.set("defaults.unit", "furlongs").is_err());
        assert!(config.set("defaults.extraction", "middle").is_err());
    }

    #[test]
    fn test_every_key_is_gettable() {
        let config = Config::default();
        for key in Config::available_keys() {
            assert!(config.get(key).is_some(), "missing getter for {}", key);
        }
    }

    #[test]
    fn test_load_creates_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.mapbox.access_token = "pk.saved".to_string();
        config.defaults.unit = DistanceUnit::Meters;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.mapbox.access_token, "pk.saved");
        assert_eq!(loaded.defaults.unit, DistanceUnit::Meters);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[mapbox]\naccess_token = \"pk.partial\"\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.mapbox.access_token, "pk.partial");
        assert_eq!(loaded.http.timeout_secs, 30);
        assert_eq!(loaded.defaults.format, "text");
    }

    #[test]
    fn test_unparsable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[http]\ntimeout_secs = \"never\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_serialization_format() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();

        assert!(toml.contains("[mapbox]"));
        assert!(toml.contains("[http]"));
        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("unit = \"miles\""));
        assert!(toml.contains("extraction = \"first_non_zero\""));
    }

    #[test]
    fn test_resolve_access_token() {
        let mut config = Config::default();
        assert_eq!(config.resolve_access_token(None, None), None);

        config.mapbox.access_token = "pk.file".to_string();
        assert_eq!(config.resolve_access_token(None, None).as_deref(), Some("pk.file"));
        assert_eq!(
            config.resolve_access_token(None, Some("pk.env")).as_deref(),
            Some("pk.env")
        );
        assert_eq!(
            config
                .resolve_access_token(Some("pk.flag"), Some("pk.env"))
                .as_deref(),
            Some("pk.flag")
        );
        assert_eq!(
            config.resolve_access_token(Some(""), Some("")).as_deref(),
            Some("pk.file")
        );
    }
}
