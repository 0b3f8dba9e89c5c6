//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the beach-config.toml file.
//! It provides a centralized way to point the client at the flood-monitoring service,
//! tune request limits and timeouts, and set the default location.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "beach-config.toml";

/// Application configuration loaded from beach-config.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Flood-monitoring API settings
    pub api: ApiConfig,
    /// Location used when none is given on the command line
    pub location: LocationConfig,
}

/// Flood-monitoring API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Root of the flood-monitoring API, without a trailing slash
    pub base_url: String,
    /// `_limit` for the tide gauge directory; large enough to list every gauge
    pub station_limit: u32,
    /// `_limit` for reading queries; only the first two are used
    pub reading_limit: u32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Default query location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: ApiConfig {
                base_url: "https://environment.data.gov.uk/flood-monitoring".to_string(),
                station_limit: 1000,
                reading_limit: 10,
                timeout_secs: 10,
            },
            location: LocationConfig {
                // Lowestoft
                latitude: 52.4767,
                longitude: 1.7514,
            },
        }
    }
}

impl Config {
    /// Load configuration from beach-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), base_url = %config.api.base_url, "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), "invalid config file format: {e}; using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.api.base_url,
            "https://environment.data.gov.uk/flood-monitoring"
        );
        assert_eq!(config.api.station_limit, 1000);
        assert_eq!(config.api.reading_limit, 10);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.location.latitude, 52.4767);
        assert_eq!(config.location.longitude, 1.7514);
    }

    #[test]
    fn test_config_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.api.timeout_secs = 3;
        fs::write(file.path(), toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::load_from_path(file.path());
        assert_eq!(loaded.api.timeout_secs, 3);
        assert_eq!(loaded.api.base_url, config.api.base_url);
    }

    #[test]
    fn test_parse_custom_endpoint() {
        let config = Config::from_toml_str(
            r#"
            [api]
            base_url = "http://localhost:8080"
            station_limit = 50
            reading_limit = 2
            timeout_secs = 1

            [location]
            latitude = 50.1
            longitude = -5.5
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.reading_limit, 2);
        assert_eq!(config.location.longitude, -5.5);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        assert_eq!(config.api.station_limit, 1000);
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "[api]\nbase_url = 42\n").unwrap();
        let config = Config::load_from_path(file.path());
        assert_eq!(config.api.reading_limit, 10);
    }
}
