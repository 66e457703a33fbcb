//! Application configuration.

use crate::consts::cli_consts::employee_fetching;
use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use std::{fs, path::Path};

const CONFIG_DIR: &str = ".employee-dashboard";
const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the employee API, e.g. `http://localhost:5000/api`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    /// Overall fetch timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file at `path` if it exists, otherwise an empty configuration.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Picks the API base URL: explicit override, then this file, then the environment default.
    pub fn resolve_api_url(&self, override_url: Option<&str>, environment: Environment) -> String {
        override_url
            .map(str::to_string)
            .or_else(|| self.api_base_url.clone())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| environment.api_url())
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or_else(employee_fetching::default_timeout)
    }
}

/// Location of the config file under the user's home directory.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Failed to determine home directory",
        )
    })?;
    Ok(home_path.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Deletes the config file at `path`. A missing file is not an error.
pub fn clear_config(path: &Path) -> std::io::Result<()> {
    if !path.ends_with(CONFIG_FILE) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Path must end with config.json",
        ));
    }

    if !path.exists() {
        log::debug!("No config file found at {}", path.display());
        return Ok(());
    }

    fs::remove_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn with_url(url: &str) -> Config {
        Config {
            api_base_url: Some(url.to_string()),
            request_timeout_secs: None,
        }
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            api_base_url: Some("http://hr.example/api".to_string()),
            request_timeout_secs: Some(3),
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = with_url("http://hr.example/api").save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_api_url_precedence() {
        let config = with_url("http://from-file/api");

        assert_eq!(
            config.resolve_api_url(Some("http://from-flag/api"), Environment::Local),
            "http://from-flag/api"
        );
        assert_eq!(
            config.resolve_api_url(None, Environment::Local),
            "http://from-file/api"
        );
        assert_eq!(
            Config::default().resolve_api_url(None, Environment::Local),
            "http://localhost:5000/api"
        );
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let config = Config {
            api_base_url: None,
            request_timeout_secs: Some(0),
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_clear_config_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        clear_config(&path).unwrap();
        assert!(!path.exists());
        // Clearing again is a no-op.
        assert!(clear_config(&path).is_ok());
    }

    #[test]
    fn test_clear_config_rejects_other_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        assert!(clear_config(&path).is_err());
    }
}
