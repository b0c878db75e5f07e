//! Configuration management for truckreg
//!
//! Config stored at: ~/.config/truckreg/config.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use truckreg_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the backing tables (platform data dir if unset)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// File name of the user table
    #[serde(default = "default_users_file")]
    pub users_file: String,

    /// File name of the truck table
    #[serde(default = "default_trucks_file")]
    pub trucks_file: String,

    /// Default output format for listings (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_users_file() -> String {
    "users.csv".to_string()
}

fn default_trucks_file() -> String {
    "truck_data.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            users_file: default_users_file(),
            trucks_file: default_trucks_file(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("truckreg");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the directory holding the backing tables
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("truckreg");
        Ok(data_dir)
    }

    /// Full path of the user table
    pub fn users_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.users_file))
    }

    /// Full path of the truck table
    pub fn trucks_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(&self.trucks_file))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Truckreg Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Data dir:      {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Users file:    {}", self.users_file)?;
        writeln!(f, "Trucks file:   {}", self.trucks_file)?;
        writeln!(f, "Output format: {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:   {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.users_file, "users.csv");
        assert_eq!(config.trucks_file, "truck_data.csv");
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/trucks")),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/trucks")));
        assert_eq!(parsed.users_file, config.users_file);
    }

    #[test]
    fn table_paths_use_data_dir_override() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/trucks")),
            ..Config::default()
        };
        assert_eq!(
            config.users_path().unwrap(),
            PathBuf::from("/tmp/trucks/users.csv")
        );
        assert_eq!(
            config.trucks_path().unwrap(),
            PathBuf::from("/tmp/trucks/truck_data.csv")
        );
    }
}
