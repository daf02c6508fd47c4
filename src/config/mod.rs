//! # Configuration Management Module
//!
//! TOML-backed configuration for the worldvars console. Three sections:
//!
//! ```toml
//! [console]
//! name = "worldvars console"
//!
//! [storage]
//! data_dir = "./data"
//!
//! [logging]
//! level = "info"
//! file = "worldvars.log"
//! ```
//!
//! The vars file always lives at `<data_dir>/world_vars.json`; only the
//! directory is configurable. CLI verbosity flags override the configured
//! logging level.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Name of the vars file inside the data directory. Fixed, not configurable.
pub const VARS_FILE_NAME: &str = "world_vars.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub console: ConsoleConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Banner name shown when the interactive console starts.
    pub name: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            name: "worldvars console".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the vars file. Created on first save.
    pub data_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Write a default configuration file.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Full path of the vars file under the configured data directory.
    pub fn vars_file(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir).join(VARS_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            console: ConsoleConfig::default(),
            storage: StorageConfig {
                data_dir: "./data".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some("worldvars.log".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vars_file_path() {
        let config = Config::default();
        assert_eq!(config.vars_file(), PathBuf::from("./data/world_vars.json"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.storage.data_dir, config.storage.data_dir);
        assert_eq!(parsed.console.name, config.console.name);
        assert_eq!(parsed.logging.level, "info");
    }

    #[test]
    fn console_section_is_optional() {
        let parsed: Config = toml::from_str(
            "[storage]\ndata_dir = \"/tmp/vars\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(parsed.console.name, "worldvars console");
        assert_eq!(parsed.storage.data_dir, "/tmp/vars");
    }

    #[tokio::test]
    async fn load_missing_file_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.toml");
        assert!(Config::load(path.to_str().unwrap()).await.is_err());
    }
}
