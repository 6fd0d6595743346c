//! Configuration management for todocat
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DATABASE_FILE_NAME, DEFAULT_LOG_LEVEL, LOCAL_CONFIG_FILE, LOG_FILE_NAME,
};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub todos: TodoConfig,
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Keep everything in memory; nothing survives the process
    pub in_memory: bool,
    /// Database file path. Defaults to the platform data directory when unset.
    pub database_path: Option<PathBuf>,
}

/// Todo behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TodoConfig {
    /// Accept todos whose title is empty after trimming
    pub allow_empty_title: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write log lines to a file in addition to the in-memory buffer
    pub enabled: bool,
    /// Log level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Log file path. Defaults to the platform data directory when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter
    pub fn level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }

    /// Resolved log file path
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::get_data_dir()?.join(LOG_FILE_NAME)),
        }
    }
}

impl StorageConfig {
    /// Resolved database file path, `None` for in-memory storage
    pub fn resolved_database_path(&self) -> Result<Option<PathBuf>> {
        if self.in_memory {
            return Ok(None);
        }
        match &self.database_path {
            Some(path) => Ok(Some(path.clone())),
            None => Ok(Some(Config::get_data_dir()?.join(DATABASE_FILE_NAME))),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.logging.level_filter()?;

        if self.storage.in_memory && self.storage.database_path.is_some() {
            anyhow::bail!("database_path cannot be set when in_memory is enabled");
        }

        if let Some(path) = &self.storage.database_path {
            if path.as_os_str().is_empty() {
                anyhow::bail!("database_path cannot be empty");
            }
            if path.is_dir() {
                anyhow::bail!("database_path '{}' is a directory", path.display());
            }
        }

        if let Some(path) = &self.logging.file {
            if path.as_os_str().is_empty() {
                anyhow::bail!("logging file cannot be empty");
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# todocat configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("Generated default configuration file: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Get the data directory holding the database and log file
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }
}
