use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::constants::{defaults, DEFAULT_CONFIG_FILE, DEFAULT_IP_COMMAND, VIRTUAL_NET_DIR};
use crate::error::{ConfigError, Result};
use crate::output::OutputFormat;

/// Configuration structures for YAML config file support
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub snapshot: SnapshotConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SnapshotConfig {
    /// iproute2 binary used to dump links and addresses
    pub ip_command: String,
    /// Directory listing the interfaces the kernel treats as virtual
    pub virtual_net_dir: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            ip_command: DEFAULT_IP_COMMAND.to_string(),
            virtual_net_dir: VIRTUAL_NET_DIR.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    /// The implicit config file was absent
    Defaults(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "loaded configuration from {}", path),
            ConfigSource::Defaults(path) => {
                write!(f, "config file {} not found, using defaults", path)
            }
        }
    }
}

/// Load configuration from YAML file.
///
/// An explicitly given path must exist. Without one, a missing
/// `hypervisor_nics.yaml` falls back to defaults.
pub fn load_config(config_path: Option<&str>) -> Result<(Config, ConfigSource)> {
    let config_file = config_path.unwrap_or(DEFAULT_CONFIG_FILE);

    if !Path::new(config_file).exists() {
        if config_path.is_some() {
            return Err(ConfigError::FileNotFound(config_file.to_string()).into());
        }
        return Ok((get_default_config(), ConfigSource::Defaults(config_file.to_string())));
    }

    let config_str = std::fs::read_to_string(config_file)
        .map_err(|e| ConfigError::ParseError(format!("Failed to read {}: {}", config_file, e)))?;

    let config = serde_yaml::from_str(&config_str)
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok((config, ConfigSource::File(config_file.to_string())))
}

pub fn get_default_config() -> Config {
    Config::default()
}
