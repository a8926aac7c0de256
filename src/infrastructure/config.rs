use crate::domain::error::TranslateError;
use crate::infrastructure::network::client::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    pub http_proxy: Option<String>,
    /// Whole-request timeout; the client waits indefinitely when unset.
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            http_proxy: None,
            timeout_secs: None,
            logging: Logging::default(),
        }
    }
}

// Defaults
fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

impl Logging {
    /// Map the config level name to an `EnvFilter` directive.
    pub fn filter_directive(&self) -> &'static str {
        match self.level.to_uppercase().as_str() {
            "DEBUG" => "debug",
            "INFO" => "info",
            "WARN" => "warn",
            "ERROR" => "error",
            _ => "warn",
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("shakespeare").join("config.toml"))
}

pub fn load_config() -> Result<Config, TranslateError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Read a config file, falling back to defaults when it is missing or broken.
pub fn load_config_from(path: &Path) -> Result<Config, TranslateError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, TranslateError> {
    Ok(toml::from_str::<Config>(content)?)
}

pub fn generate_config_sample() -> Result<(), TranslateError> {
    let path = get_config_path()
        .ok_or_else(|| TranslateError::Config("Cannot determine config directory".to_string()))?;

    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }

    Ok(())
}

/// Write the default config to `path`. Returns `false` if a file is already there.
pub fn write_config_sample(path: &Path) -> Result<bool, TranslateError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| TranslateError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| TranslateError::Config(format!("Failed to write config file: {}", e)))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        let logging = Logging {
            level: "LOUD".to_string(),
            ..Logging::default()
        };
        assert_eq!(logging.filter_directive(), "warn");

        let logging = Logging {
            level: "debug".to_string(),
            ..Logging::default()
        };
        assert_eq!(logging.filter_directive(), "debug");
    }
}
