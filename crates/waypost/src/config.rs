// File: waypost/src/config.rs
// Purpose: Configuration parsing from waypost.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Router configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterConfig {
    /// Path an in-memory history starts at (default: "/")
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Maximum level: trace, debug, info, warn or error (default: "info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Colored output (default: true)
    #[serde(default = "default_true")]
    pub ansi: bool,
}

// Default values
fn default_initial_path() -> String {
    "/".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            initial_path: default_initial_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            ansi: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./waypost.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("waypost.toml")
    }

    /// Parse configuration from TOML text; empty text yields defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = toml::from_str(content).context("Invalid waypost configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.router.initial_path, "/");
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.ansi);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml_str("  \n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [router]
            initial_path = "/dashboard"

            [logging]
            level = "debug"
        "#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.router.initial_path, "/dashboard");
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.ansi);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml_str("[router]\ninitial_path = 3").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/waypost.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
