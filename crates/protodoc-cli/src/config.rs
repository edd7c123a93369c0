//! Configuration management for the plugin binary
//!
//! This module handles loading settings from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Environment variables
//!
//! What to generate is decided by the plugin parameter; these settings only
//! cover where schema sources live, how type links look, and logging.

use crate::error::{Error, Result};
use crate::logging::LogFormat;
use protodoc_core::LinkStyle;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Environment variable overriding `source_roots` (platform path list)
pub const SOURCE_ROOTS_ENV: &str = "PROTODOC_SOURCE_ROOTS";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directories searched, in order, for schema sources; the working
    /// directory when empty
    pub source_roots: Vec<PathBuf>,

    /// Link rendering for field types
    pub links: LinkStyle,

    /// Logging settings
    pub logging: LogSettings,
}

/// Logging settings from the settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log level or filter directives
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<LogFormat>,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        if let Some(roots) = std::env::var_os(SOURCE_ROOTS_ENV) {
            self.set_source_roots(&roots);
        }
    }

    /// Replace `source_roots` with a platform path list, skipping empty
    /// entries
    pub fn set_source_roots(&mut self, roots: &OsStr) {
        self.source_roots = std::env::split_paths(roots)
            .filter(|path| !path.as_os_str().is_empty())
            .collect();
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".protodoc.yaml"),
            PathBuf::from(".protodoc.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let protodoc_dir = config_dir.join("protodoc");
            paths.push(protodoc_dir.join("config.yaml"));
            paths.push(protodoc_dir.join("config.json"));
        }

        paths
    }
}
