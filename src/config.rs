//! Configuration for the Crelate client.
//!
//! Values are resolved from, in order of precedence:
//! - explicit overrides (command-line flags)
//! - `CRELATE_API_KEY` / `CRELATE_BASE_URL` environment variables
//! - a YAML file, by default `<config dir>/crelate/config.yml`
//! - built-in defaults

use crate::client::DEFAULT_BASE_URL;
use crate::connection::Connection;
use eyre::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name within the crelate config directory.
const CONFIG_FILE: &str = "config.yml";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "CRELATE_API_KEY";

/// Environment variable holding the API root.
pub const BASE_URL_ENV: &str = "CRELATE_BASE_URL";

/// Contents of the YAML config file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub config_path: Option<PathBuf>,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("crelate").join(CONFIG_FILE))
    }

    /// Read a config file. A missing file yields an empty config.
    pub fn load_file(path: &Path) -> Result<ConfigFile> {
        if !path.exists() {
            return Ok(ConfigFile::default());
        }

        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(ConfigFile::default());
        }

        serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Resolve configuration using the process environment.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        Self::resolve(overrides, |name| std::env::var(name).ok())
    }

    /// Resolve configuration with an explicit environment lookup.
    pub fn resolve(overrides: &Overrides, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let path = overrides.config_path.clone().or_else(Self::default_path);
        let file = match &path {
            Some(path) => Self::load_file(path)?,
            None => ConfigFile::default(),
        };

        let lookup = |name: &str| env(name).filter(|v| !v.trim().is_empty());

        let api_key = overrides.api_key.clone().or_else(|| lookup(API_KEY_ENV)).or(file.api_key);
        let base_url = overrides
            .base_url
            .clone()
            .or_else(|| lookup(BASE_URL_ENV))
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    /// Build a connection from the resolved key (empty if none).
    pub fn connection(&self) -> Connection {
        Connection::new(self.api_key.clone().unwrap_or_default())
    }
}
