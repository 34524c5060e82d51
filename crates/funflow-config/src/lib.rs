//! Account profile for funflow
//!
//! Values come from the environment first and fall back to the global
//! `~/.fcli/config.yaml` file.

pub mod error;

pub use error::*;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_ACCOUNT_ID: &str = "ALIBABA_CLOUD_ACCOUNT_ID";
pub const ENV_ACCESS_KEY_ID: &str = "ALIBABA_CLOUD_ACCESS_KEY_ID";
pub const ENV_ACCESS_KEY_SECRET: &str = "ALIBABA_CLOUD_ACCESS_KEY_SECRET";
pub const ENV_DEFAULT_REGION: &str = "ALIBABA_CLOUD_DEFAULT_REGION";
pub const ENV_CONFIG_PATH: &str = "FUN_CONFIG_PATH";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Raw contents of the config file; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileFile {
    pub account_id: Option<String>,
    pub access_key_id: Option<String>,
    pub access_key_secret: Option<String>,
    pub default_region: Option<String>,
    pub timeout: Option<u64>,
}

impl ProfileFile {
    /// Read a config file. A missing file yields an empty profile.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved account profile
#[derive(Clone, PartialEq, Eq)]
pub struct Profile {
    pub account_id: Option<String>,
    pub access_key_id: String,
    pub access_key_secret: String,
    pub region: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("account_id", &self.account_id)
            .field("access_key_id", &self.access_key_id)
            .field("access_key_secret", &"***")
            .field("region", &self.region)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Profile {
    /// Load the profile from the process environment and the config file
    pub fn load() -> Result<Self> {
        let path = config_file_path();
        let file = match &path {
            Some(path) => ProfileFile::read(path)?,
            None => ProfileFile::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge `file` with values from `env`, the environment taking precedence
    pub fn resolve(file: ProfileFile, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let pick = |key: &str, fallback: Option<String>| {
            env(key).filter(|v| !v.is_empty()).or(fallback)
        };

        Ok(Self {
            account_id: pick(ENV_ACCOUNT_ID, file.account_id),
            access_key_id: pick(ENV_ACCESS_KEY_ID, file.access_key_id)
                .ok_or(ConfigError::Missing("access_key_id"))?,
            access_key_secret: pick(ENV_ACCESS_KEY_SECRET, file.access_key_secret)
                .ok_or(ConfigError::Missing("access_key_secret"))?,
            region: pick(ENV_DEFAULT_REGION, file.default_region)
                .ok_or(ConfigError::Missing("default_region"))?,
            timeout_secs: file.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

/// `FUN_CONFIG_PATH` if set, otherwise `~/.fcli/config.yaml`
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".fcli").join("config.yaml"))
}
