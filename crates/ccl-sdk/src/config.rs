// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! SDK configuration persisted as JSON at `~/.ccl/config.json`.
//!
//! Set `CCL_CONFIG` to use another file. A missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::artifacts::ArtifactPaths;

pub const CONFIG_ENV: &str = "CCL_CONFIG";
pub const KEYS: &[&str] = &["artifacts_dir", "prove_timeout_secs", "log_filter"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot determine home directory")]
    NoHome,
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown config key: {0}")]
    UnknownKey(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    pub artifacts_dir: PathBuf,
    pub prove_timeout_secs: u64,
    pub log_filter: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        let artifacts_dir = dirs::home_dir()
            .map(|home| home.join(".ccl").join("artifacts"))
            .unwrap_or_else(|| PathBuf::from("artifacts"));
        Self {
            artifacts_dir,
            prove_timeout_secs: 60,
            log_filter: "warn".to_string(),
        }
    }
}

impl SdkConfig {
    pub fn prove_timeout(&self) -> Duration {
        Duration::from_secs(self.prove_timeout_secs)
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::in_dir(&self.artifacts_dir)
    }

    /// Update one key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "artifacts_dir" => self.artifacts_dir = PathBuf::from(value),
            "prove_timeout_secs" => {
                let secs: u64 = value.parse().map_err(|_| invalid())?;
                if secs == 0 {
                    return Err(invalid());
                }
                self.prove_timeout_secs = secs;
            }
            "log_filter" => {
                if value.trim().is_empty() {
                    return Err(invalid());
                }
                self.log_filter = value.to_string();
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
    Ok(home.join(".ccl").join("config.json"))
}

pub fn load() -> Result<SdkConfig, ConfigError> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<SdkConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(data) => Ok(serde_json::from_str(&data)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SdkConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn save(config: &SdkConfig) -> Result<(), ConfigError> {
    save_to(config, &config_path()?)
}

pub fn save_to(config: &SdkConfig, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(io_err)
}
