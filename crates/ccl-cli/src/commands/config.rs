// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use ccl_sdk::config::{self, ConfigError, KEYS};
use ccl_sdk::SdkConfig;

use crate::output;

pub fn set(mut cfg: SdkConfig, key: &str, value: &str) -> Result<()> {
    if let Err(e) = cfg.set(key, value) {
        return Err(match e {
            ConfigError::UnknownKey(_) => output::fail_with_hint(
                &e.to_string(),
                &format!("allowed keys: {}", KEYS.join(", ")),
            ),
            other => other.into(),
        });
    }
    config::save(&cfg)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }));
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

pub fn show(cfg: &SdkConfig) -> Result<()> {
    let path = config::config_path()?;
    let artifacts = cfg.artifact_paths().all_exist();

    if output::is_json() {
        output::json_output(serde_json::json!({
            "config_path": path.display().to_string(),
            "artifacts_dir": cfg.artifacts_dir.display().to_string(),
            "prove_timeout_secs": cfg.prove_timeout_secs,
            "log_filter": cfg.log_filter,
            "artifacts_present": artifacts,
        }));
    } else {
        output::label("config_path", &path.display().to_string());
        output::label("artifacts_dir", &cfg.artifacts_dir.display().to_string());
        output::label("prove_timeout_secs", &cfg.prove_timeout_secs.to_string());
        output::label("log_filter", &cfg.log_filter);
        output::label("artifacts_present", &artifacts.to_string());
    }
    Ok(())
}
