// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Splitshot", "splitshot"));

pub const API_KEY_ENV: &str = "SPLITWISE_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub default_currency: String,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            default_currency: "INR".to_string(),
            debug: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

pub fn load() -> Result<Config> {
    let mut cfg = from_path(&config_path()?)?;
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            cfg.api_key = Some(key);
        }
    }
    Ok(cfg)
}

/// Missing file means defaults; an unreadable or invalid file is an error.
pub fn from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid config at {}", path.display()))
}

impl Config {
    pub fn api_key(&self) -> Result<String> {
        self.api_key.clone().with_context(|| {
            format!(
                "No Splitwise API key configured. Set {} or add \"api_key\" to {}",
                API_KEY_ENV,
                config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the config file".to_string())
            )
        })
    }
}
