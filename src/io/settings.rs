// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings come from an optional YAML file and the environment. Every
//! field has a default, so an absent or partial file is fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default settings file, looked up in the working directory.
pub const SETTINGS_FILE: &str = "livestream.yaml";

/// Environment variable naming an alternative settings file.
pub const CONFIG_ENV: &str = "LIVESTREAM_CONFIG";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "LIVESTREAM_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base of the overlay/stream REST API.
    pub api_base_url: String,
    /// Show the sample overlays when the overlay service is unreachable.
    pub offline_demo: bool,
    /// Where the browser build fetches hls.js from.
    pub hls_script_url: String,
    pub request_timeout_secs: u64,
    /// Title sent with stream start notifications.
    pub stream_title: String,
    pub stream_description: String,
    /// How many past sessions the history window asks for.
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".to_string(),
            offline_demo: true,
            hls_script_url: "https://cdn.jsdelivr.net/npm/hls.js@latest".to_string(),
            request_timeout_secs: 10,
            stream_title: "Livestream Session".to_string(),
            stream_description: "Active livestream".to_string(),
            history_limit: 50,
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Replace the API base URL when an override is given.
    pub fn with_api_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Resolve settings for a native run: the file named by
    /// `LIVESTREAM_CONFIG` (which must exist), else `livestream.yaml` when
    /// present, else defaults; then the `LIVESTREAM_API_URL` override.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        let settings = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_yaml_file(Path::new(&path))?,
            Err(_) if Path::new(SETTINGS_FILE).exists() => {
                Self::from_yaml_file(Path::new(SETTINGS_FILE))?
            }
            Err(_) => Self::default(),
        };
        Ok(settings.with_api_override(std::env::var(API_URL_ENV).ok()))
    }

    /// The browser build has no file system or environment.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        Ok(Self::default())
    }
}
