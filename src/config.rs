//! Viewer configuration persistence.
//!
//! Stores window geometry and the transparency preference as JSON at
//! `~/.local/share/float-text/config.json`. Loaded once on startup; saved
//! whenever a setting changes and again on exit so the file is always
//! current.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("float-text")
        .join("config.json")
}

/// Persisted viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_x")]
    pub window_x: f32,
    #[serde(default = "default_y")]
    pub window_y: f32,
    #[serde(default = "default_width")]
    pub window_width: f32,
    #[serde(default = "default_height")]
    pub window_height: f32,
    #[serde(default = "default_true")]
    pub transparent_background: bool,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_x() -> f32 { 300.0 }
fn default_y() -> f32 { 300.0 }
fn default_width() -> f32 { 600.0 }
fn default_height() -> f32 { 400.0 }
fn default_true() -> bool { true }

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_x: default_x(),
            window_y: default_y(),
            window_width: default_width(),
            window_height: default_height(),
            transparent_background: true,
            path: default_path(),
        }
    }
}

impl ViewerConfig {
    /// Load from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = default_path();
        let mut config = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        config.path = path;
        config
    }

    /// Config with defaults that saves to the given path instead of the
    /// user's data directory.
    #[cfg(test)]
    pub(crate) fn with_path(path: PathBuf) -> Self {
        Self { path, ..Self::default() }
    }

    /// Persist current config to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = std::fs::write(&self.path, json);
        }
    }
}
