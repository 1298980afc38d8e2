// SPDX-License-Identifier: MPL-2.0
//! This module handles the carousel configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use lens_carousel::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.max_zoom_multiplier = Some(4.0);
//!
//! // Load/save from a specific path
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.max_zoom_multiplier, Some(4.0));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::{PrefetchRadius, TapWindow, ZoomMultiplier};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LensCarousel";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub max_zoom_multiplier: Option<f32>,
    #[serde(default)]
    pub prefetch_radius: Option<usize>,
    #[serde(default)]
    pub double_tap_window_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_zoom_multiplier: Some(DEFAULT_MAX_ZOOM_MULTIPLIER),
            prefetch_radius: Some(DEFAULT_PREFETCH_RADIUS),
            double_tap_window_ms: Some(DEFAULT_DOUBLE_TAP_WINDOW_MS),
        }
    }
}

/// Validated settings resolved from a [`Config`].
///
/// Missing fields fall back to defaults and out-of-range values are clamped
/// by the newtypes, so a hand-edited `settings.toml` can never produce an
/// invalid carousel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselSettings {
    pub zoom_multiplier: ZoomMultiplier,
    pub prefetch_radius: PrefetchRadius,
    pub tap_window: TapWindow,
}

impl From<&Config> for CarouselSettings {
    fn from(config: &Config) -> Self {
        Self {
            zoom_multiplier: config
                .max_zoom_multiplier
                .map(ZoomMultiplier::new)
                .unwrap_or_default(),
            prefetch_radius: config
                .prefetch_radius
                .map(PrefetchRadius::new)
                .unwrap_or_default(),
            tap_window: config
                .double_tap_window_ms
                .map(TapWindow::from_millis)
                .unwrap_or_default(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Returns the default configuration when no settings file exists.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Loads a configuration file, falling back to defaults on invalid TOML.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), "invalid settings file, using defaults: {err}");
            Ok(Config::default())
        }
    }
}

/// Writes a configuration file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
