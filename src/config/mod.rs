// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay's configuration, including loading and saving
//! tunables to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use playback_overlay::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.auto_hide_delay_ms = Some(6000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.auto_hide_delay_ms, Some(6000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{ContentFit, DoubleTapWindow, FeedbackDuration, HideDelay, PinchThresholds, SeekStep};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PlaybackOverlay";

/// Persisted overlay tunables. Every field is optional; missing values
/// fall back to the constants in [`defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auto_hide_delay_ms: Option<u64>,
    #[serde(default)]
    pub double_tap_window_ms: Option<u64>,
    #[serde(default)]
    pub seek_step_secs: Option<f64>,
    #[serde(default)]
    pub seek_feedback_ms: Option<u64>,
    #[serde(default)]
    pub pinch_cover_threshold: Option<f32>,
    #[serde(default)]
    pub pinch_contain_threshold: Option<f32>,
    #[serde(default)]
    pub panel_closed_offset: Option<f32>,
    #[serde(default)]
    pub content_fit: Option<FitPreference>,
}

/// Initial content fit, as written in `settings.toml`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FitPreference {
    /// Letterbox the frame inside the viewport.
    #[default]
    Contain,
    /// Crop the frame to fill the viewport.
    Cover,
}

impl From<FitPreference> for ContentFit {
    fn from(preference: FitPreference) -> Self {
        match preference {
            FitPreference::Contain => ContentFit::Contain,
            FitPreference::Cover => ContentFit::Cover,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_hide_delay_ms: Some(DEFAULT_AUTO_HIDE_DELAY_MS),
            double_tap_window_ms: Some(DEFAULT_DOUBLE_TAP_WINDOW_MS),
            seek_step_secs: Some(DEFAULT_SEEK_STEP_SECS),
            seek_feedback_ms: Some(DEFAULT_SEEK_FEEDBACK_MS),
            pinch_cover_threshold: Some(DEFAULT_PINCH_COVER_THRESHOLD),
            pinch_contain_threshold: Some(DEFAULT_PINCH_CONTAIN_THRESHOLD),
            panel_closed_offset: Some(DEFAULT_PANEL_CLOSED_OFFSET),
            content_fit: Some(FitPreference::default()),
        }
    }
}

/// Resolved, range-checked settings consumed by the overlay engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySettings {
    pub auto_hide_delay: HideDelay,
    pub double_tap_window: DoubleTapWindow,
    pub seek_step: SeekStep,
    pub seek_feedback: FeedbackDuration,
    pub pinch: PinchThresholds,
    pub panel_closed_offset: f32,
    pub content_fit: ContentFit,
}

impl OverlaySettings {
    /// Resolves a loaded [`Config`], clamping every value into its valid range.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let panel_closed_offset = config
            .panel_closed_offset
            .filter(|offset| offset.is_finite() && *offset > PANEL_OPEN_OFFSET)
            .unwrap_or(DEFAULT_PANEL_CLOSED_OFFSET);

        Self {
            auto_hide_delay: config
                .auto_hide_delay_ms
                .map(HideDelay::from_millis)
                .unwrap_or_default(),
            double_tap_window: config
                .double_tap_window_ms
                .map(DoubleTapWindow::from_millis)
                .unwrap_or_default(),
            seek_step: config.seek_step_secs.map(SeekStep::new).unwrap_or_default(),
            seek_feedback: config
                .seek_feedback_ms
                .map(FeedbackDuration::from_millis)
                .unwrap_or_default(),
            pinch: PinchThresholds::new(
                config
                    .pinch_cover_threshold
                    .unwrap_or(DEFAULT_PINCH_COVER_THRESHOLD),
                config
                    .pinch_contain_threshold
                    .unwrap_or(DEFAULT_PINCH_CONTAIN_THRESHOLD),
            ),
            panel_closed_offset,
            content_fit: config.content_fit.unwrap_or_default().into(),
        }
    }
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!(
                "Ignoring invalid overlay config at {}: {err}",
                path.display()
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
