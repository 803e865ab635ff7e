// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Toast display duration and transition timing
//!
//! # Examples
//!
//! ```no_run
//! use dashboard_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Keep toasts on screen longer
//! config.notifications.default_duration_ms = Some(8000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::Timing;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Toast timing settings, all in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Display time used when a caller does not pass a duration.
    /// `0` makes such toasts persistent.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub default_duration_ms: Option<u64>,

    /// Deferral before the entry transition starts.
    #[serde(
        default = "default_entry_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry_delay_ms: Option<u64>,

    /// Exit transition length and removal deadline.
    #[serde(
        default = "default_exit_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_transition_ms: Option<u64>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            entry_delay_ms: default_entry_delay_ms(),
            exit_transition_ms: default_exit_transition_ms(),
        }
    }
}

impl NotificationConfig {
    /// Builds presenter timing from these settings, clamping each value
    /// into its supported range.
    #[must_use]
    pub fn timing(&self) -> Timing {
        let duration_ms = self
            .default_duration_ms
            .unwrap_or(DEFAULT_DURATION_MS)
            .min(MAX_DURATION_MS);
        let entry_ms = self
            .entry_delay_ms
            .unwrap_or(DEFAULT_ENTRY_DELAY_MS)
            .min(MAX_ENTRY_DELAY_MS);
        let exit_ms = self
            .exit_transition_ms
            .unwrap_or(DEFAULT_EXIT_TRANSITION_MS)
            .clamp(MIN_EXIT_TRANSITION_MS, MAX_EXIT_TRANSITION_MS);

        Timing {
            default_duration: crate::ui::notifications::DisplayDuration::from_millis(duration_ms),
            entry_delay: Duration::from_millis(entry_ms),
            exit_transition: Duration::from_millis(exit_ms),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast timing settings.
    #[serde(default)]
    pub notifications: NotificationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_entry_delay_ms() -> Option<u64> {
    Some(DEFAULT_ENTRY_DELAY_MS)
}

fn default_exit_transition_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_TRANSITION_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::DisplayDuration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            notifications: NotificationConfig {
                default_duration_ms: Some(2500),
                entry_delay_ms: Some(50),
                exit_transition_ms: Some(400),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[notifications\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_uses_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.notifications, NotificationConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn timing_clamps_out_of_range_values() {
        let section = NotificationConfig {
            default_duration_ms: Some(u64::MAX),
            entry_delay_ms: Some(60_000),
            exit_transition_ms: Some(0),
        };
        let timing = section.timing();
        assert_eq!(
            timing.default_duration,
            DisplayDuration::For(Duration::from_millis(MAX_DURATION_MS))
        );
        assert_eq!(timing.entry_delay, Duration::from_millis(MAX_ENTRY_DELAY_MS));
        assert_eq!(
            timing.exit_transition,
            Duration::from_millis(MIN_EXIT_TRANSITION_MS)
        );
    }

    #[test]
    fn zero_default_duration_means_persistent() {
        let section = NotificationConfig {
            default_duration_ms: Some(0),
            ..NotificationConfig::default()
        };
        assert_eq!(section.timing().default_duration, DisplayDuration::Persistent);
    }

    #[test]
    fn default_timing_matches_constants() {
        let timing = NotificationConfig::default().timing();
        assert_eq!(timing, Timing::default());
    }
}
