// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read once at startup
//! from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[navigation]` - Page-turn gesture settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `EHON_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! The viewer never writes this file; it only reads preferences.
//!
//! # Examples
//!
//! ```no_run
//! use ehon::config;
//!
//! let (config, warning) = config::load();
//! if let Some(err) = warning {
//!     eprintln!("using defaults: {err}");
//! }
//! println!("threshold = {}", config.navigation.swipe_threshold());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "ja", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Page-turn gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Horizontal travel in logical pixels needed for a swipe to turn the page.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
        }
    }
}

impl NavigationConfig {
    /// Effective swipe threshold, clamped so a config file cannot make every
    /// tap a page turn or make swiping impossible.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        let raw = self.swipe_threshold.unwrap_or(DEFAULT_SWIPE_THRESHOLD);
        if raw.is_finite() {
            raw.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
        } else {
            DEFAULT_SWIPE_THRESHOLD
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

    /// Page-turn gesture settings.
    #[serde(default)]
    pub navigation: NavigationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns the config together with the error that forced a fallback to
/// defaults, if any. A missing file is not an error.
pub fn load() -> (Config, Option<Error>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => return (Config::default(), Some(err)),
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
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("failed to write config");
        path
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(
            config.navigation.swipe_threshold,
            Some(DEFAULT_SWIPE_THRESHOLD)
        );
    }

    #[test]
    fn load_from_path_reads_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(
            temp_dir.path(),
            "[general]\nlanguage = \"en-US\"\ntheme_mode = \"Dark\"\n\n[navigation]\nswipe_threshold = 80.0\n",
        );

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.navigation.swipe_threshold(), 80.0);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "[general]\nlanguage = \"ja\"\n");

        let loaded = load_from_path(&path).expect("failed to load config");
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(loaded.navigation, NavigationConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "not = valid = toml");

        match load_from_path(&path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "[general]\ntheme_mode = \"sepia\"\n");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_invalid_file_reports_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_config(temp_dir.path(), "[navigation]\nswipe_threshold = \"far\"\n");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(matches!(warning, Some(Error::Config(_))));
    }

    #[test]
    fn swipe_threshold_is_clamped() {
        let low = NavigationConfig {
            swipe_threshold: Some(1.0),
        };
        let high = NavigationConfig {
            swipe_threshold: Some(10_000.0),
        };
        let nan = NavigationConfig {
            swipe_threshold: Some(f32::NAN),
        };
        let unset = NavigationConfig {
            swipe_threshold: None,
        };

        assert_eq!(low.swipe_threshold(), MIN_SWIPE_THRESHOLD);
        assert_eq!(high.swipe_threshold(), MAX_SWIPE_THRESHOLD);
        assert_eq!(nan.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(unset.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD);
    }
}
