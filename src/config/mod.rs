// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Manifest location and masonry column count
//! - `[carousel]` - Auto-play toggle and interval
//! - `[effects]` - Particle backdrop toggle, preset and density
//! - `[share]` - Optional external share command
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line or `ICED_SHOWCASE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_showcase::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.carousel.autoplay = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::effects::particles::{ParticleConfig, Preset};
use crate::error::{Error, Result};
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
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Media manifest to show when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// Column count used on wide layouts.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest: None,
            columns: default_columns(),
        }
    }
}

impl GalleryConfig {
    /// Column count clamped to the supported range.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
            .unwrap_or(DEFAULT_GALLERY_COLUMNS)
            .clamp(MIN_GALLERY_COLUMNS, MAX_GALLERY_COLUMNS)
    }
}

/// Carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Whether the carousel advances on its own.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Auto-play interval in milliseconds.
    #[serde(
        default = "default_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            interval_ms: default_interval_ms(),
        }
    }
}

impl CarouselConfig {
    /// Auto-play interval clamped to the supported range.
    #[must_use]
    pub fn interval(&self) -> Duration {
        let ms = self
            .interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
            .clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

/// Particle backdrop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectsConfig {
    /// Whether the particle backdrop is shown.
    #[serde(default = "default_particles", skip_serializing_if = "Option::is_none")]
    pub particles: Option<bool>,

    /// Which simulation tuning to use.
    #[serde(default)]
    pub preset: Preset,

    /// Number of particles; overrides the preset's count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particle_count: Option<usize>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particles: default_particles(),
            preset: Preset::default(),
            particle_count: None,
        }
    }
}

impl EffectsConfig {
    /// Simulation tuning for the configured preset and count.
    #[must_use]
    pub fn particle_config(&self) -> ParticleConfig {
        let config = ParticleConfig::from_preset(self.preset);
        match self.particle_count {
            Some(count) => config.with_count(count),
            None => config,
        }
    }
}

/// Share settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShareConfig {
    /// External program invoked as `command <title> <text> <url>`.
    ///
    /// The value is split on whitespace without shell quoting, so the program
    /// path and its fixed arguments must not contain spaces. When absent,
    /// sharing copies the link to the clipboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub effects: EffectsConfig,

    #[serde(default)]
    pub share: ShareConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_columns() -> Option<usize> {
    Some(DEFAULT_GALLERY_COLUMNS)
}

fn default_autoplay() -> Option<bool> {
    Some(true)
}

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
}

fn default_particles() -> Option<bool> {
    Some(true)
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

/// Returns the manifest path used when neither the CLI nor the config names one.
#[must_use]
pub fn default_manifest_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(DEFAULT_MANIFEST_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
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
    if let Some(path) = get_config_path_with_override(base_dir) {
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                manifest: Some(PathBuf::from("/srv/chapter/media.toml")),
                columns: Some(4),
            },
            carousel: CarouselConfig {
                autoplay: Some(false),
                interval_ms: Some(8000),
            },
            effects: EffectsConfig {
                particles: Some(true),
                preset: Preset::Network,
                particle_count: Some(60),
            },
            share: ShareConfig {
                command: Some("share-helper".to_string()),
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

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[carousel]\nautoplay = false\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.carousel.autoplay, Some(false));
        assert_eq!(loaded.carousel.interval_ms, Some(DEFAULT_AUTOPLAY_INTERVAL_MS));
        assert_eq!(loaded.gallery.columns(), DEFAULT_GALLERY_COLUMNS);
        assert_eq!(loaded.effects.particles, Some(true));
        assert_eq!(loaded.effects.preset, Preset::Field);
    }

    #[test]
    fn load_with_override_reports_warning_on_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_writes_settings_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.carousel.autoplay = Some(false);

        save_with_override(&config, Some(temp_dir.path().to_path_buf()))
            .expect("failed to save config");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.carousel.autoplay, Some(false));
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn particle_config_follows_preset_and_caps_count() {
        let effects = EffectsConfig {
            particles: Some(true),
            preset: Preset::Network,
            particle_count: Some(10_000),
        };
        let config = effects.particle_config();
        assert!(config.attraction.is_none());
        assert_eq!(config.count, MAX_PARTICLE_COUNT);

        assert_eq!(
            EffectsConfig::default().particle_config().count,
            DEFAULT_PARTICLE_COUNT
        );
    }

    #[test]
    fn out_of_range_values_are_clamped_on_read() {
        let gallery = GalleryConfig {
            manifest: None,
            columns: Some(42),
        };
        assert_eq!(gallery.columns(), MAX_GALLERY_COLUMNS);

        let carousel = CarouselConfig {
            autoplay: Some(true),
            interval_ms: Some(10),
        };
        assert_eq!(
            carousel.interval(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );
    }
}
