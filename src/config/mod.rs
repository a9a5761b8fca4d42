// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[toast]` - Toast lifetime and size
//! - `[popup]` - Custom popup size
//! - `[banner]` - Slide-in banner animation and placement
//! - `[tray]` - Tray balloon lifetime and tooltip
//! - `[screen]` - Screen size used until the monitor has been measured
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `TOASTBOX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toastbox::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("banner dwells for {} ms", config.banner.dwell_ms);
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
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
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Toast presenter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    /// Time before the toast window is destroyed (milliseconds).
    pub duration_ms: u64,
    pub width: u32,
    pub height: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            width: DEFAULT_TOAST_WIDTH,
            height: DEFAULT_TOAST_HEIGHT,
        }
    }
}

impl ToastConfig {
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.max(1))
    }
}

/// Custom popup settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PopupConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_POPUP_WIDTH,
            height: DEFAULT_POPUP_HEIGHT,
        }
    }
}

/// Slide-in banner settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BannerConfig {
    /// Pixels covered per animation tick.
    pub step_px: i32,
    /// Animation tick interval (milliseconds).
    pub tick_ms: u64,
    /// Resting time between slide-in and slide-out (milliseconds).
    pub dwell_ms: u64,
    /// Gap between the resting banner and the right screen edge.
    pub margin_px: i32,
    /// Fixed vertical position.
    pub top_px: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            step_px: DEFAULT_BANNER_STEP_PX,
            tick_ms: DEFAULT_BANNER_TICK_MS,
            dwell_ms: DEFAULT_BANNER_DWELL_MS,
            margin_px: DEFAULT_BANNER_MARGIN_PX,
            top_px: DEFAULT_BANNER_TOP_PX,
            width: DEFAULT_BANNER_WIDTH,
            height: DEFAULT_BANNER_HEIGHT,
        }
    }
}

/// Tray presenter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrayConfig {
    /// Delay before the tray icon is unregistered (milliseconds).
    pub lifetime_ms: u64,
    pub tooltip: String,
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: DEFAULT_TRAY_LIFETIME_MS,
            tooltip: DEFAULT_TRAY_TOOLTIP.to_string(),
        }
    }
}

impl TrayConfig {
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.lifetime_ms.max(1))
    }
}

/// Screen size assumed until the monitor reports its real size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScreenConfig {
    pub fallback_width: u32,
    pub fallback_height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            fallback_width: DEFAULT_SCREEN_WIDTH,
            fallback_height: DEFAULT_SCREEN_HEIGHT,
        }
    }
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
    pub toast: ToastConfig,

    #[serde(default)]
    pub popup: PopupConfig,

    #[serde(default)]
    pub banner: BannerConfig,

    #[serde(default)]
    pub tray: TrayConfig,

    #[serde(default)]
    pub screen: ScreenConfig,
}

impl Config {
    /// Clamps values that would make a presenter misbehave.
    ///
    /// A zero step would freeze the banner forever, a zero tick would spin
    /// the event loop, and zero-sized windows are rejected by the platform.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.banner.step_px = self.banner.step_px.clamp(1, MAX_BANNER_STEP_PX);
        self.banner.tick_ms = self.banner.tick_ms.max(1);
        self.banner.margin_px = self.banner.margin_px.clamp(0, MAX_OFFSET_PX);
        self.banner.top_px = self.banner.top_px.clamp(0, MAX_OFFSET_PX);
        self.banner.width = self.banner.width.clamp(1, MAX_SURFACE_PX);
        self.banner.height = self.banner.height.clamp(1, MAX_SURFACE_PX);
        self.toast.width = self.toast.width.clamp(1, MAX_SURFACE_PX);
        self.toast.height = self.toast.height.clamp(1, MAX_SURFACE_PX);
        self.popup.width = self.popup.width.clamp(1, MAX_SURFACE_PX);
        self.popup.height = self.popup.height.clamp(1, MAX_SURFACE_PX);
        self.screen.fallback_width = self.screen.fallback_width.clamp(1, MAX_SURFACE_PX);
        self.screen.fallback_height = self.screen.fallback_height.clamp(1, MAX_SURFACE_PX);
        self
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
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
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config.sanitized(), None),
                Err(err) => {
                    log::warn!("ignoring {}: {}", path.display(), err);
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
