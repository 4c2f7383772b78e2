// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[navigation]` - Language switch settle window
//! - `[diagnostics]` - Diagnostics ring buffer capacity
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FOLIO_INTL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Migration
//!
//! Old flat config files (pre-0.2.0) are automatically migrated to the new
//! sectioned format when loaded. The next save will write the new format.
//!
//! # Examples
//!
//! ```no_run
//! use folio_intl::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("en".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Preferred language code (e.g., "vi", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme mode (light, dark, or system).
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

/// Navigation and language switch settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Settle window for a language switch, in milliseconds.
    #[serde(
        default = "default_switch_debounce_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub switch_debounce_ms: Option<u64>,
}

impl NavigationConfig {
    /// Effective settle window, clamped to the supported range.
    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.switch_debounce_ms
            .unwrap_or(DEFAULT_SWITCH_DEBOUNCE_MS)
            .clamp(MIN_SWITCH_DEBOUNCE_MS, MAX_SWITCH_DEBOUNCE_MS)
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            switch_debounce_ms: default_switch_debounce_ms(),
        }
    }
}

/// Diagnostics collection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Capacity of the in-memory diagnostics ring buffer.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl DiagnosticsConfig {
    /// Effective buffer capacity, clamped to the supported range.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer_capacity
            .unwrap_or(DEFAULT_DIAGNOSTICS_CAPACITY)
            .clamp(MIN_DIAGNOSTICS_CAPACITY, MAX_DIAGNOSTICS_CAPACITY)
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
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

    /// Navigation and language switch settings.
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Diagnostics collection settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Legacy Config (for migration from flat format)
// =============================================================================

/// Legacy flat configuration format (pre-0.2.0).
/// Used for automatic migration of old config files.
#[derive(Debug, Deserialize)]
struct LegacyConfig {
    language: Option<String>,
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    theme_mode: ThemeMode,
    #[serde(default)]
    switch_debounce_ms: Option<u64>,
    #[serde(default)]
    diagnostics_capacity: Option<usize>,
}

impl From<LegacyConfig> for Config {
    fn from(legacy: LegacyConfig) -> Self {
        Config {
            general: GeneralConfig {
                language: legacy.language,
                theme_mode: legacy.theme_mode,
            },
            navigation: NavigationConfig {
                switch_debounce_ms: legacy.switch_debounce_ms.or(default_switch_debounce_ms()),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: legacy.diagnostics_capacity.or(default_buffer_capacity()),
            },
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_switch_debounce_ms() -> Option<u64> {
    Some(DEFAULT_SWITCH_DEBOUNCE_MS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_CAPACITY)
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
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a translation key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (Config::default(), Some("errors.config_load".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// Automatically migrates legacy flat format to new sectioned format.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;

    // Try parsing as new sectioned format first
    if let Ok(config) = toml::from_str::<Config>(&content) {
        // Check if this looks like a valid sectioned config
        // (has at least one section table)
        if content.contains("[general]")
            || content.contains("[navigation]")
            || content.contains("[diagnostics]")
        {
            return Ok(config);
        }
    }

    // Try parsing as legacy flat format
    if let Ok(legacy) = toml::from_str::<LegacyConfig>(&content) {
        return Ok(Config::from(legacy));
    }

    // If neither works, try new format again and let errors propagate
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
