//! Configuration module for the TFR dashboard
//!
//! This module handles:
//! - The dashboard configuration file (`dashboard.toml`): dataset paths, sizing, logging
//! - Application state persistence (UI preferences only)
//!
//! Chart selections and the scatter brush are never persisted; every launch
//! starts from the default views.
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/tfr-dashboard/`
//! - **macOS**: `~/Library/Application Support/tfr-dashboard/`
//! - **Windows**: `%APPDATA%\tfr-dashboard\`
//!
//! # Files
//!
//! - `app_state.json` - UI preferences
//! - `dashboard.toml` - Fallback configuration, used when the working
//!   directory has none
//! - `tfr-dashboard.log.*` - Daily log files (when enabled)

pub mod settings;

pub use settings::*;

use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "tfr-dashboard";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Configuration filename, looked up in the working directory first
pub const CONFIG_FILE: &str = "dashboard.toml";

/// Prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "tfr-dashboard.log";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        DashboardError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            DashboardError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== App State ====================

/// Persistent application state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            DashboardError::Config("Could not determine app state path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load app state from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DashboardError::Config(format!("Failed to read app state: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse app state: {}", e)))
    }

    /// Load app state, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app state, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(APP_STATE_FILE))
    }

    /// Save app state to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Serialization(format!("app state: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| DashboardError::Config(format!("Failed to write app state: {}", e)))
    }
}

/// UI preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Enable dark mode
    #[serde(default = "default_true")]
    pub dark_mode: bool,

    /// Font scale factor
    #[serde(default = "default_font_scale")]
    pub font_scale: f32,
}

fn default_true() -> bool {
    true
}

fn default_font_scale() -> f32 {
    1.0
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            font_scale: 1.0,
        }
    }
}

// ==================== Dashboard Config ====================

/// Dashboard configuration, read from `dashboard.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Dataset sources
    #[serde(default)]
    pub data: DataConfig,

    /// Window and chart sizing
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging outputs
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| DashboardError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Load a configuration file; relative dataset paths resolve against its directory
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::Config(format!("Failed to read configuration {:?}: {}", path, e))
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.data.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Find the configuration file: working directory first, then the app data directory
    pub fn locate() -> Option<PathBuf> {
        std::iter::once(PathBuf::from(CONFIG_FILE))
            .chain(app_data_dir().map(|dir| dir.join(CONFIG_FILE)))
            .find(|p| p.exists())
    }

    /// Load the located configuration, falling back to defaults
    ///
    /// A configuration file that exists but cannot be parsed is an error,
    /// so a typo never silently points the dashboard at the default files.
    pub fn load_or_default() -> Result<Self> {
        match Self::locate() {
            Some(path) => {
                tracing::info!("Using configuration {:?}", path);
                Self::load(&path)
            }
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DashboardError::Serialization(format!("configuration: {}", e)))
    }
}
