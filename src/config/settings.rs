//! Dashboard configuration sections
//!
//! The configuration file is TOML with three optional tables:
//!
//! ```toml
//! [data]
//! indicators = "tfr_dataset.csv"
//! geometry = "naturalearth_lowres.geojson"
//!
//! [ui]
//! window_width = 1280.0
//! window_height = 800.0
//! map_height = 420.0
//! point_radius = 4.5
//!
//! [logging]
//! file = false
//! ```
//!
//! Every key has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default indicator CSV file name
pub const DEFAULT_INDICATOR_FILE: &str = "tfr_dataset.csv";

/// Default boundary GeoJSON file name
pub const DEFAULT_GEOMETRY_FILE: &str = "naturalearth_lowres.geojson";

/// Locations of the two dataset sources
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Indicator CSV (World Bank export)
    #[serde(default = "default_indicator_path")]
    pub indicators: PathBuf,

    /// Country boundaries as a GeoJSON FeatureCollection
    #[serde(default = "default_geometry_path")]
    pub geometry: PathBuf,
}

fn default_indicator_path() -> PathBuf {
    PathBuf::from(DEFAULT_INDICATOR_FILE)
}

fn default_geometry_path() -> PathBuf {
    PathBuf::from(DEFAULT_GEOMETRY_FILE)
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            indicators: default_indicator_path(),
            geometry: default_geometry_path(),
        }
    }
}

impl DataConfig {
    /// Resolve relative paths against the directory holding the config file
    pub fn resolve_relative_to(&mut self, base: &Path) {
        if self.indicators.is_relative() {
            self.indicators = base.join(&self.indicators);
        }
        if self.geometry.is_relative() {
            self.geometry = base.join(&self.geometry);
        }
    }
}

/// Window and chart sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Height of the choropleth plot in points
    #[serde(default = "default_map_height")]
    pub map_height: f32,

    /// Scatter marker radius in the linked panel
    #[serde(default = "default_point_radius")]
    pub point_radius: f32,
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    800.0
}

fn default_map_height() -> f32 {
    420.0
}

fn default_point_radius() -> f32 {
    4.5
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            map_height: default_map_height(),
            point_radius: default_point_radius(),
        }
    }
}

/// Logging outputs beyond stderr
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write a daily log file into the app data directory
    #[serde(default)]
    pub file: bool,
}
