use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_WINDOW_SIZE, DEFAULT_ZOOM_MIN_EXTENT};
use crate::error::{InterditError, Result};
use crate::slice::Orientation;
use crate::sync::SyncPolicy;

/// Viewer-group settings. Every field has a default, so partial files load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Sync flags enabled when the group opens.
    pub sync: SyncPolicy,
    /// Initial orientation of every viewer.
    pub orientation: Orientation,
    /// Zoom selections must be larger than this (image pixels) on both axes.
    pub zoom_min_extent: f32,
    /// Initial window size in logical points.
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            sync: SyncPolicy::default(),
            orientation: Orientation::Axial,
            zoom_min_extent: DEFAULT_ZOOM_MIN_EXTENT,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| InterditError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| InterditError::Config(e.to_string()))
    }
}
