//! Editor configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default distance within which a polygon vertex is grabbed or the first
/// staged vertex closes a polygon.
pub const DEFAULT_VERTEX_SNAP_RADIUS: f64 = 8.0;
/// Default distance within which a box corner is grabbed for resizing.
pub const DEFAULT_CORNER_SNAP_RADIUS: f64 = 10.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Snap radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),
}

/// Tunable behavior of the shape editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Snap radius for polygon vertices, in canvas pixels.
    pub vertex_snap_radius: f64,
    /// Snap radius for box corners, in canvas pixels.
    pub corner_snap_radius: f64,
    /// Drop zero-area boxes instead of committing them.
    pub reject_degenerate: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            vertex_snap_radius: DEFAULT_VERTEX_SNAP_RADIUS,
            corner_snap_radius: DEFAULT_CORNER_SNAP_RADIUS,
            reject_degenerate: false,
        }
    }
}

impl EditorConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded editor config from {}", path.as_ref().display());
        Self::from_json(&text)
    }

    /// Check that both snap radii are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for radius in [self.vertex_snap_radius, self.corner_snap_radius] {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ConfigError::InvalidRadius(radius));
            }
        }
        Ok(())
    }
}
