//! Draw mode selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The draw mode chosen by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// No drawing; pointer presses only edit existing shapes.
    #[default]
    None,
    Rectangle,
    Square,
    Polygon,
}

impl DrawMode {
    /// Whether pointer presses on empty canvas start a new shape.
    pub fn is_drawing(self) -> bool {
        self != DrawMode::None
    }

    /// Toolbar name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            DrawMode::None => "none",
            DrawMode::Rectangle => "rectangle",
            DrawMode::Square => "square",
            DrawMode::Polygon => "polygon",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown toolbar mode string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown draw mode: {0}")]
pub struct UnknownDrawMode(pub String);

impl FromStr for DrawMode {
    type Err = UnknownDrawMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(DrawMode::None),
            "rectangle" => Ok(DrawMode::Rectangle),
            "square" => Ok(DrawMode::Square),
            "polygon" => Ok(DrawMode::Polygon),
            other => Err(UnknownDrawMode(other.to_string())),
        }
    }
}
