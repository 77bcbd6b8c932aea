//! Colors and stroke settings for drawing annotations.

use framemark_core::ShapeKind;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS hex notation without alpha, e.g. `#ff0000`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Visual style of the annotation overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub rectangle_color: SerializableColor,
    pub square_color: SerializableColor,
    pub polygon_color: SerializableColor,
    /// Stroke of the shape currently being dragged or resized.
    pub active_color: SerializableColor,
    /// Stroke of in-progress geometry.
    pub preview_color: SerializableColor,
    /// Fill of vertex handles.
    pub handle_color: SerializableColor,
    pub stroke_width: f64,
    pub handle_radius: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            rectangle_color: SerializableColor::new(255, 0, 0, 255),
            square_color: SerializableColor::new(0, 128, 255, 255),
            polygon_color: SerializableColor::new(0, 200, 0, 255),
            active_color: SerializableColor::new(255, 200, 0, 255),
            preview_color: SerializableColor::new(255, 255, 255, 200),
            handle_color: SerializableColor::new(255, 255, 255, 255),
            stroke_width: 2.0,
            handle_radius: 4.0,
        }
    }
}

impl RenderStyle {
    /// Stroke color for a committed shape of `kind`.
    pub fn stroke_for(&self, kind: ShapeKind) -> Color {
        match kind {
            ShapeKind::Rectangle => self.rectangle_color.into(),
            ShapeKind::Square => self.square_color.into(),
            ShapeKind::Polygon => self.polygon_color.into(),
        }
    }
}
