//! Mapping from device pointer positions to canvas pixel space.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Displayed and backing sizes of the drawing surface.
///
/// The backing size is the surface's own pixel resolution; the displayed
/// size is what the host lays it out at. All stored geometry lives in
/// backing (canvas) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMetrics {
    /// Size the surface is displayed at, in device units.
    pub displayed: Size,
    /// Backing resolution of the surface, in canvas pixels.
    pub backing: Size,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self::unscaled(Size::new(640.0, 480.0))
    }
}

impl SurfaceMetrics {
    /// Create surface metrics.
    pub fn new(displayed: Size, backing: Size) -> Self {
        Self { displayed, backing }
    }

    /// A surface displayed at its backing resolution.
    pub fn unscaled(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Per-axis scale factors from device to canvas space.
    pub fn scale(&self) -> (f64, f64) {
        let axis = |backing: f64, displayed: f64| {
            if displayed > 0.0 { backing / displayed } else { 1.0 }
        };
        (
            axis(self.backing.width, self.displayed.width),
            axis(self.backing.height, self.displayed.height),
        )
    }

    /// Convert a device position (relative to the surface's top-left) to
    /// canvas space.
    pub fn to_canvas(&self, device: Point) -> Point {
        let (sx, sy) = self.scale();
        Point::new(device.x * sx, device.y * sy)
    }

    /// Full canvas bounds.
    pub fn canvas_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.backing)
    }
}
