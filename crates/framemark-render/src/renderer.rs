//! Painter trait abstraction and the redraw step.

use crate::draw_list::{DrawCommand, DrawList};
use kurbo::{BezPath, Point, Size};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Failed to format output: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// A 2D drawing surface that can paint annotation overlays.
///
/// Implementations wrap a canvas context, a GPU scene builder or a
/// vector document.
pub trait Painter {
    /// Start a new frame of the given canvas size.
    fn clear(&mut self, size: Size);

    /// Stroke a path outline.
    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
}

/// Paint `list` onto `painter`.
///
/// A missing painter (surface not mounted yet, or already torn down) skips
/// the frame. Returns whether anything was painted.
pub fn render_frame(painter: Option<&mut dyn Painter>, list: &DrawList) -> bool {
    let Some(painter) = painter else {
        log::debug!("No drawing surface, skipping redraw");
        return false;
    };

    painter.clear(list.size);
    for command in &list.commands {
        match command {
            DrawCommand::Shape {
                path,
                stroke,
                width,
                ..
            }
            | DrawCommand::Preview {
                path,
                stroke,
                width,
            } => painter.stroke_path(path, *stroke, *width),
            DrawCommand::RubberBand {
                line,
                stroke,
                width,
            } => {
                let mut path = BezPath::new();
                path.move_to(line.p0);
                path.line_to(line.p1);
                painter.stroke_path(&path, *stroke, *width);
            }
            DrawCommand::Handle {
                center,
                radius,
                fill,
            } => painter.fill_circle(*center, *radius, *fill),
        }
    }
    true
}
