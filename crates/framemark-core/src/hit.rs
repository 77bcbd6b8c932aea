//! Hit-testing cascade for pointer presses.

use crate::config::EditorConfig;
use crate::shapes::{Corner, Shape, ShapeKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A polygon vertex.
    Vertex {
        shape_index: usize,
        vertex_index: usize,
    },
    /// A rectangle or square corner.
    Corner { index: usize, corner: Corner },
    /// Inside a shape's bounding box.
    Body { index: usize },
}

/// Cursor the host should show for a hover position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorHint {
    Default,
    Crosshair,
    Move,
    Resize(Corner),
    Grab,
}

/// Run the cascade once and return the first match.
///
/// Priority: polygon vertices, then box corners, then bounding-box bodies.
/// Each tier scans from the topmost (last) shape down, so a vertex on a
/// lower shape still beats the body of a higher one.
pub fn hit_test(shapes: &[Shape], point: Point, config: &EditorConfig) -> Option<HitTarget> {
    hit_vertex(shapes, point, config.vertex_snap_radius)
        .or_else(|| hit_corner(shapes, point, config.corner_snap_radius))
        .or_else(|| hit_body(shapes, point))
}

fn hit_vertex(shapes: &[Shape], point: Point, radius: f64) -> Option<HitTarget> {
    shapes
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, s)| s.kind == ShapeKind::Polygon)
        .find_map(|(shape_index, shape)| {
            shape
                .vertices()
                .iter()
                .position(|v| v.distance(point) <= radius)
                .map(|vertex_index| HitTarget::Vertex {
                    shape_index,
                    vertex_index,
                })
        })
}

fn hit_corner(shapes: &[Shape], point: Point, radius: f64) -> Option<HitTarget> {
    shapes
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, shape)| {
            shape
                .corners()
                .into_iter()
                .find(|(_, p)| p.distance(point) <= radius)
                .map(|(corner, _)| HitTarget::Corner { index, corner })
        })
}

fn hit_body(shapes: &[Shape], point: Point) -> Option<HitTarget> {
    shapes
        .iter()
        .rposition(|s| s.contains(point))
        .map(|index| HitTarget::Body { index })
}

impl HitTarget {
    /// Cursor for hovering over this target.
    pub fn cursor(self) -> CursorHint {
        match self {
            HitTarget::Vertex { .. } => CursorHint::Grab,
            HitTarget::Corner { corner, .. } => CursorHint::Resize(corner),
            HitTarget::Body { .. } => CursorHint::Move,
        }
    }
}
