//! Axis-aligned box geometry shared by rectangles and squares.

use super::BOX_VERTEX_COUNT;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Named corner of a box, identified by its position in the vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// All corners in vertex order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Index of this corner in a box's vertex list.
    pub fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    /// The corner diagonally across, which stays fixed during a resize.
    pub fn opposite(self) -> Self {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomRight => Corner::TopLeft,
            Corner::BottomLeft => Corner::TopRight,
        }
    }
}

/// Closed five-vertex loop from `anchor` to `end`.
pub fn box_vertices(anchor: Point, end: Point) -> [Point; BOX_VERTEX_COUNT] {
    [
        anchor,
        Point::new(end.x, anchor.y),
        end,
        Point::new(anchor.x, end.y),
        anchor,
    ]
}

/// Far corner of a square dragged from `anchor` to `release`.
///
/// A zero delta on an axis is treated as positive.
pub fn square_end(anchor: Point, release: Point) -> Point {
    let dx = release.x - anchor.x;
    let dy = release.y - anchor.y;
    let side = dx.abs().max(dy.abs());
    let signed = |d: f64| if d < 0.0 { -side } else { side };
    Point::new(anchor.x + signed(dx), anchor.y + signed(dy))
}

/// Rebuild a box after `corner` moved to `pointer`.
///
/// The moved corner takes the pointer, its two neighbours each take one
/// coordinate from the pointer and one from the fixed opposite corner, and
/// the closing vertex mirrors vertex 0.
pub(crate) fn resize(
    v: &[Point; BOX_VERTEX_COUNT],
    corner: Corner,
    pointer: Point,
) -> [Point; BOX_VERTEX_COUNT] {
    let fixed = v[corner.opposite().index()];
    let (tl, tr, br, bl) = match corner {
        Corner::TopLeft => (
            pointer,
            Point::new(fixed.x, pointer.y),
            fixed,
            Point::new(pointer.x, fixed.y),
        ),
        Corner::TopRight => (
            Point::new(fixed.x, pointer.y),
            pointer,
            Point::new(pointer.x, fixed.y),
            fixed,
        ),
        Corner::BottomRight => (
            fixed,
            Point::new(pointer.x, fixed.y),
            pointer,
            Point::new(fixed.x, pointer.y),
        ),
        Corner::BottomLeft => (
            Point::new(pointer.x, fixed.y),
            fixed,
            Point::new(fixed.x, pointer.y),
            pointer,
        ),
    };
    [tl, tr, br, bl, tl]
}
