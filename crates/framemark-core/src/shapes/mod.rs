//! Shape definitions for frame annotations.
//!
//! Every shape is stored as a closed loop of vertices in canvas space.
//! Rectangles and squares always carry five vertices ordered top-left,
//! top-right, bottom-right, bottom-left, top-left. Polygons carry at least
//! four vertices with the first repeated at the end.

mod polygon;
mod rectangle;

pub use polygon::{close_polygon, is_closing_click};
pub use rectangle::{Corner, box_vertices, square_end};

use kurbo::{BezPath, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Number of vertices in a closed axis-aligned box.
pub const BOX_VERTEX_COUNT: usize = 5;

/// Kind of annotation shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Square,
    Polygon,
}

impl ShapeKind {
    /// Whether this kind is stored as a five-vertex axis-aligned box.
    pub fn is_box(self) -> bool {
        matches!(self, ShapeKind::Rectangle | ShapeKind::Square)
    }
}

/// A finalized annotation shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub(crate) id: ShapeId,
    /// Kind of shape.
    pub kind: ShapeKind,
    vertices: Vec<Point>,
}

impl Shape {
    /// Create a rectangle spanning from `anchor` to `end` without normalizing
    /// the drag direction.
    pub fn rectangle(anchor: Point, end: Point) -> Self {
        Self::with_vertices(ShapeKind::Rectangle, box_vertices(anchor, end).to_vec())
    }

    /// Create a square from a drag. The side is the larger of |dx| and |dy|,
    /// signed by the drag direction on each axis.
    pub fn square(anchor: Point, release: Point) -> Self {
        let end = square_end(anchor, release);
        Self::with_vertices(ShapeKind::Square, box_vertices(anchor, end).to_vec())
    }

    /// Create a rectangle covering `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self::rectangle(Point::new(rect.x0, rect.y0), Point::new(rect.x1, rect.y1))
    }

    /// Create a polygon from an already closed vertex loop.
    pub fn polygon(vertices: Vec<Point>) -> Self {
        Self::with_vertices(ShapeKind::Polygon, vertices)
    }

    fn with_vertices(kind: ShapeKind, vertices: Vec<Point>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            vertices,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Vertices in storage order, closing vertex included.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Axis-aligned bounding box over all vertices.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::ZERO;
        };
        self.vertices
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |acc, p| {
                acc.union_pt(*p)
            })
    }

    /// Inclusive bounding-box containment.
    pub fn contains(&self, point: Point) -> bool {
        if self.vertices.is_empty() {
            return false;
        }
        let b = self.bounds();
        point.x >= b.x0 && point.x <= b.x1 && point.y >= b.y0 && point.y <= b.y1
    }

    /// Translate every vertex by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Move the shape so that its first vertex sits at `pointer - grab_offset`.
    ///
    /// The delta is derived from the current first vertex on every call, so a
    /// sequence of moves never accumulates drift.
    pub fn drag_to(&mut self, pointer: Point, grab_offset: Vec2) {
        let Some(first) = self.vertices.first().copied() else {
            return;
        };
        let delta = (pointer - grab_offset) - first;
        self.translate(delta);
    }

    /// Corner handles of a box shape. Empty for polygons.
    pub fn corners(&self) -> Vec<(Corner, Point)> {
        if !self.kind.is_box() || self.vertices.len() != BOX_VERTEX_COUNT {
            return Vec::new();
        }
        Corner::ALL
            .iter()
            .map(|&corner| (corner, self.vertices[corner.index()]))
            .collect()
    }

    /// Rebuild a box from the corner opposite `corner` and the new position of
    /// `corner`. Does nothing for polygons.
    pub fn resize_corner(&mut self, corner: Corner, pointer: Point) {
        if !self.kind.is_box() || self.vertices.len() != BOX_VERTEX_COUNT {
            return;
        }
        let mut v = [Point::ZERO; BOX_VERTEX_COUNT];
        v.copy_from_slice(&self.vertices);
        self.vertices = rectangle::resize(&v, corner, pointer).to_vec();
    }

    /// Overwrite a single vertex. For polygons, moving the first or last
    /// vertex moves its twin too so the loop stays closed.
    pub fn move_vertex(&mut self, index: usize, pointer: Point) {
        polygon::move_vertex(&mut self.vertices, index, pointer);
    }

    /// Whether the shape encloses no area worth keeping: a box with zero
    /// width or height, or a polygon with fewer than three distinct vertices.
    pub fn is_degenerate(&self) -> bool {
        if self.kind.is_box() {
            let b = self.bounds();
            return b.width() <= f64::EPSILON || b.height() <= f64::EPSILON;
        }
        let open = &self.vertices[..self.vertices.len().saturating_sub(1)];
        let mut distinct: Vec<Point> = Vec::with_capacity(open.len());
        for p in open {
            if !distinct.iter().any(|d| d.distance(*p) <= f64::EPSILON) {
                distinct.push(*p);
            }
        }
        distinct.len() < 3
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        polyline_path(&self.vertices, true)
    }
}

/// Build a path through `points`, optionally closed.
pub fn polyline_path(points: &[Point], closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        if closed {
            path.close_path();
        }
    }
    path
}
