//! Polygon construction and vertex editing.

use kurbo::Point;

/// Minimum number of staged vertices before a polygon may be closed.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Whether a click at `point` closes the staged polygon.
pub fn is_closing_click(staged: &[Point], point: Point, snap_radius: f64) -> bool {
    match staged.first() {
        Some(first) if staged.len() >= MIN_POLYGON_VERTICES => {
            first.distance(point) <= snap_radius
        }
        _ => false,
    }
}

/// Turn staged vertices into a closed loop by repeating the first vertex.
pub fn close_polygon(mut staged: Vec<Point>) -> Vec<Point> {
    if let Some(first) = staged.first().copied() {
        staged.push(first);
    }
    staged
}

pub(crate) fn move_vertex(vertices: &mut [Point], index: usize, pointer: Point) {
    let len = vertices.len();
    if index >= len {
        return;
    }
    vertices[index] = pointer;
    let last = len - 1;
    if last > 0 {
        if index == 0 {
            vertices[last] = pointer;
        } else if index == last {
            vertices[0] = pointer;
        }
    }
}
