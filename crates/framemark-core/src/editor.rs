//! The shape editor: owns committed shapes and the pointer state machine.

use crate::config::EditorConfig;
use crate::hit::{CursorHint, HitTarget, hit_test};
use crate::interaction::InteractionState;
use crate::shapes::{Shape, ShapeId, close_polygon, is_closing_click};
use crate::submit::{SubmissionPayload, SubmissionSink, SubmitError, SubmitOutcome};
use crate::surface::SurfaceMetrics;
use crate::tools::DrawMode;
use kurbo::Point;

/// Message attached to the warning outcome of an empty submit.
pub const EMPTY_SUBMIT_MESSAGE: &str = "No shapes to submit";

/// Annotation editor for a single drawing surface.
///
/// All pointer handlers take device coordinates and map them to canvas
/// space through the current [`SurfaceMetrics`] before doing anything else.
#[derive(Debug, Clone)]
pub struct ShapeEditor {
    config: EditorConfig,
    surface: SurfaceMetrics,
    /// Committed shapes, back to front.
    shapes: Vec<Shape>,
    state: InteractionState,
    mode: DrawMode,
    /// Last pointer position in canvas space.
    hover: Option<Point>,
}

impl Default for ShapeEditor {
    fn default() -> Self {
        Self::new(SurfaceMetrics::default())
    }
}

impl ShapeEditor {
    /// Create an editor with the default configuration.
    pub fn new(surface: SurfaceMetrics) -> Self {
        Self::with_config(surface, EditorConfig::default())
    }

    /// Create an editor with a custom configuration.
    pub fn with_config(surface: SurfaceMetrics, config: EditorConfig) -> Self {
        Self {
            config,
            surface,
            shapes: Vec::new(),
            state: InteractionState::Idle,
            mode: DrawMode::None,
            hover: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn surface(&self) -> SurfaceMetrics {
        self.surface
    }

    /// Update the surface metrics after the host resized the surface.
    pub fn set_surface(&mut self, surface: SurfaceMetrics) {
        self.surface = surface;
    }

    /// Committed shapes in z-order (back to front).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get a shape by ID.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Shape ID to vertex list, in z-order.
    pub fn geometry(&self) -> impl Iterator<Item = (ShapeId, &[Point])> {
        self.shapes.iter().map(|s| (s.id(), s.vertices()))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Last known pointer position in canvas space.
    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    /// Select a draw mode. Any drawing session or staged polygon is dropped.
    /// Re-selecting the current mode keeps the session.
    pub fn set_mode(&mut self, mode: DrawMode) {
        if self.mode == mode {
            return;
        }
        log::debug!("Draw mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.transition(InteractionState::Idle);
    }

    /// Handle a pointer press. Never creates a shape.
    pub fn pointer_down(&mut self, device: Point) {
        let point = self.surface.to_canvas(device);
        self.hover = Some(point);

        // A polygon under construction owns presses until it is closed.
        if let InteractionState::BuildingPolygon { vertices } = &self.state {
            if !vertices.is_empty() {
                return;
            }
        }

        let next = match hit_test(&self.shapes, point, &self.config) {
            Some(HitTarget::Vertex {
                shape_index,
                vertex_index,
            }) => InteractionState::DraggingVertex {
                shape_index,
                vertex_index,
            },
            Some(HitTarget::Corner { index, corner }) => {
                InteractionState::ResizingShape { index, corner }
            }
            Some(HitTarget::Body { index }) => {
                let first = self.shapes[index].vertices()[0];
                InteractionState::DraggingShape {
                    index,
                    grab_offset: point - first,
                }
            }
            None => match self.mode {
                DrawMode::Rectangle | DrawMode::Square => InteractionState::Drawing {
                    mode: self.mode,
                    anchor: point,
                    live: point,
                },
                DrawMode::Polygon => InteractionState::BuildingPolygon {
                    vertices: Vec::new(),
                },
                DrawMode::None => InteractionState::Idle,
            },
        };
        self.transition(next);
    }

    /// Handle pointer motion.
    pub fn pointer_move(&mut self, device: Point) {
        let point = self.surface.to_canvas(device);
        self.hover = Some(point);

        match &mut self.state {
            InteractionState::DraggingVertex {
                shape_index,
                vertex_index,
            } => {
                if let Some(shape) = self.shapes.get_mut(*shape_index) {
                    shape.move_vertex(*vertex_index, point);
                }
            }
            InteractionState::Drawing { live, .. } => *live = point,
            InteractionState::DraggingShape { index, grab_offset } => {
                if let Some(shape) = self.shapes.get_mut(*index) {
                    shape.drag_to(point, *grab_offset);
                }
            }
            InteractionState::ResizingShape { index, corner } => {
                if let Some(shape) = self.shapes.get_mut(*index) {
                    shape.resize_corner(*corner, point);
                }
            }
            InteractionState::BuildingPolygon { .. } | InteractionState::Idle => {}
        }
    }

    /// Handle pointer release. Commits an active rectangle or square drawing
    /// and ends every gesture. A staged polygon is kept.
    pub fn pointer_up(&mut self, device: Point) {
        let point = self.surface.to_canvas(device);
        self.hover = Some(point);
        self.release(point);
    }

    /// Handle the pointer leaving the surface. Behaves exactly like
    /// [`pointer_up`](Self::pointer_up) so no gesture is left dangling.
    pub fn pointer_leave(&mut self, device: Point) {
        let point = self.surface.to_canvas(device);
        self.release(point);
        self.hover = None;
    }

    fn release(&mut self, point: Point) {
        match std::mem::take(&mut self.state) {
            InteractionState::Drawing { mode, anchor, .. } => {
                let shape = match mode {
                    DrawMode::Square => Shape::square(anchor, point),
                    _ => Shape::rectangle(anchor, point),
                };
                self.commit(shape);
            }
            building @ InteractionState::BuildingPolygon { .. } => {
                self.state = building;
                return;
            }
            _ => {}
        }
        log::debug!("Interaction -> idle");
    }

    /// Handle a click. Only polygon construction listens to clicks.
    ///
    /// In polygon mode an idle editor starts a new polygon at the click, so
    /// polygons can begin on top of existing shapes.
    pub fn click(&mut self, device: Point) {
        let point = self.surface.to_canvas(device);
        if self.mode != DrawMode::Polygon {
            return;
        }
        let vertices = match &mut self.state {
            InteractionState::BuildingPolygon { vertices } => vertices,
            InteractionState::Idle => {
                self.transition(InteractionState::BuildingPolygon {
                    vertices: vec![point],
                });
                return;
            }
            _ => return,
        };

        if is_closing_click(vertices, point, self.config.vertex_snap_radius) {
            let staged = std::mem::take(vertices);
            self.commit(Shape::polygon(close_polygon(staged)));
            self.state = InteractionState::Idle;
            self.mode = DrawMode::None;
            log::debug!("Polygon closed, draw mode reset to none");
        } else {
            vertices.push(point);
        }
    }

    /// Append a rectangle covering the whole canvas.
    pub fn select_whole_area(&mut self) {
        let shape = Shape::from_rect(self.surface.canvas_bounds());
        self.commit(shape);
    }

    /// Remove every committed shape.
    ///
    /// Drawing sessions and staged polygons are left alone; gestures that
    /// point at a removed shape end.
    pub fn clear(&mut self) {
        log::info!("Clearing {} shapes", self.shapes.len());
        self.shapes.clear();
        if self.state.target_index().is_some() {
            self.transition(InteractionState::Idle);
        }
    }

    /// Vertex lists of every committed shape, in z-order.
    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            shapes: self.shapes.iter().map(|s| s.vertices().to_vec()).collect(),
        }
    }

    /// Send every committed shape to `sink`. Reads state only.
    pub fn submit(&self, sink: &mut dyn SubmissionSink) -> Result<SubmitOutcome, SubmitError> {
        if self.shapes.is_empty() {
            log::warn!("Submit requested with no shapes");
            return Ok(SubmitOutcome::Warning {
                message: EMPTY_SUBMIT_MESSAGE.to_string(),
            });
        }
        let payload = self.payload();
        sink.submit(&payload)?;
        log::info!("Submitted {} shapes", payload.len());
        Ok(SubmitOutcome::Success {
            count: payload.len(),
        })
    }

    /// Cursor to show for a hover position, given the current state.
    pub fn cursor_hint(&self, device: Point) -> CursorHint {
        match &self.state {
            InteractionState::DraggingShape { .. } => CursorHint::Move,
            InteractionState::ResizingShape { corner, .. } => CursorHint::Resize(*corner),
            InteractionState::DraggingVertex { .. } => CursorHint::Grab,
            InteractionState::Drawing { .. } => CursorHint::Crosshair,
            InteractionState::BuildingPolygon { vertices } if !vertices.is_empty() => {
                CursorHint::Crosshair
            }
            _ => {
                let point = self.surface.to_canvas(device);
                match hit_test(&self.shapes, point, &self.config) {
                    Some(target) => target.cursor(),
                    None if self.mode.is_drawing() => CursorHint::Crosshair,
                    None => CursorHint::Default,
                }
            }
        }
    }

    fn commit(&mut self, shape: Shape) {
        if self.config.reject_degenerate && shape.is_degenerate() {
            log::debug!("Dropping degenerate {:?}", shape.kind);
            return;
        }
        log::info!(
            "Committed {:?} {} with {} vertices",
            shape.kind,
            shape.id(),
            shape.vertices().len()
        );
        self.shapes.push(shape);
    }

    fn transition(&mut self, next: InteractionState) {
        if self.state.name() != next.name() {
            log::debug!("Interaction {} -> {}", self.state.name(), next.name());
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Corner, ShapeKind};
    use crate::submit::MemorySink;
    use kurbo::Size;

    fn editor() -> ShapeEditor {
        ShapeEditor::new(SurfaceMetrics::unscaled(Size::new(640.0, 480.0)))
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn drag(editor: &mut ShapeEditor, from: Point, to: Point) {
        editor.pointer_down(from);
        editor.pointer_move(to);
        editor.pointer_up(to);
    }

    fn draw_triangle(editor: &mut ShapeEditor) {
        editor.set_mode(DrawMode::Polygon);
        for pt in [p(0.0, 0.0), p(50.0, 0.0), p(50.0, 50.0), p(3.0, 3.0)] {
            editor.pointer_down(pt);
            editor.pointer_up(pt);
            editor.click(pt);
        }
    }

    fn is_axis_aligned_box(v: &[Point]) -> bool {
        v.len() == 5
            && v[0] == v[4]
            && v[0].y == v[1].y
            && v[1].x == v[2].x
            && v[2].y == v[3].y
            && v[3].x == v[0].x
    }

    #[test]
    fn test_rectangle_draw() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Rectangle);
        ed.pointer_down(p(10.0, 10.0));
        assert!(ed.is_empty());
        ed.pointer_move(p(30.0, 30.0));
        assert!(matches!(ed.state(), InteractionState::Drawing { live, .. } if *live == p(30.0, 30.0)));
        ed.pointer_move(p(50.0, 40.0));
        ed.pointer_up(p(50.0, 40.0));

        assert_eq!(ed.len(), 1);
        assert_eq!(
            ed.shapes()[0].vertices(),
            &[p(10.0, 10.0), p(50.0, 10.0), p(50.0, 40.0), p(10.0, 40.0), p(10.0, 10.0)]
        );
        assert_eq!(ed.state(), &InteractionState::Idle);
        // Rectangles keep the draw mode.
        assert_eq!(ed.mode(), DrawMode::Rectangle);
    }

    #[test]
    fn test_square_draw() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Square);
        drag(&mut ed, p(0.0, 0.0), p(30.0, 100.0));
        let shape = &ed.shapes()[0];
        assert_eq!(shape.kind, ShapeKind::Square);
        assert_eq!(
            shape.vertices(),
            &[p(0.0, 0.0), p(100.0, 0.0), p(100.0, 100.0), p(0.0, 100.0), p(0.0, 0.0)]
        );
    }

    #[test]
    fn test_polygon_close_resets_mode() {
        let mut ed = editor();
        draw_triangle(&mut ed);
        assert_eq!(ed.len(), 1);
        assert_eq!(
            ed.shapes()[0].vertices(),
            &[p(0.0, 0.0), p(50.0, 0.0), p(50.0, 50.0), p(0.0, 0.0)]
        );
        assert_eq!(ed.mode(), DrawMode::None);
        assert_eq!(ed.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_polygon_needs_three_vertices_to_close() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Polygon);
        for pt in [p(0.0, 0.0), p(50.0, 0.0), p(2.0, 2.0)] {
            ed.pointer_down(pt);
            ed.pointer_up(pt);
            ed.click(pt);
        }
        assert!(ed.is_empty());
        assert_eq!(ed.state().staged_vertices().map(|v| v.len()), Some(3));
    }

    #[test]
    fn test_staged_polygon_survives_pointer_leave() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Polygon);
        ed.pointer_down(p(10.0, 10.0));
        ed.pointer_up(p(10.0, 10.0));
        ed.click(p(10.0, 10.0));
        ed.pointer_leave(p(700.0, 10.0));
        assert_eq!(ed.state().staged_vertices(), Some(&[p(10.0, 10.0)][..]));
    }

    #[test]
    fn test_polygon_move_does_not_mutate() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Polygon);
        ed.pointer_down(p(10.0, 10.0));
        ed.pointer_up(p(10.0, 10.0));
        ed.click(p(10.0, 10.0));
        ed.pointer_move(p(80.0, 80.0));
        assert_eq!(ed.state().staged_vertices(), Some(&[p(10.0, 10.0)][..]));
        assert_eq!(ed.hover(), Some(p(80.0, 80.0)));
    }

    #[test]
    fn test_changing_mode_drops_staged_polygon() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Polygon);
        ed.pointer_down(p(10.0, 10.0));
        ed.click(p(10.0, 10.0));
        ed.set_mode(DrawMode::Rectangle);
        assert_eq!(ed.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_drag_shape_translates_uniformly() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Rectangle);
        drag(&mut ed, p(10.0, 10.0), p(50.0, 40.0));
        ed.set_mode(DrawMode::None);

        ed.pointer_down(p(30.0, 20.0));
        assert!(matches!(ed.state(), InteractionState::DraggingShape { index: 0, .. }));
        ed.pointer_move(p(35.0, 25.0));
        ed.pointer_move(p(130.0, 120.0));
        ed.pointer_up(p(130.0, 120.0));

        assert_eq!(
            ed.shapes()[0].vertices(),
            &[p(110.0, 110.0), p(150.0, 110.0), p(150.0, 140.0), p(110.0, 140.0), p(110.0, 110.0)]
        );
        assert_eq!(ed.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_resize_corner_keeps_box() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Rectangle);
        drag(&mut ed, p(10.0, 10.0), p(50.0, 40.0));

        // Grab the bottom-right corner.
        ed.pointer_down(p(52.0, 42.0));
        assert_eq!(
            ed.state(),
            &InteractionState::ResizingShape {
                index: 0,
                corner: Corner::BottomRight
            }
        );
        ed.pointer_move(p(90.0, 70.0));
        let v = ed.shapes()[0].vertices();
        assert!(is_axis_aligned_box(v));
        assert_eq!(v[2], p(90.0, 70.0));
        assert_eq!(v[0], p(10.0, 10.0));

        ed.pointer_move(p(0.0, 0.0));
        assert!(is_axis_aligned_box(ed.shapes()[0].vertices()));
        ed.pointer_up(p(0.0, 0.0));
        assert_eq!(ed.len(), 1);
    }

    #[test]
    fn test_vertex_drag_keeps_polygon_closed() {
        let mut ed = editor();
        draw_triangle(&mut ed);

        ed.pointer_down(p(1.0, 1.0));
        assert_eq!(
            ed.state(),
            &InteractionState::DraggingVertex {
                shape_index: 0,
                vertex_index: 0
            }
        );
        ed.pointer_move(p(-20.0, 5.0));
        ed.pointer_up(p(-20.0, 5.0));
        let v = ed.shapes()[0].vertices();
        assert_eq!(v[0], p(-20.0, 5.0));
        assert_eq!(v[0], v[v.len() - 1]);
    }

    #[test]
    fn test_vertex_beats_overlapping_body() {
        let mut ed = editor();
        draw_triangle(&mut ed);
        ed.set_mode(DrawMode::Rectangle);
        // Drawn from outside the triangle so the press does not grab it.
        drag(&mut ed, p(200.0, 200.0), p(40.0, 40.0));
        ed.set_mode(DrawMode::None);
        assert_eq!(ed.len(), 2);

        ed.pointer_down(p(48.0, 47.0));
        assert_eq!(
            ed.state(),
            &InteractionState::DraggingVertex {
                shape_index: 0,
                vertex_index: 2
            }
        );
    }

    #[test]
    fn test_pointer_leave_commits_drawing() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Rectangle);
        ed.pointer_down(p(10.0, 10.0));
        ed.pointer_move(p(60.0, 60.0));
        ed.pointer_leave(p(60.0, 60.0));
        assert_eq!(ed.len(), 1);
        assert_eq!(ed.state(), &InteractionState::Idle);
        assert_eq!(ed.hover(), None);
    }

    #[test]
    fn test_pointer_leave_ends_drag() {
        let mut ed = editor();
        ed.select_whole_area();
        ed.pointer_down(p(300.0, 200.0));
        assert!(ed.state().is_gesture());
        ed.pointer_leave(p(700.0, 200.0));
        assert_eq!(ed.state(), &InteractionState::Idle);
        ed.pointer_move(p(10.0, 10.0));
        assert_eq!(ed.shapes()[0].vertices()[0], p(0.0, 0.0));
    }

    #[test]
    fn test_polygon_over_whole_area_rectangle() {
        let mut ed = editor();
        ed.select_whole_area();
        ed.set_mode(DrawMode::Polygon);
        for pt in [p(100.0, 100.0), p(200.0, 100.0), p(200.0, 200.0), p(101.0, 101.0)] {
            ed.pointer_down(pt);
            ed.pointer_up(pt);
            ed.click(pt);
        }
        assert_eq!(ed.len(), 2);
        assert_eq!(
            ed.shapes()[1].vertices(),
            &[p(100.0, 100.0), p(200.0, 100.0), p(200.0, 200.0), p(100.0, 100.0)]
        );
        assert_eq!(ed.mode(), DrawMode::None);
        assert_eq!(ed.state(), &InteractionState::Idle);
        // The rectangle underneath was not moved by the presses.
        assert_eq!(ed.shapes()[0].vertices()[0], p(0.0, 0.0));
    }

    #[test]
    fn test_click_after_drag_starts_polygon_only_when_idle() {
        let mut ed = editor();
        ed.select_whole_area();
        ed.set_mode(DrawMode::Polygon);
        ed.pointer_down(p(50.0, 50.0));
        assert!(ed.state().is_gesture());
        // A click while a gesture is still active is ignored.
        ed.click(p(50.0, 50.0));
        assert!(ed.state().is_gesture());
        ed.pointer_up(p(50.0, 50.0));
        ed.click(p(50.0, 50.0));
        assert_eq!(ed.state().staged_vertices(), Some(&[p(50.0, 50.0)][..]));
    }

    #[test]
    fn test_reselecting_mode_keeps_staged_polygon() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Polygon);
        ed.pointer_down(p(10.0, 10.0));
        ed.pointer_up(p(10.0, 10.0));
        ed.click(p(10.0, 10.0));
        ed.set_mode(DrawMode::Polygon);
        assert_eq!(ed.state().staged_vertices(), Some(&[p(10.0, 10.0)][..]));
    }

    #[test]
    fn test_pointer_leave_ends_resize() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Rectangle);
        drag(&mut ed, p(10.0, 10.0), p(50.0, 40.0));
        ed.set_mode(DrawMode::None);

        ed.pointer_down(p(50.0, 40.0));
        assert!(matches!(ed.state(), InteractionState::ResizingShape { .. }));
        ed.pointer_move(p(80.0, 70.0));
        ed.pointer_leave(p(80.0, 70.0));
        assert_eq!(ed.state(), &InteractionState::Idle);

        let before = ed.shapes()[0].vertices().to_vec();
        ed.pointer_move(p(300.0, 300.0));
        assert_eq!(ed.shapes()[0].vertices(), before.as_slice());
        assert_eq!(ed.len(), 1);
    }

    #[test]
    fn test_pointer_leave_ends_vertex_drag() {
        let mut ed = editor();
        draw_triangle(&mut ed);

        ed.pointer_down(p(50.0, 0.0));
        assert_eq!(
            ed.state(),
            &InteractionState::DraggingVertex {
                shape_index: 0,
                vertex_index: 1
            }
        );
        ed.pointer_move(p(70.0, -10.0));
        ed.pointer_leave(p(70.0, -10.0));
        assert_eq!(ed.state(), &InteractionState::Idle);

        let before = ed.shapes()[0].vertices().to_vec();
        ed.pointer_move(p(5.0, 5.0));
        assert_eq!(ed.shapes()[0].vertices(), before.as_slice());
        assert_eq!(before[1], p(70.0, -10.0));
    }

    #[test]
    fn test_press_without_mode_stays_idle() {
        let mut ed = editor();
        ed.pointer_down(p(10.0, 10.0));
        assert_eq!(ed.state(), &InteractionState::Idle);
        ed.pointer_up(p(10.0, 10.0));
        assert!(ed.is_empty());
    }

    #[test]
    fn test_select_whole_area_uses_backing_size() {
        let mut ed = ShapeEditor::new(SurfaceMetrics::new(
            Size::new(320.0, 240.0),
            Size::new(1280.0, 720.0),
        ));
        ed.set_mode(DrawMode::Polygon);
        ed.select_whole_area();
        assert_eq!(
            ed.shapes()[0].vertices(),
            &[p(0.0, 0.0), p(1280.0, 0.0), p(1280.0, 720.0), p(0.0, 720.0), p(0.0, 0.0)]
        );
        assert_eq!(ed.mode(), DrawMode::Polygon);
    }

    #[test]
    fn test_device_coordinates_are_scaled() {
        let mut ed = ShapeEditor::new(SurfaceMetrics::new(
            Size::new(320.0, 240.0),
            Size::new(640.0, 480.0),
        ));
        ed.set_mode(DrawMode::Rectangle);
        drag(&mut ed, p(10.0, 10.0), p(20.0, 30.0));
        assert_eq!(ed.shapes()[0].vertices()[2], p(40.0, 60.0));
    }

    #[test]
    fn test_clear_keeps_drawing_session() {
        let mut ed = editor();
        ed.select_whole_area();
        ed.set_mode(DrawMode::Square);
        ed.pointer_down(p(700.0, 700.0));
        ed.clear();
        assert!(ed.is_empty());
        assert!(matches!(ed.state(), InteractionState::Drawing { .. }));
    }

    #[test]
    fn test_clear_ends_drag_on_removed_shape() {
        let mut ed = editor();
        ed.select_whole_area();
        ed.pointer_down(p(100.0, 100.0));
        ed.clear();
        assert_eq!(ed.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_submit_empty_warns() {
        let ed = editor();
        let mut sink = MemorySink::new();
        let outcome = ed.submit(&mut sink).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Warning { .. }));
        assert!(sink.payloads().is_empty());
    }

    #[test]
    fn test_submit_reports_count_in_order() {
        let mut ed = editor();
        ed.set_mode(DrawMode::Rectangle);
        drag(&mut ed, p(10.0, 10.0), p(50.0, 40.0));
        ed.select_whole_area();
        let mut sink = MemorySink::new();
        let outcome = ed.submit(&mut sink).unwrap();
        assert_eq!(outcome, SubmitOutcome::Success { count: 2 });
        let payload = &sink.payloads()[0];
        assert_eq!(payload.shapes.len(), 2);
        assert_eq!(payload.shapes[0][0], p(10.0, 10.0));
        assert_eq!(ed.len(), 2);
    }

    #[test]
    fn test_reject_degenerate() {
        let config = EditorConfig {
            reject_degenerate: true,
            ..EditorConfig::default()
        };
        let mut ed = ShapeEditor::with_config(SurfaceMetrics::default(), config);
        ed.set_mode(DrawMode::Rectangle);
        ed.pointer_down(p(10.0, 10.0));
        ed.pointer_up(p(10.0, 10.0));
        assert!(ed.is_empty());

        let mut permissive = editor();
        permissive.set_mode(DrawMode::Rectangle);
        permissive.pointer_down(p(10.0, 10.0));
        permissive.pointer_up(p(10.0, 10.0));
        assert_eq!(permissive.len(), 1);
    }

    #[test]
    fn test_geometry_lookup() {
        let mut ed = editor();
        ed.select_whole_area();
        let (id, vertices) = ed.geometry().next().unwrap();
        assert_eq!(vertices.len(), 5);
        assert_eq!(ed.shape(id).map(|s| s.kind), Some(ShapeKind::Rectangle));
    }

    #[test]
    fn test_cursor_hints() {
        let mut ed = editor();
        assert_eq!(ed.cursor_hint(p(5.0, 5.0)), CursorHint::Default);
        ed.set_mode(DrawMode::Rectangle);
        assert_eq!(ed.cursor_hint(p(5.0, 5.0)), CursorHint::Crosshair);
        drag(&mut ed, p(100.0, 100.0), p(200.0, 200.0));
        assert_eq!(ed.cursor_hint(p(150.0, 150.0)), CursorHint::Move);
        assert_eq!(
            ed.cursor_hint(p(199.0, 101.0)),
            CursorHint::Resize(Corner::TopRight)
        );
    }
}
