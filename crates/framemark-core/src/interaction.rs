//! Transient pointer interaction state.

use crate::shapes::Corner;
use crate::tools::DrawMode;
use kurbo::{Point, Vec2};

/// What the pointer is currently doing. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    /// Waiting for input.
    #[default]
    Idle,
    /// Dragging out a new rectangle or square.
    Drawing {
        mode: DrawMode,
        anchor: Point,
        live: Point,
    },
    /// Moving a whole shape.
    DraggingShape {
        index: usize,
        /// Pointer position minus the shape's first vertex at grab time.
        grab_offset: Vec2,
    },
    /// Moving one corner of a rectangle or square.
    ResizingShape { index: usize, corner: Corner },
    /// Moving one polygon vertex.
    DraggingVertex {
        shape_index: usize,
        vertex_index: usize,
    },
    /// Collecting polygon vertices from clicks.
    BuildingPolygon { vertices: Vec<Point> },
}

impl InteractionState {
    /// Whether this is a press-drag-release gesture that ends on pointer-up.
    pub fn is_gesture(&self) -> bool {
        matches!(
            self,
            InteractionState::Drawing { .. }
                | InteractionState::DraggingShape { .. }
                | InteractionState::ResizingShape { .. }
                | InteractionState::DraggingVertex { .. }
        )
    }

    /// Index of the committed shape this state edits, if any.
    pub fn target_index(&self) -> Option<usize> {
        match self {
            InteractionState::DraggingShape { index, .. }
            | InteractionState::ResizingShape { index, .. } => Some(*index),
            InteractionState::DraggingVertex { shape_index, .. } => Some(*shape_index),
            _ => None,
        }
    }

    /// Staged polygon vertices, if a polygon is being built.
    pub fn staged_vertices(&self) -> Option<&[Point]> {
        match self {
            InteractionState::BuildingPolygon { vertices } => Some(vertices.as_slice()),
            _ => None,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Drawing { .. } => "drawing",
            InteractionState::DraggingShape { .. } => "dragging-shape",
            InteractionState::ResizingShape { .. } => "resizing-shape",
            InteractionState::DraggingVertex { .. } => "dragging-vertex",
            InteractionState::BuildingPolygon { .. } => "building-polygon",
        }
    }
}
