//! Pointer events delivered by the host surface.

use crate::editor::ShapeEditor;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A pointer event in device coordinates, relative to the surface origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
    Leave { position: Point },
    /// A press and release without motion, as reported by the host.
    Click { position: Point },
}

impl PointerEvent {
    /// Device position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position }
            | PointerEvent::Leave { position }
            | PointerEvent::Click { position } => *position,
        }
    }
}

impl ShapeEditor {
    /// Route a pointer event to the matching handler.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
            PointerEvent::Leave { position } => self.pointer_leave(position),
            PointerEvent::Click { position } => self.click(position),
        }
    }
}
