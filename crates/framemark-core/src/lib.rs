//! framemark Core Library
//!
//! Platform-agnostic shape editing for annotating video frames: the data
//! model, hit-testing and the pointer state machine.

pub mod config;
pub mod editor;
pub mod hit;
pub mod input;
pub mod interaction;
pub mod shapes;
pub mod submit;
pub mod surface;
pub mod tools;

pub use config::{ConfigError, EditorConfig};
pub use editor::ShapeEditor;
pub use hit::{CursorHint, HitTarget, hit_test};
pub use input::PointerEvent;
pub use interaction::InteractionState;
pub use shapes::{Corner, Shape, ShapeId, ShapeKind};
pub use submit::{
    JsonSink, LogSink, MemorySink, SubmissionPayload, SubmissionSink, SubmitError, SubmitOutcome,
};
pub use surface::SurfaceMetrics;
pub use tools::{DrawMode, UnknownDrawMode};
