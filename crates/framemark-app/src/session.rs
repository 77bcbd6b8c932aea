//! Replay of recorded annotation sessions.

use framemark_core::{
    ConfigError, DrawMode, EditorConfig, PointerEvent, ShapeEditor, SubmissionSink, SubmitError,
    SubmitOutcome, SurfaceMetrics,
};
use framemark_render::{DrawList, RenderStyle, RendererError, build_draw_list};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid session script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Submission failed: {0}")]
    Submit(#[from] SubmitError),
    #[error("Render failed: {0}")]
    Render(#[from] RendererError),
    #[error("{0}")]
    Usage(String),
}

/// One recorded user action. Pointer positions are device coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    SetMode { mode: DrawMode },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerLeave { x: f64, y: f64 },
    Click { x: f64, y: f64 },
    SelectWholeArea,
    Clear,
    Submit,
}

impl Action {
    /// The pointer event this action replays, if it is a pointer action.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        let event = match *self {
            Action::PointerDown { x, y } => PointerEvent::Down {
                position: Point::new(x, y),
            },
            Action::PointerMove { x, y } => PointerEvent::Move {
                position: Point::new(x, y),
            },
            Action::PointerUp { x, y } => PointerEvent::Up {
                position: Point::new(x, y),
            },
            Action::PointerLeave { x, y } => PointerEvent::Leave {
                position: Point::new(x, y),
            },
            Action::Click { x, y } => PointerEvent::Click {
                position: Point::new(x, y),
            },
            _ => return None,
        };
        Some(event)
    }
}

/// A recorded session: surface, settings and the actions to replay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub surface: SurfaceMetrics,
    #[serde(default)]
    pub config: EditorConfig,
    #[serde(default)]
    pub style: RenderStyle,
    pub actions: Vec<Action>,
}

impl SessionScript {
    /// Parse a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let script: Self = serde_json::from_str(json)?;
        script.config.validate()?;
        Ok(script)
    }

    /// Load a script from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }
}

/// A live editor plus its most recent frame.
pub struct Session {
    editor: ShapeEditor,
    style: RenderStyle,
    frame: DrawList,
    redraws: usize,
}

impl Session {
    /// Create a session with an empty editor.
    pub fn new(surface: SurfaceMetrics, config: EditorConfig, style: RenderStyle) -> Self {
        let editor = ShapeEditor::with_config(surface, config);
        let frame = build_draw_list(&editor, &style);
        Self {
            editor,
            style,
            frame,
            redraws: 0,
        }
    }

    pub fn editor(&self) -> &ShapeEditor {
        &self.editor
    }

    /// Draw list from the last redraw.
    pub fn frame(&self) -> &DrawList {
        &self.frame
    }

    /// Number of redraws performed so far.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// Apply one action. Returns the outcome for submit actions.
    pub fn apply(
        &mut self,
        action: &Action,
        sink: &mut dyn SubmissionSink,
    ) -> Result<Option<SubmitOutcome>, SessionError> {
        log::trace!("Applying {action:?}");
        if let Some(event) = action.pointer_event() {
            self.editor.handle_pointer_event(event);
        } else {
            match *action {
                Action::SetMode { mode } => self.editor.set_mode(mode),
                Action::SelectWholeArea => self.editor.select_whole_area(),
                Action::Clear => self.editor.clear(),
                Action::Submit => return Ok(Some(self.editor.submit(sink)?)),
                _ => {}
            }
        }
        self.redraw();
        Ok(None)
    }

    fn redraw(&mut self) {
        self.frame = build_draw_list(&self.editor, &self.style);
        self.redraws += 1;
    }
}

/// Result of replaying a whole script.
#[derive(Debug, Clone)]
pub struct SessionReport {
    /// Outcome of every submit action, in order.
    pub outcomes: Vec<SubmitOutcome>,
    /// Frame after the last action.
    pub frame: DrawList,
    /// Shapes committed at the end of the session.
    pub shape_count: usize,
}

/// Replay `script` from a fresh editor.
pub fn run_session(
    script: &SessionScript,
    sink: &mut dyn SubmissionSink,
) -> Result<SessionReport, SessionError> {
    let mut session = Session::new(script.surface, script.config.clone(), script.style.clone());
    let mut outcomes = Vec::new();
    for action in &script.actions {
        if let Some(outcome) = session.apply(action, sink)? {
            outcomes.push(outcome);
        }
    }
    log::info!(
        "Replayed {} actions, {} shapes, {} redraws",
        script.actions.len(),
        session.editor().len(),
        session.redraws()
    );
    Ok(SessionReport {
        outcomes,
        frame: session.frame().clone(),
        shape_count: session.editor().len(),
    })
}
