//! Projection of editor state into paint commands.
//!
//! The draw list is derived from the editor on every redraw and never fed
//! back into it, so building it twice from unchanged state yields equal lists.

use crate::style::RenderStyle;
use framemark_core::shapes::{box_vertices, polyline_path, square_end};
use framemark_core::{DrawMode, InteractionState, ShapeEditor, ShapeId, ShapeKind};
use kurbo::{BezPath, Line, Point, Size};
use peniko::Color;

/// A single paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A committed shape outline.
    Shape {
        id: ShapeId,
        kind: ShapeKind,
        path: BezPath,
        stroke: Color,
        width: f64,
    },
    /// In-progress geometry: a live box or the staged polygon polyline.
    Preview {
        path: BezPath,
        stroke: Color,
        width: f64,
    },
    /// Line from the last staged polygon vertex to the pointer.
    RubberBand { line: Line, stroke: Color, width: f64 },
    /// A vertex marker.
    Handle {
        center: Point,
        radius: f64,
        fill: Color,
    },
}

/// Ordered paint commands for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawList {
    /// Canvas size in backing pixels.
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// Build the draw list for the editor's current shapes and interaction.
pub fn build_draw_list(editor: &ShapeEditor, style: &RenderStyle) -> DrawList {
    let mut commands = Vec::new();
    let active = editor.state().target_index();
    let handle_fill: Color = style.handle_color.into();

    for (index, shape) in editor.shapes().iter().enumerate() {
        let stroke = if active == Some(index) {
            style.active_color.into()
        } else {
            style.stroke_for(shape.kind)
        };
        commands.push(DrawCommand::Shape {
            id: shape.id(),
            kind: shape.kind,
            path: shape.to_path(),
            stroke,
            width: style.stroke_width,
        });
        if shape.kind == ShapeKind::Polygon {
            let open = shape.vertices().len().saturating_sub(1);
            for v in &shape.vertices()[..open] {
                commands.push(DrawCommand::Handle {
                    center: *v,
                    radius: style.handle_radius,
                    fill: handle_fill,
                });
            }
        }
    }

    let preview: Color = style.preview_color.into();
    match editor.state() {
        InteractionState::Drawing { mode, anchor, live } => {
            let end = match mode {
                DrawMode::Square => square_end(*anchor, *live),
                _ => *live,
            };
            commands.push(DrawCommand::Preview {
                path: polyline_path(&box_vertices(*anchor, end), true),
                stroke: preview,
                width: style.stroke_width,
            });
        }
        InteractionState::BuildingPolygon { vertices } if !vertices.is_empty() => {
            commands.push(DrawCommand::Preview {
                path: polyline_path(vertices, false),
                stroke: preview,
                width: style.stroke_width,
            });
            for v in vertices {
                commands.push(DrawCommand::Handle {
                    center: *v,
                    radius: style.handle_radius,
                    fill: preview,
                });
            }
            if let (Some(last), Some(hover)) = (vertices.last(), editor.hover()) {
                commands.push(DrawCommand::RubberBand {
                    line: Line::new(*last, hover),
                    stroke: preview,
                    width: style.stroke_width,
                });
            }
        }
        _ => {}
    }

    DrawList {
        size: editor.surface().backing,
        commands,
    }
}
