//! framemark Render Library
//!
//! Turns editor state into paint commands and hands them to a painter.

mod draw_list;
mod renderer;
mod style;
mod svg;

pub use draw_list::{DrawCommand, DrawList, build_draw_list};
pub use renderer::{Painter, RenderResult, RendererError, render_frame};
pub use style::{RenderStyle, SerializableColor};
pub use svg::SvgPainter;
