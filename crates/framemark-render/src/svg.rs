//! SVG painter for exporting annotated frames.

use crate::renderer::{Painter, RenderResult};
use crate::style::SerializableColor;
use kurbo::{BezPath, Point, Size};
use peniko::Color;
use std::fmt::Write;
use std::path::Path;

/// Painter that accumulates an SVG document.
#[derive(Debug, Default, Clone)]
pub struct SvgPainter {
    size: Size,
    body: String,
}

impl SvgPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The finished SVG document.
    pub fn to_svg(&self) -> RenderResult<String> {
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height
        )?;
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        Ok(out)
    }

    /// Write the document to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let svg = self.to_svg()?;
        std::fs::write(path.as_ref(), svg)?;
        log::info!("Wrote frame to {}", path.as_ref().display());
        Ok(())
    }
}

fn paint_attrs(color: Color) -> (String, f64) {
    let c = SerializableColor::from(color);
    (c.to_hex(), c.opacity())
}

impl Painter for SvgPainter {
    fn clear(&mut self, size: Size) {
        self.size = size;
        self.body.clear();
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let (hex, opacity) = paint_attrs(color);
        let _ = writeln!(
            self.body,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
            path.to_svg(),
            hex,
            opacity,
            width
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let (hex, opacity) = paint_attrs(color);
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}"/>"#,
            center.x, center.y, radius, hex, opacity
        );
    }
}
