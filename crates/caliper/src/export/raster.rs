//! Raster canvas backed by a `tiny-skia` pixmap.

use log::{debug, trace};
use tiny_skia::{FillRule, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use caliper_core::{
    color::Color,
    draw::{Canvas, StrokeCap, StrokeDefinition},
    geometry::{Path, PathSegment, Size},
};

use crate::export::Error;

/// An antialiased RGBA canvas.
pub struct RasterCanvas {
    pixmap: Pixmap,
}

impl RasterCanvas {
    /// Creates a transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if either dimension is zero or the pixmap
    /// would be too large.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Render(format!("invalid canvas size {width}x{height}")))?;
        debug!(width, height; "Created raster canvas");
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Returns the straight-alpha `[r, g, b, a]` value of a pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let pixel = self.pixmap.pixel(x, y)?.demultiply();
        Some([pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()])
    }

    /// Premultiplied RGBA bytes, row by row.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Encodes the canvas as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the PNG encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, Error> {
        self.pixmap
            .encode_png()
            .map_err(|err| Error::Encode(err.to_string()))
    }
}

fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo(p) => builder.move_to(p.x(), p.y()),
            PathSegment::LineTo(p) => builder.line_to(p.x(), p.y()),
            PathSegment::QuadTo(c, p) => builder.quad_to(c.x(), c.y(), p.x(), p.y()),
            PathSegment::CubicTo(c1, c2, p) => {
                builder.cubic_to(c1.x(), c1.y(), c2.x(), c2.y(), p.x(), p.y())
            }
            PathSegment::Close => builder.close(),
        }
    }
    builder.finish()
}

fn paint(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn line_cap(cap: StrokeCap) -> LineCap {
    match cap {
        StrokeCap::Butt => LineCap::Butt,
        StrokeCap::Round => LineCap::Round,
        StrokeCap::Square => LineCap::Square,
    }
}

impl Canvas for RasterCanvas {
    fn size(&self) -> Size {
        Size::new(self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    fn fill(&mut self, color: Color) {
        let [r, g, b, a] = color.to_rgba8();
        self.pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokeDefinition) {
        if stroke.width() <= 0.0 {
            trace!(width = stroke.width(); "Skipping stroke without width");
            return;
        }
        let Some(skia_path) = to_skia_path(path) else {
            trace!("Skipping degenerate stroke path");
            return;
        };
        let skia_stroke = Stroke {
            width: stroke.width(),
            line_cap: line_cap(stroke.cap()),
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &skia_path,
            &paint(stroke.color()),
            &skia_stroke,
            Transform::identity(),
            None,
        );
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let Some(skia_path) = to_skia_path(path) else {
            trace!("Skipping degenerate fill path");
            return;
        };
        self.pixmap.fill_path(
            &skia_path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}
