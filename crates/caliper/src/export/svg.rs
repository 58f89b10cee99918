//! Vector canvas producing an SVG document.

use log::trace;
use svg::{
    Document, Node,
    node::element::{Path as SvgPath, Rectangle},
};

use caliper_core::{
    color::Color,
    draw::{Canvas, StrokeDefinition},
    geometry::{Path, PathSegment, Size},
};

/// A canvas that appends one SVG element per draw call.
pub struct SvgCanvas {
    size: Size,
    document: Document,
}

impl SvgCanvas {
    pub fn new(size: Size) -> Self {
        let document = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height());
        Self { size, document }
    }

    /// Returns the finished document.
    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Builds SVG path data, or `None` if the path has nothing to draw.
fn path_data(path: &Path) -> Option<String> {
    path.bounds()?;
    let commands: Vec<String> = path
        .segments()
        .iter()
        .map(|segment| match *segment {
            PathSegment::MoveTo(p) => format!("M {} {}", p.x(), p.y()),
            PathSegment::LineTo(p) => format!("L {} {}", p.x(), p.y()),
            PathSegment::QuadTo(c, p) => format!("Q {} {}, {} {}", c.x(), c.y(), p.x(), p.y()),
            PathSegment::CubicTo(c1, c2, p) => format!(
                "C {} {}, {} {}, {} {}",
                c1.x(),
                c1.y(),
                c2.x(),
                c2.y(),
                p.x(),
                p.y()
            ),
            PathSegment::Close => String::from("Z"),
        })
        .collect();
    Some(commands.join(" "))
}

impl Canvas for SvgCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn fill(&mut self, color: Color) {
        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha());
        self.document.append(background);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &StrokeDefinition) {
        let Some(data) = path_data(path) else {
            trace!("Skipping empty stroke path");
            return;
        };
        if stroke.width() <= 0.0 {
            trace!(width = stroke.width(); "Skipping stroke without width");
            return;
        }
        let element = SvgPath::new()
            .set("d", data)
            .set("fill", "none")
            .set("stroke", stroke.color().to_string())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width())
            .set("stroke-linecap", stroke.cap().to_string());
        self.document.append(element);
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let Some(data) = path_data(path) else {
            trace!("Skipping empty fill path");
            return;
        };
        let element = SvgPath::new()
            .set("d", data)
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
            .set("fill-rule", "nonzero");
        self.document.append(element);
    }
}
