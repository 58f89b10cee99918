//! Conversion of font outlines into Caliper paths.

use caliper_core::geometry::{Path, Point};

/// Collects `ttf_parser` outline commands into a [`Path`].
///
/// Points are recorded in font design units with the Y axis pointing up;
/// no scaling or positioning is applied.
#[derive(Debug, Default)]
pub struct OutlineCollector {
    path: Path,
}

impl OutlineCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the collector and returns the recorded path.
    pub fn finish(self) -> Path {
        self.path
    }
}

impl ttf_parser::OutlineBuilder for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(Point::new(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(Point::new(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.quad_to(Point::new(x1, y1), Point::new(x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path
            .cubic_to(Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y));
    }

    fn close(&mut self) {
        self.path.close();
    }
}
