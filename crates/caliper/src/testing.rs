//! Test doubles shared by the unit tests.

use caliper_core::{
    color::Color,
    draw::{Canvas, StrokeDefinition},
    geometry::{Path, Size},
};

pub use caliper_core::font::testing::BoxFont;

/// Records each call as a short description such as `"stroke gray 1"`.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<String>,
}

impl RecordingCanvas {
    pub fn ops(&self) -> &[String] {
        &self.ops
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        Size::new(720.0, 720.0)
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(format!("fill {color}"));
    }

    fn stroke_path(&mut self, _path: &Path, stroke: &StrokeDefinition) {
        self.ops
            .push(format!("stroke {} {}", stroke.color(), stroke.width()));
    }

    fn fill_path(&mut self, _path: &Path, color: Color) {
        self.ops.push(format!("fill_path {color}"));
    }
}
