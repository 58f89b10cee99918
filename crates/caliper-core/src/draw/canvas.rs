//! The drawing surface abstraction.
//!
//! Every primitive in [`crate::draw`] paints through the [`Canvas`] trait.
//! Coordinates are canvas pixels with the origin at the top-left corner and
//! the Y axis pointing down.

use crate::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Path, Point, Size},
};

/// A mutable raster or vector surface.
///
/// Paint is applied in call order; later calls cover earlier ones.
/// Implementations skip geometry that cannot be drawn (empty or degenerate
/// paths) instead of failing.
pub trait Canvas {
    /// Size of the drawable area in pixels.
    fn size(&self) -> Size;

    /// Covers the whole surface with `color`.
    fn fill(&mut self, color: Color);

    /// Strokes the outline of `path`.
    fn stroke_path(&mut self, path: &Path, stroke: &StrokeDefinition);

    /// Fills the interior of `path` using the non-zero winding rule.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Draws a straight segment from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeDefinition) {
        let mut path = Path::new();
        path.move_to(from);
        path.line_to(to);
        self.stroke_path(&path, stroke);
    }
}


#[cfg(test)]
mod tests {
    use super::{testing::*, *};
    use crate::geometry::PathSegment;

    #[test]
    fn test_draw_line_strokes_two_point_path() {
        let mut canvas = RecordingCanvas::default();
        let stroke = StrokeDefinition::default();
        canvas.draw_line(Point::new(1.0, 2.0), Point::new(3.0, 4.0), &stroke);

        let strokes: Vec<_> = canvas.strokes().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(
            strokes[0].0.segments(),
            &[
                PathSegment::MoveTo(Point::new(1.0, 2.0)),
                PathSegment::LineTo(Point::new(3.0, 4.0)),
            ]
        );
        assert_eq!(strokes[0].1, &stroke);
    }
}
