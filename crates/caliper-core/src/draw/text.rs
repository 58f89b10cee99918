//! Measurement labels rendered from glyph outlines.
//!
//! Labels are not drawn with a text API. Each character's outline is
//! fetched from a [`GlyphSource`], scaled to the label size and laid out
//! left to right along a baseline, and the resulting [`Path`] is filled.
//! Raster and vector backends therefore render identical shapes.
//!
//! # Overview
//!
//! - [`LabelDefinition`] - Reusable label style (pixel size and color)
//! - [`Label`] - A renderable label combining content with a [`LabelDefinition`]

use log::trace;

use crate::{
    color::Color,
    draw::{AnnotationPosition, Canvas},
    error::GlyphError,
    font::GlyphSource,
    geometry::{Path, Point, Transform},
};

/// Visual style of measurement labels.
///
/// | Property | Default |
/// |----------|---------|
/// | Font size | `20` pixels per em |
/// | Color | black |
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDefinition {
    font_size: f32,
    color: Color,
}

impl LabelDefinition {
    /// Creates a label definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the em size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the em size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for LabelDefinition {
    fn default() -> Self {
        Self {
            font_size: 20.0,
            color: Color::default(),
        }
    }
}

/// A piece of label text bound to its style.
///
/// # Examples
///
/// ```
/// # use caliper_core::draw::{Label, LabelDefinition};
/// let definition = LabelDefinition::new();
/// let label = Label::new(&definition, "Width");
/// assert_eq!(label.content(), "Width");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Label<'a> {
    definition: &'a LabelDefinition,
    content: &'a str,
}

impl<'a> Label<'a> {
    pub fn new(definition: &'a LabelDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    pub fn content(&self) -> &'a str {
        self.content
    }

    pub fn definition(&self) -> &'a LabelDefinition {
        self.definition
    }

    /// Lays out the label's glyph outlines.
    ///
    /// The baseline runs along Y = 0 starting at X = 0, in canvas
    /// orientation (ink above the baseline has negative Y).
    ///
    /// # Errors
    ///
    /// Returns the first [`GlyphError`] raised by `font`.
    pub fn outline(&self, font: &dyn GlyphSource) -> Result<Path, GlyphError> {
        let scale = self.definition.font_size / f32::from(font.units_per_em());
        let mut path = Path::new();
        let mut pen_x = 0.0;

        for ch in self.content.chars() {
            let metrics = font.glyph_metrics(ch)?;
            if let Some(glyph) = font.glyph_outline(ch)? {
                let transform =
                    Transform::scale(scale, -scale).then(Transform::translation(Point::new(pen_x, 0.0)));
                path.extend(glyph.path().transform(transform));
            }
            pen_x += metrics.advance_width() * scale;
        }

        Ok(path)
    }

    /// Fills the label on `canvas`, its bounding box aligned against
    /// `position`'s anchor.
    ///
    /// A label without ink (empty or whitespace only) draws nothing.
    ///
    /// # Errors
    ///
    /// Returns the first [`GlyphError`] raised by `font`.
    pub fn render(
        &self,
        canvas: &mut dyn Canvas,
        font: &dyn GlyphSource,
        position: &AnnotationPosition,
    ) -> Result<(), GlyphError> {
        let path = self.outline(font)?;
        let Some(bounds) = path.bounds() else {
            trace!(content = self.content; "Label has no ink, skipping");
            return Ok(());
        };

        let top_left = position.place(bounds.to_size());
        let placed = path.translate(top_left.sub_point(bounds.min_point()));
        canvas.fill_path(&placed, self.definition.color);
        Ok(())
    }
}
