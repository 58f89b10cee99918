//! The rendering pass.
//!
//! Paints a [`DiagramLayout`] onto any [`Canvas`] in a fixed order: box
//! fills, the measurements, the box outlines on top of the dividing lines,
//! and finally the glyph itself.

use log::{debug, trace};

use caliper_core::{
    color::Color,
    draw::{
        Canvas, LabelDefinition, MeasurementDefinition, MeasurementDrawer, StrokeCap,
        StrokeDefinition,
    },
    error::GlyphError,
    font::{GlyphOutline, GlyphSource},
    geometry::{Bounds, Path, Point, Transform},
};

use crate::{config::AppConfig, error::CaliperError, layout::DiagramLayout};

/// Resolved colors and strokes of a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramStyle {
    background: Color,
    advance_fill: Color,
    glyph_box_fill: Color,
    advance_outline: StrokeDefinition,
    glyph_box_outline: StrokeDefinition,
    glyph_color: Color,
    measurement: MeasurementDefinition,
}

impl DiagramStyle {
    /// Resolves the style from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CaliperError::Config`] if a configured color is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, CaliperError> {
        let style = config.style();

        let dividing_line = StrokeDefinition::solid(style.dividing_line_color().map_err(CaliperError::Config)?, 1.0);
        let measurement_color = style.measurement_color().map_err(CaliperError::Config)?;

        let mut label = LabelDefinition::new();
        label.set_font_size(config.font().label_size());
        label.set_color(style.label_color().map_err(CaliperError::Config)?);

        let mut measurement = MeasurementDefinition::new();
        measurement.set_dividing_line(dividing_line.clone());
        measurement.set_leader_line(dividing_line.with_cap(StrokeCap::Round));
        measurement.set_line(StrokeDefinition::solid(measurement_color, 2.0));
        measurement.set_arrow_color(measurement_color);
        measurement.set_label(label);

        Ok(Self {
            background: style.background_color().map_err(CaliperError::Config)?,
            advance_fill: style.advance_fill_color().map_err(CaliperError::Config)?,
            glyph_box_fill: style.glyph_box_fill_color().map_err(CaliperError::Config)?,
            advance_outline: StrokeDefinition::solid(
                style.advance_outline_color().map_err(CaliperError::Config)?,
                3.0,
            ),
            glyph_box_outline: StrokeDefinition::solid(
                style.glyph_box_outline_color().map_err(CaliperError::Config)?,
                2.0,
            ),
            glyph_color: style.glyph_color().map_err(CaliperError::Config)?,
            measurement,
        })
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn measurement(&self) -> &MeasurementDefinition {
        &self.measurement
    }
}

/// Maps a glyph outline from design units (y up) onto `glyph_box` so the
/// outline's ink bounds coincide with it.
pub fn place_glyph(outline: &GlyphOutline, glyph_box: Bounds, scale: f32) -> Path {
    let ink = outline.ink_bounds();
    let ink_top_left = Point::new(ink.min_x() * scale, -ink.max_y() * scale);
    let transform = Transform::scale(scale, -scale)
        .then(Transform::translation(glyph_box.min_point().sub_point(ink_top_left)));
    outline.path().transform(transform)
}

/// Paints diagrams with one style and label font.
pub struct DiagramRenderer<'a> {
    style: &'a DiagramStyle,
    label_font: &'a dyn GlyphSource,
}

impl<'a> DiagramRenderer<'a> {
    pub fn new(style: &'a DiagramStyle, label_font: &'a dyn GlyphSource) -> Self {
        Self { style, label_font }
    }

    /// Paints the complete diagram.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Surface to paint on, exclusively borrowed for the pass
    /// * `layout` - Geometry from [`DiagramLayout::compose`]
    /// * `glyph` - Outline of the measured glyph, `None` for glyphs without ink
    /// * `scale` - Canvas pixels per design unit, as used for `layout`
    ///
    /// # Errors
    ///
    /// Returns a [`GlyphError`] if the label font cannot render a label.
    pub fn render(
        &self,
        canvas: &mut dyn Canvas,
        layout: &DiagramLayout,
        glyph: Option<&GlyphOutline>,
        scale: f32,
    ) -> Result<(), GlyphError> {
        debug!(measurements = layout.measurements().len(); "Rendering diagram");

        canvas.fill(self.style.background);
        canvas.fill_path(&layout.advance_box().to_path(), self.style.advance_fill);
        canvas.fill_path(&layout.glyph_box().to_path(), self.style.glyph_box_fill);

        let drawer = MeasurementDrawer::new(&self.style.measurement, self.label_font);
        for placed in layout.measurements() {
            drawer.draw(
                canvas,
                layout.dividing_line_bounds(),
                placed.measurement(),
                placed.line_position(),
                placed.annotation(),
            )?;
        }

        canvas.stroke_path(&layout.advance_box().to_path(), &self.style.advance_outline);
        canvas.stroke_path(&layout.glyph_box().to_path(), &self.style.glyph_box_outline);

        match glyph {
            Some(outline) => {
                let path = place_glyph(outline, layout.glyph_box(), scale);
                canvas.fill_path(&path, self.style.glyph_color);
            }
            None => trace!("Glyph has no outline"),
        }
        Ok(())
    }
}
