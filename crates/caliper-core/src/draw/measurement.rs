//! Measurement indicators.
//!
//! A [`Measurement`] is a labeled span along one axis. Drawing one produces,
//! in order:
//!
//! 1. Two dividing lines crossing the whole diagram at the span's ends
//! 2. The measurement line, offset to a chosen cross-axis position
//! 3. An arrow head on each end of the measurement line
//! 4. The label
//! 5. A leader line from the label to the middle of the measurement line
//!
//! # Overview
//!
//! - [`Orientation`] - Which axis a measurement runs along
//! - [`Measurement`] - The span and its label
//! - [`MeasurementDefinition`] - Strokes and colors shared by all measurements
//! - [`MeasurementDrawer`] - Paints measurements on a [`Canvas`]

use std::{
    f32::consts::{FRAC_PI_2, PI},
    fmt,
    str::FromStr,
};

use log::trace;

use crate::{
    color::Color,
    draw::{
        AnnotationPosition, Canvas, Label, LabelDefinition, StrokeCap, StrokeDefinition, arrow,
    },
    error::GlyphError,
    font::GlyphSource,
    geometry::{Bounds, Point},
};

/// The axis a measurement runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Runs along X; dividing lines are vertical
    Horizontal,
    /// Runs along Y; dividing lines are horizontal
    Vertical,
}

impl Orientation {
    /// Builds a point from a coordinate along the measurement axis and one
    /// across it.
    ///
    /// ```
    /// # use caliper_core::{draw::Orientation, geometry::Point};
    /// assert_eq!(Orientation::Vertical.point(10.0, 3.0), Point::new(3.0, 10.0));
    /// assert_eq!(Orientation::Horizontal.point(10.0, 3.0), Point::new(10.0, 3.0));
    /// ```
    pub fn point(self, along: f32, across: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(along, across),
            Self::Vertical => Point::new(across, along),
        }
    }

    /// Returns the segment perpendicular to this axis at `value`, spanning
    /// `bounds` on the cross axis.
    pub fn dividing_line(self, value: f32, bounds: Bounds) -> (Point, Point) {
        match self {
            Self::Horizontal => (
                Point::new(value, bounds.min_y()),
                Point::new(value, bounds.max_y()),
            ),
            Self::Vertical => (
                Point::new(bounds.min_x(), value),
                Point::new(bounds.max_x(), value),
            ),
        }
    }

    /// Rotation of the arrow heads at the start and the end of a
    /// measurement line.
    pub fn arrow_angles(self) -> (f32, f32) {
        match self {
            Self::Horizontal => (3.0 * FRAC_PI_2, FRAC_PI_2),
            Self::Vertical => (0.0, PI),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(format!("unknown orientation `{other}`")),
        }
    }
}

/// A labeled span along one axis.
///
/// `start` and `end` are canvas coordinates along the measurement axis;
/// `end` may be smaller than `start` for negative metric values.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    orientation: Orientation,
    start: f32,
    end: f32,
    name: String,
}

impl Measurement {
    pub fn new(orientation: Orientation, start: f32, end: f32, name: impl Into<String>) -> Self {
        Self {
            orientation,
            start,
            end,
            name: name.into(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// The label text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signed length of the span.
    pub fn length(&self) -> f32 {
        self.end - self.start
    }

    /// Endpoints of the measurement line drawn at `line_position` on the
    /// cross axis.
    pub fn line(&self, line_position: f32) -> (Point, Point) {
        (
            self.orientation.point(self.start, line_position),
            self.orientation.point(self.end, line_position),
        )
    }
}

/// Strokes and colors used when drawing measurements.
///
/// | Element | Default |
/// |---------|---------|
/// | Dividing lines | gray, 1px |
/// | Measurement line | black, 2px |
/// | Arrow heads | black |
/// | Leader line | gray, 1px |
/// | Label | [`LabelDefinition::default`] |
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementDefinition {
    dividing_line: StrokeDefinition,
    line: StrokeDefinition,
    arrow_color: Color,
    leader_line: StrokeDefinition,
    label: LabelDefinition,
}

impl MeasurementDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dividing_line(&self) -> &StrokeDefinition {
        &self.dividing_line
    }

    pub fn line(&self) -> &StrokeDefinition {
        &self.line
    }

    pub fn arrow_color(&self) -> Color {
        self.arrow_color
    }

    pub fn leader_line(&self) -> &StrokeDefinition {
        &self.leader_line
    }

    pub fn label(&self) -> &LabelDefinition {
        &self.label
    }

    pub fn set_dividing_line(&mut self, stroke: StrokeDefinition) {
        self.dividing_line = stroke;
    }

    pub fn set_line(&mut self, stroke: StrokeDefinition) {
        self.line = stroke;
    }

    pub fn set_arrow_color(&mut self, color: Color) {
        self.arrow_color = color;
    }

    pub fn set_leader_line(&mut self, stroke: StrokeDefinition) {
        self.leader_line = stroke;
    }

    pub fn set_label(&mut self, label: LabelDefinition) {
        self.label = label;
    }
}

impl Default for MeasurementDefinition {
    fn default() -> Self {
        Self {
            dividing_line: StrokeDefinition::solid(Color::named("gray"), 1.0),
            line: StrokeDefinition::solid(Color::named("black"), 2.0),
            arrow_color: Color::named("black"),
            leader_line: StrokeDefinition::solid(Color::named("gray"), 1.0)
                .with_cap(StrokeCap::Round),
            label: LabelDefinition::default(),
        }
    }
}

/// Paints measurements with a fixed style and label font.
pub struct MeasurementDrawer<'a> {
    definition: &'a MeasurementDefinition,
    font: &'a dyn GlyphSource,
}

impl<'a> MeasurementDrawer<'a> {
    pub fn new(definition: &'a MeasurementDefinition, font: &'a dyn GlyphSource) -> Self {
        Self { definition, font }
    }

    /// Draws one measurement.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Surface to paint on
    /// * `dividing_line_bounds` - Cross-axis extent of the dividing lines
    /// * `measurement` - The span to draw
    /// * `line_position` - Cross-axis coordinate of the measurement line
    /// * `annotation` - Label placement and leader line origin
    ///
    /// # Errors
    ///
    /// Returns a [`GlyphError`] if the label font lacks a glyph for the
    /// measurement's name. Everything but the label and the leader line has
    /// been drawn by then.
    pub fn draw(
        &self,
        canvas: &mut dyn Canvas,
        dividing_line_bounds: Bounds,
        measurement: &Measurement,
        line_position: f32,
        annotation: &AnnotationPosition,
    ) -> Result<(), GlyphError> {
        let orientation = measurement.orientation();
        trace!(
            name = measurement.name(),
            orientation:% = orientation,
            start = measurement.start(),
            end = measurement.end(),
            line_position = line_position;
            "Drawing measurement"
        );

        for value in [measurement.start(), measurement.end()] {
            let (from, to) = orientation.dividing_line(value, dividing_line_bounds);
            canvas.draw_line(from, to, &self.definition.dividing_line);
        }

        let (start, end) = measurement.line(line_position);
        canvas.draw_line(start, end, &self.definition.line);

        let (start_angle, end_angle) = orientation.arrow_angles();
        canvas.fill_path(&arrow(start, start_angle), self.definition.arrow_color);
        canvas.fill_path(&arrow(end, end_angle), self.definition.arrow_color);

        Label::new(&self.definition.label, measurement.name()).render(canvas, self.font, annotation)?;

        canvas.draw_line(
            annotation.leader_start(),
            start.midpoint(end),
            &self.definition.leader_line,
        );
        Ok(())
    }
}
