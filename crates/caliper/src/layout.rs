//! The diagram composer.
//!
//! Turns a glyph's metrics into canvas geometry: the advance box centred on
//! the canvas, the glyph box inside it and eight measurements arranged
//! around them. Placement is a single pass with fixed offsets; labels are
//! kept apart by construction, not by a collision solver.
//!
//! ```text
//!                 LeftSideBearing   Width   RightSideBearing
//!                  |<--->|<------------->|<---->|
//!   TopSideBearing ┬ ┌──────────────────────────┐
//!                  ┴ │    ┌───────────────┐     │ ┬
//!           Height ┬ │    │    glyph      │     │ │ AdvanceHeight
//!                  ┴ │    └───────────────┘     │ │
//! BottomSideBearing  └──────────────────────────┘ ┴
//!                    |<-------- AdvanceWidth ----->|
//! ```

use log::debug;

use caliper_core::{
    draw::{AnnotationPosition, HorizontalAlignment, Measurement, Orientation, VerticalAlignment},
    font::GlyphMetrics,
    geometry::{Bounds, Insets, Point, Size},
};

/// Padding between the advance box and the end of every dividing line.
const DIVIDING_LINE_PADDING: f32 = 50.0;
/// Distance from an advance box edge to the measurement lines beside it.
const MEASUREMENT_LINE_OFFSET: f32 = 50.0;
/// Extra shift of the glyph height/width lines, off the shared dividing lines.
const INNER_LINE_SHIFT: f32 = 20.0;
/// Gap between the left measurement lines and their labels.
const LEFT_LABEL_MARGIN: f32 = 40.0;
/// Gap between the top measurement lines and the bearing labels.
const TOP_BEARING_LABEL_MARGIN: f32 = 30.0;
/// Gap between the top measurement lines and the width label.
const TOP_WIDTH_LABEL_MARGIN: f32 = 60.0;
/// Gap between the advance measurement lines and their labels.
const ADVANCE_LABEL_MARGIN: f32 = 30.0;

/// A measurement together with where to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMeasurement {
    measurement: Measurement,
    line_position: f32,
    annotation: AnnotationPosition,
}

impl PlacedMeasurement {
    fn new(measurement: Measurement, line_position: f32, annotation: AnnotationPosition) -> Self {
        Self {
            measurement,
            line_position,
            annotation,
        }
    }

    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Cross-axis coordinate of the measurement line.
    pub fn line_position(&self) -> f32 {
        self.line_position
    }

    pub fn annotation(&self) -> &AnnotationPosition {
        &self.annotation
    }
}

/// Canvas geometry of a complete diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    advance_box: Bounds,
    glyph_box: Bounds,
    dividing_line_bounds: Bounds,
    measurements: Vec<PlacedMeasurement>,
}

impl DiagramLayout {
    /// Lays out the diagram of one glyph.
    ///
    /// # Arguments
    ///
    /// * `metrics` - Glyph metrics in font design units
    /// * `scale` - Canvas pixels per design unit
    /// * `canvas_size` - Size of the target canvas; the advance box is centred on it
    pub fn compose(metrics: &GlyphMetrics, scale: f32, canvas_size: Size) -> Self {
        let advance_size = Size::new(
            metrics.advance_width() * scale,
            metrics.advance_height() * scale,
        );
        let canvas_center = Point::new(canvas_size.width() / 2.0, canvas_size.height() / 2.0);
        let advance_box = Bounds::new_from_center(canvas_center, advance_size);

        let glyph_box = Bounds::new_from_top_left(
            advance_box.min_point().add_point(Point::new(
                metrics.left_side_bearing() * scale,
                metrics.top_side_bearing() * scale,
            )),
            Size::new(metrics.width() * scale, metrics.height() * scale),
        );

        let dividing_line_bounds = advance_box.add_padding(Insets::uniform(DIVIDING_LINE_PADDING));

        let mut measurements = Vec::with_capacity(8);
        measurements.extend(vertical_chain(metrics, scale, advance_box));
        measurements.extend(horizontal_chain(metrics, scale, advance_box));
        measurements.extend(advance_measurements(advance_box));

        debug!(
            advance_box:?,
            glyph_box:?,
            measurements = measurements.len();
            "Diagram composed"
        );

        Self {
            advance_box,
            glyph_box,
            dividing_line_bounds,
            measurements,
        }
    }

    /// Box spanning the glyph's advance width and advance height.
    pub fn advance_box(&self) -> Bounds {
        self.advance_box
    }

    /// Box spanning the glyph's ink.
    pub fn glyph_box(&self) -> Bounds {
        self.glyph_box
    }

    /// Cross-axis extent shared by all dividing lines.
    pub fn dividing_line_bounds(&self) -> Bounds {
        self.dividing_line_bounds
    }

    /// Measurements in drawing order.
    pub fn measurements(&self) -> &[PlacedMeasurement] {
        &self.measurements
    }
}

/// Top bearing, height and bottom bearing, stacked along the left side.
fn vertical_chain(metrics: &GlyphMetrics, scale: f32, advance_box: Bounds) -> [PlacedMeasurement; 3] {
    let top = advance_box.min_y();
    let top_bearing_end = top + metrics.top_side_bearing() * scale;
    let height_end = top_bearing_end + metrics.height() * scale;
    let bottom_bearing_end = height_end + metrics.bottom_side_bearing() * scale;

    let line = advance_box.min_x() - MEASUREMENT_LINE_OFFSET;
    let label_x = line - LEFT_LABEL_MARGIN;
    let label = |fraction: f32| {
        AnnotationPosition::new(
            Point::new(label_x, top + advance_box.height() * fraction),
            HorizontalAlignment::Right,
            VerticalAlignment::Center,
            Point::new(5.0, 5.0),
        )
    };

    [
        PlacedMeasurement::new(
            Measurement::new(Orientation::Vertical, top, top_bearing_end, "TopSideBearing"),
            line,
            label(0.25),
        ),
        PlacedMeasurement::new(
            Measurement::new(Orientation::Vertical, top_bearing_end, height_end, "Height"),
            line + INNER_LINE_SHIFT,
            label(0.5),
        ),
        PlacedMeasurement::new(
            Measurement::new(
                Orientation::Vertical,
                height_end,
                bottom_bearing_end,
                "BottomSideBearing",
            ),
            line,
            label(0.75),
        ),
    ]
}

/// Left bearing, width and right bearing, chained along the top side.
fn horizontal_chain(
    metrics: &GlyphMetrics,
    scale: f32,
    advance_box: Bounds,
) -> [PlacedMeasurement; 3] {
    let left = advance_box.min_x();
    let left_bearing_end = left + metrics.left_side_bearing() * scale;
    let width_end = left_bearing_end + metrics.width() * scale;
    let right_bearing_end = width_end + metrics.right_side_bearing() * scale;

    let line = advance_box.min_y() - MEASUREMENT_LINE_OFFSET;

    [
        PlacedMeasurement::new(
            Measurement::new(Orientation::Horizontal, left, left_bearing_end, "LeftSideBearing"),
            line,
            AnnotationPosition::new(
                Point::new(left, line - TOP_BEARING_LABEL_MARGIN),
                HorizontalAlignment::Right,
                VerticalAlignment::Bottom,
                Point::new(-10.0, 10.0),
            ),
        ),
        PlacedMeasurement::new(
            Measurement::new(Orientation::Horizontal, left_bearing_end, width_end, "Width"),
            line + INNER_LINE_SHIFT,
            AnnotationPosition::new(
                Point::new(
                    (left_bearing_end + width_end) / 2.0,
                    line - TOP_WIDTH_LABEL_MARGIN,
                ),
                HorizontalAlignment::Center,
                VerticalAlignment::Bottom,
                Point::new(0.0, 10.0),
            ),
        ),
        PlacedMeasurement::new(
            Measurement::new(
                Orientation::Horizontal,
                width_end,
                right_bearing_end,
                "RightSideBearing",
            ),
            line,
            AnnotationPosition::new(
                Point::new(right_bearing_end, line - TOP_BEARING_LABEL_MARGIN),
                HorizontalAlignment::Left,
                VerticalAlignment::Bottom,
                Point::new(10.0, 10.0),
            ),
        ),
    ]
}

/// Advance height on the right and advance width below.
fn advance_measurements(advance_box: Bounds) -> [PlacedMeasurement; 2] {
    let right_line = advance_box.max_x() + MEASUREMENT_LINE_OFFSET;
    let bottom_line = advance_box.max_y() + MEASUREMENT_LINE_OFFSET;
    let center = advance_box.center();

    [
        PlacedMeasurement::new(
            Measurement::new(
                Orientation::Vertical,
                advance_box.min_y(),
                advance_box.max_y(),
                "AdvanceHeight",
            ),
            right_line,
            AnnotationPosition::new(
                Point::new(right_line + ADVANCE_LABEL_MARGIN, center.y()),
                HorizontalAlignment::Left,
                VerticalAlignment::Center,
                Point::new(-10.0, 0.0),
            ),
        ),
        PlacedMeasurement::new(
            Measurement::new(
                Orientation::Horizontal,
                advance_box.min_x(),
                advance_box.max_x(),
                "AdvanceWidth",
            ),
            bottom_line,
            AnnotationPosition::new(
                Point::new(center.x(), bottom_line + ADVANCE_LABEL_MARGIN),
                HorizontalAlignment::Center,
                VerticalAlignment::Top,
                Point::new(0.0, -10.0),
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    const CANVAS: Size = Size::new(720.0, 720.0);

    fn find<'a>(layout: &'a DiagramLayout, name: &str) -> &'a PlacedMeasurement {
        layout
            .measurements()
            .iter()
            .find(|placed| placed.measurement().name() == name)
            .unwrap_or_else(|| panic!("no measurement named {name}"))
    }

    #[test]
    fn test_measurement_order_and_names() {
        let metrics = GlyphMetrics::new(Size::new(600.0, 1000.0), 50.0, 200.0, Size::new(500.0, 600.0));
        let layout = DiagramLayout::compose(&metrics, 0.5, CANVAS);
        let names: Vec<_> = layout
            .measurements()
            .iter()
            .map(|placed| placed.measurement().name())
            .collect();
        assert_eq!(
            names,
            [
                "TopSideBearing",
                "Height",
                "BottomSideBearing",
                "LeftSideBearing",
                "Width",
                "RightSideBearing",
                "AdvanceHeight",
                "AdvanceWidth",
            ]
        );
    }

    #[test]
    fn test_advance_box_centred() {
        let metrics = GlyphMetrics::new(Size::new(600.0, 1000.0), 50.0, 200.0, Size::new(500.0, 600.0));
        let layout = DiagramLayout::compose(&metrics, 0.5, CANVAS);

        let advance = layout.advance_box();
        assert_eq!(advance.min_x(), 210.0);
        assert_eq!(advance.min_y(), 110.0);
        assert_eq!(advance.width(), 300.0);
        assert_eq!(advance.height(), 500.0);

        let glyph = layout.glyph_box();
        assert_eq!(glyph.min_x(), 235.0);
        assert_eq!(glyph.min_y(), 210.0);
        assert_eq!(glyph.width(), 250.0);
        assert_eq!(glyph.height(), 300.0);

        let dividing = layout.dividing_line_bounds();
        assert_eq!(dividing.min_x(), 160.0);
        assert_eq!(dividing.max_y(), 660.0);
    }

    #[test]
    fn test_coinciding_boxes_zero_bearings() {
        let metrics = GlyphMetrics::new(Size::new(1000.0, 1000.0), 0.0, 0.0, Size::new(1000.0, 1000.0));
        let layout = DiagramLayout::compose(&metrics, 1.0, CANVAS);

        assert_eq!(layout.advance_box(), layout.glyph_box());
        for name in [
            "TopSideBearing",
            "BottomSideBearing",
            "LeftSideBearing",
            "RightSideBearing",
        ] {
            assert_eq!(find(&layout, name).measurement().length(), 0.0, "{name}");
        }
    }

    #[test]
    fn test_vertical_spans_scaled() {
        let metrics = GlyphMetrics::new(Size::new(600.0, 700.0), 0.0, 50.0, Size::new(600.0, 600.0));
        let layout = DiagramLayout::compose(&metrics, 2.0, CANVAS);

        let top = find(&layout, "TopSideBearing").measurement();
        let height = find(&layout, "Height").measurement();
        let bottom = find(&layout, "BottomSideBearing").measurement();

        assert_approx_eq!(f32, top.length(), 100.0);
        assert_approx_eq!(f32, height.length(), 1200.0);
        assert_approx_eq!(f32, bottom.length(), 100.0);
        assert_eq!(top.end(), height.start());
        assert_eq!(height.end(), bottom.start());
    }

    #[test]
    fn test_left_side_positions() {
        let metrics = GlyphMetrics::new(Size::new(600.0, 1000.0), 50.0, 200.0, Size::new(500.0, 600.0));
        let layout = DiagramLayout::compose(&metrics, 0.5, CANVAS);
        let left = layout.advance_box().min_x();

        let top = find(&layout, "TopSideBearing");
        let height = find(&layout, "Height");
        assert_eq!(top.line_position(), left - 50.0);
        assert_eq!(height.line_position(), left - 30.0);

        let annotation = height.annotation();
        assert_eq!(annotation.anchor(), Point::new(left - 90.0, 360.0));
        assert_eq!(annotation.horizontal(), HorizontalAlignment::Right);
        assert_eq!(annotation.vertical(), VerticalAlignment::Center);
        assert_eq!(annotation.leader_offset(), Point::new(5.0, 5.0));

        let bottom = find(&layout, "BottomSideBearing");
        assert_eq!(bottom.annotation().anchor().y(), 110.0 + 375.0);
    }

    #[test]
    fn test_top_side_positions() {
        let metrics = GlyphMetrics::new(Size::new(600.0, 1000.0), 50.0, 200.0, Size::new(500.0, 600.0));
        let layout = DiagramLayout::compose(&metrics, 0.5, CANVAS);
        let line = layout.advance_box().min_y() - 50.0;

        let lsb = find(&layout, "LeftSideBearing");
        assert_eq!(lsb.line_position(), line);
        assert_eq!(lsb.annotation().anchor(), Point::new(210.0, line - 30.0));
        assert_eq!(lsb.annotation().leader_offset(), Point::new(-10.0, 10.0));

        let width = find(&layout, "Width");
        assert_eq!(width.line_position(), line + 20.0);
        assert_eq!(width.annotation().anchor(), Point::new(360.0, line - 60.0));
        assert_eq!(width.annotation().horizontal(), HorizontalAlignment::Center);

        let rsb = find(&layout, "RightSideBearing");
        assert_eq!(rsb.annotation().anchor(), Point::new(510.0, line - 30.0));
        assert_eq!(rsb.annotation().horizontal(), HorizontalAlignment::Left);
        assert_eq!(rsb.annotation().vertical(), VerticalAlignment::Bottom);
    }

    #[test]
    fn test_advance_measurements() {
        let metrics = GlyphMetrics::new(Size::new(600.0, 1000.0), 50.0, 200.0, Size::new(500.0, 600.0));
        let layout = DiagramLayout::compose(&metrics, 0.5, CANVAS);

        let height = find(&layout, "AdvanceHeight");
        assert_eq!(height.measurement().orientation(), Orientation::Vertical);
        assert_eq!(height.measurement().length(), 500.0);
        assert_eq!(height.line_position(), 560.0);
        assert_eq!(height.annotation().anchor(), Point::new(590.0, 360.0));

        let width = find(&layout, "AdvanceWidth");
        assert_eq!(width.measurement().orientation(), Orientation::Horizontal);
        assert_eq!(width.measurement().length(), 300.0);
        assert_eq!(width.line_position(), 660.0);
        assert_eq!(width.annotation().anchor(), Point::new(360.0, 690.0));
        assert_eq!(width.annotation().vertical(), VerticalAlignment::Top);
    }

    #[test]
    fn test_negative_bearing_kept() {
        let metrics = GlyphMetrics::new(Size::new(500.0, 1000.0), -20.0, 100.0, Size::new(560.0, 700.0));
        let layout = DiagramLayout::compose(&metrics, 1.0, CANVAS);

        let lsb = find(&layout, "LeftSideBearing").measurement();
        assert_eq!(lsb.length(), -20.0);
        assert!(layout.glyph_box().min_x() < layout.advance_box().min_x());
    }
}
