//! Drawing primitives for glyph metric diagrams.
//!
//! Everything here paints through the [`Canvas`] trait, so the same
//! measurement code targets both raster and vector output.

mod annotation;
mod arrow;
mod canvas;
mod measurement;
mod stroke;
mod text;

pub use annotation::{AnnotationPosition, HorizontalAlignment, VerticalAlignment};
pub use arrow::{ARROW_HEAD_HEIGHT, ARROW_HEAD_WIDTH, arrow, arrow_head_template};
pub use canvas::Canvas;
pub use measurement::{Measurement, MeasurementDefinition, MeasurementDrawer, Orientation};
pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{Label, LabelDefinition};
