//! Stroke definitions for lines and outlines.
//!
//! Corners always use miter joins, the default of both canvas backends.
//!
//! ```
//! use caliper_core::{color::Color, draw::{StrokeCap, StrokeDefinition}};
//!
//! let leader = StrokeDefinition::solid(Color::new("gray").unwrap(), 1.0).with_cap(StrokeCap::Round);
//! assert_eq!(leader.cap().to_string(), "round");
//! ```

use std::fmt;

use crate::color::Color;

/// Shape of the two ends of an open stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Ends exactly at the endpoint
    #[default]
    Butt,
    /// Half-disc past the endpoint
    Round,
    /// Half-square past the endpoint
    Square,
}

impl fmt::Display for StrokeCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        })
    }
}

/// Color, width and cap of a stroked path. Width is in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// A butt-capped stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::Butt,
        }
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}
