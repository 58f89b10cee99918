//! The font seam: glyph metrics and outlines.
//!
//! Caliper never parses font files itself. Everything it needs from a font
//! goes through the [`GlyphSource`] trait: per-glyph [`GlyphMetrics`] in
//! design units and optional [`GlyphOutline`]s. The `caliper-font` crate
//! provides the implementation backed by real font files.

use crate::{
    error::GlyphError,
    geometry::{Bounds, Path, Size},
};

/// Layout metrics of a single glyph, in font design units.
///
/// The right and bottom side bearings are derived from the advance, the
/// leading bearing and the ink size, so the three spans along each axis
/// always add up to the advance:
///
/// ```text
/// left_side_bearing + width + right_side_bearing == advance_width
/// top_side_bearing + height + bottom_side_bearing == advance_height
/// ```
///
/// Zero and negative values are legal (e.g. glyphs whose ink overhangs the
/// advance box) and are kept as-is.
///
/// # Examples
///
/// ```
/// # use caliper_core::{font::GlyphMetrics, geometry::Size};
/// let metrics = GlyphMetrics::new(Size::new(600.0, 1000.0), 50.0, 200.0, Size::new(500.0, 600.0));
/// assert_eq!(metrics.right_side_bearing(), 50.0);
/// assert_eq!(metrics.bottom_side_bearing(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphMetrics {
    advance: Size,
    left_side_bearing: f32,
    top_side_bearing: f32,
    ink: Size,
}

impl GlyphMetrics {
    /// Creates glyph metrics.
    ///
    /// # Arguments
    ///
    /// * `advance` - Advance width and advance height
    /// * `left_side_bearing` - Gap between the advance box's left edge and the ink
    /// * `top_side_bearing` - Gap between the advance box's top edge and the ink
    /// * `ink` - Width and height of the glyph's ink bounding box
    pub fn new(advance: Size, left_side_bearing: f32, top_side_bearing: f32, ink: Size) -> Self {
        Self {
            advance,
            left_side_bearing,
            top_side_bearing,
            ink,
        }
    }

    pub fn advance_width(&self) -> f32 {
        self.advance.width()
    }

    pub fn advance_height(&self) -> f32 {
        self.advance.height()
    }

    pub fn left_side_bearing(&self) -> f32 {
        self.left_side_bearing
    }

    pub fn top_side_bearing(&self) -> f32 {
        self.top_side_bearing
    }

    /// Width of the ink bounding box
    pub fn width(&self) -> f32 {
        self.ink.width()
    }

    /// Height of the ink bounding box
    pub fn height(&self) -> f32 {
        self.ink.height()
    }

    pub fn right_side_bearing(&self) -> f32 {
        self.advance.width() - self.left_side_bearing - self.ink.width()
    }

    pub fn bottom_side_bearing(&self) -> f32 {
        self.advance.height() - self.top_side_bearing - self.ink.height()
    }
}

/// A glyph's outline together with its ink bounds.
///
/// Both are in design units with the Y axis pointing up and the origin at
/// the pen position on the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutline {
    path: Path,
    ink_bounds: Bounds,
}

impl GlyphOutline {
    pub fn new(path: Path, ink_bounds: Bounds) -> Self {
        Self { path, ink_bounds }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ink bounds; `max_y` is the top of the ink since Y points up.
    pub fn ink_bounds(&self) -> Bounds {
        self.ink_bounds
    }
}

/// A font able to answer per-glyph questions.
///
/// Implementations are immutable once loaded; a render only borrows them.
pub trait GlyphSource {
    /// Design units per em square.
    fn units_per_em(&self) -> u16;

    /// Looks up the layout metrics of the glyph mapped to `ch`.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::Missing`] if the font has no glyph for `ch`.
    fn glyph_metrics(&self, ch: char) -> Result<GlyphMetrics, GlyphError>;

    /// Returns the outline of the glyph mapped to `ch`, or `None` for glyphs
    /// without ink such as the space.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::Missing`] if the font has no glyph for `ch`.
    fn glyph_outline(&self, ch: char) -> Result<Option<GlyphOutline>, GlyphError>;
}

/// Converts font design units to canvas pixels.
///
/// `font_size` is in points; a point is 1/72 inch, so one em covers
/// `font_size * dpi / 72` pixels.
///
/// # Examples
///
/// ```
/// # use caliper_core::font::scale_factor;
/// // 72pt at 72dpi on a 1000 unit em: one design unit per 1/1000 of 72px
/// assert_eq!(scale_factor(72.0, 72.0, 1000), 0.072);
/// ```
pub fn scale_factor(font_size: f32, dpi: f32, units_per_em: u16) -> f32 {
    font_size * dpi / (72.0 * f32::from(units_per_em))
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    //! A synthetic font whose glyphs are plain boxes, for tests that must
    //! not depend on installed fonts.

    use super::*;
    use crate::geometry::Point;

    /// Every printable character is a 500x600 box inside a 600x1000 advance,
    /// the space has no ink and control characters are missing.
    pub struct BoxFont;

    impl BoxFont {
        pub const ADVANCE: Size = Size::new(600.0, 1000.0);
        pub const INK: Size = Size::new(500.0, 600.0);
        pub const LEFT_SIDE_BEARING: f32 = 50.0;
        pub const TOP_SIDE_BEARING: f32 = 200.0;
    }

    impl GlyphSource for BoxFont {
        fn units_per_em(&self) -> u16 {
            1000
        }

        fn glyph_metrics(&self, ch: char) -> Result<GlyphMetrics, GlyphError> {
            if ch.is_control() {
                return Err(GlyphError::Missing { ch });
            }
            let ink = if ch == ' ' { Size::default() } else { Self::INK };
            Ok(GlyphMetrics::new(
                Self::ADVANCE,
                Self::LEFT_SIDE_BEARING,
                Self::TOP_SIDE_BEARING,
                ink,
            ))
        }

        fn glyph_outline(&self, ch: char) -> Result<Option<GlyphOutline>, GlyphError> {
            if ch.is_control() {
                return Err(GlyphError::Missing { ch });
            }
            if ch == ' ' {
                return Ok(None);
            }
            let ink_bounds = Bounds::new_from_top_left(
                Point::new(Self::LEFT_SIDE_BEARING, 0.0),
                Self::INK,
            );
            Ok(Some(GlyphOutline::new(ink_bounds.to_path(), ink_bounds)))
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::{testing::BoxFont, *};

    #[test]
    fn test_metrics_derived_bearings() {
        let metrics = GlyphMetrics::new(Size::new(1000.0, 1000.0), 0.0, 0.0, Size::new(1000.0, 1000.0));
        assert_eq!(metrics.right_side_bearing(), 0.0);
        assert_eq!(metrics.bottom_side_bearing(), 0.0);
    }

    #[test]
    fn test_metrics_negative_bearing_kept() {
        let metrics = GlyphMetrics::new(Size::new(500.0, 1000.0), -20.0, 100.0, Size::new(560.0, 700.0));
        assert_eq!(metrics.left_side_bearing(), -20.0);
        assert_eq!(metrics.right_side_bearing(), -40.0);
        assert_eq!(metrics.bottom_side_bearing(), 200.0);
    }

    #[test]
    fn test_scale_factor() {
        // 200pt at 96dpi on a 2048 unit em
        assert_approx_eq!(f32, scale_factor(200.0, 96.0, 2048), 0.130_208_33, epsilon = 1e-6);
        assert_approx_eq!(f32, scale_factor(72.0, 72.0, 1), 1.0);
    }

    #[test]
    fn test_box_font_missing_glyph() {
        let err = BoxFont.glyph_metrics('\u{7}').unwrap_err();
        assert_eq!(err, GlyphError::Missing { ch: '\u{7}' });
        assert_eq!(err.to_string(), "no glyph for '\\u{7}' in font");
    }

    #[test]
    fn test_box_font_space_has_no_outline() {
        assert!(BoxFont.glyph_outline(' ').unwrap().is_none());
        let metrics = BoxFont.glyph_metrics(' ').unwrap();
        assert_eq!(metrics.width(), 0.0);
        assert_eq!(metrics.advance_width(), 600.0);
    }
}
