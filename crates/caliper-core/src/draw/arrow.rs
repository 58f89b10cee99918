//! Arrow heads for measurement lines.
//!
//! A single immutable template is rotated and translated into place for
//! every arrow head; the template itself is never modified.

use std::sync::OnceLock;

use crate::geometry::{Path, Point, Transform};

/// Width of the arrow head's base.
pub const ARROW_HEAD_WIDTH: f32 = 8.0;
/// Distance from the apex to the base.
pub const ARROW_HEAD_HEIGHT: f32 = 8.0;

static ARROW_HEAD: OnceLock<Path> = OnceLock::new();

/// Returns the arrow head template.
///
/// An isosceles triangle with its apex at the origin and its base
/// [`ARROW_HEAD_HEIGHT`] units along +Y, [`ARROW_HEAD_WIDTH`] units wide.
/// Unrotated, it marks the upper end of a vertical line.
pub fn arrow_head_template() -> &'static Path {
    ARROW_HEAD.get_or_init(|| {
        let apex = Point::new(0.0, 0.0);
        let half_width = ARROW_HEAD_WIDTH / 2.0;

        let mut path = Path::new();
        path.move_to(apex);
        path.line_to(Point::new(apex.x() - half_width, apex.y() + ARROW_HEAD_HEIGHT));
        path.line_to(Point::new(apex.x() + half_width, apex.y() + ARROW_HEAD_HEIGHT));
        path.close();
        path
    })
}

/// Places an arrow head with its apex at `tip`, rotated by `radians`.
///
/// The template is rotated about its apex first and translated second, so
/// the apex always lands exactly on `tip`.
///
/// # Examples
///
/// ```
/// # use caliper_core::{draw::arrow, geometry::{PathSegment, Point}};
/// let head = arrow(Point::new(100.0, 40.0), std::f32::consts::PI);
/// assert_eq!(head.segments()[0], PathSegment::MoveTo(Point::new(100.0, 40.0)));
/// ```
pub fn arrow(tip: Point, radians: f32) -> Path {
    let transform = Transform::rotation(radians).then(Transform::translation(tip));
    arrow_head_template().transform(transform)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_template_shape() {
        let template = arrow_head_template();
        let bounds = template.bounds().expect("template has points");
        assert_eq!(bounds.width(), ARROW_HEAD_WIDTH);
        assert_eq!(bounds.height(), ARROW_HEAD_HEIGHT);
        assert_eq!(bounds.min_y(), 0.0);
        assert_eq!(bounds.center().x(), 0.0);
    }

    #[test]
    fn test_template_is_shared() {
        assert!(std::ptr::eq(arrow_head_template(), arrow_head_template()));
    }

    #[test]
    fn test_arrow_unrotated_body_below_tip() {
        let head = arrow(Point::new(10.0, 20.0), 0.0);
        let bounds = head.bounds().expect("arrow has points");
        assert_approx_eq!(f32, bounds.min_y(), 20.0);
        assert_approx_eq!(f32, bounds.max_y(), 28.0);
        assert_approx_eq!(f32, bounds.min_x(), 6.0);
        assert_approx_eq!(f32, bounds.max_x(), 14.0);
    }

    #[test]
    fn test_arrow_half_turn_body_above_tip() {
        let head = arrow(Point::new(10.0, 20.0), PI);
        let bounds = head.bounds().expect("arrow has points");
        assert_approx_eq!(f32, bounds.min_y(), 12.0, epsilon = 1e-4);
        assert_approx_eq!(f32, bounds.max_y(), 20.0, epsilon = 1e-4);
    }

    #[test]
    fn test_arrow_horizontal_angles() {
        // 3π/2 puts the body to the right of the tip (left end of a line)
        let start = arrow(Point::new(0.0, 0.0), 3.0 * PI / 2.0);
        let bounds = start.bounds().expect("arrow has points");
        assert_approx_eq!(f32, bounds.min_x(), 0.0, epsilon = 1e-4);
        assert_approx_eq!(f32, bounds.max_x(), 8.0, epsilon = 1e-4);

        // π/2 puts the body to the left of the tip (right end of a line)
        let end = arrow(Point::new(0.0, 0.0), FRAC_PI_2);
        let bounds = end.bounds().expect("arrow has points");
        assert_approx_eq!(f32, bounds.min_x(), -8.0, epsilon = 1e-4);
        assert_approx_eq!(f32, bounds.max_x(), 0.0, epsilon = 1e-4);
    }
}

#[cfg(test)]
mod proptest_tests {
    use std::f32::consts::TAU;

    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::geometry::PathSegment;

    fn segment_points(segment: &PathSegment) -> Vec<Point> {
        match *segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => vec![p],
            PathSegment::QuadTo(c, p) => vec![c, p],
            PathSegment::CubicTo(c1, c2, p) => vec![c1, c2, p],
            PathSegment::Close => Vec::new(),
        }
    }

    /// Rotating by a full extra turn yields the same arrow head.
    fn check_arrow_rotation_is_periodic(tip: Point, angle: f32) -> Result<(), TestCaseError> {
        let a = arrow(tip, angle);
        let b = arrow(tip, angle + TAU);

        prop_assert_eq!(a.segments().len(), b.segments().len());
        for (sa, sb) in a.segments().iter().zip(b.segments()) {
            for (pa, pb) in segment_points(sa).into_iter().zip(segment_points(sb)) {
                prop_assert!(approx_eq!(f32, pa.x(), pb.x(), epsilon = 0.01));
                prop_assert!(approx_eq!(f32, pa.y(), pb.y(), epsilon = 0.01));
            }
        }
        Ok(())
    }

    /// The apex always lands on the tip, whatever the rotation.
    fn check_arrow_apex_on_tip(tip: Point, angle: f32) -> Result<(), TestCaseError> {
        let head = arrow(tip, angle);
        let PathSegment::MoveTo(apex) = head.segments()[0] else {
            return Err(TestCaseError::fail("arrow head must start with its apex"));
        };
        prop_assert!(approx_eq!(f32, apex.x(), tip.x(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, apex.y(), tip.y(), epsilon = 0.01));
        Ok(())
    }

    proptest! {
        #[test]
        fn arrow_rotation_is_periodic(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            angle in -TAU..TAU,
        ) {
            check_arrow_rotation_is_periodic(Point::new(x, y), angle)?;
        }

        #[test]
        fn arrow_apex_on_tip(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            angle in -TAU..TAU,
        ) {
            check_arrow_apex_on_tip(Point::new(x, y), angle)?;
        }
    }
}
