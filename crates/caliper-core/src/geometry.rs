//! Geometric primitives for glyph diagrams.
//!
//! This module provides the geometric types used throughout Caliper for
//! positioning measurements, labels and glyph outlines on a canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate (also used as an offset vector)
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangle defined by minimum and maximum coordinates
//! - [`Insets`] - Padding/margin values for four sides
//! - [`Transform`] - A 2D affine transform
//! - [`Path`] - A sequence of outline commands (lines and curves)
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner of the canvas
//! - **Y-axis**: Increases downward
//!
//! Glyph outlines coming from a font are in design units with Y pointing up;
//! they are flipped with [`Transform::scale`] before being drawn.

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use caliper_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates.
///
/// Bounds built from a negative [`Size`] keep `max < min`; nothing here
/// normalizes them, so degenerate glyph metrics survive into the drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caliper_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(50.0, 30.0));
    ///
    /// let moved = bounds.translate(Point::new(100.0, 50.0));
    /// assert_eq!(moved.min_x(), 110.0);
    /// assert_eq!(moved.min_y(), 70.0);
    /// assert_eq!(moved.width(), 50.0);
    /// ```
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Expands the bounds by adding insets.
    ///
    /// This decreases the minimum coordinates by left/top insets and increases
    /// the maximum coordinates by right/bottom insets.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }

    /// Returns the closed outline of this rectangle, clockwise from the top-left corner.
    pub fn to_path(self) -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(self.min_x, self.min_y));
        path.line_to(Point::new(self.max_x, self.min_y));
        path.line_to(Point::new(self.max_x, self.max_y));
        path.line_to(Point::new(self.min_x, self.max_y));
        path.close();
        path
    }
}

/// Represents spacing around an element (padding, margin, etc.)
/// with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the top inset value
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset value
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset value
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset value
    pub fn left(self) -> f32 {
        self.left
    }
}

/// A 2D affine transform.
///
/// Stored as the matrix
///
/// ```text
/// | sx  kx  tx |
/// | ky  sy  ty |
/// ```
///
/// so that `x' = sx*x + kx*y + tx` and `y' = ky*x + sy*y + ty`.
///
/// Transforms compose with [`Transform::then`]: `a.then(b)` applies `a`
/// first and `b` second.
///
/// # Examples
///
/// ```
/// # use caliper_core::geometry::{Point, Transform};
/// let t = Transform::rotation(std::f32::consts::FRAC_PI_2)
///     .then(Transform::translation(Point::new(10.0, 0.0)));
///
/// let p = t.apply(Point::new(1.0, 0.0));
/// assert!((p.x() - 10.0).abs() < 1e-6);
/// assert!((p.y() - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    sx: f32,
    kx: f32,
    tx: f32,
    ky: f32,
    sy: f32,
    ty: f32,
}

impl Transform {
    /// Returns the identity transform
    pub fn identity() -> Self {
        Self {
            sx: 1.0,
            kx: 0.0,
            tx: 0.0,
            ky: 0.0,
            sy: 1.0,
            ty: 0.0,
        }
    }

    /// Returns a rotation about the origin by `radians`.
    ///
    /// Positive angles rotate counter-clockwise in the mathematical sense
    /// (`x' = x cos - y sin`, `y' = x sin + y cos`). With the canvas Y axis
    /// pointing down, that appears clockwise on screen.
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            sx: cos,
            kx: -sin,
            tx: 0.0,
            ky: sin,
            sy: cos,
            ty: 0.0,
        }
    }

    /// Returns a translation by the given offset
    pub fn translation(offset: Point) -> Self {
        Self {
            tx: offset.x(),
            ty: offset.y(),
            ..Self::identity()
        }
    }

    /// Returns a non-uniform scale about the origin
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            sx,
            sy,
            ..Self::identity()
        }
    }

    /// Returns the transform that applies `self` first and `next` second
    pub fn then(self, next: Transform) -> Self {
        Self {
            sx: next.sx * self.sx + next.kx * self.ky,
            kx: next.sx * self.kx + next.kx * self.sy,
            tx: next.sx * self.tx + next.kx * self.ty + next.tx,
            ky: next.ky * self.sx + next.sy * self.ky,
            sy: next.ky * self.kx + next.sy * self.sy,
            ty: next.ky * self.tx + next.sy * self.ty + next.ty,
        }
    }

    /// Maps a point through this transform
    pub fn apply(self, point: Point) -> Point {
        Point::new(
            self.sx * point.x() + self.kx * point.y() + self.tx,
            self.ky * point.x() + self.sy * point.y() + self.ty,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// A single outline command of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic Bézier curve: control point, end point
    QuadTo(Point, Point),
    /// Cubic Bézier curve: first control, second control, end point
    CubicTo(Point, Point, Point),
    Close,
}

impl PathSegment {
    fn map(self, transform: Transform) -> Self {
        match self {
            Self::MoveTo(p) => Self::MoveTo(transform.apply(p)),
            Self::LineTo(p) => Self::LineTo(transform.apply(p)),
            Self::QuadTo(c, p) => Self::QuadTo(transform.apply(c), transform.apply(p)),
            Self::CubicTo(c1, c2, p) => Self::CubicTo(
                transform.apply(c1),
                transform.apply(c2),
                transform.apply(p),
            ),
            Self::Close => Self::Close,
        }
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        let points: [Option<Point>; 3] = match *self {
            Self::MoveTo(p) | Self::LineTo(p) => [Some(p), None, None],
            Self::QuadTo(c, p) => [Some(c), Some(p), None],
            Self::CubicTo(c1, c2, p) => [Some(c1), Some(c2), Some(p)],
            Self::Close => [None, None, None],
        };
        points.into_iter().flatten()
    }
}

/// An outline made of lines and Bézier curves.
///
/// Paths are plain values: transforming one returns a new path and leaves
/// the original untouched, so shared templates (such as the arrow head) are
/// never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty path
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Point) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.segments.push(PathSegment::LineTo(point));
    }

    pub fn quad_to(&mut self, control: Point, point: Point) {
        self.segments.push(PathSegment::QuadTo(control, point));
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, point: Point) {
        self.segments
            .push(PathSegment::CubicTo(control1, control2, point));
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    /// Appends all segments of another path to this one
    pub fn extend(&mut self, other: Path) {
        self.segments.extend(other.segments);
    }

    /// Returns the outline commands of this path
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true if the path holds no commands
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the bounds of every point in the path, control points included.
    ///
    /// Returns `None` for a path without points.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.segments.iter().flat_map(PathSegment::points);
        let first = points.next()?;
        let start = Bounds::new_from_top_left(first, Size::default());
        Some(points.fold(start, |bounds, p| {
            bounds.merge(&Bounds::new_from_top_left(p, Size::default()))
        }))
    }

    /// Returns a copy of this path with every point mapped through `transform`
    pub fn transform(&self, transform: Transform) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|segment| segment.map(transform))
                .collect(),
        }
    }

    /// Returns a copy of this path moved by `offset`
    pub fn translate(&self, offset: Point) -> Self {
        self.transform(Transform::translation(offset))
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_add_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        assert_eq!(p1.add_point(p2), Point::new(7.0, 11.0));
        assert_eq!(p1.sub_point(p2), Point::new(3.0, 5.0));
    }

    #[test]
    fn test_point_midpoint() {
        let midpoint = Point::new(0.0, 0.0).midpoint(Point::new(4.0, 6.0));
        assert_eq!(midpoint, Point::new(2.0, 3.0));
    }

    #[test]
    fn test_size_scale() {
        let size = Size::new(10.0, 20.0);
        assert_eq!(size.scale(2.0), Size::new(20.0, 40.0));
        assert_eq!(size.scale(0.5), Size::new(5.0, 10.0));
        assert_eq!(size.scale(0.0), Size::default());
        assert_eq!(size.scale(-1.0), Size::new(-10.0, -20.0));
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(360.0, 360.0), Size::new(200.0, 100.0));
        assert_eq!(bounds.min_x(), 260.0);
        assert_eq!(bounds.min_y(), 310.0);
        assert_eq!(bounds.max_x(), 460.0);
        assert_eq!(bounds.max_y(), 410.0);
        assert_eq!(bounds.center(), Point::new(360.0, 360.0));
    }

    #[test]
    fn test_bounds_new_from_top_left_negative_size() {
        // Negative sizes are kept as-is
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(-4.0, -2.0));
        assert_eq!(bounds.max_x(), 6.0);
        assert_eq!(bounds.max_y(), 8.0);
        assert_eq!(bounds.width(), -4.0);
        assert_eq!(bounds.to_size(), Size::new(-4.0, -2.0));
    }

    #[test]
    fn test_bounds_merge() {
        let b1 = Bounds::new_from_top_left(Point::new(1.0, 2.0), Size::new(4.0, 4.0));
        let b2 = Bounds::new_from_top_left(Point::new(3.0, 0.0), Size::new(5.0, 4.0));

        let merged = b1.merge(&b2);
        assert_eq!(merged.min_point(), Point::new(1.0, 0.0));
        assert_eq!(merged.max_x(), 8.0);
        assert_eq!(merged.max_y(), 6.0);
    }

    #[test]
    fn test_bounds_add_padding() {
        let bounds = Bounds::new_from_top_left(Point::new(2.0, 3.0), Size::new(4.0, 5.0));
        let padded = bounds.add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(padded.min_x(), -2.0);
        assert_eq!(padded.min_y(), 2.0);
        assert_eq!(padded.max_x(), 8.0);
        assert_eq!(padded.max_y(), 11.0);
    }

    #[test]
    fn test_bounds_to_path() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 5.0));
        let path = bounds.to_path();
        assert_eq!(path.segments().len(), 5);
        assert_eq!(path.segments()[2], PathSegment::LineTo(Point::new(10.0, 5.0)));
        assert_eq!(path.segments()[4], PathSegment::Close);
        assert_eq!(path.bounds(), Some(bounds));
    }

    #[test]
    fn test_insets_uniform() {
        let insets = Insets::uniform(50.0);
        assert_eq!(insets.top(), 50.0);
        assert_eq!(insets.right(), 50.0);
        assert_eq!(insets.bottom(), 50.0);
        assert_eq!(insets.left(), 50.0);
    }

    #[test]
    fn test_transform_identity() {
        let p = Point::new(3.0, -7.0);
        assert_eq!(Transform::identity().apply(p), p);
        assert_eq!(Transform::default(), Transform::identity());
    }

    #[test]
    fn test_transform_rotation_quarter_turns() {
        let p = Transform::rotation(FRAC_PI_2).apply(Point::new(0.0, 8.0));
        assert_approx_eq!(f32, p.x(), -8.0, epsilon = 1e-5);
        assert_approx_eq!(f32, p.y(), 0.0, epsilon = 1e-5);

        let p = Transform::rotation(PI).apply(Point::new(0.0, 8.0));
        assert_approx_eq!(f32, p.x(), 0.0, epsilon = 1e-5);
        assert_approx_eq!(f32, p.y(), -8.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_then_order() {
        let offset = Point::new(100.0, 50.0);
        let rotate_then_move =
            Transform::rotation(PI).then(Transform::translation(offset));
        let move_then_rotate =
            Transform::translation(offset).then(Transform::rotation(PI));

        // The origin ends up at the offset only when rotation happens first
        let origin = Point::default();
        let p = rotate_then_move.apply(origin);
        assert_approx_eq!(f32, p.x(), 100.0, epsilon = 1e-4);
        assert_approx_eq!(f32, p.y(), 50.0, epsilon = 1e-4);

        let q = move_then_rotate.apply(origin);
        assert_approx_eq!(f32, q.x(), -100.0, epsilon = 1e-4);
        assert_approx_eq!(f32, q.y(), -50.0, epsilon = 1e-4);
    }

    #[test]
    fn test_transform_scale_flips_y() {
        let p = Transform::scale(2.0, -2.0).apply(Point::new(3.0, 4.0));
        assert_eq!(p, Point::new(6.0, -8.0));
    }

    #[test]
    fn test_path_bounds_empty() {
        assert!(Path::new().bounds().is_none());
        assert!(Path::new().is_empty());
    }

    #[test]
    fn test_path_bounds_include_control_points() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0));
        path.quad_to(Point::new(5.0, -10.0), Point::new(10.0, 0.0));
        let bounds = path.bounds().expect("path has points");
        assert_eq!(bounds.min_y(), -10.0);
        assert_eq!(bounds.width(), 10.0);
    }

    #[test]
    fn test_path_translate_leaves_original() {
        let mut path = Path::new();
        path.move_to(Point::new(1.0, 1.0));
        path.line_to(Point::new(2.0, 2.0));

        let moved = path.translate(Point::new(10.0, 0.0));
        assert_eq!(moved.segments()[0], PathSegment::MoveTo(Point::new(11.0, 1.0)));
        assert_eq!(path.segments()[0], PathSegment::MoveTo(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_path_extend() {
        let mut a = Bounds::new_from_top_left(Point::default(), Size::new(1.0, 1.0)).to_path();
        let b = Bounds::new_from_top_left(Point::new(5.0, 5.0), Size::new(1.0, 1.0)).to_path();
        a.extend(b);
        assert_eq!(a.segments().len(), 10);
        let bounds = a.bounds().expect("path has points");
        assert_eq!(bounds.max_x(), 6.0);
    }
}
