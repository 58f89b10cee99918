//! Annotation anchoring for measurement labels.
//!
//! An [`AnnotationPosition`] says where a label goes and which side of its
//! bounding box touches the anchor. The leader line connecting the label to
//! its measurement starts at the anchor shifted by a small offset, so it
//! clears the label text.

use crate::geometry::{Point, Size};

/// Which vertical edge of the label box sits on the anchor's X.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Label extends to the right of the anchor
    Left,
    /// Label is centred on the anchor
    #[default]
    Center,
    /// Label extends to the left of the anchor
    Right,
}

/// Which horizontal edge of the label box sits on the anchor's Y.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Label extends below the anchor
    Top,
    /// Label is centred on the anchor
    #[default]
    Center,
    /// Label extends above the anchor
    Bottom,
}

/// Placement of a measurement label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationPosition {
    anchor: Point,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
    leader_offset: Point,
}

impl AnnotationPosition {
    /// Creates a label placement.
    ///
    /// # Arguments
    ///
    /// * `anchor` - Reference point in canvas coordinates
    /// * `horizontal` - Horizontal alignment of the label box against the anchor
    /// * `vertical` - Vertical alignment of the label box against the anchor
    /// * `leader_offset` - Offset from the anchor to the start of the leader line
    pub fn new(
        anchor: Point,
        horizontal: HorizontalAlignment,
        vertical: VerticalAlignment,
        leader_offset: Point,
    ) -> Self {
        Self {
            anchor,
            horizontal,
            vertical,
            leader_offset,
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn horizontal(&self) -> HorizontalAlignment {
        self.horizontal
    }

    pub fn vertical(&self) -> VerticalAlignment {
        self.vertical
    }

    pub fn leader_offset(&self) -> Point {
        self.leader_offset
    }

    /// Where the leader line towards the measurement begins.
    pub fn leader_start(&self) -> Point {
        self.anchor.add_point(self.leader_offset)
    }

    /// Returns the top-left corner of a label box of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// # use caliper_core::{draw::{AnnotationPosition, HorizontalAlignment, VerticalAlignment}, geometry::{Point, Size}};
    /// let position = AnnotationPosition::new(
    ///     Point::new(100.0, 100.0),
    ///     HorizontalAlignment::Right,
    ///     VerticalAlignment::Center,
    ///     Point::default(),
    /// );
    /// assert_eq!(position.place(Size::new(40.0, 10.0)), Point::new(60.0, 95.0));
    /// ```
    pub fn place(&self, size: Size) -> Point {
        let x = match self.horizontal {
            HorizontalAlignment::Left => self.anchor.x(),
            HorizontalAlignment::Center => self.anchor.x() - size.width() / 2.0,
            HorizontalAlignment::Right => self.anchor.x() - size.width(),
        };
        let y = match self.vertical {
            VerticalAlignment::Top => self.anchor.y(),
            VerticalAlignment::Center => self.anchor.y() - size.height() / 2.0,
            VerticalAlignment::Bottom => self.anchor.y() - size.height(),
        };
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> AnnotationPosition {
        AnnotationPosition::new(Point::new(200.0, 300.0), horizontal, vertical, Point::new(5.0, 5.0))
    }

    #[test]
    fn test_place_horizontal_alignments() {
        let size = Size::new(40.0, 10.0);
        let left = position(HorizontalAlignment::Left, VerticalAlignment::Top).place(size);
        let center = position(HorizontalAlignment::Center, VerticalAlignment::Top).place(size);
        let right = position(HorizontalAlignment::Right, VerticalAlignment::Top).place(size);

        assert_eq!(left.x(), 200.0);
        assert_eq!(center.x(), 180.0);
        assert_eq!(right.x(), 160.0);
    }

    #[test]
    fn test_place_vertical_alignments() {
        let size = Size::new(40.0, 10.0);
        let top = position(HorizontalAlignment::Left, VerticalAlignment::Top).place(size);
        let center = position(HorizontalAlignment::Left, VerticalAlignment::Center).place(size);
        let bottom = position(HorizontalAlignment::Left, VerticalAlignment::Bottom).place(size);

        assert_eq!(top.y(), 300.0);
        assert_eq!(center.y(), 295.0);
        assert_eq!(bottom.y(), 290.0);
    }

    #[test]
    fn test_place_zero_size_is_anchor() {
        let p = position(HorizontalAlignment::Center, VerticalAlignment::Bottom);
        assert_eq!(p.place(Size::default()), p.anchor());
    }

    #[test]
    fn test_leader_start() {
        let p = AnnotationPosition::new(
            Point::new(10.0, 20.0),
            HorizontalAlignment::Left,
            VerticalAlignment::Bottom,
            Point::new(10.0, -10.0),
        );
        assert_eq!(p.leader_start(), Point::new(20.0, 10.0));
        assert_eq!(p.leader_offset(), Point::new(10.0, -10.0));
    }

    #[test]
    fn test_alignment_defaults() {
        assert_eq!(HorizontalAlignment::default(), HorizontalAlignment::Center);
        assert_eq!(VerticalAlignment::default(), VerticalAlignment::Center);
    }
}
