// Copyright 2026 the Larch Authors
// SPDX-License-Identifier: Apache-2.0

//! Integer geometry primitives.

/// A point in window coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A width and height pair.
///
/// Either extent may be zero; a zero preferred size means "use whatever the
/// container gives".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// An axis-aligned rectangle.
///
/// Containment is half-open: a rectangle covers `[x, x + width)` horizontally
/// and `[y, y + height)` vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl Size {
    pub const ZERO: Size = Size::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }

    /// Returns `true` if either extent is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Size {
        Size { width, height }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Point {
        Point { x, y }
    }
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: impl Into<Point>, size: impl Into<Size>) -> Rect {
        let origin = origin.into();
        let size = size.into();
        Rect::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The first column to the right of the rectangle.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The first row below the rectangle.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Half-open containment test.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        x >= left
            && x < left + i64::from(self.width)
            && y >= top
            && y < top + i64::from(self.height)
    }

    /// Returns this rectangle with negative extents clamped to zero.
    #[must_use]
    pub fn clamped(self) -> Rect {
        Rect {
            width: self.width.max(0),
            height: self.height.max(0),
            ..self
        }
    }

    /// Shrink by the given amount on each side; the result is clamped.
    #[must_use]
    pub fn inset(self, left: i32, top: i32, right: i32, bottom: i32) -> Rect {
        Rect::new(
            self.x + left,
            self.y + top,
            self.width - left - right,
            self.height - top - bottom,
        )
        .clamped()
    }

    #[must_use]
    pub fn inset_uniform(self, amount: i32) -> Rect {
        self.inset(amount, amount, amount, amount)
    }

    #[must_use]
    pub fn with_origin(self, origin: impl Into<Point>) -> Rect {
        Rect::from_origin_size(origin, self.size())
    }

    #[must_use]
    pub fn with_size(self, size: impl Into<Size>) -> Rect {
        Rect::from_origin_size(self.origin(), size)
    }
}

/// The two directions a one-dimensional layout can run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Extent along this axis.
    pub fn major(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent across this axis.
    pub fn minor(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Position of `rect` along this axis.
    pub fn major_pos(self, rect: Rect) -> i32 {
        match self {
            Axis::Horizontal => rect.x,
            Axis::Vertical => rect.y,
        }
    }

    pub fn minor_pos(self, rect: Rect) -> i32 {
        match self {
            Axis::Horizontal => rect.y,
            Axis::Vertical => rect.x,
        }
    }

    /// Build a rectangle from major/minor position and extent.
    pub fn pack(self, major_pos: i32, minor_pos: i32, major: i32, minor: i32) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(major_pos, minor_pos, major, minor),
            Axis::Vertical => Rect::new(minor_pos, major_pos, minor, major),
        }
    }

    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(10, 20, 30, 40);
        assert!(r.contains(10, 20));
        assert!(r.contains(39, 59));
        assert!(!r.contains(40, 20));
        assert!(!r.contains(10, 60));
        assert!(!r.contains(9, 20));
        assert!(!r.contains(10, 19));
    }

    #[test]
    fn degenerate_rect_contains_nothing() {
        let r = Rect::new(5, 5, 0, 10);
        assert!(!r.contains(5, 5));
        assert!(r.is_empty());
    }

    #[test]
    fn contains_does_not_overflow() {
        let r = Rect::new(i32::MAX - 1, 0, 10, 10);
        assert!(r.contains(i32::MAX - 1, 0));
        assert!(r.contains(i32::MAX, 9));
    }

    #[test]
    fn clamping_and_inset() {
        assert_eq!(Rect::new(0, 0, -5, 3).clamped(), Rect::new(0, 0, 0, 3));
        assert_eq!(
            Rect::new(0, 0, 100, 50).inset(10, 35, 10, 10),
            Rect::new(10, 35, 80, 5)
        );
        assert_eq!(Rect::new(0, 0, 10, 10).inset_uniform(8), Rect::new(8, 8, 0, 0));
    }

    #[test]
    fn axis_pack_round_trips() {
        let r = Axis::Vertical.pack(7, 3, 20, 40);
        assert_eq!(r, Rect::new(3, 7, 40, 20));
        assert_eq!(Axis::Vertical.major(r.size()), 20);
        assert_eq!(Axis::Vertical.minor(r.size()), 40);
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
    }
}
