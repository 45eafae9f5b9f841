use crate::geometry::{Point, Size};

/// The axis along which a pager slides between its pages.
///
/// Fixed per pager instance. It selects which scroll coordinate is read
/// and which dimension of the viewport (width or height) is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Pages slide left to right.
    /// Paging axis: x / width
    #[default]
    Horizontal,

    /// Pages slide top to bottom.
    /// Paging axis: y / height
    Vertical,
}

impl Direction {
    /// Returns the other direction.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// Returns true if pages slide horizontally.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Horizontal)
    }

    /// Returns true if pages slide vertically.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Vertical)
    }

    /// Length of `size` along the paging axis.
    #[inline]
    pub fn extent_of(self, size: Size) -> f32 {
        match self {
            Direction::Horizontal => size.width,
            Direction::Vertical => size.height,
        }
    }

    /// Component of `point` along the paging axis.
    #[inline]
    pub fn offset_of(self, point: Point) -> f32 {
        match self {
            Direction::Horizontal => point.x,
            Direction::Vertical => point.y,
        }
    }

    /// A point lying on the paging axis, zero on the cross axis.
    #[inline]
    pub fn point_along(self, value: f32) -> Point {
        match self {
            Direction::Horizontal => Point::new(value, 0.0),
            Direction::Vertical => Point::new(0.0, value),
        }
    }

    /// A size spanning `value` along the paging axis and zero across it.
    #[inline]
    pub fn size_along(self, value: f32) -> Size {
        match self {
            Direction::Horizontal => Size::new(value, 0.0),
            Direction::Vertical => Size::new(0.0, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_reads_width_and_x() {
        let dir = Direction::Horizontal;
        assert_eq!(dir.extent_of(Size::new(320.0, 640.0)), 320.0);
        assert_eq!(dir.offset_of(Point::new(12.0, 40.0)), 12.0);
        assert_eq!(dir.point_along(50.0), Point::new(50.0, 0.0));
    }

    #[test]
    fn vertical_reads_height_and_y() {
        let dir = Direction::Vertical;
        assert_eq!(dir.extent_of(Size::new(320.0, 640.0)), 640.0);
        assert_eq!(dir.offset_of(Point::new(12.0, 40.0)), 40.0);
        assert_eq!(dir.size_along(90.0), Size::new(0.0, 90.0));
        assert_eq!(dir.cross(), Direction::Horizontal);
    }
}
