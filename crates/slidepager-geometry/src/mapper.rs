//! Conversion between raw scroll offsets and slot positions.
//!
//! A pager's scroll content is always three viewports long along the paging
//! axis. The mapper answers two questions about it: which slot does an offset
//! fall into, and where does a slot (plus some extra displacement) start.
//!
//! Every comparison goes through a tolerance so that offsets which drift by a
//! fraction of a pixel after repeated re-layouts still land on the slot they
//! were aimed at. With tolerance `ε` and extent `e`:
//! - Left iff `offset <= ε`
//! - Right iff `offset >= 2e - ε`
//! - resting at a slot iff `|offset - slot_offset| <= ε`
//!
//! An extent of `2ε` or less is treated as "not laid out yet", which keeps the
//! three ranges disjoint.

use crate::direction::Direction;
use crate::geometry::{Point, Size};
use crate::position::Position;

/// Default comparison tolerance in logical pixels.
pub const DEFAULT_OFFSET_TOLERANCE: f32 = 0.01;

/// Number of viewports laid out along the paging axis.
pub const PAGE_COUNT: f32 = 3.0;

/// Stateless mapper for one viewport extent along one direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMapper {
    extent: f32,
    direction: Direction,
    tolerance: f32,
}

impl ViewportMapper {
    /// Creates a mapper using [`DEFAULT_OFFSET_TOLERANCE`].
    pub fn new(extent: f32, direction: Direction) -> Self {
        Self {
            extent,
            direction,
            tolerance: DEFAULT_OFFSET_TOLERANCE,
        }
    }

    /// Creates a mapper from the viewport bounds, reading the extent along `direction`.
    pub fn from_bounds(bounds: Size, direction: Direction) -> Self {
        Self::new(direction.extent_of(bounds), direction)
    }

    /// Replaces the comparison tolerance. Non-finite or negative values fall back to zero.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = if tolerance.is_finite() {
            tolerance.max(0.0)
        } else {
            0.0
        };
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Whether the viewport has a usable extent.
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        self.extent.is_finite() && self.extent > 2.0 * self.tolerance && self.extent > 0.0
    }

    /// The viewport extent, or zero before a usable layout.
    #[inline]
    pub fn extent(&self) -> f32 {
        if self.is_laid_out() {
            self.extent
        } else {
            0.0
        }
    }

    /// Scroll offset at which `position` starts, displaced by `extra`.
    #[inline]
    pub fn offset_for(&self, position: Position, extra: f32) -> f32 {
        self.extent() * position.multiplier() + extra
    }

    /// [`offset_for`](Self::offset_for) as a point on the paging axis.
    #[inline]
    pub fn point_for(&self, position: Position, extra: f32) -> Point {
        self.direction.point_along(self.offset_for(position, extra))
    }

    /// Scroll offset of the Right threshold.
    #[inline]
    pub fn right_threshold(&self) -> f32 {
        self.offset_for(Position::Right, 0.0)
    }

    /// Total scrollable length along the paging axis.
    #[inline]
    pub fn content_extent(&self) -> f32 {
        self.extent() * PAGE_COUNT
    }

    /// Content size handed to the scroll surface: three viewports along the
    /// paging axis, zero across it.
    pub fn content_size(&self) -> Size {
        self.direction.size_along(self.content_extent())
    }

    /// Reads the paging-axis component of a scroll surface offset.
    #[inline]
    pub fn axis_offset(&self, point: Point) -> f32 {
        self.direction.offset_of(point)
    }

    /// Classifies an offset: at or past either edge yields that edge, anything
    /// strictly between yields Center.
    pub fn classify(&self, offset: f32) -> Position {
        if !self.is_laid_out() {
            return Position::Center;
        }
        if self.reached_left(offset) {
            Position::Left
        } else if self.reached_right(offset) {
            Position::Right
        } else {
            Position::Center
        }
    }

    /// Classifies an offset by which side of Center it lies on, yielding
    /// Center only when resting there.
    pub fn classify_leaving_center(&self, offset: f32) -> Position {
        if !self.is_laid_out() {
            return Position::Center;
        }
        let center = self.offset_for(Position::Center, 0.0);
        if offset > center + self.tolerance {
            Position::Right
        } else if offset < center - self.tolerance {
            Position::Left
        } else {
            Position::Center
        }
    }

    #[inline]
    pub fn reached_left(&self, offset: f32) -> bool {
        self.is_laid_out() && offset <= self.offset_for(Position::Left, 0.0) + self.tolerance
    }

    #[inline]
    pub fn reached_right(&self, offset: f32) -> bool {
        self.is_laid_out() && offset >= self.right_threshold() - self.tolerance
    }

    /// Whether `offset` rests on the leading edge of `position`.
    #[inline]
    pub fn is_at(&self, offset: f32, position: Position) -> bool {
        self.is_laid_out() && (offset - self.offset_for(position, 0.0)).abs() <= self.tolerance
    }
}

#[cfg(test)]
#[path = "tests/mapper_tests.rs"]
mod tests;
