//! Pager configuration.

use crate::error::PagerError;
use crate::surface::PagingTraits;
use slidepager_geometry::{Direction, DEFAULT_OFFSET_TOLERANCE};

/// Default number of scroll events processed per external event, counting
/// the ones the pager itself causes by moving the offset.
pub const DEFAULT_MAX_SCROLL_PASSES: usize = 8;

/// When the pager asks its host for a neighbor page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrefetchStrategy {
    /// Request once the offset reaches the Left or Right threshold.
    #[default]
    AtEdge,
    /// Request as soon as the offset leaves Center, so the neighbor is
    /// already attached while the user drags toward it.
    Eager,
}

/// Configuration for a [`PageController`](crate::PageController).
#[derive(Clone, Debug, PartialEq)]
pub struct PagerConfig {
    /// Paging axis.
    pub direction: Direction,
    /// Initial rubber-band setting forwarded to the surface.
    pub bounces: bool,
    pub prefetch: PrefetchStrategy,
    /// Tolerance in logical pixels for threshold comparisons.
    pub offset_tolerance: f32,
    /// Upper bound on scroll events drained per external event.
    pub max_scroll_passes: usize,
    /// Scroll surface traits applied once at construction.
    pub paging_traits: PagingTraits,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            bounces: true,
            prefetch: PrefetchStrategy::AtEdge,
            offset_tolerance: DEFAULT_OFFSET_TOLERANCE,
            max_scroll_passes: DEFAULT_MAX_SCROLL_PASSES,
            paging_traits: PagingTraits::default(),
        }
    }
}

impl PagerConfig {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_bounces(mut self, bounces: bool) -> Self {
        self.bounces = bounces;
        self
    }

    pub fn with_prefetch(mut self, prefetch: PrefetchStrategy) -> Self {
        self.prefetch = prefetch;
        self
    }

    pub fn with_offset_tolerance(mut self, tolerance: f32) -> Self {
        self.offset_tolerance = tolerance;
        self
    }

    pub fn with_max_scroll_passes(mut self, passes: usize) -> Self {
        self.max_scroll_passes = passes;
        self
    }

    /// Checks the numeric fields.
    pub fn validate(&self) -> Result<(), PagerError> {
        if !self.offset_tolerance.is_finite() || self.offset_tolerance <= 0.0 {
            return Err(PagerError::InvalidTolerance(self.offset_tolerance));
        }
        if self.max_scroll_passes == 0 {
            return Err(PagerError::InvalidScrollPasses);
        }
        Ok(())
    }
}
