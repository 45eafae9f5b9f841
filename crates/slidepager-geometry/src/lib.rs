//! Pure math for slidepager
//!
//! This crate contains the geometry primitives, the paging axis and the
//! three slot positions, plus the stateless mapper that converts a raw
//! scroll offset into a slot position and back.

mod direction;
mod geometry;
mod mapper;
mod position;

pub use direction::*;
pub use geometry::*;
pub use mapper::*;
pub use position::*;

pub mod prelude {
    pub use crate::direction::Direction;
    pub use crate::geometry::{Point, Size};
    pub use crate::mapper::{ViewportMapper, DEFAULT_OFFSET_TOLERANCE};
    pub use crate::position::Position;
}
