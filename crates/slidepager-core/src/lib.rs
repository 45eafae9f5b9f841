//! Three-slot paging container for slidepager
//!
//! A [`PageController`] hosts one current page and lazily loads the previous
//! and next pages from a [`PagerHost`] while the user swipes. It sits on top
//! of a [`ScrollSurface`] whose content is always three viewports long, and
//! turns the surface's offset reports into page loads, promotions and
//! snap-backs.
//!
//! Everything runs on the UI thread; pages are shared as `Rc<P>` and compared
//! by identity.

mod cache;
mod config;
mod controller;
mod error;
mod host;
mod slot;
mod surface;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

pub use cache::PageCache;
pub use config::{PagerConfig, PrefetchStrategy, DEFAULT_MAX_SCROLL_PASSES};
pub use controller::PageController;
pub use error::PagerError;
pub use host::PagerHost;
pub use slot::Slot;
pub use surface::{PageContainer, PagingTraits, ScrollSurface};

pub use slidepager_geometry::{Direction, Point, Position, Size, ViewportMapper};

pub mod prelude {
    pub use crate::config::{PagerConfig, PrefetchStrategy};
    pub use crate::controller::PageController;
    pub use crate::error::PagerError;
    pub use crate::host::PagerHost;
    pub use crate::surface::{PageContainer, PagingTraits, ScrollSurface};
    pub use slidepager_geometry::prelude::*;
}
