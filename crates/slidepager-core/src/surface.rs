//! The continuous-scroll surface the pager drives.
//!
//! The pager never scrolls or draws by itself. A native scroll view (or a
//! test double) implements these traits, reports its offset and drag state
//! to the [`PageController`](crate::PageController), and takes offset,
//! content size and page placement changes back from it.

use slidepager_geometry::{Point, Size};
use std::rc::Rc;

/// Hosts page views inside the scroll content.
pub trait PageContainer<P: ?Sized> {
    /// Adds `page` to the content with its leading corner at `origin`.
    fn attach_page(&mut self, page: &Rc<P>, origin: Point);

    /// Moves an attached page.
    fn place_page(&mut self, page: &Rc<P>, origin: Point);

    /// Removes `page` from the content.
    fn detach_page(&mut self, page: &Rc<P>);

    /// Applies pending placement changes synchronously.
    fn layout_if_needed(&mut self) {}
}

/// Static scroll surface traits the pager relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PagingTraits {
    /// Snap to viewport-sized pages when a drag ends.
    pub paging_enabled: bool,
    /// Lock scrolling to the dominant axis of a drag.
    pub directional_lock: bool,
    pub shows_indicators: bool,
}

impl Default for PagingTraits {
    fn default() -> Self {
        Self {
            paging_enabled: true,
            directional_lock: true,
            shows_indicators: false,
        }
    }
}

/// A scroll view with a single content offset and drag state flags.
pub trait ScrollSurface<P: ?Sized>: PageContainer<P> {
    /// Visible size of the viewport.
    fn bounds(&self) -> Size;

    fn content_offset(&self) -> Point;

    /// Moves the content. A non-animated change is what the surface would
    /// report back immediately as a scroll event; the pager accounts for
    /// that itself, so implementations must not call back into it.
    fn set_content_offset(&mut self, offset: Point, animated: bool);

    fn content_size(&self) -> Size;

    fn set_content_size(&mut self, size: Size);

    fn set_scroll_enabled(&mut self, enabled: bool);

    fn bounces(&self) -> bool;

    fn set_bounces(&mut self, bounces: bool);

    fn is_dragging(&self) -> bool;

    fn is_decelerating(&self) -> bool;

    fn configure_paging(&mut self, traits: &PagingTraits) {
        let _ = traits;
    }
}
