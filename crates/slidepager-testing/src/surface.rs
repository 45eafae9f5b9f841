//! In-memory scroll surface.

use crate::host::TestPage;
use slidepager_core::{PageContainer, PagingTraits, ScrollSurface};
use slidepager_geometry::{Point, Size};
use std::rc::Rc;

/// One call the pager made on a [`FakeSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Attached { page: u32, origin: Point },
    Placed { page: u32, origin: Point },
    Detached { page: u32 },
    Layout,
    OffsetSet { offset: Point, animated: bool },
    ContentSizeSet(Size),
}

/// Scroll surface double.
///
/// Offset changes apply immediately, animated or not; a test drives the
/// in-between frames itself by calling `on_scroll` on the pager.
#[derive(Debug)]
pub struct FakeSurface {
    bounds: Size,
    offset: Point,
    content_size: Size,
    scroll_enabled: bool,
    bounces: bool,
    dragging: bool,
    decelerating: bool,
    paging: Option<PagingTraits>,
    attached: Vec<(Rc<TestPage>, Point)>,
    events: Vec<SurfaceEvent>,
}

impl FakeSurface {
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            offset: Point::ZERO,
            content_size: Size::ZERO,
            scroll_enabled: false,
            bounces: true,
            dragging: false,
            decelerating: false,
            paging: None,
            attached: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Moves the offset as a user drag would, without recording an event.
    pub fn drag_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn set_decelerating(&mut self, decelerating: bool) {
        self.decelerating = decelerating;
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn paging_traits(&self) -> Option<PagingTraits> {
        self.paging
    }

    /// Ids of the attached pages in attachment order.
    pub fn attached_pages(&self) -> Vec<u32> {
        self.attached.iter().map(|(page, _)| page.id).collect()
    }

    pub fn origin_of(&self, id: u32) -> Option<Point> {
        self.attached
            .iter()
            .find(|(page, _)| page.id == id)
            .map(|(_, origin)| *origin)
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Offsets set by the pager, in order.
    pub fn offset_requests(&self) -> Vec<(Point, bool)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::OffsetSet { offset, animated } => Some((*offset, *animated)),
                _ => None,
            })
            .collect()
    }
}

impl PageContainer<TestPage> for FakeSurface {
    fn attach_page(&mut self, page: &Rc<TestPage>, origin: Point) {
        assert!(
            self.origin_of(page.id).is_none(),
            "page {} attached twice",
            page.id
        );
        self.attached.push((Rc::clone(page), origin));
        self.events.push(SurfaceEvent::Attached {
            page: page.id,
            origin,
        });
    }

    fn place_page(&mut self, page: &Rc<TestPage>, origin: Point) {
        if let Some(entry) = self.attached.iter_mut().find(|(p, _)| Rc::ptr_eq(p, page)) {
            entry.1 = origin;
        }
        self.events.push(SurfaceEvent::Placed {
            page: page.id,
            origin,
        });
    }

    fn detach_page(&mut self, page: &Rc<TestPage>) {
        self.attached.retain(|(p, _)| !Rc::ptr_eq(p, page));
        self.events.push(SurfaceEvent::Detached { page: page.id });
    }

    fn layout_if_needed(&mut self) {
        self.events.push(SurfaceEvent::Layout);
    }
}

impl ScrollSurface<TestPage> for FakeSurface {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point, animated: bool) {
        self.offset = offset;
        self.events.push(SurfaceEvent::OffsetSet { offset, animated });
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
        self.events.push(SurfaceEvent::ContentSizeSet(size));
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }

    fn bounces(&self) -> bool {
        self.bounces
    }

    fn set_bounces(&mut self, bounces: bool) {
        self.bounces = bounces;
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn is_decelerating(&self) -> bool {
        self.decelerating
    }

    fn configure_paging(&mut self, traits: &PagingTraits) {
        self.paging = Some(*traits);
    }
}
