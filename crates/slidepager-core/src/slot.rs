//! A hosted page plus its placement inside the scroll content.

use crate::surface::PageContainer;
use slidepager_geometry::{Position, ViewportMapper};
use std::rc::Rc;

/// Wraps one page and owns its attachment to the page container.
///
/// A slot is created detached. [`attach`](Slot::attach) adds the page to the
/// container and [`release`](Slot::release) removes it again. Release is an
/// explicit call because detaching needs the container; dropping a slot that
/// is still attached leaves the page in the container and is logged.
pub struct Slot<P: ?Sized> {
    page: Rc<P>,
    anchor: Position,
    placement: f32,
    active: bool,
}

impl<P: ?Sized> Slot<P> {
    pub fn new(page: Rc<P>) -> Self {
        Self {
            page,
            anchor: Position::Center,
            placement: 0.0,
            active: false,
        }
    }

    pub fn page(&self) -> &Rc<P> {
        &self.page
    }

    /// Slot position the page is anchored to.
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Leading-edge offset of the page along the paging axis.
    pub fn placement(&self) -> f32 {
        self.placement
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether this slot wraps exactly `page`.
    pub fn holds(&self, page: &Rc<P>) -> bool {
        Rc::ptr_eq(&self.page, page)
    }

    /// Adds the page to `container` at `position` and lays it out.
    pub fn attach<C>(&mut self, container: &mut C, mapper: &ViewportMapper, position: Position)
    where
        C: PageContainer<P> + ?Sized,
    {
        self.anchor = position;
        self.placement = mapper.offset_for(position, 0.0);
        let origin = mapper.direction().point_along(self.placement);
        if self.active {
            container.place_page(&self.page, origin);
        } else {
            container.attach_page(&self.page, origin);
            self.active = true;
        }
        container.layout_if_needed();
    }

    /// Moves an attached page to `position`, recomputing its placement for
    /// the mapper's current extent. Does not force a layout pass.
    pub fn reanchor<C>(&mut self, container: &mut C, mapper: &ViewportMapper, position: Position)
    where
        C: PageContainer<P> + ?Sized,
    {
        self.anchor = position;
        self.placement = mapper.offset_for(position, 0.0);
        if self.active {
            container.place_page(&self.page, mapper.direction().point_along(self.placement));
        }
    }

    /// Detaches the page from `container` and drops the slot's reference.
    pub fn release<C>(mut self, container: &mut C)
    where
        C: PageContainer<P> + ?Sized,
    {
        if self.active {
            container.detach_page(&self.page);
            self.active = false;
        }
    }
}

impl<P: ?Sized> Drop for Slot<P> {
    fn drop(&mut self) {
        if self.active {
            log::warn!(
                "slot anchored at {:?} dropped while still attached; its page stays in the container",
                self.anchor
            );
        }
    }
}

impl<P: ?Sized> std::fmt::Debug for Slot<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("anchor", &self.anchor)
            .field("placement", &self.placement)
            .field("active", &self.active)
            .finish()
    }
}
