//! The paging state machine.
//!
//! [`PageController`] keeps one current slot and up to two cached neighbors
//! inside a scroll surface whose content is three viewports long. It reacts to
//! scroll offsets reported by the surface:
//!
//! - an offset past Center toward a side asks the host for that side's
//!   neighbor if none is cached,
//! - an offset at or beyond the Left/Right threshold promotes the cached
//!   neighbor to current and snaps back to Center, carrying any overshoot,
//! - an offset resting at Center drops every cached neighbor.
//!
//! Moving the offset without animation makes a native surface report a new
//! scroll event synchronously, from inside the handler that moved it. The
//! controller models this with a pending-offset queue: every non-animated
//! retarget enqueues the new offset, and the outermost entry point drains the
//! queue once it is done with its own work.

use crate::cache::PageCache;
use crate::config::{PagerConfig, PrefetchStrategy};
use crate::error::PagerError;
use crate::host::{provide_neighbor, PagerHost};
use crate::slot::Slot;
use crate::surface::ScrollSurface;
use slidepager_geometry::{Direction, Position, ViewportMapper};
use smallvec::SmallVec;
use std::rc::Rc;

/// A three-slot paging container driven by a [`ScrollSurface`].
pub struct PageController<P: ?Sized + 'static, S: ScrollSurface<P>> {
    surface: S,
    host: Option<Box<dyn PagerHost<P>>>,
    config: PagerConfig,
    current: Option<Slot<P>>,
    cache: PageCache<P>,
    pending_offsets: SmallVec<[f32; 4]>,
    draining: bool,
}

impl<P: ?Sized + 'static, S: ScrollSurface<P>> PageController<P, S> {
    /// Creates a controller with the default configuration.
    pub fn new(surface: S) -> Self {
        Self::build(surface, PagerConfig::default())
    }

    /// Creates a controller after validating `config`.
    pub fn with_config(surface: S, config: PagerConfig) -> Result<Self, PagerError> {
        config.validate()?;
        Ok(Self::build(surface, config))
    }

    fn build(mut surface: S, config: PagerConfig) -> Self {
        surface.configure_paging(&config.paging_traits);
        surface.set_scroll_enabled(false);
        surface.set_bounces(config.bounces);
        Self {
            surface,
            host: None,
            config,
            current: None,
            cache: PageCache::new(),
            pending_offsets: SmallVec::new(),
            draining: false,
        }
    }

    /// Installs the host, returning the previous one.
    pub fn set_host(&mut self, host: Box<dyn PagerHost<P>>) -> Option<Box<dyn PagerHost<P>>> {
        self.host.replace(host)
    }

    pub fn take_host(&mut self) -> Option<Box<dyn PagerHost<P>>> {
        self.host.take()
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to update its bounds or drag
    /// flags before forwarding the matching event.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn direction(&self) -> Direction {
        self.config.direction
    }

    /// Changes the paging axis. Only allowed while no page is hosted.
    pub fn set_direction(&mut self, direction: Direction) -> Result<(), PagerError> {
        if direction == self.config.direction {
            return Ok(());
        }
        if self.current.is_some() {
            return Err(PagerError::DirectionLocked);
        }
        self.config.direction = direction;
        self.layout_subviews();
        Ok(())
    }

    pub fn bounces(&self) -> bool {
        self.surface.bounces()
    }

    pub fn set_bounces(&mut self, bounces: bool) {
        self.config.bounces = bounces;
        self.surface.set_bounces(bounces);
    }

    pub fn current_page(&self) -> Option<&Rc<P>> {
        self.current.as_ref().map(Slot::page)
    }

    /// Slot position the current page is anchored to. Center at rest.
    pub fn current_position(&self) -> Option<Position> {
        self.current.as_ref().map(Slot::anchor)
    }

    /// Leading-edge offset of the current page inside the scroll content.
    pub fn current_placement(&self) -> Option<f32> {
        self.current.as_ref().map(Slot::placement)
    }

    pub fn cached_page(&self, position: Position) -> Option<&Rc<P>> {
        self.cache.get(position).map(Slot::page)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Viewport length along the paging axis, zero before layout.
    pub fn viewport_extent(&self) -> f32 {
        self.mapper().extent()
    }

    /// Scroll content length along the paging axis as last applied to the surface.
    pub fn content_extent(&self) -> f32 {
        self.config.direction.extent_of(self.surface.content_size())
    }

    fn mapper(&self) -> ViewportMapper {
        ViewportMapper::from_bounds(self.surface.bounds(), self.config.direction)
            .with_tolerance(self.config.offset_tolerance)
    }

    /// Shows `page`.
    ///
    /// Does nothing if `page` is already current. Otherwise drops every cached
    /// neighbor and:
    /// - at Center, or when nothing is hosted yet, replaces the current page
    ///   in place;
    /// - at Left or Right, stages `page` on that side and moves the offset
    ///   there, so it becomes current when the offset arrives.
    pub fn set_current_page(&mut self, page: Rc<P>, position: Position, animated: bool) {
        if self.current.as_ref().is_some_and(|slot| slot.holds(&page)) {
            log::trace!("set_current_page: page already current");
            return;
        }
        self.cache.clear(None, &mut self.surface);

        let mapper = self.mapper();
        if position == Position::Center || self.current.is_none() {
            self.release_current();
            let mut slot = Slot::new(page);
            slot.attach(&mut self.surface, &mapper, Position::Center);
            self.adopt_current(slot);
            self.scroll_to(Position::Center, 0.0, animated);
        } else {
            let mut slot = Slot::new(page);
            slot.attach(&mut self.surface, &mapper, position);
            if let Err(err) = self.cache.store(position, slot, &mut self.surface) {
                log::warn!("set_current_page: {err}");
            }
            self.scroll_to(position, 0.0, animated);
        }
        self.drain_scroll_queue();
    }

    /// Handles a scroll offset reported by the surface.
    pub fn on_scroll(&mut self, offset: f32) {
        self.pending_offsets.push(offset);
        self.drain_scroll_queue();
    }

    /// Asks the host for the neighbor at `position` if none is cached.
    pub fn request_neighbor(&mut self, position: Position) {
        self.load_neighbor(position);
        self.drain_scroll_queue();
    }

    /// Resolves a finished or cancelled gesture at `position`.
    ///
    /// `overshoot` is how far past the slot's leading edge the offset
    /// travelled; it is carried over to the new resting offset.
    pub fn settle(&mut self, position: Position, overshoot: f32) {
        self.settle_slots(position, overshoot);
        self.drain_scroll_queue();
    }

    /// Called when the surface stops moving.
    ///
    /// Ignored while the surface is still dragging or decelerating. Replays
    /// the current offset, then pulls a current page left at an edge (after
    /// rubber-banding) back to Center.
    pub fn on_scroll_settled(&mut self) {
        if self.surface.is_dragging() || self.surface.is_decelerating() {
            return;
        }
        let mapper = self.mapper();
        self.on_scroll(mapper.axis_offset(self.surface.content_offset()));

        let Some(current) = self.current.as_mut() else {
            return;
        };
        if current.anchor() == Position::Center {
            return;
        }
        log::debug!("re-centering current page anchored at {:?}", current.anchor());
        current.reanchor(&mut self.surface, &mapper, Position::Center);
        self.surface.layout_if_needed();
        self.scroll_to(Position::Center, 0.0, false);
        self.drain_scroll_queue();
    }

    /// Called when a programmatic animated scroll finishes.
    pub fn on_scroll_animation_ended(&mut self) {
        self.on_scroll_settled();
    }

    pub fn on_drag_will_begin(&mut self) {
        if let (Some(current), Some(host)) = (self.current.as_ref(), self.host.as_mut()) {
            host.on_drag_will_begin(current.page());
        }
    }

    pub fn on_drag_did_end(&mut self) {
        if let (Some(current), Some(host)) = (self.current.as_ref(), self.host.as_mut()) {
            host.on_drag_did_end(current.page());
        }
    }

    /// Re-applies geometry after the viewport size changed.
    ///
    /// Sizes the content to three viewports, re-anchors the current page to
    /// Center for the new extent and snaps the offset back to Center,
    /// dropping any cached neighbor.
    pub fn layout_subviews(&mut self) {
        let mapper = self.mapper();
        self.surface.set_content_size(mapper.content_size());
        if let Some(current) = self.current.as_mut() {
            current.reanchor(&mut self.surface, &mapper, Position::Center);
        }
        self.surface.layout_if_needed();
        self.settle_slots(Position::Center, 0.0);
        self.scroll_to(Position::Center, 0.0, false);
        self.drain_scroll_queue();
    }

    fn drain_scroll_queue(&mut self) {
        if self.draining {
            return;
        }
        self.draining = true;
        let mut passes = 0;
        while !self.pending_offsets.is_empty() {
            if passes == self.config.max_scroll_passes {
                log::warn!(
                    "dropping {} re-entrant scroll events after {} passes",
                    self.pending_offsets.len(),
                    passes
                );
                self.pending_offsets.clear();
                break;
            }
            let offset = self.pending_offsets.remove(0);
            passes += 1;
            self.process_scroll(offset);
        }
        self.draining = false;
    }

    fn process_scroll(&mut self, offset: f32) {
        let mapper = self.mapper();
        if !mapper.is_laid_out() || self.content_extent() <= 0.0 {
            return;
        }
        let Some(page) = self.current.as_ref().map(|slot| Rc::clone(slot.page())) else {
            return;
        };
        log::trace!("scroll offset {offset}");

        let edge = match self.config.prefetch {
            PrefetchStrategy::AtEdge => mapper.classify(offset),
            PrefetchStrategy::Eager => mapper.classify_leaving_center(offset),
        };
        if edge.is_neighbor() && !self.cache.contains(edge) {
            self.load_neighbor(edge);
        }

        if mapper.reached_right(offset) {
            self.settle_slots(Position::Right, offset - mapper.right_threshold());
        } else if mapper.reached_left(offset) {
            self.settle_slots(Position::Left, offset);
        } else if mapper.is_at(offset, Position::Center) {
            self.settle_slots(Position::Center, 0.0);
        }

        if let Some(host) = self.host.as_mut() {
            host.on_page_scrolled(&page, offset - mapper.extent());
        }
    }

    fn load_neighbor(&mut self, position: Position) {
        if !position.is_neighbor() || self.cache.contains(position) {
            return;
        }
        let Some(current_page) = self.current.as_ref().map(|slot| Rc::clone(slot.page())) else {
            return;
        };
        let Some(host) = self.host.as_mut() else {
            return;
        };
        let provided = provide_neighbor(&mut **host, position, &current_page)
            .filter(|page| {
                let is_current = Rc::ptr_eq(page, &current_page);
                if is_current {
                    log::warn!("host offered the current page as its own {position:?} neighbor");
                }
                !is_current
            });

        let mapper = self.mapper();
        match provided {
            Some(page) => {
                log::debug!("loaded {position:?} neighbor");
                let mut slot = Slot::new(page);
                slot.attach(&mut self.surface, &mapper, position);
                if let Err(err) = self.cache.store(position, slot, &mut self.surface) {
                    log::warn!("request_neighbor: {err}");
                }
            }
            None if self.surface.bounces() => {
                let Some(current) = self.current.as_mut() else {
                    return;
                };
                if current.anchor() != Position::Center {
                    return;
                }
                log::debug!("no {position:?} neighbor, rubber-banding against the edge");
                current.reanchor(&mut self.surface, &mapper, position);
                self.surface.layout_if_needed();
                self.scroll_to(position, 0.0, false);
            }
            None => {
                log::debug!("no {position:?} neighbor, snapping back");
                self.scroll_to(Position::Center, 0.0, false);
            }
        }
    }

    fn settle_slots(&mut self, position: Position, overshoot: f32) {
        if position == Position::Center {
            self.cache.clear(None, &mut self.surface);
            return;
        }
        let Some(mut promoted) = self.cache.promote(position) else {
            log::trace!("settle at {position:?} with nothing cached there");
            return;
        };

        let mapper = self.mapper();
        let previous = self.release_current();
        promoted.reanchor(&mut self.surface, &mapper, Position::Center);
        self.adopt_current(promoted);
        self.surface.layout_if_needed();
        self.scroll_to(Position::Center, overshoot, false);
        self.cache.clear(None, &mut self.surface);
        log::debug!("promoted {position:?} neighbor to current (overshoot {overshoot})");

        if let (Some(previous), Some(current), Some(host)) =
            (previous, self.current.as_ref(), self.host.as_mut())
        {
            host.on_page_changed(&previous, current.page());
        }
    }

    /// Releases the current slot, returning its page.
    fn release_current(&mut self) -> Option<Rc<P>> {
        let slot = self.current.take()?;
        let page = Rc::clone(slot.page());
        slot.release(&mut self.surface);
        self.surface.set_scroll_enabled(false);
        Some(page)
    }

    fn adopt_current(&mut self, slot: Slot<P>) {
        debug_assert!(self.current.is_none());
        self.current = Some(slot);
        self.surface.set_scroll_enabled(true);
    }

    fn scroll_to(&mut self, position: Position, extra: f32, animated: bool) {
        let mapper = self.mapper();
        let target = mapper.offset_for(position, extra);
        self.surface
            .set_content_offset(mapper.direction().point_along(target), animated);
        if !animated && mapper.is_laid_out() && self.pending_offsets.last() != Some(&target) {
            self.pending_offsets.push(target);
        }
    }
}

impl<P: ?Sized + 'static, S: ScrollSurface<P>> Drop for PageController<P, S> {
    fn drop(&mut self) {
        self.cache.clear(None, &mut self.surface);
        if let Some(current) = self.current.take() {
            current.release(&mut self.surface);
        }
    }
}

impl<P: ?Sized + 'static, S: ScrollSurface<P>> std::fmt::Debug for PageController<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageController")
            .field("direction", &self.config.direction)
            .field("current", &self.current)
            .field("cache", &self.cache)
            .field("has_host", &self.host.is_some())
            .finish()
    }
}
