//! Contract between the pager and the application embedding it.

use slidepager_geometry::Position;
use std::rc::Rc;

/// Supplies neighbor pages and receives gesture notifications.
///
/// Only the two `provide_*` methods are required. Every notification
/// defaults to doing nothing.
pub trait PagerHost<P: ?Sized> {
    /// Returns the page before `current`, or `None` if `current` is the first.
    fn provide_left_page(&mut self, current: &Rc<P>) -> Option<Rc<P>>;

    /// Returns the page after `current`, or `None` if `current` is the last.
    fn provide_right_page(&mut self, current: &Rc<P>) -> Option<Rc<P>>;

    /// Called on every scroll event with the signed distance from the
    /// resting offset. Positive values move toward the next page.
    fn on_page_scrolled(&mut self, current: &Rc<P>, offset: f32) {
        let _ = (current, offset);
    }

    fn on_drag_will_begin(&mut self, current: &Rc<P>) {
        let _ = current;
    }

    fn on_drag_did_end(&mut self, current: &Rc<P>) {
        let _ = current;
    }

    /// Called after a neighbor has been promoted to the current page.
    fn on_page_changed(&mut self, previous: &Rc<P>, current: &Rc<P>) {
        let _ = (previous, current);
    }
}

/// Routes a neighbor request to the matching host method.
pub(crate) fn provide_neighbor<P: ?Sized>(
    host: &mut dyn PagerHost<P>,
    position: Position,
    current: &Rc<P>,
) -> Option<Rc<P>> {
    match position {
        Position::Left => host.provide_left_page(current),
        Position::Right => host.provide_right_page(current),
        Position::Center => None,
    }
}
