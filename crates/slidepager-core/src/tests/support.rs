//! Minimal page container shared by the unit tests.

use crate::surface::PageContainer;
use slidepager_geometry::Point;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BoardEvent {
    Attach(u32, Point),
    Place(u32, Point),
    Detach(u32),
    Layout,
}

#[derive(Debug, Default)]
pub(crate) struct Board {
    pub(crate) attached: Vec<u32>,
    pub(crate) events: Vec<BoardEvent>,
}

impl PageContainer<u32> for Board {
    fn attach_page(&mut self, page: &Rc<u32>, origin: Point) {
        self.attached.push(**page);
        self.events.push(BoardEvent::Attach(**page, origin));
    }

    fn place_page(&mut self, page: &Rc<u32>, origin: Point) {
        self.events.push(BoardEvent::Place(**page, origin));
    }

    fn detach_page(&mut self, page: &Rc<u32>) {
        self.attached.retain(|id| id != &**page);
        self.events.push(BoardEvent::Detach(**page));
    }

    fn layout_if_needed(&mut self) {
        self.events.push(BoardEvent::Layout);
    }
}
