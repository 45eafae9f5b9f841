#![allow(dead_code)]

use slidepager_core::prelude::*;
use slidepager_testing::prelude::*;

pub type Pager = PageController<TestPage, FakeSurface>;

pub const VIEWPORT: Size = Size::new(100.0, 50.0);

/// Builds a laid-out pager showing page `start` of a `len`-page book, with
/// the host log and surface events cleared.
pub fn book_pager(config: PagerConfig, len: u32, start: u32) -> (Pager, HostLog) {
    init_test_logging();
    let (host, log) = RecordingHost::book(len);
    let first = host.page(start);
    let mut pager =
        PageController::with_config(FakeSurface::new(VIEWPORT), config).expect("valid config");
    pager.set_host(Box::new(host));
    pager.layout_subviews();
    pager.set_current_page(first, Position::Center, false);
    log.clear();
    pager.surface_mut().clear_events();
    (pager, log)
}

pub fn current_id(pager: &Pager) -> Option<u32> {
    pager.current_page().map(|page| page.id)
}

pub fn cached_id(pager: &Pager, position: Position) -> Option<u32> {
    pager.cached_page(position).map(|page| page.id)
}

/// Paging-axis offset of the surface.
pub fn offset(pager: &Pager) -> f32 {
    pager.direction().offset_of(pager.surface().content_offset())
}

/// Moves the surface like a user drag and reports it.
pub fn drag(pager: &mut Pager, to: f32) {
    let point = pager.direction().point_along(to);
    pager.surface_mut().drag_to(point);
    pager.on_scroll(to);
}
