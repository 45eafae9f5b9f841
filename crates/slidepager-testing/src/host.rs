//! A scripted host serving pages from a fixed book.

use slidepager_core::PagerHost;
use std::cell::RefCell;
use std::rc::Rc;

/// A page identified by its index in the book.
#[derive(Debug, PartialEq, Eq)]
pub struct TestPage {
    pub id: u32,
}

impl TestPage {
    pub fn new(id: u32) -> Rc<Self> {
        Rc::new(Self { id })
    }
}

/// One callback received by a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ProvideLeft { current: u32, returned: Option<u32> },
    ProvideRight { current: u32, returned: Option<u32> },
    Scrolled { current: u32, offset: f32 },
    DragWillBegin { current: u32 },
    DragDidEnd { current: u32 },
    PageChanged { previous: u32, current: u32 },
}

/// Shared view of the calls a [`RecordingHost`] received.
#[derive(Clone, Default)]
pub struct HostLog {
    calls: Rc<RefCell<Vec<HostCall>>>,
}

impl HostLog {
    fn push(&self, call: HostCall) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Number of `provide_*` calls received so far.
    pub fn provide_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, HostCall::ProvideLeft { .. } | HostCall::ProvideRight { .. }))
            .count()
    }

    /// Offsets passed to `on_page_scrolled`, in order.
    pub fn scrolled_offsets(&self) -> Vec<f32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::Scrolled { offset, .. } => Some(*offset),
                _ => None,
            })
            .collect()
    }

    pub fn page_changes(&self) -> Vec<(u32, u32)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                HostCall::PageChanged { previous, current } => Some((*previous, *current)),
                _ => None,
            })
            .collect()
    }
}

/// Serves page `id - 1` on the left and `id + 1` on the right, within
/// `0..len`. Pages are created once, so neighbors keep their identity across
/// requests.
pub struct RecordingHost {
    pages: Vec<Rc<TestPage>>,
    log: HostLog,
}

impl RecordingHost {
    /// Creates a host with `len` pages and returns it with its log.
    pub fn book(len: u32) -> (Self, HostLog) {
        let log = HostLog::default();
        let host = Self {
            pages: (0..len).map(TestPage::new).collect(),
            log: log.clone(),
        };
        (host, log)
    }

    pub fn page(&self, id: u32) -> Rc<TestPage> {
        Rc::clone(&self.pages[id as usize])
    }

    fn lookup(&self, id: Option<u32>) -> Option<Rc<TestPage>> {
        id.and_then(|id| self.pages.get(id as usize)).map(Rc::clone)
    }
}

impl PagerHost<TestPage> for RecordingHost {
    fn provide_left_page(&mut self, current: &Rc<TestPage>) -> Option<Rc<TestPage>> {
        let page = self.lookup(current.id.checked_sub(1));
        self.log.push(HostCall::ProvideLeft {
            current: current.id,
            returned: page.as_ref().map(|p| p.id),
        });
        page
    }

    fn provide_right_page(&mut self, current: &Rc<TestPage>) -> Option<Rc<TestPage>> {
        let page = self.lookup(current.id.checked_add(1));
        self.log.push(HostCall::ProvideRight {
            current: current.id,
            returned: page.as_ref().map(|p| p.id),
        });
        page
    }

    fn on_page_scrolled(&mut self, current: &Rc<TestPage>, offset: f32) {
        self.log.push(HostCall::Scrolled {
            current: current.id,
            offset,
        });
    }

    fn on_drag_will_begin(&mut self, current: &Rc<TestPage>) {
        self.log.push(HostCall::DragWillBegin { current: current.id });
    }

    fn on_drag_did_end(&mut self, current: &Rc<TestPage>) {
        self.log.push(HostCall::DragDidEnd { current: current.id });
    }

    fn on_page_changed(&mut self, previous: &Rc<TestPage>, current: &Rc<TestPage>) {
        self.log.push(HostCall::PageChanged {
            previous: previous.id,
            current: current.id,
        });
    }
}
