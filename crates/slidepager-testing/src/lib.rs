//! Testing utilities and harness for slidepager
//!
//! [`FakeSurface`] stands in for a native scroll view and records every call
//! the pager makes on it. [`RecordingHost`] serves pages from a fixed book and
//! logs every callback into a [`HostLog`] the test keeps a handle to.

pub mod assertions;
pub mod host;
pub mod surface;

pub use assertions::*;
pub use host::{HostCall, HostLog, RecordingHost, TestPage};
pub use surface::{FakeSurface, SurfaceEvent};

/// Routes `log` output through the test harness. Safe to call from every test.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::host::{HostCall, HostLog, RecordingHost, TestPage};
    pub use crate::init_test_logging;
    pub use crate::surface::{FakeSurface, SurfaceEvent};
}
