//! Session lifecycle
//!
//! One browser session per worker, created lazily on first use and torn down
//! at scenario end with a best-effort failure screenshot.

pub mod registry;
pub mod screenshot;

pub use registry::SessionRegistry;
pub use screenshot::{FsScreenshotSink, MemoryScreenshotSink, ScreenshotSink};
