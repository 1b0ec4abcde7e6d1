//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and
//! the application: a per-frame callback with a consistent context.
//! Runtime internals do not leak into user code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
