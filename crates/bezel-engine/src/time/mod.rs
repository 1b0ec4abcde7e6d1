//! Frame timing.
//!
//! The animation is driven by a fixed-cadence [`Ticker`] owned by the
//! runtime, not by ambient global state. Intended usage:
//! - one `Ticker` per window
//! - `start()` when the window is created, `stop()` before it is torn down
//! - the event loop sleeps until `deadline()` and redraws when `fire()`
//!   reports a due tick

mod ticker;

pub use ticker::Ticker;
