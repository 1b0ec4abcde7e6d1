//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer,
//! and drives the application's repaint cadence with a [`Ticker`].
//!
//! [`Ticker`]: crate::time::Ticker

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
