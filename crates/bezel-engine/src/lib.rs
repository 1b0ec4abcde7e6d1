//! Bezel engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the clock face is
//! drawn with: window loop, device/surface management, the draw-command
//! scene, shape renderers, text measurement, and frame timing.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
