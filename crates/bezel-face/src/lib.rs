//! Bezel face crate.
//!
//! The clock face itself: a rotating ring of second ticks and numerals, a
//! fixed top indicator, and a centered digital readout. Everything here
//! is a pure function from (wall time, face geometry, fonts) to a draw
//! list — the GPU never appears in this crate.

mod face;
mod geometry;
mod readout;
mod wall_time;

pub use face::{ClockFace, FaceStyle};
pub use geometry::FaceGeometry;
pub use wall_time::WallTime;
