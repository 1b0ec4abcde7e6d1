//! Paint model shared between the face and renderers.
//!
//! Every fill on the clock face is a solid color, so draw commands carry
//! [`Color`] directly rather than a paint-source enum.

mod color;

pub use color::Color;
