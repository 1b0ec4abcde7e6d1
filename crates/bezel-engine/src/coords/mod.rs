//! Coordinate and geometry types shared across renderers and the face.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are in radians and increase clockwise on screen (a consequence
//! of +Y pointing down). Renderers convert to NDC in shaders using a
//! viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
