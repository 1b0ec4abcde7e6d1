//! Text measurement and font storage.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
