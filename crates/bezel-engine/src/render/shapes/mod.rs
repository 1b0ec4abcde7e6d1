mod common;
mod line;
mod text;
mod triangle;

pub use line::LineRenderer;
pub use text::TextRenderer;
pub use triangle::TriangleRenderer;
