pub(crate) mod line;
pub(crate) mod text;
pub(crate) mod triangle;

pub use line::LineCmd;
pub use text::TextCmd;
pub use triangle::TriangleCmd;
