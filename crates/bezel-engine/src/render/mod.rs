//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines,
//! buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};

use crate::scene::DrawList;
use crate::text::FontSystem;
use shapes::{LineRenderer, TextRenderer, TriangleRenderer};

/// Composite renderer for a full clock-face draw list.
///
/// Owns one renderer per shape and flushes them in back-to-front shape
/// order: lines (tick ring), triangles (indicator glow + fill), then
/// text (numerals and readout). Within each shape the draw list's
/// z/insertion ordering applies.
#[derive(Default)]
pub struct FaceRenderer {
    lines: LineRenderer,
    triangles: TriangleRenderer,
    text: TextRenderer,
}

impl FaceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every command in `draw_list` onto `target`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        if draw_list.is_empty() {
            return;
        }

        self.lines.render(ctx, target, draw_list);
        self.triangles.render(ctx, target, draw_list);
        self.text.render(ctx, target, draw_list, fonts);
    }
}
