use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled triangle draw payload.
///
/// `feather` is the width in logical pixels of the soft falloff outside
/// the triangle edge. A value around 1.0 gives a crisp antialiased fill;
/// larger values render a blurred glow.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub vertices: [Vec2; 3],
    pub color: Color,
    pub feather: f32,
}

impl TriangleCmd {
    #[inline]
    pub fn new(vertices: [Vec2; 3], color: Color, feather: f32) -> Self {
        Self { vertices, color, feather }
    }
}

impl DrawList {
    /// Records a filled triangle draw command.
    #[inline]
    pub fn push_triangle(&mut self, z: ZIndex, vertices: [Vec2; 3], color: Color, feather: f32) {
        self.push(z, DrawCmd::Triangle(TriangleCmd::new(vertices, color, feather)));
    }
}
