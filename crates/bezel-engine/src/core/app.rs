use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the hosted component.
///
/// The runtime invokes `on_frame` once per due tick of its repaint
/// ticker. The callback decides whether to draw (via
/// [`FrameCtx::render`]) or skip; returning without rendering leaves the
/// previous frame on screen.
pub trait App {
    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
