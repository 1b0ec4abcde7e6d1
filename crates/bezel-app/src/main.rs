//! Bezel: an animated clock face.
//!
//! A rotating ring of second ticks slides under a fixed indicator at
//! twelve o'clock while `HH:MM:SS` sits in the middle. Repaints are
//! driven by the engine's ~60 Hz ticker; frames where the sampled time
//! has not changed are skipped.

use anyhow::{Context, Result};

use bezel_engine::core::{App, AppControl, FrameCtx};
use bezel_engine::device::GpuInit;
use bezel_engine::logging::{init_logging, LoggingConfig};
use bezel_engine::paint::Color;
use bezel_engine::render::FaceRenderer;
use bezel_engine::scene::DrawList;
use bezel_engine::text::{FontId, FontSystem};
use bezel_engine::window::{Runtime, RuntimeConfig};
use bezel_face::{ClockFace, FaceGeometry, WallTime};

const BACKGROUND: Color = Color::from_premul(0.043, 0.051, 0.067, 1.0);

struct ClockApp {
    fonts: FontSystem,
    face: ClockFace,

    draw_list: DrawList,
    renderer: FaceRenderer,

    /// Time shown by the last presented frame.
    last: Option<WallTime>,
}

impl ClockApp {
    fn new(fonts: FontSystem, font: FontId) -> Self {
        Self {
            fonts,
            face: ClockFace::new(font),
            draw_list: DrawList::new(),
            renderer: FaceRenderer::new(),
            last: None,
        }
    }
}

impl App for ClockApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let now = WallTime::now();
        if self.last == Some(now) {
            return AppControl::Continue;
        }

        let (w, h) = ctx.window.logical_size();
        let geometry = FaceGeometry::fit(w, h);

        self.draw_list.clear();
        self.face.render(geometry, now, &self.fonts, &mut self.draw_list);

        let renderer = &mut self.renderer;
        let draw_list = &mut self.draw_list;
        let fonts = &self.fonts;
        let control = ctx.render(BACKGROUND, |rctx, target| {
            renderer.render(rctx, target, draw_list, fonts);
        });

        self.last = Some(now);
        control
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut fonts = FontSystem::new();
    let font = load_system_font(&mut fonts)?;

    let app = ClockApp::new(fonts, font);

    Runtime::run(
        RuntimeConfig {
            title: "bezel".to_string(),
            ..RuntimeConfig::default()
        },
        GpuInit::default(),
        app,
    )
}

/// Loads the first sans font found at the usual distro locations.
fn load_system_font(fonts: &mut FontSystem) -> Result<FontId> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ];

    let (path, bytes) = CANDIDATES
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|b| (*p, b)))
        .context("no usable system font found (tried DejaVu Sans and Noto Sans)")?;

    log::info!("using font {path}");
    fonts
        .load_font(&bytes)
        .with_context(|| format!("failed to parse font {path}"))
}
