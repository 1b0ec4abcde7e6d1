use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::time::Ticker;

/// Window/runtime configuration.
///
/// winit types stay internal to the runtime; applications describe the
/// window in plain numbers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Logical window size.
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
    /// Repaint ticker; defaults to ~60 Hz.
    pub ticker: Ticker,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "bezel".to_string(),
            width: 300.0,
            height: 300.0,
            resizable: false,
            ticker: Ticker::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window closes or the app requests exit.
    ///
    /// Attach/detach contract: the repaint ticker is armed right after the
    /// window (and its GPU surface) is created, and disarmed before the
    /// window entry is destroyed — no tick can observe a torn-down surface.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    ticker: Ticker,
    entry: Option<WindowEntry>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        let ticker = config.ticker.clone();
        Self {
            config,
            gpu_init,
            app,
            ticker,
            entry: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        self.teardown();
        event_loop.exit();
    }

    /// Disarms the ticker, then drops the window entry. Order matters: the
    /// ticker must stop before the surface it drives goes away.
    fn teardown(&mut self) {
        self.ticker.stop();
        self.entry = None;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryBuilder {
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .expect("GPU initialization failed for window")
            },
        }
        .build();

        self.entry = Some(entry);
        self.ticker.start();
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Fire due ticks here: WaitUntil wakes the loop at the deadline and
        // this handler runs after the wake. Late wakes drop whole periods
        // inside the ticker; there is no catch-up burst.
        if self.ticker.fire(Instant::now())
            && let Some(entry) = self.entry.as_ref()
        {
            entry.with_window(|w| w.request_redraw());
        }

        match self.ticker.deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            }

            WindowEvent::RedrawRequested => {
                let mut app_control = AppControl::Continue;

                // Split borrows to avoid `self` capture inside `ouroboros`
                // closures.
                let app = &mut self.app;
                entry.with_mut(|fields| {
                    let mut ctx = FrameCtx {
                        window: WindowCtx {
                            id: window_id,
                            window: fields.window,
                        },
                        gpu: fields.gpu,
                    };

                    app_control = app.on_frame(&mut ctx);
                });

                if app_control == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}
