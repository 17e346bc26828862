use winit::dpi::LogicalSize;

use hue_engine::coords::Vec2;
use hue_engine::core::{App as EngineApp, AppControl, FrameCtx};
use hue_engine::device::GpuInit;
use hue_engine::input::MouseButton;
use hue_engine::paint::Color;
use hue_engine::render::shapes::rect::RectRenderer;
use hue_engine::window::{Runtime, RuntimeConfig};

use crate::event::UiEvent;
use crate::scene::{UiInput, UiScene};
use crate::state::Compose;
use crate::widget::Element;

type Composable = Box<dyn FnMut(&mut Compose<'_>) -> Element>;

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// Configure the window, then start the event loop with [`run`](Self::run),
/// passing the root composable.
///
/// ```rust,ignore
/// Application::new()
///     .title("hue")
///     .size(640.0, 480.0)
///     .run(|cx| Surface::new().child(ColorBox::remember(cx)).into())?;
/// ```
pub struct Application {
    title:       String,
    width:       f64,
    height:      f64,
    clear_color: Color,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:       "hue".to_string(),
            width:       800.0,
            height:      600.0,
            clear_color: Color::BLACK,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Color the surface is cleared to before the UI paints.
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Start the event loop with `build` as the root composable.
    ///
    /// Blocks until the window is closed. Returns an error if the event loop,
    /// window or GPU surface cannot be created.
    pub fn run<F>(self, build: F) -> anyhow::Result<()>
    where
        F: FnMut(&mut Compose<'_>) -> Element + 'static,
    {
        let config = self.runtime_config();
        // Linear target: channel values reach the screen exactly as written.
        let gpu_init = GpuInit { prefer_srgb: false, ..GpuInit::default() };

        let state = UiAppState {
            ui_scene:      UiScene::new(),
            rect_renderer: RectRenderer::new(),
            build:         Box::new(build),
            clear_color:   self.clear_color,
        };
        Runtime::run(config, gpu_init, state)
    }

    fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title:        self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Internal state that implements `hue_engine::core::App`.
///
/// User code never sees this type.
struct UiAppState {
    ui_scene:      UiScene,
    rect_renderer: RectRenderer,
    build:         Composable,
    clear_color:   Color,
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let viewport = Vec2::new(w, h);

        let ui_input = UiInput {
            events: ctx
                .input_frame
                .clicks
                .iter()
                .filter(|c| c.button == MouseButton::Left)
                .map(|c| UiEvent::Click {
                    press:   Vec2::new(c.press.0, c.press.1),
                    release: Vec2::new(c.release.0, c.release.1),
                })
                .collect(),
        };

        let report = self.ui_scene.frame(&mut *self.build, viewport, &ui_input);
        log::trace!("frame {} ({:?}): {report:?}", ctx.frame_index, ctx.reason);

        let clear = self.clear_color;
        let dl    = &mut self.ui_scene.draw_list;
        let r_r   = &mut self.rect_renderer;

        ctx.render(clear, |rctx, target| r_r.render(rctx, target, dl))
    }
}
