use hue_engine::coords::{Rect, Vec2};
use hue_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::state::{Compose, StateStore};
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Input collected since the previous UI frame.
///
/// Construct this from the engine's `InputFrame` each frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Events in arrival order; each one is dispatched separately.
    pub events: Vec<UiEvent>,
}

// ── FrameReport ───────────────────────────────────────────────────────────

/// What happened during one [`UiScene::frame`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// How many times the root composable ran: once, plus once per event
    /// that changed state.
    pub compositions: u32,
    /// How many events a widget consumed.
    pub consumed: u32,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns everything the UI keeps between frames: remembered state and the
/// draw list the renderers read.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
///
/// // In your on_frame callback:
/// ui.frame(&mut |cx| ColorBox::remember(cx).into(), viewport, &input);
/// rect_renderer.render(rctx, target, &mut ui.draw_list);
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    store:         StateStore,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Composes, dispatches input and paints one frame.
    ///
    /// Every event that writes state triggers a recomposition before the next
    /// event is dispatched, so later events and the final paint always see
    /// the latest values.
    pub fn frame<F>(&mut self, build: &mut F, viewport: Vec2, input: &UiInput) -> FrameReport
    where
        F: FnMut(&mut Compose<'_>) -> Element + ?Sized,
    {
        let mut report = FrameReport::default();
        let (mut root, mut rect) = self.compose(build, viewport, &mut report);

        for event in &input.events {
            if root.on_event(event, rect).is_consumed() {
                report.consumed += 1;
            }
            if self.store.take_invalidated() {
                log::trace!("state invalidated by {event:?}; recomposing");
                (root, rect) = self.compose(build, viewport, &mut report);
            }
        }

        self.draw_list.clear();
        root.paint(&mut Painter::new(&mut self.draw_list), rect);

        report
    }

    /// Runs the composable and lays the root out in the viewport.
    fn compose<F>(&mut self, build: &mut F, viewport: Vec2, report: &mut FrameReport) -> (Element, Rect)
    where
        F: FnMut(&mut Compose<'_>) -> Element + ?Sized,
    {
        let root = self.store.compose(|cx| build(cx));
        report.compositions += 1;
        let size = root.measure(Constraints::loose(viewport));
        (root, Rect::from_size(size))
    }
}
