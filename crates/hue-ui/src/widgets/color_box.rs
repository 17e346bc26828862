use rand::RngCore;

use hue_engine::coords::{Rect, Vec2};

use crate::color_state::ColorState;
use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::state::{Compose, State};
use crate::widget::Widget;

/// Whether a [`ColorBox`] has been clicked since it entered the composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the initial color.
    Unclicked,
    /// Showing the color picked by the most recent click.
    Clicked,
}

/// Remembered state of one color box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBoxState {
    pub color:  ColorState,
    pub clicks: u64,
}

impl ColorBoxState {
    pub fn new(color: ColorState) -> Self {
        Self { color, clicks: 0 }
    }

    pub fn phase(&self) -> Phase {
        if self.clicks == 0 { Phase::Unclicked } else { Phase::Clicked }
    }
}

/// A rectangle that fills its bounds with a remembered color and picks a new
/// random color whenever it is clicked.
///
/// The widget itself is rebuilt on every composition; the color lives in the
/// composition's state store, so redraws that are not caused by a click keep
/// showing the same color.
///
/// # Example
/// ```rust,ignore
/// Application::new().run(|cx| ColorBox::remember(cx).into())
/// ```
pub struct ColorBox {
    state: State<ColorBoxState>,
    rng:   Box<dyn RngCore>,
}

impl ColorBox {
    /// State key used by [`ColorBox::remember`].
    pub const STATE_KEY: &'static str = "color_box";

    /// Wraps an existing state handle.
    pub fn new(state: State<ColorBoxState>) -> Self {
        Self { state, rng: Box::new(rand::rng()) }
    }

    /// Box starting at [`ColorState::YELLOW`], remembered under [`Self::STATE_KEY`].
    pub fn remember(cx: &mut Compose<'_>) -> Self {
        Self::remember_in(cx, Self::STATE_KEY, ColorState::YELLOW)
    }

    /// Box remembered under `key`, starting at `initial` the first time the
    /// key enters the composition.
    pub fn remember_in(cx: &mut Compose<'_>, key: &str, initial: ColorState) -> Self {
        Self::new(cx.remember(key, move || ColorBoxState::new(initial)))
    }

    /// Replaces the random source used by clicks.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn color(&self) -> ColorState {
        self.state.with(|s| s.color)
    }

    pub fn phase(&self) -> Phase {
        self.state.with(ColorBoxState::phase)
    }
}

impl Widget for ColorBox {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.fill()
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.fill_rect(rect, self.color().to_color());
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        // Both ends of the click must land on the box.
        let UiEvent::Click { press, release } = event;
        if !rect.contains(*press) || !rect.contains(*release) {
            return EventResult::Ignored;
        }

        let next = ColorState::random(self.rng.as_mut());
        self.state.update(|s| {
            log::debug!("color box clicked: {:?} -> {next:?}", s.color);
            s.color = next;
            s.clicks += 1;
        });
        EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn click(x: f32, y: f32) -> UiEvent {
        UiEvent::click_at(Vec2::new(x, y))
    }

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 50.0);

    #[test]
    fn starts_with_initial_color_unclicked() {
        let mut store = StateStore::new();
        let b = store.compose(|cx| ColorBox::remember(cx));
        assert_eq!(b.color(), ColorState::YELLOW);
        assert_eq!(b.phase(), Phase::Unclicked);
    }

    #[test]
    fn remember_in_uses_custom_initial() {
        let mut store = StateStore::new();
        let cyan = ColorState::new(0.0, 1.0, 1.0);
        let b = store.compose(|cx| ColorBox::remember_in(cx, "other", cyan));
        assert_eq!(b.color(), cyan);
        assert!(store.contains("other"));
    }

    #[test]
    fn click_inside_changes_color_and_phase() {
        let mut store = StateStore::new();
        let mut b = store.compose(|cx| ColorBox::remember(cx).with_rng(StdRng::seed_from_u64(1)));

        let r = b.on_event(&click(10.0, 10.0), BOUNDS);
        assert!(r.is_consumed());
        assert_ne!(b.color(), ColorState::YELLOW);
        assert_eq!(b.color().alpha(), 1.0);
        assert_eq!(b.phase(), Phase::Clicked);
        assert!(store.take_invalidated());
    }

    #[test]
    fn click_outside_is_ignored() {
        let mut store = StateStore::new();
        let mut b = store.compose(|cx| ColorBox::remember(cx));

        assert!(!b.on_event(&click(150.0, 10.0), BOUNDS).is_consumed());
        // Half-open: the far edge is outside.
        assert!(!b.on_event(&click(100.0, 50.0), BOUNDS).is_consumed());
        assert_eq!(b.color(), ColorState::YELLOW);
        assert_eq!(b.phase(), Phase::Unclicked);
        assert!(!store.is_invalidated());
    }

    #[test]
    fn click_must_start_and_end_inside() {
        let mut store = StateStore::new();
        let mut b = store.compose(|cx| ColorBox::remember(cx));

        let dragged_in = UiEvent::Click { press: Vec2::new(150.0, 10.0), release: Vec2::new(10.0, 10.0) };
        let dragged_out = UiEvent::Click { press: Vec2::new(10.0, 10.0), release: Vec2::new(10.0, 80.0) };
        assert!(!b.on_event(&dragged_in, BOUNDS).is_consumed());
        assert!(!b.on_event(&dragged_out, BOUNDS).is_consumed());
        assert_eq!(b.phase(), Phase::Unclicked);

        let moved_within = UiEvent::Click { press: Vec2::new(10.0, 10.0), release: Vec2::new(90.0, 40.0) };
        assert!(b.on_event(&moved_within, BOUNDS).is_consumed());
        assert_eq!(b.phase(), Phase::Clicked);
    }

    #[test]
    fn each_click_replaces_the_color() {
        let mut store = StateStore::new();
        let mut b = store.compose(|cx| ColorBox::remember(cx).with_rng(StdRng::seed_from_u64(9)));

        let mut seen = vec![b.color()];
        for _ in 0..5 {
            b.on_event(&click(1.0, 1.0), BOUNDS);
            let c = b.color();
            assert_ne!(Some(&c), seen.last());
            seen.push(c);
        }
        assert_eq!(b.state.with(|s| s.clicks), 5);
        assert_eq!(b.phase(), Phase::Clicked);
    }

    #[test]
    fn paints_one_rect_over_the_whole_bounds() {
        use hue_engine::scene::{DrawCmd, DrawList};

        let mut store = StateStore::new();
        let b = store.compose(|cx| ColorBox::remember(cx));
        assert_eq!(b.measure(Constraints::loose(Vec2::new(100.0, 50.0))), Vec2::new(100.0, 50.0));

        let mut list = DrawList::new();
        b.paint(&mut Painter::new(&mut list), BOUNDS);
        assert_eq!(list.len(), 1);
        let DrawCmd::Rect(cmd) = &list.items()[0].cmd;
        assert_eq!(cmd.rect, BOUNDS);
        assert_eq!(cmd.color, ColorState::YELLOW.to_color());
    }
}
