use hue_engine::coords::Vec2;

/// Input events routed through the widget tree.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Primary button pressed at `press` and released at `release`.
    Click { press: Vec2, release: Vec2 },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl UiEvent {
    /// A click that went down and up at the same point.
    pub fn click_at(pos: Vec2) -> Self {
        UiEvent::Click { press: pos, release: pos }
    }
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
