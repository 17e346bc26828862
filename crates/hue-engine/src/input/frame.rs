use super::types::PointerClick;

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down; `InputFrame` holds what
/// completed since the last rendered frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Clicks completed this frame, in arrival order.
    pub clicks: Vec<PointerClick>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.clicks.clear();
    }
}
