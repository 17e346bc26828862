/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Pointer move event in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button event.
///
/// Carries the position at the time of the transition so consumers do not
/// depend on a separately tracked cursor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// A press and release of the same button, in logical pixels.
///
/// Recorded once per release; several clicks can land in one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerClick {
    pub button: MouseButton,
    /// Where the button went down.
    pub press: (f32, f32),
    /// Where the button came up.
    pub release: (f32, f32),
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// The platform aborted a press (touch cancelled); no click follows.
    PointerCancelled(MouseButton),

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// True for events the UI must see in a frame of their own (button
    /// transitions). Pointer motion alone changes nothing on screen.
    pub fn needs_frame(&self) -> bool {
        matches!(self, InputEvent::PointerButton(_))
    }
}
