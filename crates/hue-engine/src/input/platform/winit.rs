use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, Touch, TouchPhase, WindowEvent};
use winit::window::Window;

use crate::input::{
    InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events not represented by the input subsystem.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let st = match st {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };

            // winit 0.30 does not expose a cursor query; use the tracked position.
            let (x, y) = state.pointer_pos.unwrap_or((0.0, 0.0));

            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: st,
                x,
                y,
            }))
        }

        WindowEvent::Touch(Touch { phase, location, .. }) => {
            let (x, y) = to_logical_f32(window, *location);
            Some(touch_to_input(*phase, x, y))
        }

        _ => None,
    }
}

/// Touches act as the primary button, so a tap is a click at the touch point.
fn touch_to_input(phase: TouchPhase, x: f32, y: f32) -> InputEvent {
    let button = |state| InputEvent::PointerButton(PointerButtonEvent {
        button: MouseButton::Left,
        state,
        x,
        y,
    });
    match phase {
        TouchPhase::Started => button(MouseButtonState::Pressed),
        TouchPhase::Moved => InputEvent::PointerMoved(PointerMoveEvent { x, y }),
        TouchPhase::Ended => button(MouseButtonState::Released),
        TouchPhase::Cancelled => InputEvent::PointerCancelled(MouseButton::Left),
    }
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let logical = pos.to_logical::<f64>(window.scale_factor());
    (logical.x as f32, logical.y as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputFrame, PointerClick};

    #[test]
    fn tap_becomes_a_primary_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        let down = touch_to_input(TouchPhase::Started, 10.0, 20.0);
        assert!(down.needs_frame());
        state.apply_event(&mut frame, down);
        state.apply_event(&mut frame, touch_to_input(TouchPhase::Moved, 12.0, 21.0));
        let up = touch_to_input(TouchPhase::Ended, 12.0, 21.0);
        assert!(up.needs_frame());
        state.apply_event(&mut frame, up);

        assert_eq!(
            frame.clicks,
            vec![PointerClick { button: MouseButton::Left, press: (10.0, 20.0), release: (12.0, 21.0) }]
        );
    }

    #[test]
    fn cancelled_touch_is_not_a_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, touch_to_input(TouchPhase::Started, 1.0, 1.0));
        state.apply_event(&mut frame, touch_to_input(TouchPhase::Cancelled, 1.0, 1.0));
        state.apply_event(&mut frame, touch_to_input(TouchPhase::Ended, 1.0, 1.0));
        assert!(frame.clicks.is_empty());
    }
}
