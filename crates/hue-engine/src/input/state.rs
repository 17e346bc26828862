use std::collections::HashMap;

use super::frame::InputFrame;
use super::types::{
    InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerClick, PointerMoveEvent,
};

/// Current input state for the window.
///
/// Holds the pointer position and, for every held button, where it went
/// down. Completed clicks are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    /// Held buttons and their press positions.
    pressed_at: HashMap<MouseButton, (f32, f32)>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(focused) => {
                if !focused {
                    // Avoids stuck buttons when focus changes mid-press.
                    self.pressed_at.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerCancelled(button) => {
                self.pressed_at.remove(&button);
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((x, y));

                match state {
                    MouseButtonState::Pressed => {
                        self.pressed_at.entry(button).or_insert((x, y));
                    }
                    MouseButtonState::Released => {
                        if let Some(press) = self.pressed_at.remove(&button) {
                            frame.clicks.push(PointerClick { button, press, release: (x, y) });
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y })
    }

    #[test]
    fn press_then_release_records_a_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 4.0, 5.0));
        assert!(state.pressed_at.contains_key(&MouseButton::Left));
        assert!(frame.clicks.is_empty());

        state.apply_event(&mut frame, button(MouseButtonState::Released, 6.0, 7.0));
        assert!(!state.pressed_at.contains_key(&MouseButton::Left));
        assert_eq!(
            frame.clicks,
            vec![PointerClick { button: MouseButton::Left, press: (4.0, 5.0), release: (6.0, 7.0) }]
        );
        assert_eq!(state.pointer_pos, Some((6.0, 7.0)));
    }

    #[test]
    fn two_clicks_before_a_frame_are_both_kept() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 1.0, 1.0));
        state.apply_event(&mut frame, button(MouseButtonState::Released, 1.0, 1.0));
        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 9.0, 9.0));
        state.apply_event(&mut frame, button(MouseButtonState::Released, 9.0, 9.0));

        assert_eq!(frame.clicks.len(), 2);
        assert_eq!(frame.clicks[0].release, (1.0, 1.0));
        assert_eq!(frame.clicks[1].press, (9.0, 9.0));

        frame.clear();
        assert!(frame.clicks.is_empty());
    }

    #[test]
    fn repeated_press_keeps_the_first_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 2.0, 2.0));
        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 8.0, 8.0));
        state.apply_event(&mut frame, button(MouseButtonState::Released, 8.0, 8.0));
        assert_eq!(frame.clicks[0].press, (2.0, 2.0));
    }

    #[test]
    fn release_without_press_is_not_a_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Released, 1.0, 1.0));
        assert!(frame.clicks.is_empty());
    }

    #[test]
    fn cancelled_press_is_not_a_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 1.0, 1.0));
        state.apply_event(&mut frame, InputEvent::PointerCancelled(MouseButton::Left));
        state.apply_event(&mut frame, button(MouseButtonState::Released, 1.0, 1.0));
        assert!(frame.clicks.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, button(MouseButtonState::Pressed, 0.0, 0.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.pressed_at.contains_key(&MouseButton::Left));
    }

    #[test]
    fn pointer_leave_forgets_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 3.0 }));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn only_button_events_need_a_frame() {
        assert!(button(MouseButtonState::Pressed, 0.0, 0.0).needs_frame());
        assert!(!InputEvent::PointerLeft.needs_frame());
        assert!(!InputEvent::Focused(true).needs_frame());
        assert!(!InputEvent::PointerCancelled(MouseButton::Left).needs_frame());
    }
}
