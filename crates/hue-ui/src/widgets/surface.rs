use hue_engine::coords::{Rect, Vec2};
use hue_engine::paint::Color;

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A single-child container that fills all the space it is given.
///
/// Paints its background (transparent by default) and hands the same rect to
/// its child for layout, painting and events.
///
/// # Example
/// ```rust,ignore
/// Surface::new()
///     .background(Color::BLACK)
///     .child(ColorBox::remember(cx))
/// ```
pub struct Surface {
    child:      Option<Element>,
    background: Color,
}

impl Surface {
    pub fn new() -> Self {
        Self { child: None, background: Color::TRANSPARENT }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Surface {
    /// Always the full available space; the child is laid out in that same rect.
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.fill()
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.background.a > 0.0 {
            painter.fill_rect(rect, self.background);
        }
        if let Some(child) = &self.child {
            child.paint(painter, rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match &mut self.child {
            Some(child) => child.on_event(event, rect),
            None => EventResult::Ignored,
        }
    }
}
