//! Hue UI: a recomposing widget tree on top of `hue-engine`.
//!
//! The root of the UI is a *composable*: a closure that builds a fresh widget
//! tree from remembered state. The tree is thrown away every frame; state
//! survives in the [`StateStore`](state::StateStore) owned by the scene.
//!
//! ```rust,ignore
//! use hue_ui::prelude::*;
//!
//! Application::new()
//!     .title("hue")
//!     .run(|cx: &mut Compose<'_>| {
//!         Surface::new().child(ColorBox::remember(cx)).into()
//!     })?;
//! ```
//!
//! A click that changes remembered state schedules one more composition in
//! the same frame, so the new value is on screen immediately. Frames that
//! happen for other reasons (resize, expose) recompose from the retained
//! values and never reset them.

pub mod app;
pub mod color_state;
pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod state;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// Everything needed to write a composable.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::color_state::ColorState;
    pub use crate::constraints::Constraints;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{FrameReport, UiInput, UiScene};
    pub use crate::state::{Compose, State, StateStore};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        color_box::{ColorBox, Phase},
        surface::Surface,
    };

    pub use hue_engine::coords::{Rect, Vec2};
    pub use hue_engine::paint::Color;
}
