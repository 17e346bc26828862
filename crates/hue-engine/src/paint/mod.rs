//! Paint model shared between UI and renderers.
//!
//! Only solid fills exist; geometry stays in `coords`.

pub mod color;

pub use color::Color;
