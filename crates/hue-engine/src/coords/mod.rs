//! Geometry shared by the renderer and the UI layer.
//!
//! All CPU-side positions are logical pixels, origin top-left, +Y down.
//! The rect shader maps them to NDC through the viewport uniform.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
