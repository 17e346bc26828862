use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// A new shape needs a payload under `scene::shapes`, a variant here and a
/// matching renderer under `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
}
