pub mod color_box;
pub mod surface;
