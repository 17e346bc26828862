//! Hue engine crate.
//!
//! Window, GPU and input plumbing underneath `hue-ui`. Nothing in here knows
//! about widgets or remembered state.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
