//! Wallbrick engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the game binary: the window
//! event loop, device/surface management, keyboard input state, frame timing,
//! logging setup and the compute-based quad renderer.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
