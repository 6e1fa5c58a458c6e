//! GPU rendering subsystem.
//!
//! The quad renderer rasterizes a small stream of packed quad records with
//! compute shaders into a fixed-resolution offscreen target, then blits that
//! target to the window surface. It owns its own GPU resources (pipelines,
//! buffers, target texture), created lazily against the current surface
//! format.

mod color;
mod ctx;
mod quads;

pub use color::ColorRgba;
pub use ctx::{RenderCtx, RenderTarget};
pub use quads::{QuadRecord, QuadRenderer};
