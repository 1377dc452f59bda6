//! WebGPU rendering module
//!
//! The CPU builds a flat-colored triangle list in world coordinates each frame;
//! the vertex shader maps it through the current viewport.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Scene, build_scene};
pub use vertex::Vertex;
