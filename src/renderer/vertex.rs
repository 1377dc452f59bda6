//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with world position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Viewport uniform (must match shader)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ViewportUniform {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl From<crate::sim::Viewport> for ViewportUniform {
    fn from(v: crate::sim::Viewport) -> Self {
        Self {
            left: v.left,
            right: v.right,
            bottom: v.bottom,
            top: v.top,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY_BLUE: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const RED_DEVIL: [f32; 4] = [0.53, 0.0, 0.07, 1.0];
    pub const TILE: [f32; 4] = [0.46, 0.74, 0.86, 1.0];
    pub const TILE_ALT: [f32; 4] = [0.42, 0.70, 0.83, 1.0];
    pub const PLATFORM: [f32; 4] = [0.18, 0.32, 0.45, 1.0];
    pub const PLATFORM_TOP: [f32; 4] = [0.95, 0.95, 1.0, 1.0];
    pub const PLAYER: [f32; 4] = [1.0, 0.78, 0.1, 1.0];
    pub const PLAYER_CORE: [f32; 4] = [0.2, 0.9, 0.4, 1.0];
}
