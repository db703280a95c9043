//! GPU vertex layout for compiled renderables

use bytemuck::{Pod, Zeroable};
use std::collections::HashMap;

use polyform_mesh::Vertex;

/// Interleaved vertex as uploaded to the GPU: position, normal, uv
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl From<Vertex> for GpuVertex {
    fn from(vertex: Vertex) -> Self {
        Self {
            position: vertex.position.to_array(),
            normal: vertex.normal.to_array(),
            uv: vertex.uv.to_array(),
        }
    }
}

impl GpuVertex {
    /// Vulkano vertex buffer description
    pub fn per_vertex() -> vulkano::pipeline::graphics::vertex_input::VertexBufferDescription {
        vulkano::pipeline::graphics::vertex_input::VertexBufferDescription {
            stride: std::mem::size_of::<Self>() as u32,
            input_rate: vulkano::pipeline::graphics::vertex_input::VertexInputRate::Vertex,
            members: HashMap::from([
                (
                    "position".to_string(),
                    vulkano::pipeline::graphics::vertex_input::VertexMemberInfo {
                        offset: 0,
                        format: vulkano::format::Format::R32G32B32_SFLOAT,
                        num_elements: 1,
                        stride: std::mem::size_of::<Self>() as u32,
                    },
                ),
                (
                    "normal".to_string(),
                    vulkano::pipeline::graphics::vertex_input::VertexMemberInfo {
                        offset: 12,
                        format: vulkano::format::Format::R32G32B32_SFLOAT,
                        num_elements: 1,
                        stride: std::mem::size_of::<Self>() as u32,
                    },
                ),
                (
                    "uv".to_string(),
                    vulkano::pipeline::graphics::vertex_input::VertexMemberInfo {
                        offset: 24,
                        format: vulkano::format::Format::R32G32_SFLOAT,
                        num_elements: 1,
                        stride: std::mem::size_of::<Self>() as u32,
                    },
                ),
            ]),
        }
    }
}
