//! Vertex type for generated meshes

use glam::{Vec2, Vec3};

/// A single mesh vertex: position, unit-length normal, and texture coordinate.
///
/// UV components are conventionally in [0, 1] but are not clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}
