//! Compilation of generated meshes into engine-consumable renderables

use polyform_core::MaterialHandle;
use polyform_mesh::Mesh;
use tracing::debug;

use crate::vertex::GpuVertex;

/// Errors detected while compiling a mesh into a renderable.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("mesh has no vertices")]
    EmptyMesh,

    #[error("mesh has no submeshes")]
    NoSubmeshes,

    #[error("submesh {submesh} has {count} indices, not a multiple of 3")]
    PartialTriangle { submesh: usize, count: usize },

    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}

/// A contiguous index range of a compiled renderable, drawn with one material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmeshRange {
    pub first_index: u32,
    pub index_count: u32,
    pub material: MaterialHandle,
}

/// An immutable, GPU-ready snapshot of a mesh: one interleaved vertex
/// buffer, one concatenated index buffer, and the per-material draw ranges.
#[derive(Debug, Clone)]
pub struct Renderable {
    pub vertices: Vec<GpuVertex>,
    pub indices: Vec<u32>,
    pub ranges: Vec<SubmeshRange>,
}

impl Renderable {
    /// Validate `mesh` and flatten it for upload.
    ///
    /// Failure is recoverable for callers: log it and keep showing whatever
    /// renderable was previously attached.
    pub fn compile(mesh: &Mesh) -> Result<Self, CompileError> {
        if mesh.vertices.is_empty() {
            return Err(CompileError::EmptyMesh);
        }
        if mesh.submeshes.is_empty() {
            return Err(CompileError::NoSubmeshes);
        }

        let vertex_count = mesh.vertices.len();
        let mut indices = Vec::with_capacity(mesh.index_count());
        let mut ranges = Vec::with_capacity(mesh.submeshes.len());

        for (i, submesh) in mesh.submeshes.iter().enumerate() {
            if submesh.indices.len() % 3 != 0 {
                return Err(CompileError::PartialTriangle {
                    submesh: i,
                    count: submesh.indices.len(),
                });
            }
            for &index in &submesh.indices {
                if index as usize >= vertex_count {
                    return Err(CompileError::IndexOutOfBounds {
                        index,
                        vertex_count,
                    });
                }
            }
            ranges.push(SubmeshRange {
                first_index: indices.len() as u32,
                index_count: submesh.indices.len() as u32,
                material: submesh.material,
            });
            indices.extend_from_slice(&submesh.indices);
        }

        let vertices: Vec<GpuVertex> = mesh.vertices.iter().copied().map(Into::into).collect();
        debug!(
            "compiled renderable: {} vertices, {} indices, {} submeshes",
            vertices.len(),
            indices.len(),
            ranges.len()
        );

        Ok(Self {
            vertices,
            indices,
            ranges,
        })
    }

    /// Vertex buffer contents as raw bytes
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer contents as raw bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};
    use polyform_mesh::{cube, Mesh, Submesh, Vertex};

    use super::*;

    fn triangle_mesh() -> Mesh {
        let vertices = vec![
            Vertex::new(Vec3::ZERO, Vec3::Y, Vec2::ZERO),
            Vertex::new(Vec3::X, Vec3::Y, Vec2::X),
            Vertex::new(Vec3::Z, Vec3::Y, Vec2::Y),
        ];
        Mesh {
            vertices,
            submeshes: vec![Submesh {
                indices: vec![0, 2, 1],
                material: MaterialHandle::new(),
            }],
        }
    }

    #[test]
    fn test_compile_flattens_a_generated_cube() {
        let material = MaterialHandle::new();
        let mesh = cube(Vec3::splat(0.3), Vec3::ZERO, material);
        let renderable = Renderable::compile(&mesh).unwrap();

        assert_eq!(renderable.vertices.len(), 24);
        assert_eq!(renderable.indices.len(), 36);
        assert_eq!(
            renderable.ranges,
            vec![SubmeshRange {
                first_index: 0,
                index_count: 36,
                material,
            }]
        );
        assert_eq!(renderable.vertex_bytes().len(), 24 * 32);
        assert_eq!(renderable.index_bytes().len(), 36 * 4);
    }

    #[test]
    fn test_compile_concatenates_submesh_ranges() {
        let mut mesh = triangle_mesh();
        let second = MaterialHandle::new();
        mesh.submeshes.push(Submesh {
            indices: vec![1, 2, 0],
            material: second,
        });

        let renderable = Renderable::compile(&mesh).unwrap();
        assert_eq!(renderable.indices, vec![0, 2, 1, 1, 2, 0]);
        assert_eq!(renderable.ranges[1].first_index, 3);
        assert_eq!(renderable.ranges[1].index_count, 3);
        assert_eq!(renderable.ranges[1].material, second);
    }

    #[test]
    fn test_compile_rejects_empty_mesh() {
        let mesh = Mesh {
            vertices: Vec::new(),
            submeshes: Vec::new(),
        };
        assert!(matches!(
            Renderable::compile(&mesh),
            Err(CompileError::EmptyMesh)
        ));
    }

    #[test]
    fn test_compile_rejects_missing_submeshes() {
        let mut mesh = triangle_mesh();
        mesh.submeshes.clear();
        assert!(matches!(
            Renderable::compile(&mesh),
            Err(CompileError::NoSubmeshes)
        ));
    }

    #[test]
    fn test_compile_rejects_partial_triangle() {
        let mut mesh = triangle_mesh();
        mesh.submeshes[0].indices.push(1);
        assert!(matches!(
            Renderable::compile(&mesh),
            Err(CompileError::PartialTriangle {
                submesh: 0,
                count: 4
            })
        ));
    }

    #[test]
    fn test_compile_rejects_out_of_bounds_index() {
        let mut mesh = triangle_mesh();
        mesh.submeshes[0].indices = vec![0, 1, 3];
        assert!(matches!(
            Renderable::compile(&mesh),
            Err(CompileError::IndexOutOfBounds {
                index: 3,
                vertex_count: 3
            })
        ));
    }
}
