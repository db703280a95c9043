//! Mesh data and accumulation during generation

use polyform_core::MaterialHandle;

use crate::vertex::Vertex;

/// A contiguous run of triangle indices drawn with one material.
///
/// Indices reference the owning mesh's vertex sequence in consecutive
/// triples; every index is less than the mesh's vertex count.
#[derive(Clone, Debug)]
pub struct Submesh {
    pub indices: Vec<u32>,
    pub material: MaterialHandle,
}

/// Generated mesh data: an ordered vertex sequence plus its submeshes.
///
/// A mesh is created fresh by one generator call and never mutated
/// afterwards; the generators in this crate always emit a single submesh.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub submeshes: Vec<Submesh>,
}

impl Mesh {
    /// Total number of indices across all submeshes
    pub fn index_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.indices.len()).sum()
    }

    /// Total number of triangles across all submeshes
    pub fn triangle_count(&self) -> usize {
        self.index_count() / 3
    }

    /// Iterate over all triangles as index triples, in submesh order
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.submeshes
            .iter()
            .flat_map(|s| s.indices.chunks_exact(3))
            .map(|tri| [tri[0], tri[1], tri[2]])
    }
}

/// Accumulates vertices and triangle indices while a generator runs.
///
/// Vertex and index counts are known in closed form for every generator, so
/// the builder is created with exact capacity and never reallocates.
/// Triangles accumulate into a pending run that [`MeshBuilder::submesh`]
/// closes against one material.
pub struct MeshBuilder {
    vertices: Vec<Vertex>,
    submeshes: Vec<Submesh>,
    pending: Vec<u32>,
}

impl MeshBuilder {
    /// Create a builder pre-sized for the given vertex and index counts
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            submeshes: Vec::new(),
            pending: Vec::with_capacity(indices),
        }
    }

    /// Append a vertex and return its index in the vertex sequence
    pub fn vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Number of vertices appended so far
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Append one triangle to the pending index run
    pub fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.pending.push(a);
        self.pending.push(b);
        self.pending.push(c);
    }

    /// Close the pending index run as a submesh bound to `material`
    pub fn submesh(&mut self, material: MaterialHandle) {
        let indices = std::mem::take(&mut self.pending);
        self.submeshes.push(Submesh { indices, material });
    }

    /// Finish building. Every triangle run must have been closed.
    pub fn build(self) -> Mesh {
        debug_assert!(
            self.pending.is_empty(),
            "triangles left outside a submesh"
        );
        Mesh {
            vertices: self.vertices,
            submeshes: self.submeshes,
        }
    }
}
