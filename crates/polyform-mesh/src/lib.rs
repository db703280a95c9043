//! Polyform Mesh - procedural triangle meshes for primitive solids
//!
//! Each generator is a pure function from geometric parameters, a center,
//! and a material handle to a freshly built [`Mesh`]: cube, pyramid, cone,
//! cylinder, and UV sphere. Generated meshes carry per-vertex positions,
//! unit normals, and texture coordinates, wound counter-clockwise seen from
//! outside so the renderer can cull back faces.

pub mod mesh;
pub mod shapes;
pub mod vertex;

pub use mesh::{Mesh, MeshBuilder, Submesh};
pub use shapes::{cone, cube, cylinder, pyramid, sphere, Shape, ShapeKind};
pub use vertex::Vertex;
