//! Polyform - procedural primitive meshes and renderable compilation
//!
//! Facade over the workspace crates:
//! - [`polyform_core`]: math re-exports, material handles, colors
//! - [`polyform_mesh`]: the five shape generators and mesh types
//! - [`polyform_render`]: validation and flattening into GPU-ready buffers
//!
//! Typical flow: pick a [`Shape`], generate its [`Mesh`], compile it into a
//! [`Renderable`], and hand the result to the rendering engine.

pub use polyform_core::{Color, MaterialHandle, Vec2, Vec3};
pub use polyform_mesh::{
    cone, cube, cylinder, pyramid, sphere, Mesh, MeshBuilder, Shape, ShapeKind, Submesh, Vertex,
};
pub use polyform_render::{
    CompileError, GpuVertex, MaterialDesc, MaterialLibrary, Renderable, SubmeshRange,
};
