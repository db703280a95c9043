//! Polyform Render - renderable compilation for the surrounding engine
//!
//! Validates generated meshes and flattens them into interleaved GPU
//! buffers, together with the vertex input description render pipelines
//! consume and the material descriptions the engine's material factory
//! instantiates. Buffer upload and scene attachment stay with the engine.

pub mod material;
pub mod renderable;
pub mod vertex;

pub use material::{MaterialDesc, MaterialLibrary};
pub use renderable::{CompileError, Renderable, SubmeshRange};
pub use vertex::GpuVertex;
