//! Polyform Core - shared foundational types
//!
//! This crate provides the types the rest of the workspace builds on:
//! - Mathematical primitives (re-exported from glam)
//! - Opaque material handles threaded through generated meshes
//! - RGBA color values used by material descriptions

pub mod types;

pub use glam::{Vec2, Vec3, Vec4};
pub use types::{Color, MaterialHandle};
