//! Material descriptions handed to the engine's material factory

use std::collections::HashMap;

use polyform_core::{Color, MaterialHandle};
use serde::{Deserialize, Serialize};

/// Parameters for a simple colored PBR material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDesc {
    pub color: Color,
    pub metallic: f32,
    pub roughness: f32,
    pub reflectance: f32,
}

impl MaterialDesc {
    /// Matte transparent color material, the model viewer default
    pub fn transparent_with_color(color: Color) -> Self {
        Self {
            color,
            metallic: 0.0,
            roughness: 1.0,
            reflectance: 0.0,
        }
    }
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self::transparent_with_color(Color::WHITE)
    }
}

/// Registry of material descriptions keyed by the opaque handles that
/// generated meshes carry. The engine resolves each submesh's handle here
/// when instantiating the real GPU material.
#[derive(Debug, Default)]
pub struct MaterialLibrary {
    materials: HashMap<MaterialHandle, MaterialDesc>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a description and mint the handle meshes will reference
    pub fn insert(&mut self, desc: MaterialDesc) -> MaterialHandle {
        let handle = MaterialHandle::new();
        self.materials.insert(handle, desc);
        handle
    }

    pub fn get(&self, handle: MaterialHandle) -> Option<&MaterialDesc> {
        self.materials.get(&handle)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
