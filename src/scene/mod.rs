//! The host scene as seen by the exporter.
//!
//! The exporter only reads scene data through [`SceneSource`]. [`Scene`] is
//! an owned implementation that can be built in code or loaded from JSON.

mod data;
mod mesh;
mod object;

pub use data::{Camera, Image, Light, LightKind, Material, Projection, Texture, TextureKind};
pub use mesh::{Face, MeshData, MeshVertex};
pub use object::{compose, decompose, Components, ObjectKind, SceneObject, Transform};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trait for scene data sources (allows integration with a live host scene).
pub trait SceneSource {
    /// Name of the scene.
    fn name(&self) -> &str;

    /// All objects, in the host's order.
    fn objects(&self) -> &[SceneObject];

    fn mesh(&self, name: &str) -> Option<&MeshData>;
    fn material(&self, name: &str) -> Option<&Material>;
    fn texture(&self, name: &str) -> Option<&Texture>;
    fn image(&self, name: &str) -> Option<&Image>;
    fn light(&self, name: &str) -> Option<&Light>;
    fn camera(&self, name: &str) -> Option<&Camera>;
}

/// An owned scene: objects plus data blocks addressed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_scene_name")]
    pub name: String,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub meshes: Vec<MeshData>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub textures: Vec<Texture>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub cameras: Vec<Camera>,
}

fn default_scene_name() -> String {
    "Scene".to_string()
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse a scene from its JSON description.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a scene from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }
}

fn by_name<'a, T>(items: &'a [T], name: &str, key: impl Fn(&T) -> &str) -> Option<&'a T> {
    items.iter().find(|item| key(item) == name)
}

impl SceneSource for Scene {
    fn name(&self) -> &str {
        &self.name
    }

    fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    fn mesh(&self, name: &str) -> Option<&MeshData> {
        by_name(&self.meshes, name, |m| &m.name)
    }

    fn material(&self, name: &str) -> Option<&Material> {
        by_name(&self.materials, name, |m| &m.name)
    }

    fn texture(&self, name: &str) -> Option<&Texture> {
        by_name(&self.textures, name, |t| &t.name)
    }

    fn image(&self, name: &str) -> Option<&Image> {
        by_name(&self.images, name, |i| &i.name)
    }

    fn light(&self, name: &str) -> Option<&Light> {
        by_name(&self.lights, name, |l| &l.name)
    }

    fn camera(&self, name: &str) -> Option<&Camera> {
        by_name(&self.cameras, name, |c| &c.name)
    }
}
