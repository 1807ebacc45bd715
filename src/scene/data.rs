//! Non-mesh data blocks: shading, lamps and cameras.

use serde::{Deserialize, Serialize};

/// A material in the host's single Phong-like shading model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub name: String,
    /// Diffuse color.
    pub color: [f32; 3],
    pub specular_color: [f32; 3],
    /// Specular intensity.
    pub specularity: f32,
    /// Ambient factor applied to the diffuse color.
    pub ambient: f32,
    /// Emission factor applied to the diffuse color.
    pub emit: f32,
    pub alpha: f32,
    pub reflectivity: f32,
    pub mirror_color: [f32; 3],
    /// Specular hardness.
    pub hardness: f32,
    /// Texture slots by texture name.
    pub textures: Vec<String>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: [0.8, 0.8, 0.8],
            specular_color: [1.0, 1.0, 1.0],
            specularity: 0.5,
            ambient: 0.5,
            emit: 0.0,
            alpha: 1.0,
            reflectivity: 0.8,
            mirror_color: [1.0, 1.0, 1.0],
            hardness: 50.0,
            textures: Vec::new(),
        }
    }
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_texture(mut self, texture: impl Into<String>) -> Self {
        self.textures.push(texture.into());
        self
    }
}

/// Texture kinds. Only image textures can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureKind {
    Image,
    Clouds,
    Wood,
    Marble,
    Magic,
    Blend,
    Stucci,
    Noise,
    Musgrave,
    Voronoi,
    DistortedNoise,
    EnvMap,
    Plugin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Texture {
    pub name: String,
    pub kind: TextureKind,
    /// Backing image name, for image textures.
    #[serde(default)]
    pub image: Option<String>,
}

impl Texture {
    pub fn image(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TextureKind::Image,
            image: Some(image.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    /// Path as stored by the host; `//` prefixes are relative to the scene file.
    pub filename: String,
}

/// Lamp kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    #[serde(alias = "lamp")]
    Point,
    Sun,
    Spot,
    #[serde(alias = "hemi")]
    Ambient,
    Area,
    Photon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub name: String,
    pub kind: LightKind,
    #[serde(default = "white")]
    pub color: [f32; 3],
    #[serde(default = "one")]
    pub energy: f32,
    #[serde(default = "default_distance")]
    pub distance: f32,
    #[serde(default)]
    pub quad1: f32,
    #[serde(default = "one")]
    pub quad2: f32,
    /// Quadratic falloff mode.
    #[serde(default)]
    pub quadratic: bool,
    /// Spot cone angle in degrees.
    #[serde(default = "default_spot_size")]
    pub spot_size: f32,
    #[serde(default = "default_spot_blend")]
    pub spot_blend: f32,
}

fn white() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn one() -> f32 {
    1.0
}

fn default_distance() -> f32 {
    20.0
}

fn default_spot_size() -> f32 {
    45.0
}

fn default_spot_blend() -> f32 {
    0.15
}

impl Light {
    pub fn new(name: impl Into<String>, kind: LightKind) -> Self {
        Self {
            name: name.into(),
            kind,
            color: white(),
            energy: 1.0,
            distance: default_distance(),
            quad1: 0.0,
            quad2: 1.0,
            quadratic: false,
            spot_size: default_spot_size(),
            spot_blend: default_spot_blend(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    #[default]
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub name: String,
    #[serde(default)]
    pub projection: Projection,
    /// Lens length in millimetres.
    #[serde(default = "default_lens")]
    pub lens: f32,
    #[serde(default = "default_clip_start")]
    pub clip_start: f32,
    #[serde(default = "default_clip_end")]
    pub clip_end: f32,
}

fn default_lens() -> f32 {
    35.0
}

fn default_clip_start() -> f32 {
    0.1
}

fn default_clip_end() -> f32 {
    100.0
}

impl Camera {
    pub fn new(name: impl Into<String>, projection: Projection) -> Self {
        Self {
            name: name.into(),
            projection,
            lens: default_lens(),
            clip_start: default_clip_start(),
            clip_end: default_clip_end(),
        }
    }
}
