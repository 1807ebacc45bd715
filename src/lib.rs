//! # COLLADA Export
//!
//! A Rust library for writing 3D scenes as COLLADA 1.3.1 (`.dae`) documents.
//!
//! ## Overview
//!
//! The crate has three layers:
//!
//! - [`document`]: a generic XML element tree that serializes itself to any
//!   stream with sorted attributes and fixed float precision.
//! - [`collada`]: the COLLADA vocabulary and one constructor per element kind.
//! - [`export`]: the scene writer, which walks a [`SceneSource`] and fills the
//!   image, texture, material, geometry, light and camera libraries plus the
//!   node tree.
//!
//! ## Quick Start
//!
//! ```ignore
//! use collada_export::{export_dae_to_path, ExportConfig, Scene};
//!
//! // Load a scene description
//! let scene = Scene::from_path("scene.json")?;
//!
//! // Export every object, with one matrix per node
//! let config = ExportConfig::default().with_bake_transforms(true);
//! let report = export_dae_to_path(&scene, &config, "scene.dae")?;
//!
//! for warning in &report.warnings {
//!     eprintln!("warning: {}", warning);
//! }
//! ```
//!
//! ## Host Integration
//!
//! To export directly from a live application scene, implement the
//! `SceneSource` trait instead of building a [`Scene`]:
//!
//! ```ignore
//! use collada_export::{build_document, ExportConfig, NoProgress};
//!
//! let (document, report) = build_document(&my_host_scene, &ExportConfig::default(), &mut NoProgress)?;
//! document.serialize(std::io::stdout())?;
//! ```

pub mod collada;
pub mod document;
pub mod error;
pub mod export;
pub mod scene;

// Re-export main types for convenience
pub use error::{ExportError, Result};
pub use document::{Content, Document, Element, ElementKind, FloatArray, Format, Layout};
pub use collada::{lib_id, local_ref, ImageDesc};
pub use scene::{
    Camera, Face, Image, Light, LightKind, Material, MeshData, ObjectKind, Projection, Scene,
    SceneObject, SceneSource, Texture, TextureKind, Transform,
};
pub use export::{
    build_document, export_dae, export_dae_string, export_dae_to_path, ExportConfig,
    ExportPhase, ExportReport, ExportWarning, HostInfo, LogProgress, NoProgress, ProgressSink,
};
