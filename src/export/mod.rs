//! COLLADA scene export.
//!
//! One synchronous pass over the scene: shared data blocks are collected
//! once by name, written into typed libraries, and instanced from a node
//! tree that mirrors the object hierarchy.

mod camera;
mod config;
mod context;
mod geometry;
mod light;
mod material;
mod node;
mod progress;
mod report;

pub use camera::{legacy_yfov, yfov_degrees, LEGACY_FOV_SCALE, SENSOR_WIDTH};
pub use config::{ExportConfig, HostInfo};
pub use context::ExportContext;
pub use light::{attenuation, FALLOFF_SCALE_FACTOR};
pub use material::{image_uri, FILE_URI_PREFIX, SHININESS_DIVISOR, SPECULAR_FACTOR};
pub use progress::{ExportPhase, LogProgress, NoProgress, ProgressSink};
pub use report::{ExportReport, ExportWarning};

use crate::collada::LibraryType;
use crate::document::{Document, Element};
use crate::error::{ExportError, Result};
use crate::scene::{ObjectKind, SceneObject, SceneSource};
use context::append_all;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Up axis written into the asset header.
pub const UP_AXIS: &str = "Z_UP";

/// Data blocks in first-seen order, each name kept once.
struct Unique<'s, T> {
    items: Vec<&'s T>,
    seen: HashSet<&'s str>,
}

impl<'s, T> Unique<'s, T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn insert(&mut self, name: &'s str, item: &'s T) {
        if self.seen.insert(name) {
            self.items.push(item);
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Objects taking part in the export.
fn participants<'s, S: SceneSource + ?Sized>(
    scene: &'s S,
    config: &ExportConfig,
) -> Vec<&'s SceneObject> {
    scene
        .objects()
        .iter()
        .filter(|o| !config.selected_only || o.selected)
        .collect()
}

fn missing<S: SceneSource + ?Sized>(ctx: &mut ExportContext<'_, S>, owner: &str, data: &str) {
    ctx.warn(ExportWarning::MissingDataBlock {
        object: owner.to_string(),
        data: data.to_string(),
    });
}

fn write_asset<S: SceneSource + ?Sized>(ctx: &ExportContext<'_, S>) -> Result<Element> {
    let doc = &ctx.doc;
    let mut asset = doc.create_asset();
    asset.append_child(doc.create_author(Some(&ctx.config.author)))?;
    asset.append_child(doc.create_authoring_tool(Some(&ctx.config.host.authoring_tool())))?;
    asset.append_child(doc.create_up_axis(Some(UP_AXIS)))?;
    Ok(asset)
}

/// Build the complete COLLADA document for a scene.
///
/// Missing or unsupported data is skipped and reported in the returned
/// [`ExportReport`]; only structurally broken data is an error.
pub fn build_document<S: SceneSource + ?Sized>(
    scene: &S,
    config: &ExportConfig,
    progress: &mut dyn ProgressSink,
) -> Result<(Document, ExportReport)> {
    let mut ctx = ExportContext::new(scene, config, progress);
    let objects = participants(scene, config);
    tracing::debug!("Exporting {} of {} objects", objects.len(), scene.objects().len());

    let mut meshes = Unique::new();
    let mut lights = Unique::new();
    let mut cameras = Unique::new();
    for object in &objects {
        let Some(data) = object.data.as_deref() else {
            continue;
        };
        let found = match object.kind {
            ObjectKind::Mesh => scene.mesh(data).map(|m| meshes.insert(data, m)),
            ObjectKind::Lamp => scene.light(data).map(|l| lights.insert(data, l)),
            ObjectKind::Camera => scene.camera(data).map(|c| cameras.insert(data, c)),
            _ => Some(()),
        };
        if found.is_none() {
            missing(&mut ctx, &object.name, data);
        }
    }

    let mut geometry_lib = ctx.doc.create_library(LibraryType::Geometry);
    let mut materials = Unique::new();
    for (i, mesh) in meshes.items.iter().enumerate() {
        if mesh.users == 0 {
            tracing::debug!("Skipping mesh '{}' without users", mesh.name);
            ctx.progress(ExportPhase::Meshes, i + 1, meshes.len());
            continue;
        }
        geometry_lib.append_child(geometry::write_mesh(&mut ctx, mesh)?)?;
        ctx.report.geometries += 1;
        for name in mesh.material_names() {
            match scene.material(name) {
                Some(material) => materials.insert(name, material),
                None => missing(&mut ctx, &mesh.name, name),
            }
        }
        ctx.progress(ExportPhase::Meshes, i + 1, meshes.len());
    }

    let mut material_lib = ctx.doc.create_library(LibraryType::Material);
    let mut textures = Unique::new();
    let mut skipped_textures = HashSet::new();
    for (i, material) in materials.items.iter().enumerate() {
        material_lib.append_child(material::write_material(&mut ctx, material)?)?;
        ctx.report.materials += 1;
        for name in &material.textures {
            match scene.texture(name) {
                Some(texture) if material::is_exportable_texture(texture) => {
                    textures.insert(name.as_str(), texture)
                }
                Some(_) => {
                    if skipped_textures.insert(name.as_str()) {
                        ctx.warn(ExportWarning::UnsupportedTexture {
                            texture: name.clone(),
                        });
                    }
                }
                None => missing(&mut ctx, &material.name, name),
            }
        }
        ctx.progress(ExportPhase::Materials, i + 1, materials.len());
    }

    let mut texture_lib = ctx.doc.create_library(LibraryType::Texture);
    let mut images = Unique::new();
    for (i, texture) in textures.items.iter().enumerate() {
        texture_lib.append_child(material::write_texture(&mut ctx, texture)?)?;
        ctx.report.textures += 1;
        match texture.image.as_deref() {
            Some(name) => match scene.image(name) {
                Some(image) => images.insert(name, image),
                None => missing(&mut ctx, &texture.name, name),
            },
            None => ctx.warn(ExportWarning::TextureWithoutImage {
                texture: texture.name.clone(),
            }),
        }
        ctx.progress(ExportPhase::Textures, i + 1, textures.len());
    }

    let mut image_lib = ctx.doc.create_library(LibraryType::Image);
    for (i, image) in images.items.iter().enumerate() {
        image_lib.append_child(material::write_image(&mut ctx, image)?)?;
        ctx.report.images += 1;
        ctx.progress(ExportPhase::Images, i + 1, images.len());
    }

    let mut light_lib = ctx.doc.create_library(LibraryType::Light);
    for (i, light) in lights.items.iter().enumerate() {
        if let Some(element) = light::write_light(&mut ctx, light)? {
            light_lib.append_child(element)?;
            ctx.report.lights += 1;
        }
        ctx.progress(ExportPhase::Lights, i + 1, lights.len());
    }

    let mut camera_lib = ctx.doc.create_library(LibraryType::Camera);
    for (i, camera) in cameras.items.iter().enumerate() {
        if let Some(element) = camera::write_camera(&mut ctx, camera)? {
            camera_lib.append_child(element)?;
            ctx.report.cameras += 1;
        }
        ctx.progress(ExportPhase::Cameras, i + 1, cameras.len());
    }

    let scene_el = node::write_scene(&mut ctx, &objects)?;
    let asset = write_asset(&ctx)?;

    let ExportContext { mut doc, report, .. } = ctx;
    append_all(
        doc.root_mut(),
        [
            asset,
            image_lib,
            texture_lib,
            material_lib,
            geometry_lib,
            light_lib,
            camera_lib,
            scene_el,
        ],
    )?;
    Ok((doc, report))
}

/// Export a scene as COLLADA to any writer.
pub fn export_dae<S: SceneSource + ?Sized, W: Write>(
    scene: &S,
    config: &ExportConfig,
    writer: W,
) -> Result<ExportReport> {
    let (doc, report) = build_document(scene, config, &mut LogProgress)?;
    doc.serialize(writer)?;
    tracing::info!(
        "Exported {} geometries, {} materials, {} lights, {} cameras, {} nodes ({} warnings)",
        report.geometries,
        report.materials,
        report.lights,
        report.cameras,
        report.nodes,
        report.warnings.len()
    );
    Ok(report)
}

/// Export a scene as a COLLADA string.
pub fn export_dae_string<S: SceneSource + ?Sized>(
    scene: &S,
    config: &ExportConfig,
) -> Result<(String, ExportReport)> {
    let mut buf = Vec::new();
    let report = export_dae(scene, config, &mut buf)?;
    Ok((String::from_utf8_lossy(&buf).into_owned(), report))
}

/// Export a scene to a `.dae` file.
///
/// Refuses to replace an existing file unless `config.overwrite` is set;
/// nothing is written in that case.
pub fn export_dae_to_path<S: SceneSource + ?Sized, P: AsRef<Path>>(
    scene: &S,
    config: &ExportConfig,
    path: P,
) -> Result<ExportReport> {
    let path = path.as_ref();
    if path.exists() && !config.overwrite {
        return Err(ExportError::DestinationExists(path.to_path_buf()));
    }
    tracing::info!("Exporting scene '{}' to {}", scene.name(), path.display());
    let file = File::create(path)?;
    export_dae(scene, config, BufWriter::new(file))
}
