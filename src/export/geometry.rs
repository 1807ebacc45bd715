//! Mesh data blocks as `<geometry>` library entries.
//!
//! Positions are written once per mesh vertex. Normals and UVs are written
//! once per face corner, so `<p>` pairs each vertex index with a running
//! corner index shared by the normal and UV arrays.

use super::context::{append_all, ExportContext};
use super::report::ExportWarning;
use crate::collada::{lib_id, InputSemantic, ParamName, Profile};
use crate::document::{Element, FloatArray};
use crate::error::{ExportError, Result};
use crate::scene::{MeshData, SceneSource};

pub(crate) const POSITION_SUFFIX: &str = "-Pos";
pub(crate) const NORMAL_SUFFIX: &str = "-Normal";
pub(crate) const UV_SUFFIX: &str = "-UV1";
pub(crate) const VERTICES_SUFFIX: &str = "-Vertices";
pub(crate) const ARRAY_SUFFIX: &str = "-Array";
pub(crate) const ACCESSOR_SUFFIX: &str = "-Accessor";

/// Per-corner data gathered from the exportable faces of a mesh.
#[derive(Debug, Default)]
struct Corners {
    normals: Vec<[f32; 3]>,
    uvs: Vec<[f32; 2]>,
    /// One index run per exported face.
    polygons: Vec<Vec<usize>>,
}

fn gather<S: SceneSource + ?Sized>(
    ctx: &mut ExportContext<'_, S>,
    mesh: &MeshData,
    with_uv: bool,
) -> Result<Corners> {
    let mut corners = Corners::default();
    let mut missing_normals = 0;
    let mut missing_uvs = 0;
    let mut corner = 0usize;

    for (face_index, face) in mesh.faces.iter().enumerate() {
        if !face.is_exportable() {
            ctx.warn(ExportWarning::UnsupportedFace {
                mesh: mesh.name.clone(),
                face: face_index,
                vertices: face.vertices.len(),
            });
            continue;
        }

        let mut run = Vec::with_capacity(face.vertices.len() * if with_uv { 3 } else { 2 });
        let face_uv = face.uv.as_ref().filter(|uv| uv.len() == face.vertices.len());
        if with_uv && face_uv.is_none() {
            missing_uvs += 1;
        }
        if !face.smooth && face.normal.is_none() {
            missing_normals += 1;
        }

        for (i, &v) in face.vertices.iter().enumerate() {
            let vertex = mesh.vertices.get(v as usize).ok_or_else(|| {
                ExportError::MissingData(format!(
                    "face {} of mesh '{}' references vertex {} but the mesh has {}",
                    face_index,
                    mesh.name,
                    v,
                    mesh.vertices.len()
                ))
            })?;

            let normal = if face.smooth {
                vertex.normal
            } else {
                face.normal.unwrap_or([0.0; 3])
            };
            corners.normals.push(normal);

            run.push(v as usize);
            run.push(corner);
            if with_uv {
                corners.uvs.push(face_uv.map_or([0.0; 2], |uv| uv[i]));
                run.push(corner);
            }
            corner += 1;
        }
        corners.polygons.push(run);
    }

    if missing_normals > 0 {
        ctx.warn(ExportWarning::MissingFaceNormal {
            mesh: mesh.name.clone(),
            faces: missing_normals,
        });
    }
    if missing_uvs > 0 {
        ctx.warn(ExportWarning::PartialUvs {
            mesh: mesh.name.clone(),
            faces: missing_uvs,
        });
    }
    Ok(corners)
}

/// `<source>` holding a float array and the accessor describing it.
fn float_source<S: SceneSource + ?Sized>(
    ctx: &ExportContext<'_, S>,
    id: &str,
    data: FloatArray,
    params: &[ParamName],
) -> Result<Element> {
    let doc = &ctx.doc;
    let stride = params.len();
    let count = data.len() / stride;
    let array_id = format!("{}{}", id, ARRAY_SUFFIX);
    let accessor_id = format!("{}{}", array_id, ACCESSOR_SUFFIX);

    let mut array = doc.create_float_array(Some(data.len()), Some(&array_id), Some(&array_id), None, None);
    array.set_floats(data)?;

    let mut accessor = doc.create_accessor(Some(count), Some(&array_id), Some(&accessor_id), Some(0), Some(stride));
    append_all(
        &mut accessor,
        params
            .iter()
            .map(|&name| doc.create_param(Some(name), Some("float"), None)),
    )?;

    let mut technique = doc.create_technique(Some(Profile::Common));
    technique.append_child(accessor)?;

    let mut source = doc.create_source(Some(id), Some(id));
    source.append_child(array)?;
    source.append_child(technique)?;
    Ok(source)
}

/// Build the `<geometry>` element for one mesh.
pub fn write_mesh<S: SceneSource + ?Sized>(
    ctx: &mut ExportContext<'_, S>,
    mesh: &MeshData,
) -> Result<Element> {
    let name = mesh.name.as_str();
    let with_uv = mesh.has_face_uv();
    let corners = gather(ctx, mesh, with_uv)?;

    let pos_id = format!("{}{}", name, POSITION_SUFFIX);
    let normal_id = format!("{}{}", name, NORMAL_SUFFIX);
    let uv_id = format!("{}{}", name, UV_SUFFIX);
    let vertices_id = format!("{}{}", name, VERTICES_SUFFIX);

    let positions: Vec<[f32; 3]> = mesh.vertices.iter().map(|v| v.position).collect();
    let xyz = [ParamName::X, ParamName::Y, ParamName::Z];

    let mut mesh_el = ctx.doc.create_mesh(None, None);
    mesh_el.append_child(float_source(ctx, &pos_id, FloatArray::from_tuples(&positions), &xyz)?)?;
    mesh_el.append_child(float_source(ctx, &normal_id, FloatArray::from_tuples(&corners.normals), &xyz)?)?;
    if with_uv {
        mesh_el.append_child(float_source(
            ctx,
            &uv_id,
            FloatArray::from_tuples(&corners.uvs),
            &[ParamName::S, ParamName::T],
        )?)?;
    }

    let mut vertices = ctx
        .doc
        .create_vertices(Some(&vertices_id), Some(&vertices_id), Some(mesh.vertex_count()));
    vertices.append_child(ctx.doc.create_input(None, Some(InputSemantic::Position), Some(&pos_id)))?;
    mesh_el.append_child(vertices)?;

    let material_count = mesh.materials.len();
    if material_count > 1 {
        ctx.warn(ExportWarning::MultipleMaterials {
            mesh: name.to_string(),
            count: material_count,
        });
    }
    let material = mesh
        .materials
        .first()
        .and_then(|slot| slot.as_deref())
        .filter(|m| ctx.scene.material(m).is_some())
        .map(lib_id);

    let doc = &ctx.doc;
    let mut polygons = doc.create_polygons(Some(corners.polygons.len()), material.as_deref());
    polygons.append_child(doc.create_input(Some(0), Some(InputSemantic::Vertex), Some(&vertices_id)))?;
    polygons.append_child(doc.create_input(Some(1), Some(InputSemantic::Normal), Some(&normal_id)))?;
    if with_uv {
        polygons.append_child(doc.create_input(Some(2), Some(InputSemantic::Texcoord), Some(&uv_id)))?;
    }
    append_all(&mut polygons, corners.polygons.iter().map(|run| doc.create_p(run)))?;
    mesh_el.append_child(polygons)?;

    let id = lib_id(name);
    let mut geometry = doc.create_geometry(Some(&id), Some(name));
    geometry.append_child(mesh_el)?;
    ctx.register_id(&id);

    tracing::debug!(
        "Wrote mesh '{}': {} vertices, {} faces, {} corners",
        name,
        mesh.vertex_count(),
        corners.polygons.len(),
        corners.normals.len()
    );
    Ok(geometry)
}
