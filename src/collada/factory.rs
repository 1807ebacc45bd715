//! One constructor per COLLADA element kind.
//!
//! Optional parameters that are `None` are simply not written. Reference
//! attributes get the local-reference sigil; nothing checks that the target
//! exists in the document.

use super::vocab::{
    CodeSemantic, Flow, InputSemantic, LibraryType, LightType, NodeType, ParamName, Profile,
    ProgramId,
};
use super::{local_ref, COLLADA_VERSION, COLLADA_XMLNS};
use crate::document::{Document, Element, ElementKind};

/// Attributes of an `<image>` element.
#[derive(Debug, Clone, Default)]
pub struct ImageDesc<'a> {
    pub id: Option<&'a str>,
    pub name: Option<&'a str>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub depth: Option<u32>,
    pub source: Option<&'a str>,
    pub format: Option<&'a str>,
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn int<T: ToString>(value: Option<T>) -> Option<String> {
    value.map(|v| v.to_string())
}

fn reference(value: Option<&str>) -> Option<String> {
    value.map(local_ref)
}

fn id_name(kind: ElementKind, id: Option<&str>, name: Option<&str>) -> Element {
    Element::new(kind)
        .with_attr("id", owned(id))
        .with_attr("name", owned(name))
}

fn text_element(kind: ElementKind, text: Option<&str>) -> Element {
    Element::new(kind).with_text(owned(text))
}

fn join<T: ToString>(values: impl IntoIterator<Item = T>) -> String {
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Document {
    /// A new COLLADA document with its `<COLLADA>` root.
    pub fn new() -> Self {
        Self::with_root(collada_root(None))
    }

    /// A new document declaring a specific schema version.
    pub fn with_version(version: &str) -> Self {
        Self::with_root(collada_root(Some(version)))
    }

    // --- scene graph ---

    pub fn create_scene(&self, id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::Scene, id, name)
    }

    pub fn create_node(
        &self,
        id: Option<&str>,
        name: Option<&str>,
        node_type: Option<NodeType>,
    ) -> Element {
        id_name(ElementKind::Node, id, name)
            .with_attr("type", node_type.map(|t| t.as_str().to_string()))
    }

    pub fn create_bounding_box(&self) -> Element {
        Element::new(ElementKind::BoundingBox)
    }

    /// `<instance url="#...">`.
    pub fn create_instance(&self, url: Option<&str>) -> Element {
        Element::new(ElementKind::Instance).with_attr("url", reference(url))
    }

    pub fn create_library(&self, library_type: LibraryType) -> Element {
        Element::new(ElementKind::Library)
            .with_attr("type", Some(library_type.as_str().to_string()))
    }

    // --- cameras ---

    pub fn create_camera(&self, id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::Camera, id, name)
    }

    pub fn create_optics(&self) -> Element {
        Element::new(ElementKind::Optics)
    }

    pub fn create_imager(&self) -> Element {
        Element::new(ElementKind::Imager)
    }

    // --- animation and skinning ---

    pub fn create_animation(&self, id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::Animation, id, name)
    }

    pub fn create_channel(&self, source: Option<&str>, target: Option<&str>) -> Element {
        Element::new(ElementKind::Channel)
            .with_attr("source", reference(source))
            .with_attr("target", owned(target))
    }

    pub fn create_sampler(&self, id: Option<&str>) -> Element {
        Element::new(ElementKind::Sampler).with_attr("id", owned(id))
    }

    pub fn create_controller(&self, id: Option<&str>, target: Option<&str>) -> Element {
        Element::new(ElementKind::Controller)
            .with_attr("id", owned(id))
            .with_attr("target", reference(target))
    }

    pub fn create_skin(&self) -> Element {
        Element::new(ElementKind::Skin)
    }

    pub fn create_combiner(&self, count: Option<usize>) -> Element {
        Element::new(ElementKind::Combiner).with_attr("count", int(count))
    }

    pub fn create_joints(&self) -> Element {
        Element::new(ElementKind::Joints)
    }

    // --- geometry ---

    pub fn create_geometry(&self, id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::Geometry, id, name)
    }

    pub fn create_mesh(&self, id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::Mesh, id, name)
    }

    /// Primitive containers (`lines`, `polygons`, `triangles`, ...) share one
    /// attribute set: a count and a material reference.
    pub fn create_primitive(
        &self,
        kind: ElementKind,
        count: Option<usize>,
        material: Option<&str>,
    ) -> Element {
        debug_assert!(matches!(
            kind,
            ElementKind::Lines
                | ElementKind::Linestrips
                | ElementKind::Polygons
                | ElementKind::Triangles
                | ElementKind::Trifans
                | ElementKind::Tristrips
        ));
        Element::new(kind)
            .with_attr("count", int(count))
            .with_attr("material", reference(material))
    }

    pub fn create_polygons(&self, count: Option<usize>, material: Option<&str>) -> Element {
        self.create_primitive(ElementKind::Polygons, count, material)
    }

    /// One `<p>` index run on a single line.
    pub fn create_p(&self, indices: &[usize]) -> Element {
        text_element(ElementKind::P, Some(&join(indices)))
    }

    pub fn create_vertices(
        &self,
        id: Option<&str>,
        name: Option<&str>,
        count: Option<usize>,
    ) -> Element {
        id_name(ElementKind::Vertices, id, name).with_attr("count", int(count))
    }

    pub fn create_source(&self, id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::Source, id, name)
    }

    pub fn create_accessor(
        &self,
        count: Option<usize>,
        source: Option<&str>,
        id: Option<&str>,
        offset: Option<usize>,
        stride: Option<usize>,
    ) -> Element {
        Element::new(ElementKind::Accessor)
            .with_attr("count", int(count))
            .with_attr("id", owned(id))
            .with_attr("offset", int(offset))
            .with_attr("source", reference(source))
            .with_attr("stride", int(stride))
    }

    // --- arrays ---

    pub fn create_array(
        &self,
        count: Option<usize>,
        id: Option<&str>,
        name: Option<&str>,
        value_type: Option<&str>,
    ) -> Element {
        id_name(ElementKind::Array, id, name)
            .with_attr("count", int(count))
            .with_attr("type", owned(value_type))
    }

    pub fn create_bool_array(&self, values: &[bool], id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::BoolArray, id, name)
            .with_attr("count", Some(values.len().to_string()))
            .with_text(Some(join(values)))
    }

    /// A float array; attach the payload with [`Element::set_floats`].
    pub fn create_float_array(
        &self,
        count: Option<usize>,
        id: Option<&str>,
        name: Option<&str>,
        digits: Option<u32>,
        magnitude: Option<i32>,
    ) -> Element {
        id_name(ElementKind::FloatArray, id, name)
            .with_attr("count", int(count))
            .with_attr("digits", int(digits))
            .with_attr("magnitude", int(magnitude))
    }

    pub fn create_int_array(&self, values: &[i32], id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::IntArray, id, name)
            .with_attr("count", Some(values.len().to_string()))
            .with_text(Some(join(values)))
    }

    pub fn create_name_array(&self, values: &[&str], id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::NameArray, id, name)
            .with_attr("count", Some(values.len().to_string()))
            .with_text(Some(values.join(" ")))
    }

    pub fn create_input(
        &self,
        idx: Option<usize>,
        semantic: Option<InputSemantic>,
        source: Option<&str>,
    ) -> Element {
        Element::new(ElementKind::Input)
            .with_attr("idx", int(idx))
            .with_attr("semantic", semantic.map(|s| s.as_str().to_string()))
            .with_attr("source", reference(source))
    }

    // --- shading ---

    pub fn create_material(&self, id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::Material, id, name)
    }

    pub fn create_shader(&self, id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::Shader, id, name)
    }

    pub fn create_pass(&self) -> Element {
        Element::new(ElementKind::Pass)
    }

    pub fn create_technique(&self, profile: Option<Profile>) -> Element {
        Element::new(ElementKind::Technique)
            .with_attr("profile", profile.map(|p| p.as_str().to_string()))
    }

    pub fn create_image(&self, desc: &ImageDesc<'_>) -> Element {
        id_name(ElementKind::Image, desc.id, desc.name)
            .with_attr("width", int(desc.width))
            .with_attr("height", int(desc.height))
            .with_attr("depth", int(desc.depth))
            .with_attr("source", owned(desc.source))
            .with_attr("format", owned(desc.format))
    }

    pub fn create_light(
        &self,
        id: Option<&str>,
        name: Option<&str>,
        light_type: Option<LightType>,
    ) -> Element {
        id_name(ElementKind::Light, id, name)
            .with_attr("type", light_type.map(|t| t.as_str().to_string()))
    }

    pub fn create_texture(&self, id: Option<&str>, name: Option<&str>) -> Element {
        id_name(ElementKind::Texture, id, name)
    }

    /// `<program url="PHONG">`: the url is a program id, not a document reference.
    pub fn create_program(
        &self,
        id: Option<&str>,
        name: Option<&str>,
        url: Option<ProgramId>,
    ) -> Element {
        id_name(ElementKind::Program, id, name).with_attr("url", url.map(|u| u.as_str().to_string()))
    }

    pub fn create_code(&self, semantic: Option<CodeSemantic>, code: Option<&str>) -> Element {
        Element::new(ElementKind::Code)
            .with_attr("semantic", semantic.map(|s| s.as_str().to_string()))
            .with_text(owned(code))
    }

    pub fn create_entry(&self, function: Option<&str>, semantic: Option<CodeSemantic>) -> Element {
        Element::new(ElementKind::Entry)
            .with_attr("function", owned(function))
            .with_attr("semantic", semantic.map(|s| s.as_str().to_string()))
    }

    pub fn create_param(
        &self,
        name: Option<ParamName>,
        value_type: Option<&str>,
        flow: Option<Flow>,
    ) -> Element {
        Element::new(ElementKind::Param)
            .with_attr("name", name.map(|n| n.as_str().to_string()))
            .with_attr("type", owned(value_type))
            .with_attr("flow", flow.map(|f| f.as_str().to_string()))
    }

    // --- transforms ---

    /// A 4×4 matrix written row by row.
    pub fn create_matrix(&self, sid: Option<&str>, rows: &[[f32; 4]; 4]) -> Element {
        let data: String = rows
            .iter()
            .map(|row| format!("\n{}", self.fmt_floats(row)))
            .collect();
        Element::new(ElementKind::Matrix)
            .with_attr("sid", owned(sid))
            .with_text(Some(data))
    }

    pub fn create_lookat(&self, sid: Option<&str>, eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Element {
        let values: Vec<f32> = eye.into_iter().chain(target).chain(up).collect();
        Element::new(ElementKind::LookAt)
            .with_attr("sid", owned(sid))
            .with_text(Some(self.fmt_floats(&values)))
    }

    pub fn create_perspective(&self, sid: Option<&str>, fov: f32) -> Element {
        Element::new(ElementKind::Perspective)
            .with_attr("sid", owned(sid))
            .with_text(Some(self.fmt_float(fov)))
    }

    /// Rotation about `axis` by `degrees`. The axis is written as plain numbers.
    pub fn create_rotate(&self, sid: Option<&str>, axis: [f32; 3], degrees: f32) -> Element {
        Element::new(ElementKind::Rotate)
            .with_attr("sid", owned(sid))
            .with_text(Some(format!("{} {}", join(axis), self.fmt_float(degrees))))
    }

    pub fn create_scale(&self, sid: Option<&str>, scale: [f32; 3]) -> Element {
        Element::new(ElementKind::Scale)
            .with_attr("sid", owned(sid))
            .with_text(Some(self.fmt_floats(&scale)))
    }

    pub fn create_skew(&self, sid: Option<&str>, degrees: f32, rotation_axis: [f32; 3], translation_axis: [f32; 3]) -> Element {
        let mut values = vec![degrees];
        values.extend(rotation_axis);
        values.extend(translation_axis);
        Element::new(ElementKind::Skew)
            .with_attr("sid", owned(sid))
            .with_text(Some(self.fmt_floats(&values)))
    }

    pub fn create_translate(&self, sid: Option<&str>, offset: [f32; 3]) -> Element {
        Element::new(ElementKind::Translate)
            .with_attr("sid", owned(sid))
            .with_text(Some(self.fmt_floats(&offset)))
    }

    // --- asset metadata ---

    pub fn create_asset(&self) -> Element {
        Element::new(ElementKind::Asset)
    }

    pub fn create_author(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::Author, text)
    }

    pub fn create_authoring_tool(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::AuthoringTool, text)
    }

    pub fn create_created(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::Created, text)
    }

    pub fn create_modified(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::Modified, text)
    }

    pub fn create_revision(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::Revision, text)
    }

    pub fn create_source_data(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::SourceData, text)
    }

    pub fn create_copyright(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::Copyright, text)
    }

    pub fn create_title(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::Title, text)
    }

    pub fn create_subject(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::Subject, text)
    }

    pub fn create_keywords(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::Keywords, text)
    }

    pub fn create_comments(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::Comments, text)
    }

    pub fn create_unit(&self, name: Option<&str>, meter: Option<f32>) -> Element {
        Element::new(ElementKind::Unit)
            .with_attr("name", owned(name))
            .with_attr("meter", meter.map(|m| self.fmt_float(m)))
    }

    pub fn create_up_axis(&self, text: Option<&str>) -> Element {
        text_element(ElementKind::UpAxis, text)
    }

    pub fn create_extra(&self) -> Element {
        Element::new(ElementKind::Extra)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn collada_root(version: Option<&str>) -> Element {
    Element::new(ElementKind::Collada)
        .with_attr("version", Some(version.unwrap_or(COLLADA_VERSION).to_string()))
        .with_attr("xmlns", Some(COLLADA_XMLNS.to_string()))
}
