//! Materials, textures and images.
//!
//! The host's single shading model is approximated by a COMMON `PHONG`
//! program. The conversion factors are fixed and must stay as they are.

use super::context::{append_all, ExportContext};
use crate::collada::{lib_id, Flow, ImageDesc, InputSemantic, ParamName, Profile, ProgramId};
use crate::document::Element;
use crate::error::Result;
use crate::scene::{Image, Material, SceneSource, Texture, TextureKind};
use std::path::Path;

pub(crate) const PHONG_SUFFIX: &str = "-Phong";

/// Specular color is scaled by specularity times this factor.
pub const SPECULAR_FACTOR: f32 = 0.5;
/// Hardness is divided by this to get shininess.
pub const SHININESS_DIVISOR: f32 = 4.0;
/// Prefix of image source URIs.
pub const FILE_URI_PREFIX: &str = "file://";

fn scaled(color: [f32; 3], factor: f32) -> [f32; 3] {
    color.map(|c| c * factor)
}

/// Whether a texture can be written to the texture library.
pub(crate) fn is_exportable_texture(texture: &Texture) -> bool {
    texture.kind == TextureKind::Image
}

/// `<param>` carrying a value inline.
fn value_param<S: SceneSource + ?Sized>(
    ctx: &ExportContext<'_, S>,
    name: ParamName,
    values: &[f32],
) -> Result<Element> {
    let value_type = if values.len() == 3 { "float3" } else { "float" };
    let mut param = ctx.doc.create_param(Some(name), Some(value_type), Some(Flow::In));
    param.set_text(ctx.doc.fmt_floats(values))?;
    Ok(param)
}

/// Build the `<material>` element for one material.
pub fn write_material<S: SceneSource + ?Sized>(
    ctx: &mut ExportContext<'_, S>,
    material: &Material,
) -> Result<Element> {
    let name = material.name.as_str();
    let color = material.color;

    let mut pass = ctx.doc.create_pass();
    for texture_name in &material.textures {
        if let Some(texture) = ctx.scene.texture(texture_name) {
            if is_exportable_texture(texture) {
                let id = lib_id(&texture.name);
                pass.append_child(ctx.doc.create_input(None, Some(InputSemantic::Texture), Some(&id)))?;
            }
        }
    }

    let mut program = ctx.doc.create_program(None, None, Some(ProgramId::Phong));
    let specular = scaled(material.specular_color, material.specularity * SPECULAR_FACTOR);
    let params = [
        value_param(ctx, ParamName::Color, &color)?,
        value_param(ctx, ParamName::Diffuse, &color)?,
        value_param(ctx, ParamName::Ambient, &scaled(color, material.ambient))?,
        value_param(ctx, ParamName::Specular, &specular)?,
        value_param(ctx, ParamName::Emission, &scaled(color, material.emit))?,
        value_param(ctx, ParamName::Shininess, &[material.hardness / SHININESS_DIVISOR])?,
        value_param(ctx, ParamName::Transparent, &color)?,
        value_param(ctx, ParamName::Transparency, &[1.0 - material.alpha])?,
        value_param(ctx, ParamName::Reflective, &material.mirror_color)?,
        value_param(ctx, ParamName::Reflectivity, &[material.reflectivity])?,
    ];
    append_all(&mut program, params)?;
    pass.append_child(program)?;

    let mut technique = ctx.doc.create_technique(Some(Profile::Common));
    technique.append_child(pass)?;

    let shader_id = format!("{}{}", name, PHONG_SUFFIX);
    let mut shader = ctx.doc.create_shader(Some(&shader_id), Some(&shader_id));
    shader.append_child(technique)?;

    let id = lib_id(name);
    let mut element = ctx.doc.create_material(Some(&id), Some(name));
    element.append_child(shader)?;
    ctx.register_id(&id);
    Ok(element)
}

/// Build the `<texture>` element for an image texture.
pub fn write_texture<S: SceneSource + ?Sized>(
    ctx: &mut ExportContext<'_, S>,
    texture: &Texture,
) -> Result<Element> {
    let doc = &ctx.doc;
    let id = lib_id(&texture.name);
    let mut element = doc.create_texture(Some(&id), Some(&texture.name));
    element.append_child(doc.create_param(Some(ParamName::Diffuse), Some("float3"), Some(Flow::Out)))?;

    let mut technique = doc.create_technique(Some(Profile::Common));
    if let Some(image) = texture.image.as_deref().and_then(|i| ctx.scene.image(i)) {
        technique.append_child(doc.create_input(None, Some(InputSemantic::Image), Some(&lib_id(&image.name))))?;
    }
    element.append_child(technique)?;
    ctx.register_id(&id);
    Ok(element)
}

/// Normalize a host image path into a `file://` URI.
///
/// Paths starting with `//` are relative to the scene file and are resolved
/// against `base_dir` when one is given.
pub fn image_uri(filename: &str, base_dir: Option<&Path>) -> String {
    let path = match (filename.strip_prefix("//"), base_dir) {
        (Some(relative), Some(base)) => base.join(relative).to_string_lossy().into_owned(),
        _ => filename.to_string(),
    };
    let mut path = path.replace('\\', "/");
    while path.contains("//") {
        path = path.replace("//", "/");
    }
    format!("{}{}", FILE_URI_PREFIX, path)
}

/// Build the `<image>` element for one image.
pub fn write_image<S: SceneSource + ?Sized>(
    ctx: &mut ExportContext<'_, S>,
    image: &Image,
) -> Result<Element> {
    let id = lib_id(&image.name);
    let source = image_uri(&image.filename, ctx.config.base_dir.as_deref());
    let element = ctx.doc.create_image(&ImageDesc {
        id: Some(&id),
        name: Some(&image.name),
        source: Some(&source),
        ..ImageDesc::default()
    });
    ctx.register_id(&id);
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ElementKind;
    use crate::export::{ExportConfig, NoProgress};
    use crate::scene::Scene;

    fn param_text<'a>(program: &'a Element, name: &str) -> Option<&'a str> {
        program
            .children()
            .iter()
            .find(|p| p.attribute("name") == Some(name))
            .and_then(|p| p.text())
    }

    #[test]
    fn test_phong_conversion() {
        let scene = Scene::new("Scene");
        let config = ExportConfig::default();
        let mut progress = NoProgress;
        let mut ctx = ExportContext::new(&scene, &config, &mut progress);

        let mut material = Material::new("Red").with_color([1.0, 0.0, 0.0]);
        material.specularity = 0.5;
        material.specular_color = [1.0, 1.0, 1.0];
        material.ambient = 0.5;
        material.emit = 0.1;
        material.alpha = 0.75;
        material.hardness = 50.0;
        material.reflectivity = 0.25;

        let element = write_material(&mut ctx, &material).unwrap();
        assert_eq!(element.attribute("id"), Some("Red-Lib"));
        assert_eq!(element.attribute("name"), Some("Red"));

        let shader = element.find(ElementKind::Shader).unwrap();
        assert_eq!(shader.attribute("id"), Some("Red-Phong"));
        let program = element.find(ElementKind::Program).unwrap();
        assert_eq!(program.attribute("url"), Some("PHONG"));

        let names: Vec<&str> = program
            .children()
            .iter()
            .filter_map(|p| p.attribute("name"))
            .collect();
        assert_eq!(
            names,
            [
                "COLOR",
                "DIFFUSE",
                "AMBIENT",
                "SPECULAR",
                "EMISSION",
                "SHININESS",
                "TRANSPARENT",
                "TRANSPARENCY",
                "REFLECTIVE",
                "REFLECTIVITY"
            ]
        );
        assert_eq!(param_text(program, "AMBIENT"), Some("0.500000 0.000000 0.000000"));
        assert_eq!(param_text(program, "SPECULAR"), Some("0.250000 0.250000 0.250000"));
        assert_eq!(param_text(program, "EMISSION"), Some("0.100000 0.000000 0.000000"));
        assert_eq!(param_text(program, "SHININESS"), Some("12.500000"));
        assert_eq!(param_text(program, "TRANSPARENCY"), Some("0.250000"));
        assert_eq!(param_text(program, "REFLECTIVITY"), Some("0.250000"));

        let shininess = program.children().iter().find(|p| p.attribute("name") == Some("SHININESS")).unwrap();
        assert_eq!(shininess.attribute("type"), Some("float"));
        assert_eq!(shininess.attribute("flow"), Some("IN"));
    }

    #[test]
    fn test_texture_inputs() {
        let mut scene = Scene::new("Scene");
        scene.textures.push(Texture::image("Bricks", "BricksImg"));
        scene.textures.push(Texture {
            name: "Fog".to_string(),
            kind: TextureKind::Clouds,
            image: None,
        });
        scene.images.push(Image {
            name: "BricksImg".to_string(),
            filename: "/tex/bricks.png".to_string(),
        });
        let config = ExportConfig::default();
        let mut progress = NoProgress;
        let mut ctx = ExportContext::new(&scene, &config, &mut progress);

        let material = Material::new("Wall").with_texture("Bricks").with_texture("Fog");
        let element = write_material(&mut ctx, &material).unwrap();
        let pass = element.find(ElementKind::Pass).unwrap();
        let inputs: Vec<_> = pass
            .children()
            .iter()
            .filter(|c| c.kind() == ElementKind::Input)
            .collect();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].attribute("semantic"), Some("TEXTURE"));
        assert_eq!(inputs[0].attribute("source"), Some("#Bricks-Lib"));

        let texture = write_texture(&mut ctx, &scene.textures[0]).unwrap();
        let param = texture.find(ElementKind::Param).unwrap();
        assert_eq!(param.attribute("name"), Some("DIFFUSE"));
        assert_eq!(param.attribute("flow"), Some("OUT"));
        let input = texture.find(ElementKind::Input).unwrap();
        assert_eq!(input.attribute("semantic"), Some("IMAGE"));
        assert_eq!(input.attribute("source"), Some("#BricksImg-Lib"));

        let image = write_image(&mut ctx, &scene.images[0]).unwrap();
        assert_eq!(image.attribute("source"), Some("file:///tex/bricks.png"));
    }

    #[test]
    fn test_image_uri() {
        assert_eq!(image_uri("/tmp/a.png", None), "file:///tmp/a.png");
        assert_eq!(image_uri("C:\\textures\\wood.jpg", None), "file://C:/textures/wood.jpg");
        assert_eq!(image_uri("/tmp//nested///b.png", None), "file:///tmp/nested/b.png");
        assert_eq!(
            image_uri("//textures/c.png", Some(Path::new("/projects/scene"))),
            "file:///projects/scene/textures/c.png"
        );
        assert_eq!(image_uri("//textures/c.png", None), "file:///textures/c.png");
    }
}
