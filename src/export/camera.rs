//! Cameras as `<camera>` library entries.

use super::context::ExportContext;
use super::report::ExportWarning;
use crate::collada::{lib_id, Flow, ParamName, Profile, ProgramId};
use crate::document::Element;
use crate::error::Result;
use crate::scene::{Camera, Projection, SceneSource};

/// Sensor width in millimetres used to turn a lens length into a field of view.
pub const SENSOR_WIDTH: f32 = 32.0;

/// Scale applied to `atan(16 / lens)` by Blender-era COLLADA files (90 times 3.1415926).
pub const LEGACY_FOV_SCALE: f32 = 282.743_33;

/// Vertical field of view in degrees for a lens length in millimetres.
pub fn yfov_degrees(lens: f32) -> f32 {
    (2.0 * (SENSOR_WIDTH / 2.0 / lens).atan()).to_degrees()
}

/// The YFOV value written by earlier exporters, kept for output compatibility.
pub fn legacy_yfov(lens: f32) -> f32 {
    LEGACY_FOV_SCALE * (SENSOR_WIDTH / 2.0 / lens).atan()
}

/// Build the `<camera>` element, or `None` for orthographic cameras.
pub fn write_camera<S: SceneSource + ?Sized>(
    ctx: &mut ExportContext<'_, S>,
    camera: &Camera,
) -> Result<Option<Element>> {
    if camera.projection == Projection::Orthographic {
        ctx.warn(ExportWarning::UnsupportedCamera {
            camera: camera.name.clone(),
        });
        return Ok(None);
    }

    let yfov = if ctx.config.true_fov {
        yfov_degrees(camera.lens)
    } else {
        legacy_yfov(camera.lens)
    };
    let doc = &ctx.doc;
    let mut program = doc.create_program(None, None, Some(ProgramId::Perspective));
    for (name, value) in [
        (ParamName::YFov, yfov),
        (ParamName::ZNear, camera.clip_start),
        (ParamName::ZFar, camera.clip_end),
    ] {
        let mut param = doc.create_param(Some(name), Some("float"), Some(Flow::In));
        param.set_text(doc.fmt_float(value))?;
        program.append_child(param)?;
    }

    let mut optics = doc.create_optics();
    optics.append_child(program)?;
    let mut technique = doc.create_technique(Some(Profile::Common));
    technique.append_child(optics)?;

    let id = lib_id(&camera.name);
    let mut element = doc.create_camera(Some(&id), Some(&camera.name));
    element.append_child(technique)?;
    ctx.register_id(&id);
    Ok(Some(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ElementKind;
    use crate::export::{ExportConfig, NoProgress};
    use crate::scene::Scene;

    #[test]
    fn test_yfov() {
        // A 16 mm lens sees half the sensor at 45 degrees.
        assert!((yfov_degrees(16.0) - 90.0).abs() < 1e-4);
        assert!((yfov_degrees(35.0) - 49.134).abs() < 1e-2);
    }

    #[test]
    fn test_legacy_yfov() {
        assert!((legacy_yfov(35.0) - 121.234129).abs() < 1e-3);
        assert!((legacy_yfov(16.0) - 222.066095).abs() < 1e-3);
    }

    #[test]
    fn test_default_writes_legacy_yfov() {
        let scene = Scene::new("Scene");
        let config = ExportConfig::default();
        let mut progress = NoProgress;
        let mut ctx = ExportContext::new(&scene, &config, &mut progress);

        let mut camera = Camera::new("Main", Projection::Perspective);
        camera.lens = 35.0;
        let element = write_camera(&mut ctx, &camera).unwrap().unwrap();
        let yfov = element.find(ElementKind::Param).unwrap();
        assert_eq!(yfov.attribute("name"), Some("YFOV"));
        let value: f32 = yfov.text().unwrap().parse().unwrap();
        assert!((value - 121.234129).abs() < 1e-3);
    }

    #[test]
    fn test_perspective_and_orthographic() {
        let scene = Scene::new("Scene");
        let config = ExportConfig::default().with_true_fov(true);
        let mut progress = NoProgress;
        let mut ctx = ExportContext::new(&scene, &config, &mut progress);

        let mut camera = Camera::new("Main", Projection::Perspective);
        camera.lens = 16.0;
        let element = write_camera(&mut ctx, &camera).unwrap().unwrap();
        assert_eq!(element.attribute("id"), Some("Main-Lib"));
        let program = element.find(ElementKind::Program).unwrap();
        assert_eq!(program.attribute("url"), Some("PERSPECTIVE"));
        let values: Vec<_> = program
            .children()
            .iter()
            .map(|p| (p.attribute("name").unwrap(), p.text().unwrap()))
            .collect();
        assert_eq!(
            values,
            vec![("YFOV", "90.000000"), ("ZNEAR", "0.100000"), ("ZFAR", "100.000000")]
        );

        let top = Camera::new("Top", Projection::Orthographic);
        assert!(write_camera(&mut ctx, &top).unwrap().is_none());
        assert_eq!(ctx.report.warnings.len(), 1);
        assert!(!ctx.is_exported("Top-Lib"));
    }
}
