//! Lamps as `<light>` library entries.

use super::context::ExportContext;
use super::report::ExportWarning;
use crate::collada::{lib_id, Flow, LightType, ParamName};
use crate::document::Element;
use crate::error::Result;
use crate::scene::{Light, LightKind, SceneSource};

/// Spot blend is scaled by this to get the falloff scale.
pub const FALLOFF_SCALE_FACTOR: f32 = 128.0;

fn light_type(kind: LightKind) -> Option<LightType> {
    match kind {
        LightKind::Point => Some(LightType::Point),
        LightKind::Sun => Some(LightType::Directional),
        LightKind::Spot => Some(LightType::Spot),
        LightKind::Ambient => Some(LightType::Ambient),
        LightKind::Area | LightKind::Photon => None,
    }
}

/// Attenuation mode and scale for point and spot lights.
pub fn attenuation(light: &Light) -> (&'static str, f32) {
    if light.quadratic {
        ("QUADRATIC", 2.0 / (light.quad2 * light.distance * light.energy))
    } else {
        ("LINEAR", 2.0 / (light.distance * light.energy))
    }
}

fn param<S: SceneSource + ?Sized>(
    ctx: &ExportContext<'_, S>,
    name: ParamName,
    value_type: &str,
    text: String,
) -> Result<Element> {
    let mut param = ctx.doc.create_param(Some(name), Some(value_type), Some(Flow::In));
    param.set_text(text)?;
    Ok(param)
}

/// Build the `<light>` element, or `None` for light kinds COLLADA cannot
/// express.
pub fn write_light<S: SceneSource + ?Sized>(
    ctx: &mut ExportContext<'_, S>,
    light: &Light,
) -> Result<Option<Element>> {
    let Some(light_type) = light_type(light.kind) else {
        ctx.warn(ExportWarning::UnsupportedLight {
            light: light.name.clone(),
            kind: format!("{:?}", light.kind),
        });
        return Ok(None);
    };

    let id = lib_id(&light.name);
    let mut element = ctx.doc.create_light(Some(&id), Some(&light.name), Some(light_type));
    element.append_child(param(ctx, ParamName::Color, "float3", ctx.doc.fmt_floats(&light.color))?)?;

    if matches!(light.kind, LightKind::Point | LightKind::Spot) {
        let (mode, scale) = attenuation(light);
        element.append_child(param(ctx, ParamName::Attenuation, "token", mode.to_string())?)?;
        if scale.is_finite() {
            element.append_child(param(ctx, ParamName::AttenuationScale, "float", ctx.doc.fmt_float(scale))?)?;
        } else {
            ctx.warn(ExportWarning::NonFiniteAttenuation {
                light: light.name.clone(),
            });
        }
    }

    if light.kind == LightKind::Spot {
        element.append_child(param(ctx, ParamName::Angle, "float", ctx.doc.fmt_float(light.spot_size))?)?;
        element.append_child(param(ctx, ParamName::Falloff, "token", "LINEAR".to_string())?)?;
        element.append_child(param(
            ctx,
            ParamName::FalloffScale,
            "float",
            ctx.doc.fmt_float(light.spot_blend * FALLOFF_SCALE_FACTOR),
        )?)?;
    }

    ctx.register_id(&id);
    Ok(Some(element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ExportConfig, NoProgress};
    use crate::scene::Scene;

    fn write(light: &Light) -> (Option<Element>, Vec<ExportWarning>) {
        let scene = Scene::new("Scene");
        let config = ExportConfig::default();
        let mut progress = NoProgress;
        let mut ctx = ExportContext::new(&scene, &config, &mut progress);
        let element = write_light(&mut ctx, light).unwrap();
        (element, ctx.report.warnings)
    }

    fn params(element: &Element) -> Vec<(&str, &str)> {
        element
            .children()
            .iter()
            .map(|p| (p.attribute("name").unwrap(), p.text().unwrap()))
            .collect()
    }

    #[test]
    fn test_point_light_linear() {
        let mut light = Light::new("Key", LightKind::Point);
        light.distance = 20.0;
        light.energy = 0.5;
        let (element, warnings) = write(&light);
        let element = element.unwrap();
        assert!(warnings.is_empty());
        assert_eq!(element.attribute("type"), Some("POINT"));
        assert_eq!(element.attribute("id"), Some("Key-Lib"));
        assert_eq!(
            params(&element),
            vec![
                ("COLOR", "1.000000 1.000000 1.000000"),
                ("ATTENUATION", "LINEAR"),
                ("ATTENUATION_SCALE", "0.200000"),
            ]
        );
    }

    #[test]
    fn test_spot_light_quadratic() {
        let mut light = Light::new("Spot", LightKind::Spot);
        light.quadratic = true;
        light.quad2 = 0.5;
        light.distance = 10.0;
        light.energy = 2.0;
        light.spot_size = 30.0;
        light.spot_blend = 0.25;
        let (element, _) = write(&light);
        let element = element.unwrap();
        assert_eq!(element.attribute("type"), Some("SPOT"));
        assert_eq!(
            params(&element),
            vec![
                ("COLOR", "1.000000 1.000000 1.000000"),
                ("ATTENUATION", "QUADRATIC"),
                ("ATTENUATION_SCALE", "0.200000"),
                ("ANGLE", "30.000000"),
                ("FALLOFF", "LINEAR"),
                ("FALLOFF_SCALE", "32.000000"),
            ]
        );
    }

    #[test]
    fn test_sun_and_hemi() {
        let (sun, _) = write(&Light::new("Sun", LightKind::Sun));
        let sun = sun.unwrap();
        assert_eq!(sun.attribute("type"), Some("DIRECTIONAL"));
        assert_eq!(sun.children().len(), 1);

        let (hemi, _) = write(&Light::new("Fill", LightKind::Ambient));
        assert_eq!(hemi.unwrap().attribute("type"), Some("AMBIENT"));
    }

    #[test]
    fn test_unsupported_lights_skipped() {
        for kind in [LightKind::Area, LightKind::Photon] {
            let (element, warnings) = write(&Light::new("Panel", kind));
            assert!(element.is_none());
            assert!(matches!(warnings[0], ExportWarning::UnsupportedLight { .. }));
        }
    }

    #[test]
    fn test_zero_energy_omits_scale() {
        let mut light = Light::new("Off", LightKind::Point);
        light.energy = 0.0;
        let (element, warnings) = write(&light);
        let element = element.unwrap();
        assert_eq!(element.children().len(), 2);
        assert_eq!(
            warnings,
            vec![ExportWarning::NonFiniteAttenuation {
                light: "Off".to_string()
            }]
        );
    }
}
