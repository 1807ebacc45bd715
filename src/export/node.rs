//! The `<scene>` node tree.

use super::context::ExportContext;
use super::progress::ExportPhase;
use super::report::ExportWarning;
use crate::collada::{lib_id, NodeType};
use crate::document::Element;
use crate::error::Result;
use crate::scene::{SceneObject, SceneSource};
use std::collections::HashSet;

/// Axes of the three rotation elements, in the order they are written.
const ROTATION_AXES: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Objects whose parent is absent or does not take part in the export.
pub fn roots<'o>(objects: &[&'o SceneObject]) -> Vec<&'o SceneObject> {
    let names: HashSet<&str> = objects.iter().map(|o| o.name.as_str()).collect();
    objects
        .iter()
        .filter(|o| match &o.parent {
            Some(parent) => !names.contains(parent.as_str()),
            None => true,
        })
        .copied()
        .collect()
}

fn transform_elements<S: SceneSource + ?Sized>(
    ctx: &ExportContext<'_, S>,
    object: &SceneObject,
) -> Vec<Element> {
    let doc = &ctx.doc;
    if ctx.config.bake_transforms {
        return vec![doc.create_matrix(None, &object.transform.rows())];
    }

    let c = object.transform.components();
    let mut elements = Vec::with_capacity(5);
    elements.push(doc.create_translate(None, c.location));
    for (axis, angle) in ROTATION_AXES.iter().zip(c.rotation) {
        elements.push(doc.create_rotate(None, *axis, angle.to_degrees()));
    }
    elements.push(doc.create_scale(None, c.scale));
    elements
}

fn write_node<S: SceneSource + ?Sized>(
    ctx: &mut ExportContext<'_, S>,
    object: &SceneObject,
    participants: &[&SceneObject],
    visited: &mut HashSet<String>,
) -> Result<Element> {
    visited.insert(object.name.clone());
    let name = object.name.as_str();
    let mut node = ctx.doc.create_node(Some(name), Some(name), Some(NodeType::Node));

    if let Some(data) = &object.data {
        let id = lib_id(data);
        if ctx.is_exported(&id) {
            node.append_child(ctx.doc.create_instance(Some(&id)))?;
        } else {
            ctx.warn(ExportWarning::DanglingInstance {
                object: name.to_string(),
                id,
            });
        }
    }

    for element in transform_elements(ctx, object) {
        node.append_child(element)?;
    }
    ctx.report.nodes += 1;

    for child in participants {
        if child.parent.as_deref() == Some(name) && !visited.contains(&child.name) {
            let child_node = write_node(ctx, child, participants, visited)?;
            node.append_child(child_node)?;
        }
    }
    Ok(node)
}

/// Build the `<scene>` element with one node tree per root object.
pub fn write_scene<S: SceneSource + ?Sized>(
    ctx: &mut ExportContext<'_, S>,
    participants: &[&SceneObject],
) -> Result<Element> {
    let source = ctx.scene;
    let scene_name = source.name();
    let mut scene = ctx.doc.create_scene(Some(scene_name), Some(scene_name));

    let roots = roots(participants);
    let mut visited = HashSet::new();
    ctx.progress(ExportPhase::Nodes, 0, roots.len());
    for (i, root) in roots.iter().enumerate() {
        if visited.contains(&root.name) {
            continue;
        }
        let node = write_node(ctx, root, participants, &mut visited)?;
        scene.append_child(node)?;
        ctx.progress(ExportPhase::Nodes, i + 1, roots.len());
    }
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ElementKind;
    use crate::export::{ExportConfig, NoProgress};
    use crate::scene::{ObjectKind, Scene, Transform};

    fn object(name: &str, parent: Option<&str>) -> SceneObject {
        let object = SceneObject::new(name, ObjectKind::Empty);
        match parent {
            Some(parent) => object.with_parent(parent),
            None => object,
        }
    }

    #[test]
    fn test_roots() {
        let a = object("A", None);
        let b = object("B", Some("A"));
        let c = object("C", Some("Hidden"));
        let participants = vec![&a, &b, &c];
        let names: Vec<&str> = roots(&participants).iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_nested_nodes() {
        let scene = Scene::new("Studio");
        let config = ExportConfig::default();
        let mut progress = NoProgress;
        let mut ctx = ExportContext::new(&scene, &config, &mut progress);

        let a = object("A", None);
        let b = object("B", Some("A"));
        let c = object("C", Some("B"));
        let participants = vec![&c, &b, &a];
        let element = write_scene(&mut ctx, &participants).unwrap();

        assert_eq!(element.attribute("id"), Some("Studio"));
        assert_eq!(element.attribute("name"), Some("Studio"));
        assert_eq!(element.children().len(), 1);
        let root = &element.children()[0];
        assert_eq!(root.attribute("type"), Some("NODE"));
        assert_eq!(root.attribute("id"), Some("A"));
        assert_eq!(element.find_all(ElementKind::Node).len(), 3);
        assert_eq!(ctx.report.nodes, 3);
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let scene = Scene::new("Scene");
        let config = ExportConfig::default();
        let mut progress = NoProgress;
        let mut ctx = ExportContext::new(&scene, &config, &mut progress);

        let root = object("Root", None);
        let a = object("A", Some("B"));
        let b = object("B", Some("A"));
        let participants = vec![&root, &a, &b];
        let element = write_scene(&mut ctx, &participants).unwrap();
        // Both halves of the cycle have a participating parent, so neither is a root.
        assert_eq!(element.find_all(ElementKind::Node).len(), 1);
    }

    #[test]
    fn test_separate_transform_elements() {
        let scene = Scene::new("Scene");
        let config = ExportConfig::default();
        let mut progress = NoProgress;
        let ctx = ExportContext::new(&scene, &config, &mut progress);

        let obj = SceneObject::new("Cube", ObjectKind::Mesh).with_transform(Transform::new(
            [1.0, 2.0, 3.0],
            [std::f32::consts::FRAC_PI_2, 0.0, 0.0],
            [1.0, 1.0, 2.0],
        ));
        let elements = transform_elements(&ctx, &obj);
        let tags: Vec<&str> = elements.iter().map(|e| e.tag()).collect();
        assert_eq!(tags, ["translate", "rotate", "rotate", "rotate", "scale"]);
        assert_eq!(elements[0].text(), Some("1.000000 2.000000 3.000000"));
        assert_eq!(elements[1].text(), Some("1 0 0 90.000000"));
        assert_eq!(elements[2].text(), Some("0 1 0 0.000000"));
        assert_eq!(elements[3].text(), Some("0 0 1 0.000000"));
        assert_eq!(elements[4].text(), Some("1.000000 1.000000 2.000000"));
    }

    #[test]
    fn test_dangling_instance_warns() {
        let scene = Scene::new("Scene");
        let config = ExportConfig::default();
        let mut progress = NoProgress;
        let mut ctx = ExportContext::new(&scene, &config, &mut progress);

        let obj = SceneObject::new("Cube", ObjectKind::Mesh).with_data("Missing");
        let element = write_scene(&mut ctx, &[&obj]).unwrap();
        assert!(element.find(ElementKind::Instance).is_none());
        assert_eq!(
            ctx.report.warnings,
            vec![ExportWarning::DanglingInstance {
                object: "Cube".to_string(),
                id: "Missing-Lib".to_string()
            }]
        );
    }
}
