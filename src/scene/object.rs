//! Scene objects and their local transforms.

use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// What an object is. Only the kind of its data block matters to the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Mesh,
    #[serde(alias = "light")]
    Lamp,
    Camera,
    #[default]
    Empty,
    Armature,
    Curve,
    Surface,
    Text,
    Lattice,
}

/// Local transform of an object.
///
/// Either location / XYZ Euler rotation (radians) / scale, or a raw row-major
/// 4×4 matrix which then takes precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    #[serde(default)]
    pub location: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<[[f32; 4]; 4]>,
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: [0.0; 3],
            rotation: [0.0; 3],
            scale: unit_scale(),
            matrix: None,
        }
    }
}

/// Location, XYZ Euler rotation in radians, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    pub location: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Transform {
    pub fn new(location: [f32; 3], rotation: [f32; 3], scale: [f32; 3]) -> Self {
        Self {
            location,
            rotation,
            scale,
            matrix: None,
        }
    }

    /// A transform given as a raw row-major matrix.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self {
            matrix: Some(rows),
            ..Self::default()
        }
    }

    /// The local matrix, `T · Rx · Ry · Rz · S` when built from components.
    pub fn to_mat4(&self) -> Mat4 {
        match &self.matrix {
            Some(rows) => Mat4::from_cols_array_2d(rows).transpose(),
            None => compose(&Components {
                location: self.location,
                rotation: self.rotation,
                scale: self.scale,
            }),
        }
    }

    /// The local matrix as rows, ready to be written out.
    pub fn rows(&self) -> [[f32; 4]; 4] {
        self.to_mat4().transpose().to_cols_array_2d()
    }

    /// Location / rotation / scale, decomposing the raw matrix if there is one.
    pub fn components(&self) -> Components {
        match &self.matrix {
            Some(_) => decompose(&self.to_mat4()),
            None => Components {
                location: self.location,
                rotation: self.rotation,
                scale: self.scale,
            },
        }
    }
}

/// Compose `T · Rx · Ry · Rz · S`, the order separate transform elements are
/// applied in.
pub fn compose(c: &Components) -> Mat4 {
    Mat4::from_translation(Vec3::from(c.location))
        * Mat4::from_rotation_x(c.rotation[0])
        * Mat4::from_rotation_y(c.rotation[1])
        * Mat4::from_rotation_z(c.rotation[2])
        * Mat4::from_scale(Vec3::from(c.scale))
}

/// Inverse of [`compose`] for matrices without shear.
pub fn decompose(m: &Mat4) -> Components {
    let (scale, rotation, translation) = m.to_scale_rotation_translation();
    let r = Mat3::from_quat(rotation);
    // r.col(j)[i] is row i, column j of Rx·Ry·Rz.
    let r02 = r.z_axis.x.clamp(-1.0, 1.0);
    let y = r02.asin();
    let (x, z) = if r02.abs() < 0.999_999 {
        ((-r.z_axis.y).atan2(r.z_axis.z), (-r.y_axis.x).atan2(r.x_axis.x))
    } else {
        // Gimbal lock: fold the whole X/Z rotation into X.
        (r.y_axis.z.atan2(r.y_axis.y), 0.0)
    };
    Components {
        location: translation.to_array(),
        rotation: [x, y, z],
        scale: scale.to_array(),
    }
}

/// One object in the host scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    #[serde(default)]
    pub kind: ObjectKind,
    /// Name of the underlying data block (mesh, lamp, camera).
    #[serde(default)]
    pub data: Option<String>,
    /// Name of the parent object.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub selected: bool,
    #[serde(flatten)]
    pub transform: Transform,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            data: None,
            parent: None,
            selected: false,
            transform: Transform::default(),
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_close(a: &Mat4, b: &Mat4) {
        for (x, y) in a.to_cols_array().iter().zip(b.to_cols_array().iter()) {
            assert!((x - y).abs() < 1e-4, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_compose_order() {
        let c = Components {
            location: [1.0, 2.0, 3.0],
            rotation: [0.0, 0.0, std::f32::consts::FRAC_PI_2],
            scale: [2.0, 2.0, 2.0],
        };
        let m = compose(&c);
        // +X is scaled then rotated onto +Y, then translated.
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 4.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn test_decompose_roundtrip() {
        let c = Components {
            location: [0.5, -1.0, 4.0],
            rotation: [0.3, -0.7, 1.2],
            scale: [1.0, 2.0, 0.5],
        };
        let m = compose(&c);
        let back = decompose(&m);
        assert_mat_close(&compose(&back), &m);
        for i in 0..3 {
            assert!((back.rotation[i] - c.rotation[i]).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rows_are_row_major() {
        let t = Transform::new([5.0, 6.0, 7.0], [0.0; 3], [1.0; 3]);
        let rows = t.rows();
        assert_eq!(rows[0], [1.0, 0.0, 0.0, 5.0]);
        assert_eq!(rows[2], [0.0, 0.0, 1.0, 7.0]);
        assert_eq!(rows[3], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Transform::from_rows(rows).to_mat4(), t.to_mat4());
    }

    #[test]
    fn test_object_json_defaults() {
        let obj: SceneObject =
            serde_json::from_str(r#"{"name": "Cube", "kind": "mesh", "data": "CubeMesh"}"#).unwrap();
        assert_eq!(obj.kind, ObjectKind::Mesh);
        assert_eq!(obj.transform.scale, [1.0, 1.0, 1.0]);
        assert!(obj.parent.is_none());
    }
}
