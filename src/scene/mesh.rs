//! Mesh data blocks.

use serde::{Deserialize, Serialize};

/// A mesh vertex: position plus the averaged vertex normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVertex {
    pub position: [f32; 3],
    #[serde(default)]
    pub normal: [f32; 3],
}

/// A polygon referencing mesh vertices by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Vertex indices, in winding order.
    pub vertices: Vec<u32>,
    /// Smooth faces use per-vertex normals, flat faces the face normal.
    #[serde(default)]
    pub smooth: bool,
    #[serde(default)]
    pub normal: Option<[f32; 3]>,
    /// One UV per corner, when the mesh carries face UVs.
    #[serde(default)]
    pub uv: Option<Vec<[f32; 2]>>,
}

impl Face {
    pub fn new(vertices: impl Into<Vec<u32>>) -> Self {
        Self {
            vertices: vertices.into(),
            smooth: false,
            normal: None,
            uv: None,
        }
    }

    pub fn smooth(mut self) -> Self {
        self.smooth = true;
        self
    }

    pub fn with_normal(mut self, normal: [f32; 3]) -> Self {
        self.normal = Some(normal);
        self
    }

    pub fn with_uv(mut self, uv: impl Into<Vec<[f32; 2]>>) -> Self {
        self.uv = Some(uv.into());
        self
    }

    /// Triangles and quads are the only faces that can be exported.
    pub fn is_exportable(&self) -> bool {
        matches!(self.vertices.len(), 3 | 4)
    }
}

/// A mesh data block, possibly shared by several objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub name: String,
    /// Number of objects (anywhere in the host) using this mesh.
    #[serde(default = "one_user")]
    pub users: u32,
    #[serde(default)]
    pub vertices: Vec<MeshVertex>,
    #[serde(default)]
    pub faces: Vec<Face>,
    /// Material slots; empty slots are `None`.
    #[serde(default)]
    pub materials: Vec<Option<String>>,
}

fn one_user() -> u32 {
    1
}

impl MeshData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            users: 1,
            vertices: Vec::new(),
            faces: Vec::new(),
            materials: Vec::new(),
        }
    }

    /// Add a vertex and return its index.
    pub fn add_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(MeshVertex { position, normal });
        index
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.materials.push(Some(material.into()));
        self
    }

    /// Whether any face carries UV coordinates.
    pub fn has_face_uv(&self) -> bool {
        self.faces.iter().any(|f| f.uv.is_some())
    }

    /// Names of all assigned materials, skipping empty slots.
    pub fn material_names(&self) -> impl Iterator<Item = &str> {
        self.materials.iter().filter_map(|m| m.as_deref())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_mesh() {
        let mut mesh = MeshData::new("Tri").with_material("Red");
        let a = mesh.add_vertex([0.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let b = mesh.add_vertex([1.0, 0.0, 0.0], [0.0, 0.0, 1.0]);
        let c = mesh.add_vertex([0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
        mesh.add_face(Face::new([a, b, c]).smooth());

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert!(!mesh.has_face_uv());
        assert_eq!(mesh.material_names().collect::<Vec<_>>(), ["Red"]);
    }

    #[test]
    fn test_exportable_faces() {
        assert!(Face::new([0, 1, 2]).is_exportable());
        assert!(Face::new([0, 1, 2, 3]).is_exportable());
        assert!(!Face::new([0, 1]).is_exportable());
        assert!(!Face::new([0, 1, 2, 3, 4]).is_exportable());
    }

    #[test]
    fn test_mesh_json() {
        let json = r#"{
            "name": "Quad",
            "vertices": [{"position": [0, 0, 0]}, {"position": [1, 0, 0]},
                         {"position": [1, 1, 0]}, {"position": [0, 1, 0]}],
            "faces": [{"vertices": [0, 1, 2, 3], "uv": [[0, 0], [1, 0], [1, 1], [0, 1]]}],
            "materials": [null, "Blue"]
        }"#;
        let mesh: MeshData = serde_json::from_str(json).unwrap();
        assert_eq!(mesh.users, 1);
        assert!(mesh.has_face_uv());
        assert_eq!(mesh.material_names().collect::<Vec<_>>(), ["Blue"]);
    }
}
