//! Degraded-export warnings.

use thiserror::Error;

/// A condition that made the export skip or approximate something.
///
/// Every warning is also logged through `tracing` when it is recorded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportWarning {
    #[error("object '{object}' references missing data block '{data}'")]
    MissingDataBlock { object: String, data: String },

    #[error("mesh '{mesh}' has {count} materials, only the first is exported")]
    MultipleMaterials { mesh: String, count: usize },

    #[error("face {face} in mesh '{mesh}' has {vertices} vertices, face ignored")]
    UnsupportedFace {
        mesh: String,
        face: usize,
        vertices: usize,
    },

    #[error("{faces} flat face(s) in mesh '{mesh}' have no normal, wrote (0, 0, 0)")]
    MissingFaceNormal { mesh: String, faces: usize },

    #[error("{faces} face(s) in mesh '{mesh}' have no UVs, wrote (0, 0)")]
    PartialUvs { mesh: String, faces: usize },

    #[error("texture '{texture}' is not an image texture, skipped")]
    UnsupportedTexture { texture: String },

    #[error("image texture '{texture}' has no image")]
    TextureWithoutImage { texture: String },

    #[error("light '{light}' has unsupported type {kind}, skipped")]
    UnsupportedLight { light: String, kind: String },

    #[error("light '{light}' has a non-finite attenuation scale, omitted")]
    NonFiniteAttenuation { light: String },

    #[error("camera '{camera}' is orthographic, skipped")]
    UnsupportedCamera { camera: String },

    #[error("node '{object}' instances '{id}' which was not exported")]
    DanglingInstance { object: String, id: String },

    #[error("id '{id}' is used by more than one element")]
    IdCollision { id: String },
}

/// Summary of one export run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportReport {
    pub geometries: usize,
    pub materials: usize,
    pub textures: usize,
    pub images: usize,
    pub lights: usize,
    pub cameras: usize,
    pub nodes: usize,
    pub warnings: Vec<ExportWarning>,
}

impl ExportReport {
    /// Record a warning and log it.
    pub fn warn(&mut self, warning: ExportWarning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let warning = ExportWarning::UnsupportedCamera {
            camera: "Top".to_string(),
        };
        assert_eq!(warning.to_string(), "camera 'Top' is orthographic, skipped");

        let warning = ExportWarning::MultipleMaterials {
            mesh: "Cube".to_string(),
            count: 2,
        };
        assert_eq!(
            warning.to_string(),
            "mesh 'Cube' has 2 materials, only the first is exported"
        );
    }

    #[test]
    fn test_report_collects_warnings() {
        let mut report = ExportReport::default();
        assert!(!report.has_warnings());
        report.warn(ExportWarning::IdCollision {
            id: "Cube-Lib".to_string(),
        });
        assert!(report.has_warnings());
        assert_eq!(report.warnings.len(), 1);
    }
}
