//! Export options.

use crate::document::{Format, DEFAULT_PRECISION};
use std::path::PathBuf;

/// Name and version of the application the scene comes from.
#[derive(Debug, Clone, PartialEq)]
pub struct HostInfo {
    pub name: String,
    pub version: String,
}

impl Default for HostInfo {
    fn default() -> Self {
        Self {
            name: "Blender".to_string(),
            version: "2.40".to_string(),
        }
    }
}

impl HostInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The `<authoring_tool>` string.
    pub fn authoring_tool(&self) -> String {
        format!("{} {} COLLADA Exporter", self.name, self.version)
    }
}

/// Configuration for one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Only export selected objects.
    pub selected_only: bool,
    /// Write one `<matrix>` per node instead of translate/rotate/scale.
    pub bake_transforms: bool,
    /// Digits after the decimal point for all floats.
    pub precision: usize,
    /// Indent nested elements.
    pub pretty: bool,
    /// Indent step when `pretty` is set.
    pub indent: String,
    /// Written into `<author>`; may be empty.
    pub author: String,
    pub host: HostInfo,
    /// Directory that `//`-relative image paths are resolved against.
    pub base_dir: Option<PathBuf>,
    /// Replace an existing destination file.
    pub overwrite: bool,
    /// Write the geometric vertical field of view instead of the legacy value.
    pub true_fov: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            selected_only: false,
            bake_transforms: false,
            precision: DEFAULT_PRECISION,
            pretty: true,
            indent: "\t".to_string(),
            author: String::new(),
            host: HostInfo::default(),
            base_dir: None,
            overwrite: false,
            true_fov: false,
        }
    }
}

impl ExportConfig {
    pub fn with_selected_only(mut self, selected_only: bool) -> Self {
        self.selected_only = selected_only;
        self
    }

    pub fn with_bake_transforms(mut self, bake: bool) -> Self {
        self.bake_transforms = bake;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Compact output with no whitespace between elements.
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_host(mut self, host: HostInfo) -> Self {
        self.host = host;
        self
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_true_fov(mut self, true_fov: bool) -> Self {
        self.true_fov = true_fov;
        self
    }

    /// Serialization format derived from `pretty` and `indent`.
    pub fn format(&self) -> Format {
        if self.pretty {
            Format {
                pretty: true,
                indent: self.indent.clone(),
            }
        } else {
            Format::compact()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert!(!config.selected_only);
        assert!(!config.bake_transforms);
        assert_eq!(config.precision, 6);
        assert!(!config.true_fov);
        assert_eq!(config.format(), Format::default());
    }

    #[test]
    fn test_authoring_tool() {
        let host = HostInfo::new("Blender", "2.41");
        assert_eq!(host.authoring_tool(), "Blender 2.41 COLLADA Exporter");
    }

    #[test]
    fn test_compact_format() {
        let config = ExportConfig::default().with_indent("  ").compact();
        assert!(!config.format().pretty);
    }
}
