//! Error types for the COLLADA exporter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ExportError.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Main error type for export operations.
///
/// Only conditions that abort the whole export live here. Unsupported or
/// incomplete scene data is reported through [`crate::export::ExportReport`]
/// instead.
#[derive(Error, Debug)]
pub enum ExportError {
    /// I/O error while writing the document or reading a scene file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a JSON scene description.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The destination already exists and overwriting was not allowed.
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    /// Children and text were mixed on one element, or the element kind
    /// does not accept that kind of content.
    #[error("<{tag}> cannot hold {content}")]
    ContentMismatch {
        tag: &'static str,
        content: &'static str,
    },

    /// Attribute name outside the element kind's schema.
    #[error("<{tag}> has no attribute '{attribute}'")]
    UnknownAttribute {
        tag: &'static str,
        attribute: String,
    },

    /// Structurally required scene data is absent.
    #[error("Missing scene data: {0}")]
    MissingData(String),
}
