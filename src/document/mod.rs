//! Generic XML document model.
//!
//! A [`Document`] owns one root element and knows how to write the whole tree
//! to a stream. Element construction for the COLLADA vocabulary lives in
//! [`crate::collada`].

mod element;
mod kind;
mod writer;

pub use element::{Content, Element, FloatArray};
pub use kind::{ElementKind, Layout};
pub use writer::Format;

use crate::error::Result;
use std::io::Write;
use writer::XmlWriter;

/// Default number of decimal places for float output.
pub const DEFAULT_PRECISION: usize = 6;

/// An output document: the root element plus serialization settings.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    precision: usize,
    format: Format,
}

impl Document {
    /// Create a document around the given root element.
    pub fn with_root(root: Element) -> Self {
        Self {
            root,
            precision: DEFAULT_PRECISION,
            format: Format::default(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Append a top-level element under the root.
    pub fn append_child(&mut self, child: Element) -> Result<()> {
        self.root.append_child(child)
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    /// Create a bare element of any kind.
    pub fn create_element(&self, kind: ElementKind) -> Element {
        Element::new(kind)
    }

    /// Format one float with the document precision.
    pub fn fmt_float(&self, value: f32) -> String {
        format!("{:.*}", self.precision, value)
    }

    /// Format floats with the document precision, space separated.
    pub fn fmt_floats(&self, values: &[f32]) -> String {
        let mut out = String::with_capacity(values.len() * (self.precision + 4));
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&self.fmt_float(*value));
        }
        out
    }

    /// Serialize the document (XML declaration plus the tree) to a stream.
    pub fn serialize<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = XmlWriter::new(out, &self.format, self.precision);
        writer.write_declaration()?;
        writer.write_element(&self.root, 0)?;
        writer.finish()?;
        Ok(())
    }

    /// Serialize the document into a string.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.serialize(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_sorted_regardless_of_insertion() {
        let mut node = Element::new(ElementKind::Node);
        node.set_attribute("type", "NODE").unwrap();
        node.set_attribute("id", "Cube").unwrap();
        node.set_attribute("name", "Cube").unwrap();

        let doc = Document::with_root(node);
        let xml = doc.to_xml_string().unwrap();
        assert!(xml.contains("<node id=\"Cube\" name=\"Cube\" type=\"NODE\"/>"));
    }

    #[test]
    fn test_declaration_first() {
        let doc = Document::with_root(Element::new(ElementKind::Collada));
        let xml = doc.to_xml_string().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<COLLADA/>"));
    }

    #[test]
    fn test_precision() {
        let mut doc = Document::with_root(Element::new(ElementKind::Collada));
        assert_eq!(doc.fmt_float(1.0 / 3.0), "0.333333");
        assert_eq!(doc.fmt_floats(&[1.0, 0.5]), "1.000000 0.500000");
        doc.set_precision(2);
        assert_eq!(doc.fmt_float(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_write_failure_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let doc = Document::with_root(Element::new(ElementKind::Collada));
        let err = doc.serialize(Broken).unwrap_err();
        assert!(matches!(err, crate::error::ExportError::Io(_)));
    }
}
