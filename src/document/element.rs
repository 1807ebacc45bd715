//! Generic document element.

use super::kind::{ElementKind, Layout};
use crate::error::{ExportError, Result};
use std::collections::BTreeMap;

/// A flat numeric payload written one tuple per line.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatArray {
    /// Flattened values.
    pub values: Vec<f32>,
    /// Number of values per output line (3 for positions, 2 for UVs).
    pub stride: usize,
}

impl FloatArray {
    pub fn new(values: Vec<f32>, stride: usize) -> Self {
        Self {
            values,
            stride: stride.max(1),
        }
    }

    /// Flatten a slice of fixed-size tuples.
    pub fn from_tuples<const N: usize>(tuples: &[[f32; N]]) -> Self {
        Self::new(tuples.iter().flat_map(|t| t.iter().copied()).collect(), N)
    }

    /// Number of values (not tuples).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the payload one output line at a time.
    pub fn rows(&self) -> std::slice::Chunks<'_, f32> {
        self.values.chunks(self.stride)
    }
}

/// What an element holds between its open and close tags.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    Children(Vec<Element>),
    Text(String),
    Floats(FloatArray),
}

/// A node in the output tree.
///
/// Children and text are mutually exclusive; which of the two an element may
/// hold at all is decided by its kind's [`Layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    attributes: BTreeMap<&'static str, String>,
    content: Content,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            content: Content::Empty,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attributes in serialization order (sorted by name).
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.attributes.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Set an attribute, checking it against the kind's schema.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let key = self
            .kind
            .schema_name(name)
            .ok_or_else(|| ExportError::UnknownAttribute {
                tag: self.tag(),
                attribute: name.to_string(),
            })?;
        self.attributes.insert(key, value.into());
        Ok(())
    }

    /// Builder used by the factory: sets `name` only when `value` is present.
    pub(crate) fn with_attr(mut self, name: &'static str, value: Option<String>) -> Self {
        debug_assert!(
            self.kind.schema_name(name).is_some(),
            "<{}> has no attribute '{}'",
            self.tag(),
            name
        );
        if let Some(value) = value {
            self.attributes.insert(name, value);
        }
        self
    }

    /// Builder used by the factory for inline text.
    pub(crate) fn with_text(mut self, text: Option<String>) -> Self {
        debug_assert!(self.kind.layout().accepts_text());
        if let Some(text) = text {
            self.content = Content::Text(text);
        }
        self
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Append a child element.
    pub fn append_child(&mut self, child: Element) -> Result<()> {
        if !self.kind.layout().accepts_children() {
            return Err(self.mismatch("child elements"));
        }
        match self.content {
            Content::Children(ref mut children) => children.push(child),
            Content::Empty => self.content = Content::Children(vec![child]),
            Content::Text(_) | Content::Floats(_) => return Err(self.mismatch("children and text")),
        }
        Ok(())
    }

    /// Child elements (empty for text-bearing elements).
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Set inline text content, replacing any previous text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        if !self.kind.layout().accepts_text() {
            return Err(self.mismatch("text"));
        }
        self.content = Content::Text(text.into());
        Ok(())
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Attach a numeric payload. Only array elements take one.
    pub fn set_floats(&mut self, floats: FloatArray) -> Result<()> {
        if self.kind.layout() != Layout::Array {
            return Err(self.mismatch("a numeric payload"));
        }
        self.content = Content::Floats(floats);
        Ok(())
    }

    pub fn floats(&self) -> Option<&FloatArray> {
        match &self.content {
            Content::Floats(floats) => Some(floats),
            _ => None,
        }
    }

    /// First descendant (pre-order, excluding self) of the given kind.
    pub fn find(&self, kind: ElementKind) -> Option<&Element> {
        self.children().iter().find_map(|child| {
            if child.kind == kind {
                Some(child)
            } else {
                child.find(kind)
            }
        })
    }

    /// All descendants (pre-order, excluding self) of the given kind.
    pub fn find_all(&self, kind: ElementKind) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(kind, &mut found);
        found
    }

    fn collect<'a>(&'a self, kind: ElementKind, found: &mut Vec<&'a Element>) {
        for child in self.children() {
            if child.kind == kind {
                found.push(child);
            }
            child.collect(kind, found);
        }
    }

    fn mismatch(&self, content: &'static str) -> ExportError {
        ExportError::ContentMismatch {
            tag: self.tag(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_and_text_exclusive() {
        let mut node = Element::new(ElementKind::Node);
        node.append_child(Element::new(ElementKind::Instance)).unwrap();
        assert!(node.set_text("nope").is_err());

        let mut param = Element::new(ElementKind::Param);
        param.set_text("1.000000").unwrap();
        assert!(param.append_child(Element::new(ElementKind::Node)).is_err());
    }

    #[test]
    fn test_attribute_schema_enforced() {
        let mut source = Element::new(ElementKind::Source);
        source.set_attribute("id", "Cube-Pos").unwrap();
        assert_eq!(source.attribute("id"), Some("Cube-Pos"));

        let err = source.set_attribute("stride", "3").unwrap_err();
        assert!(matches!(err, ExportError::UnknownAttribute { tag: "source", .. }));
    }

    #[test]
    fn test_floats_only_on_arrays() {
        let mut array = Element::new(ElementKind::FloatArray);
        array.set_floats(FloatArray::from_tuples(&[[1.0, 2.0, 3.0]])).unwrap();
        assert_eq!(array.floats().map(FloatArray::len), Some(3));

        let mut param = Element::new(ElementKind::Param);
        assert!(param.set_floats(FloatArray::new(vec![1.0], 1)).is_err());
    }

    #[test]
    fn test_find_all_preorder() {
        let mut root = Element::new(ElementKind::Scene);
        let mut a = Element::new(ElementKind::Node).with_attr("id", Some("a".into()));
        a.append_child(Element::new(ElementKind::Node).with_attr("id", Some("b".into())))
            .unwrap();
        root.append_child(a).unwrap();
        root.append_child(Element::new(ElementKind::Node).with_attr("id", Some("c".into())))
            .unwrap();

        let ids: Vec<_> = root
            .find_all(ElementKind::Node)
            .iter()
            .filter_map(|n| n.attribute("id"))
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }
}
