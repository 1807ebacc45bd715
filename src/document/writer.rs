//! XML serialization of the element tree.
//!
//! Streams straight to the destination: numeric payloads are formatted value
//! by value and never assembled into an intermediate string.

use super::element::{Content, Element, FloatArray};
use super::kind::Layout;
use std::io::{self, Write};

/// Whitespace options for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// Put every block element on its own indented line.
    pub pretty: bool,
    /// One indentation step.
    pub indent: String,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "\t".to_string(),
        }
    }
}

impl Format {
    /// No whitespace between elements.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            indent: String::new(),
        }
    }
}

pub(crate) struct XmlWriter<'a, W: Write> {
    out: W,
    format: &'a Format,
    precision: usize,
}

impl<'a, W: Write> XmlWriter<'a, W> {
    pub fn new(out: W, format: &'a Format, precision: usize) -> Self {
        Self {
            out,
            format,
            precision,
        }
    }

    pub fn write_declaration(&mut self) -> io::Result<()> {
        self.out.write_all(b"<?xml version=\"1.0\" encoding=\"utf-8\"?>")?;
        self.newline()
    }

    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn write_element(&mut self, element: &Element, depth: usize) -> io::Result<()> {
        self.pad(depth)?;
        write!(self.out, "<{}", element.tag())?;
        for (name, value) in element.attributes() {
            write!(self.out, " {}=\"", name)?;
            write_escaped(&mut self.out, value)?;
            self.out.write_all(b"\"")?;
        }

        match element.content() {
            Content::Empty => {
                self.out.write_all(b"/>")?;
                self.newline()
            }
            Content::Children(children) if children.is_empty() => {
                self.out.write_all(b"/>")?;
                self.newline()
            }
            Content::Children(children) => {
                self.out.write_all(b">")?;
                self.newline()?;
                for child in children {
                    self.write_element(child, depth + 1)?;
                }
                self.close(element.tag(), depth)
            }
            Content::Text(text) if text.is_empty() => {
                self.out.write_all(b"/>")?;
                self.newline()
            }
            Content::Text(text) if element.kind().layout() == Layout::Matrix => {
                self.out.write_all(b">")?;
                for row in text.lines().filter(|l| !l.trim().is_empty()) {
                    self.row_break(depth + 1)?;
                    write_escaped(&mut self.out, row.trim())?;
                }
                self.row_break(depth)?;
                write!(self.out, "</{}>", element.tag())?;
                self.newline()
            }
            Content::Text(text) => {
                self.out.write_all(b">")?;
                write_escaped(&mut self.out, text)?;
                write!(self.out, "</{}>", element.tag())?;
                self.newline()
            }
            Content::Floats(floats) => {
                self.out.write_all(b">")?;
                self.write_floats(floats)?;
                self.row_break(depth)?;
                write!(self.out, "</{}>", element.tag())?;
                self.newline()
            }
        }
    }

    /// Array rows start on a fresh line without indentation so the payload
    /// stays compact.
    fn write_floats(&mut self, floats: &FloatArray) -> io::Result<()> {
        for row in floats.rows() {
            self.out.write_all(b"\n")?;
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    self.out.write_all(b" ")?;
                }
                write!(self.out, "{:.*}", self.precision, value)?;
            }
        }
        Ok(())
    }

    fn close(&mut self, tag: &str, depth: usize) -> io::Result<()> {
        self.pad(depth)?;
        write!(self.out, "</{}>", tag)?;
        self.newline()
    }

    fn row_break(&mut self, depth: usize) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.pad(depth)
    }

    fn pad(&mut self, depth: usize) -> io::Result<()> {
        if self.format.pretty {
            for _ in 0..depth {
                self.out.write_all(self.format.indent.as_bytes())?;
            }
        }
        Ok(())
    }

    fn newline(&mut self) -> io::Result<()> {
        if self.format.pretty {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Write text with `&`, `<`, `>` and `"` escaped.
fn write_escaped<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let mut start = 0;
    for (i, c) in text.char_indices() {
        let escaped = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            _ => continue,
        };
        out.write_all(text[start..i].as_bytes())?;
        out.write_all(escaped.as_bytes())?;
        start = i + c.len_utf8();
    }
    out.write_all(text[start..].as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::kind::ElementKind;

    fn render(element: &Element, format: &Format) -> String {
        let mut buf = Vec::new();
        let mut writer = XmlWriter::new(&mut buf, format, 6);
        writer.write_element(element, 0).unwrap();
        writer.finish().unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_escaping() {
        let mut buf = Vec::new();
        write_escaped(&mut buf, "a<b & \"c\">").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a&lt;b &amp; &quot;c&quot;&gt;");

        let mut buf = Vec::new();
        write_escaped(&mut buf, "Bob's").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Bob's");
    }

    #[test]
    fn test_empty_text_self_closes() {
        let author = Element::new(ElementKind::Author).with_text(Some(String::new()));
        assert_eq!(render(&author, &Format::default()), "<author/>\n");
        let mut asset = Element::new(ElementKind::Asset);
        asset.append_child(author).unwrap();
        assert_eq!(render(&asset, &Format::compact()), "<asset><author/></asset>");
    }

    #[test]
    fn test_empty_self_closes() {
        let lib = Element::new(ElementKind::Library).with_attr("type", Some("IMAGE".into()));
        assert_eq!(render(&lib, &Format::default()), "<library type=\"IMAGE\"/>\n");
    }

    #[test]
    fn test_block_indents_children() {
        let mut asset = Element::new(ElementKind::Asset);
        asset
            .append_child(Element::new(ElementKind::UpAxis).with_text(Some("Z_UP".into())))
            .unwrap();
        assert_eq!(
            render(&asset, &Format::default()),
            "<asset>\n\t<up_axis>Z_UP</up_axis>\n</asset>\n"
        );
        assert_eq!(
            render(&asset, &Format::compact()),
            "<asset><up_axis>Z_UP</up_axis></asset>"
        );
    }

    #[test]
    fn test_float_rows_streamed() {
        let mut array = Element::new(ElementKind::FloatArray)
            .with_attr("count", Some("4".into()));
        array
            .set_floats(FloatArray::from_tuples(&[[0.5, 1.0], [1.0 / 3.0, -2.0]]))
            .unwrap();
        assert_eq!(
            render(&array, &Format::default()),
            "<float_array count=\"4\">\n0.500000 1.000000\n0.333333 -2.000000\n</float_array>\n"
        );
    }

    #[test]
    fn test_matrix_rows_indented() {
        let mut matrix = Element::new(ElementKind::Matrix);
        matrix.set_text("\n1 0\n0 1").unwrap();
        let mut node = Element::new(ElementKind::Node);
        node.append_child(matrix).unwrap();
        assert_eq!(
            render(&node, &Format::default()),
            "<node>\n\t<matrix>\n\t\t1 0\n\t\t0 1\n\t</matrix>\n</node>\n"
        );
    }
}
