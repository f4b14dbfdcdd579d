use core::fmt;

use embedded_io::{Error as IoError, ErrorKind, Write as IoWrite};

use crate::error::XmlError;
use crate::node::XmlNode;

/// Writes a node tree in indented form, two spaces per nesting level.
pub(crate) struct XmlWriter<'a, W: IoWrite> {
    writer: &'a mut W,
    depth: usize,
}

impl<'a, W: IoWrite> XmlWriter<'a, W> {
    pub(crate) fn new(writer: &'a mut W) -> Self {
        Self { writer, depth: 0 }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), XmlError> {
        self.writer.write_all(bytes).map_err(|e| e.kind())?;
        Ok(())
    }

    fn indent(&mut self) -> Result<(), XmlError> {
        for _ in 0..self.depth {
            self.write(b"  ")?;
        }
        Ok(())
    }

    fn newline(&mut self) -> Result<(), XmlError> {
        self.write(b"\n")
    }

    /// Writes `text` with `&`, `<`, `>` and `"` replaced by entities.
    fn write_escaped(&mut self, text: &str) -> Result<(), XmlError> {
        let bytes = text.as_bytes();
        let mut start = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            let entity: &[u8] = match byte {
                b'&' => b"&amp;",
                b'<' => b"&lt;",
                b'>' => b"&gt;",
                b'"' => b"&quot;",
                _ => continue,
            };
            self.write(&bytes[start..i])?;
            self.write(entity)?;
            start = i + 1;
        }
        self.write(&bytes[start..])
    }

    pub(crate) fn write_node(&mut self, node: &XmlNode) -> Result<(), XmlError> {
        self.indent()?;
        self.write(b"<")?;
        self.write(node.name().as_bytes())?;
        for attribute in node.attributes() {
            self.write(b" ")?;
            self.write(attribute.name().as_bytes())?;
            self.write(b"=\"")?;
            self.write_escaped(attribute.value())?;
            self.write(b"\"")?;
        }
        self.write(b">")?;
        self.write_escaped(node.value())?;

        if !node.children().is_empty() {
            self.newline()?;
            self.depth += 1;
            for child in node.children() {
                self.write_node(child)?;
            }
            self.depth -= 1;
            self.indent()?;
        }

        self.write(b"</")?;
        self.write(node.name().as_bytes())?;
        self.write(b">")?;
        self.newline()
    }
}

/// Lets the node writer target a `fmt::Formatter`. Every chunk it receives
/// is a whole UTF-8 piece of the output.
pub(crate) struct FmtSink<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b> FmtSink<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f }
    }
}

impl embedded_io::ErrorType for FmtSink<'_, '_> {
    type Error = ErrorKind;
}

impl IoWrite for FmtSink<'_, '_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let text = core::str::from_utf8(buf).map_err(|_| ErrorKind::InvalidData)?;
        self.f.write_str(text).map_err(|_| ErrorKind::Other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
