use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::attribute::XmlAttribute;
use crate::concat::ConcatString;
use crate::error::XmlError;
use crate::writer::{FmtSink, XmlWriter};

/// An XML element that owns its attributes and child elements.
///
/// Dropping a node drops its whole subtree, and `Clone` (or
/// [`duplicate`](Self::duplicate)) copies it recursively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    value: String,
    attributes: Vec<XmlAttribute>,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Creates an element with the given tag name, no text, no attributes
    /// and no children.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text content of the element.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.into();
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.into();
    }

    /// Takes ownership of `attribute` and appends it.
    pub fn add_attribute(&mut self, attribute: XmlAttribute) -> &mut XmlAttribute {
        self.attributes.push(attribute);
        let last = self.attributes.len() - 1;
        &mut self.attributes[last]
    }

    /// Appends a duplicate of `attribute`; the caller keeps the original.
    pub fn add_attribute_copy(&mut self, attribute: &XmlAttribute) -> &mut XmlAttribute {
        self.add_attribute(attribute.clone())
    }

    /// Takes ownership of `child` and appends it after the existing children.
    pub fn add_child(&mut self, child: XmlNode) -> &mut XmlNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Appends a recursive duplicate of `child`; the caller keeps the original.
    pub fn add_child_copy(&mut self, child: &XmlNode) -> &mut XmlNode {
        self.add_child(child.clone())
    }

    #[must_use]
    pub fn attribute(&self, index: usize) -> Option<&XmlAttribute> {
        self.attributes.get(index)
    }

    #[must_use]
    pub fn child(&self, index: usize) -> Option<&XmlNode> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut XmlNode> {
        self.children.get_mut(index)
    }

    #[must_use]
    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    #[must_use]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Returns the first attribute called `name`.
    #[must_use]
    pub fn find_attribute(&self, name: &str) -> Option<&XmlAttribute> {
        self.attributes.iter().find(|attr| attr.name() == name)
    }

    /// Detaches and returns the child at `index`, keeping the order of the
    /// remaining children.
    ///
    /// # Errors
    ///
    /// Returns `XmlError::ChildOutOfBounds` if there is no such child.
    pub fn remove_child(&mut self, index: usize) -> Result<XmlNode, XmlError> {
        if index >= self.children.len() {
            return Err(XmlError::ChildOutOfBounds {
                index,
                count: self.children.len(),
            });
        }
        Ok(self.children.remove(index))
    }

    /// Removes and returns the attribute at `index`.
    ///
    /// # Errors
    ///
    /// Returns `XmlError::AttributeOutOfBounds` if there is no such attribute.
    pub fn remove_attribute(&mut self, index: usize) -> Result<XmlAttribute, XmlError> {
        if index >= self.attributes.len() {
            return Err(XmlError::AttributeOutOfBounds {
                index,
                count: self.attributes.len(),
            });
        }
        Ok(self.attributes.remove(index))
    }

    /// Recursive deep copy of this node.
    #[must_use]
    pub fn duplicate(&self) -> XmlNode {
        self.clone()
    }

    /// Serializes the subtree rooted at this node.
    ///
    /// Every element starts on its own line, indented two spaces per level.
    /// An element without children is closed on the same line; otherwise
    /// the closing tag is written on its own indented line after the
    /// children. Text and attribute values are escaped.
    ///
    /// # Errors
    ///
    /// Returns `XmlError::Io` if the writer fails. Output written before the
    /// failure is not rolled back.
    pub fn write_to<W: embedded_io::Write>(&self, writer: &mut W) -> Result<(), XmlError> {
        XmlWriter::new(writer).write_node(self)
    }

    /// Serializes the subtree into a `String`.
    ///
    /// # Errors
    ///
    /// Propagates serialization errors.
    pub fn to_xml_string(&self) -> Result<String, XmlError> {
        let mut out = ConcatString::new();
        self.write_to(&mut out)?;
        Ok(out.flush())
    }
}

impl fmt::Display for XmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(&mut FmtSink::new(f)).map_err(|_| fmt::Error)
    }
}
