#![no_std]

//! An owning XML element tree.
//!
//! [`XmlNode`] owns its tag name, text, [`XmlAttribute`]s and child nodes.
//! Trees are built by moving nodes in with `add_child` or by duplicating
//! them with `add_child_copy`; dropping the root drops everything below it.
//!
//! Serialization goes through `embedded_io::Write`, so a tree can be written
//! to a socket, a fixed buffer or, via [`ConcatString`], to a `String`.
//!
//! # Example
//!
//! ```
//! use xmltree::{XmlAttribute, XmlNode};
//!
//! let mut root = XmlNode::new("library");
//! root.add_attribute(XmlAttribute::new("city", "Riga"));
//!
//! let book = root.add_child(XmlNode::new("book"));
//! book.set_value("Dune");
//! book.add_attribute(XmlAttribute::new("year", "1965"));
//!
//! let text = root.to_xml_string().unwrap();
//! assert_eq!(
//!     text,
//!     "<library city=\"Riga\">\n  <book year=\"1965\">Dune</book>\n</library>\n"
//! );
//! ```
//!
//! # `no_std` Compatibility
//!
//! The crate needs only `core` and `alloc`. The `std` feature forwards `std`
//! to `thiserror` and `embedded-io`.

extern crate alloc;

mod attribute;
mod concat;
mod error;
mod node;
mod writer;

pub use attribute::XmlAttribute;
pub use concat::ConcatString;
pub use error::XmlError;
pub use node::XmlNode;
