use thiserror::Error;

/// Error types for XML tree operations and serialization
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum XmlError {
    /// The output writer failed
    #[error("IO error while writing XML: {kind:?}")]
    Io {
        /// Kind of the writer error
        kind: embedded_io::ErrorKind,
    },
    /// The allocator refused to grow a text buffer
    #[error("Allocation failed: could not reserve {requested} bytes")]
    AllocationFailed {
        /// Number of bytes that were requested
        requested: usize,
    },
    /// Child index is beyond the number of children
    #[error("Child out of bounds: index {index} but node has {count} children")]
    ChildOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Number of children of the node
        count: usize,
    },
    /// Attribute index is beyond the number of attributes
    #[error("Attribute out of bounds: index {index} but node has {count} attributes")]
    AttributeOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Number of attributes of the node
        count: usize,
    },
}

impl From<embedded_io::ErrorKind> for XmlError {
    fn from(kind: embedded_io::ErrorKind) -> Self {
        XmlError::Io { kind }
    }
}
