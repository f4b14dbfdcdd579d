use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is beyond the current array length
    #[error("Index out of bounds: index {index} is beyond array length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// Operation attempted on an empty array
    #[error("Operation on empty array")]
    EmptyArray,
    /// The allocator refused to grow the storage
    #[error("Allocation failed: could not reserve room for {requested} more elements")]
    AllocationFailed {
        /// Number of elements that were requested
        requested: usize,
    },
    /// Invalid configuration parameter
    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Description of the invalid parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}
