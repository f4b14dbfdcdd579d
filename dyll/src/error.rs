use thiserror::Error;

/// Error types for `DyllArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DyllError {
    /// Position does not resolve to a live element
    #[error("Index out of bounds: index {index} is beyond array length {length}")]
    IndexOutOfBounds {
        /// Position that was requested
        index: usize,
        /// Number of live elements
        length: usize,
    },
    /// Slot handle does not name a live element
    #[error("Invalid handle: slot {handle} is not in use")]
    InvalidHandle {
        /// Slot index carried by the handle
        handle: usize,
    },
    /// The allocator refused a reservation
    #[error("Allocation failed: could not reserve {requested} bytes")]
    AllocationFailed {
        /// Number of bytes that were requested
        requested: usize,
    },
    /// Growing the slot table would pass the configured ceiling
    #[error("Slot limit exceeded: maximum {max_slots} slots allowed")]
    SlotLimitExceeded {
        /// Maximum number of slots allowed
        max_slots: usize,
    },
    /// Copying a payload would pass the configured byte ceiling
    #[error("Byte limit exceeded: requested {requested} bytes, but only {available} bytes available")]
    ByteLimitExceeded {
        /// Payload length that was requested
        requested: usize,
        /// Bytes left under the ceiling
        available: usize,
    },
    /// Invalid parameter passed to `DyllArray::with_config`
    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}
