#![no_std]

//! `DyllArray`: a dynamic linked-list array of owned byte buffers.
//!
//! `DyllArray` looks like a positional array to callers (integer index
//! access, in-order iteration) but stores its elements in a table of slots.
//! Live slots are threaded into a doubly-linked list in logical order; unused
//! slots are threaded into a singly-linked free list. Inserting or removing
//! at a located position never shifts other elements.
//!
//! Every inserted payload is copied into a buffer owned by the array.
//! `get` lends it out, `copy` duplicates it, and `take` / `drain_all` move it
//! out to the caller.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `append()`, `pop_front()`, `pop_back()`, `first()`, `last()`: O(1)
//! - `insert_before()`, `insert_after()`, `delete()`, `get()`, `copy()`,
//!   `take()`: O(index) to walk to the position, then O(1) plus the payload copy
//! - `*_handle()` variants: O(1), no walk
//! - `len()`, `size_in_bytes()`, `capacity()`: O(1)
//! - `drain_all()`, `clear()`, iteration: O(n)
//!
//! Random access by number costs a list walk. Callers that revisit the same
//! element should keep its [`SlotHandle`].
//!
//! ## Growth
//! - The table starts with 10 slots and grows by 10 whenever an insert finds
//!   the free list empty (see [`DyllConfig`] to change either)
//! - The table never shrinks; removed slots are reused most-recently-freed first
//! - Failed operations leave the array exactly as it was
//!
//! ## `no_std` Compatibility
//!
//! This crate only needs `core` and `alloc`. Enable the optional `std`
//! feature to forward `std` to the error type:
//! ```toml
//! [dependencies]
//! dyll = { version = "0.1", features = ["std"] }
//! ```
//!
//! # Positional Interface
//!
//! ```
//! # use dyll::DyllArray;
//! let mut dyll = DyllArray::new().unwrap();
//!
//! dyll.append(b"A").unwrap();
//! dyll.append(b"B").unwrap();
//! dyll.insert_before(1, b"X").unwrap();
//! dyll.insert_after(2, b"Y").unwrap();
//!
//! let items: Vec<_> = dyll.iter().collect();
//! assert_eq!(items, vec![&b"A"[..], &b"X"[..], &b"B"[..], &b"Y"[..]]);
//!
//! dyll.delete(0).unwrap();
//! assert_eq!(dyll.get(0).unwrap(), b"X");
//! assert_eq!(dyll.len(), 3);
//! assert_eq!(dyll.size_in_bytes(), 3);
//! ```
//!
//! # Ownership Transfer
//!
//! ```
//! # use dyll::DyllArray;
//! let mut dyll = DyllArray::new().unwrap();
//! dyll.append(b"X").unwrap();
//! dyll.append(b"BB").unwrap();
//! dyll.append(b"tail").unwrap();
//!
//! // Independent duplicate, the array is unchanged
//! let mut copy = dyll.copy(1).unwrap();
//! copy[0] = b'Z';
//! assert_eq!(dyll.get(1).unwrap(), b"BB");
//!
//! // Move one buffer out
//! assert_eq!(dyll.take(2).unwrap(), b"tail");
//!
//! // Move everything out as one buffer
//! assert_eq!(dyll.drain_all().unwrap(), b"XBB");
//! assert!(dyll.is_empty());
//! assert_eq!(dyll.size_in_bytes(), 0);
//! ```
//!
//! # Handle Interface
//!
//! Inserts return a [`SlotHandle`] that stays valid until its element is
//! removed, no matter how the table grows:
//!
//! ```
//! # use dyll::DyllArray;
//! let mut dyll = DyllArray::new().unwrap();
//! let first = dyll.append(b"first").unwrap();
//! for i in 0..50u8 {
//!     dyll.append(&[i]).unwrap();
//! }
//!
//! dyll.insert_after_handle(first, b"second").unwrap();
//! assert_eq!(dyll.get(1).unwrap(), b"second");
//!
//! assert_eq!(dyll.take_by_handle(first).unwrap(), b"first");
//! assert!(dyll.get_by_handle(first).is_err());
//! ```

extern crate alloc;

mod config;
mod core;
mod error;
mod iter;
mod slot;

// Re-export public types and traits
pub use config::DyllConfig;
pub use crate::core::{DyllArray, SlotHandle};
pub use error::DyllError;
pub use iter::{DyllHandleIter, DyllIter, DyllRevIter};
