#![no_std]

//! `DynArray`: a growable array of fixed-size elements with a write cursor.
//!
//! Elements are added by copy. Storage is allocated on the first add and
//! grows in fixed-size chunks (16 elements unless configured otherwise);
//! every growth step is fallible and reported as an error instead of an
//! abort. When the array is complete, `flush` compacts the storage and hands
//! it to the caller as a plain `Vec`.
//!
//! # Cursor
//!
//! `add` writes at the cursor and advances it. Moving the cursor back with
//! `set_cursor` makes the following adds overwrite in place; the length only
//! grows once writes pass the end.
//!
//! ```
//! # use dynarray::DynArray;
//! let mut arr = DynArray::new();
//! arr.add_many(&[1u32, 2, 3, 4]).unwrap();
//!
//! arr.set_cursor(1).unwrap();
//! arr.add(&20).unwrap();
//! assert_eq!(arr.as_slice(), &[1, 20, 3, 4]);
//!
//! arr.set_cursor(4).unwrap();
//! arr.add(&5).unwrap();
//! assert_eq!(arr.len(), 5);
//! ```
//!
//! # Removal
//!
//! ```
//! # use dynarray::DynArray;
//! let mut arr = DynArray::new();
//! arr.add_many(&['a', 'b', 'c', 'd']).unwrap();
//!
//! // Keep order: later elements shift down
//! assert_eq!(arr.delete(0, true).unwrap(), 'a');
//! assert_eq!(arr.as_slice(), &['b', 'c', 'd']);
//!
//! // Don't keep order: the last element fills the hole
//! assert_eq!(arr.delete(0, false).unwrap(), 'b');
//! assert_eq!(arr.as_slice(), &['d', 'c']);
//!
//! let compact = arr.flush();
//! assert_eq!(compact, vec!['d', 'c']);
//! assert!(arr.is_empty());
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::DynArray;
pub use error::DynArrayError;
pub use iter::DynArrayIter;
