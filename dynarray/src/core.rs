use alloc::vec::Vec;
use core::mem;

use crate::error::DynArrayError;
use crate::iter::DynArrayIter;

const DEFAULT_CHUNK: usize = 16;

/// A growable array of fixed-size elements with a movable write cursor.
///
/// `add` writes at the cursor: it overwrites when the cursor has been moved
/// back and appends otherwise. The length is the high-water mark of written
/// elements. Storage is allocated lazily and grows in whole chunks.
#[derive(Debug, Clone)]
pub struct DynArray<T> {
    items: Vec<T>,
    cursor: usize,
    chunk: usize,
}

impl<T: Clone> DynArray<T> {
    /// Creates an empty array that grows 16 elements at a time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            chunk: DEFAULT_CHUNK,
        }
    }

    /// Creates an empty array that grows `chunk` elements at a time.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::InvalidConfiguration` if `chunk` is 0.
    pub fn with_chunk(chunk: usize) -> Result<Self, DynArrayError> {
        if chunk == 0 {
            return Err(DynArrayError::InvalidConfiguration {
                parameter: "chunk",
                value: chunk,
            });
        }
        Ok(Self {
            items: Vec::new(),
            cursor: 0,
            chunk,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position the next `add` writes to.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of elements the current storage can hold.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.items.capacity()
    }

    /// Grows the storage in whole chunks until it holds `needed` elements.
    fn ensure_capacity(&mut self, needed: usize) -> Result<(), DynArrayError> {
        let capacity = self.items.capacity();
        if needed <= capacity {
            return Ok(());
        }
        let chunks = (needed - capacity).div_ceil(self.chunk);
        let target = capacity + chunks * self.chunk;
        let additional = target - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| DynArrayError::AllocationFailed {
                requested: additional,
            })
    }

    fn write_at_cursor(&mut self, value: &T) {
        if let Some(slot) = self.items.get_mut(self.cursor) {
            *slot = value.clone();
        } else {
            debug_assert_eq!(self.cursor, self.items.len());
            self.items.push(value.clone());
        }
        self.cursor += 1;
    }

    /// Writes a copy of `value` at the cursor and advances it.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the storage cannot grow.
    pub fn add(&mut self, value: &T) -> Result<(), DynArrayError> {
        self.ensure_capacity(self.cursor + 1)?;
        self.write_at_cursor(value);
        Ok(())
    }

    /// Writes copies of `values` in order, starting at the cursor.
    ///
    /// Storage for the whole batch is reserved first, so on error nothing
    /// has been written.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the storage cannot grow.
    pub fn add_many(&mut self, values: &[T]) -> Result<(), DynArrayError> {
        self.ensure_capacity(self.cursor + values.len())?;
        for value in values {
            self.write_at_cursor(value);
        }
        Ok(())
    }

    /// Moves the write cursor.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index > len()`.
    pub fn set_cursor(&mut self, index: usize) -> Result<(), DynArrayError> {
        if index > self.items.len() {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.items.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Gets the element at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Removes and returns the element at `index`.
    ///
    /// With `maintain_order` the following elements shift down by one.
    /// Otherwise the last element is moved into the hole.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len()`.
    pub fn delete(&mut self, index: usize, maintain_order: bool) -> Result<T, DynArrayError> {
        if index >= self.items.len() {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                length: self.items.len(),
            });
        }
        let removed = if maintain_order {
            self.items.remove(index)
        } else {
            self.items.swap_remove(index)
        };
        self.cursor = self.cursor.min(self.items.len());
        Ok(removed)
    }

    /// Removes and returns the last element.
    ///
    /// Returns `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        let popped = self.items.pop()?;
        self.cursor = self.cursor.min(self.items.len());
        Some(popped)
    }

    /// Tries to remove and return the last element.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::EmptyArray` if the array is empty.
    pub fn try_pop(&mut self) -> Result<T, DynArrayError> {
        self.pop().ok_or(DynArrayError::EmptyArray)
    }

    /// Compacts the storage to exactly `len()` elements and hands it over.
    ///
    /// The array is left empty and unallocated.
    pub fn flush(&mut self) -> Vec<T> {
        let mut items = mem::take(&mut self.items);
        items.shrink_to_fit();
        self.cursor = 0;
        items
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> DynArrayIter<'_, T> {
        self.into_iter()
    }
}

impl<T: Clone> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}
