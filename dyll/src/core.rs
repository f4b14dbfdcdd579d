use alloc::vec::Vec;
use core::fmt;

use crate::config::DyllConfig;
use crate::error::DyllError;
use crate::iter::{DyllHandleIter, DyllIter, DyllRevIter};
use crate::slot::{SlotTable, NUL};

/// Stable reference to an element's slot.
///
/// A handle survives table growth and the insertion or removal of other
/// elements. Once its own element is removed the handle is stale; the slot
/// is reused LIFO, after which the handle names the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotHandle(pub(crate) usize);

impl SlotHandle {
    /// Index of the slot in the table
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Positional array of owned byte buffers, stored as a slot table with an
/// embedded doubly-linked in-use list and a singly-linked free list.
///
/// Not internally synchronized. Share between threads only behind a lock.
#[derive(Clone)]
pub struct DyllArray {
    pub(crate) table: SlotTable,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    len: usize,
    bytes: usize,
    max_bytes: Option<usize>,
}

impl DyllArray {
    /// Creates an empty array with 10 slots that grows by 10.
    ///
    /// # Errors
    ///
    /// Returns `DyllError::AllocationFailed` if the initial slots cannot be
    /// allocated.
    pub fn new() -> Result<Self, DyllError> {
        Self::with_config(DyllConfig::default())
    }

    /// Creates an empty array sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DyllError::InvalidConfiguration` if:
    /// - `grow_by` is 0
    /// - `initial_slots` is above `max_slots`
    ///
    /// Returns `DyllError::AllocationFailed` if the initial slots cannot be
    /// allocated.
    pub fn with_config(config: DyllConfig) -> Result<Self, DyllError> {
        config.validate()?;
        Ok(Self {
            table: SlotTable::new(config.initial_slots, config.grow_by, config.max_slots)?,
            head: NUL,
            tail: NUL,
            len: 0,
            bytes: 0,
            max_bytes: config.max_bytes,
        })
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of the payload lengths of all live elements.
    #[must_use]
    pub fn size_in_bytes(&self) -> usize {
        self.bytes
    }

    /// Number of slots in the table. Never decreases.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Number of slots on the free list.
    #[must_use]
    pub fn free_slots(&self) -> usize {
        self.capacity() - self.len
    }

    /// Walks the in-use list to the slot at `index`. O(index).
    fn resolve(&self, index: usize) -> Result<usize, DyllError> {
        if index >= self.len {
            return Err(DyllError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        let mut slot = self.head;
        for _ in 0..index {
            slot = self.table.next(slot);
        }
        debug_assert_ne!(slot, NUL);
        Ok(slot)
    }

    fn check_handle(&self, handle: SlotHandle) -> Result<usize, DyllError> {
        if self.table.is_live(handle.0) {
            Ok(handle.0)
        } else {
            Err(DyllError::InvalidHandle { handle: handle.0 })
        }
    }

    fn copy_payload(&self, data: &[u8]) -> Result<Vec<u8>, DyllError> {
        if let Some(max_bytes) = self.max_bytes {
            let available = max_bytes.saturating_sub(self.bytes);
            if data.len() > available {
                return Err(DyllError::ByteLimitExceeded {
                    requested: data.len(),
                    available,
                });
            }
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(data.len())
            .map_err(|_| DyllError::AllocationFailed {
                requested: data.len(),
            })?;
        buf.extend_from_slice(data);
        Ok(buf)
    }

    /// Takes a free slot and fills it with a copy of `data`. On failure the
    /// slot goes back to the head of the free list.
    fn prepare_slot(&mut self, data: &[u8]) -> Result<(usize, Vec<u8>), DyllError> {
        let slot = self.table.acquire()?;
        match self.copy_payload(data) {
            Ok(buf) => Ok((slot, buf)),
            Err(e) => {
                self.table.release(slot);
                Err(e)
            }
        }
    }

    fn link_after(&mut self, anchor: usize, slot: usize, buf: Vec<u8>) {
        let next = if anchor == NUL {
            NUL
        } else {
            self.table.next(anchor)
        };
        self.bytes += buf.len();
        self.table.occupy(slot, buf, anchor, next);

        if anchor == NUL {
            debug_assert_eq!(self.head, NUL);
            self.head = slot;
        } else {
            self.table.set_next(anchor, slot);
        }
        if next == NUL {
            self.tail = slot;
        } else {
            debug_assert_eq!(self.table.prev(next), anchor);
            self.table.set_prev(next, slot);
        }
        self.len += 1;
    }

    fn link_before(&mut self, anchor: usize, slot: usize, buf: Vec<u8>) {
        let prev = self.table.prev(anchor);
        self.bytes += buf.len();
        self.table.occupy(slot, buf, prev, anchor);

        if prev == NUL {
            debug_assert_eq!(self.head, anchor);
            self.head = slot;
        } else {
            debug_assert_eq!(self.table.next(prev), anchor);
            self.table.set_next(prev, slot);
        }
        self.table.set_prev(anchor, slot);
        self.len += 1;
    }

    /// Unsplices `slot` and returns it to the free list, moving its payload out.
    fn unlink(&mut self, slot: usize) -> Vec<u8> {
        let prev = self.table.prev(slot);
        let next = self.table.next(slot);

        if next == NUL {
            debug_assert_eq!(self.tail, slot);
            self.tail = prev;
        } else {
            self.table.set_prev(next, prev);
        }
        if prev == NUL {
            debug_assert_eq!(self.head, slot);
            self.head = next;
        } else {
            self.table.set_next(prev, next);
        }

        let data = self.table.release(slot).unwrap_or_default();
        debug_assert!(self.len > 0);
        self.len -= 1;
        self.bytes -= data.len();
        data
    }

    /// Appends a copy of `data` at the end.
    ///
    /// # Errors
    ///
    /// Returns `SlotLimitExceeded` or `AllocationFailed` if the slot table
    /// cannot grow, and `ByteLimitExceeded` or `AllocationFailed` if the
    /// payload cannot be copied. The array is unchanged on error.
    pub fn append(&mut self, data: &[u8]) -> Result<SlotHandle, DyllError> {
        let (slot, buf) = self.prepare_slot(data)?;
        self.link_after(self.tail, slot, buf);
        Ok(SlotHandle(slot))
    }

    /// Inserts a copy of `data` so that it lands at position `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`, otherwise as `append`.
    pub fn insert_before(&mut self, index: usize, data: &[u8]) -> Result<SlotHandle, DyllError> {
        let anchor = self.resolve(index)?;
        let (slot, buf) = self.prepare_slot(data)?;
        self.link_before(anchor, slot, buf);
        Ok(SlotHandle(slot))
    }

    /// Inserts a copy of `data` right after position `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`, otherwise as `append`.
    pub fn insert_after(&mut self, index: usize, data: &[u8]) -> Result<SlotHandle, DyllError> {
        let anchor = self.resolve(index)?;
        let (slot, buf) = self.prepare_slot(data)?;
        self.link_after(anchor, slot, buf);
        Ok(SlotHandle(slot))
    }

    /// Inserts a copy of `data` right before the element named by `handle`. O(1).
    ///
    /// # Errors
    ///
    /// Returns `InvalidHandle` if `handle` is stale, otherwise as `append`.
    pub fn insert_before_handle(
        &mut self,
        handle: SlotHandle,
        data: &[u8],
    ) -> Result<SlotHandle, DyllError> {
        let anchor = self.check_handle(handle)?;
        let (slot, buf) = self.prepare_slot(data)?;
        self.link_before(anchor, slot, buf);
        Ok(SlotHandle(slot))
    }

    /// Inserts a copy of `data` right after the element named by `handle`. O(1).
    ///
    /// # Errors
    ///
    /// Returns `InvalidHandle` if `handle` is stale, otherwise as `append`.
    pub fn insert_after_handle(
        &mut self,
        handle: SlotHandle,
        data: &[u8],
    ) -> Result<SlotHandle, DyllError> {
        let anchor = self.check_handle(handle)?;
        let (slot, buf) = self.prepare_slot(data)?;
        self.link_after(anchor, slot, buf);
        Ok(SlotHandle(slot))
    }

    /// Appends a copy of every item, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing append and returns its error. Items
    /// appended before it stay in the array.
    pub fn try_extend<I>(&mut self, items: I) -> Result<(), DyllError>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for item in items {
            self.append(item.as_ref())?;
        }
        Ok(())
    }

    /// Removes the element at `index` and releases its buffer.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`.
    pub fn delete(&mut self, index: usize) -> Result<(), DyllError> {
        let slot = self.resolve(index)?;
        drop(self.unlink(slot));
        Ok(())
    }

    /// Removes the element named by `handle`. O(1).
    ///
    /// # Errors
    ///
    /// Returns `InvalidHandle` if `handle` is stale.
    pub fn delete_by_handle(&mut self, handle: SlotHandle) -> Result<(), DyllError> {
        let slot = self.check_handle(handle)?;
        drop(self.unlink(slot));
        Ok(())
    }

    /// Borrows the payload at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&[u8], DyllError> {
        let slot = self.resolve(index)?;
        Ok(self.table.payload(slot))
    }

    /// Borrows the payload named by `handle`. O(1).
    ///
    /// # Errors
    ///
    /// Returns `InvalidHandle` if `handle` is stale.
    pub fn get_by_handle(&self, handle: SlotHandle) -> Result<&[u8], DyllError> {
        let slot = self.check_handle(handle)?;
        Ok(self.table.payload(slot))
    }

    /// Resolves `index` to the handle of its slot.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`.
    pub fn handle_at(&self, index: usize) -> Result<SlotHandle, DyllError> {
        self.resolve(index).map(SlotHandle)
    }

    /// Returns an owned duplicate of the payload at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`, or `AllocationFailed`
    /// if the duplicate cannot be allocated.
    pub fn copy(&self, index: usize) -> Result<Vec<u8>, DyllError> {
        let data = self.get(index)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(data.len())
            .map_err(|_| DyllError::AllocationFailed {
                requested: data.len(),
            })?;
        buf.extend_from_slice(data);
        Ok(buf)
    }

    /// Removes the element at `index` and hands its buffer to the caller.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `index >= len()`.
    pub fn take(&mut self, index: usize) -> Result<Vec<u8>, DyllError> {
        let slot = self.resolve(index)?;
        Ok(self.unlink(slot))
    }

    /// Removes the element named by `handle` and hands its buffer to the caller. O(1).
    ///
    /// # Errors
    ///
    /// Returns `InvalidHandle` if `handle` is stale.
    pub fn take_by_handle(&mut self, handle: SlotHandle) -> Result<Vec<u8>, DyllError> {
        let slot = self.check_handle(handle)?;
        Ok(self.unlink(slot))
    }

    #[must_use]
    pub fn first(&self) -> Option<&[u8]> {
        (self.head != NUL).then(|| self.table.payload(self.head))
    }

    #[must_use]
    pub fn last(&self) -> Option<&[u8]> {
        (self.tail != NUL).then(|| self.table.payload(self.tail))
    }

    pub fn pop_front(&mut self) -> Option<Vec<u8>> {
        (self.head != NUL).then(|| self.unlink(self.head))
    }

    pub fn pop_back(&mut self) -> Option<Vec<u8>> {
        (self.tail != NUL).then(|| self.unlink(self.tail))
    }

    /// Concatenates every payload, in order, into one buffer and empties the
    /// array. Slot capacity is kept for reuse.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailed` if the output buffer cannot be allocated;
    /// the array is unchanged in that case.
    pub fn drain_all(&mut self) -> Result<Vec<u8>, DyllError> {
        let mut out = Vec::new();
        out.try_reserve_exact(self.bytes)
            .map_err(|_| DyllError::AllocationFailed {
                requested: self.bytes,
            })?;
        while let Some(buf) = self.pop_front() {
            out.extend_from_slice(&buf);
        }
        debug_assert_eq!(self.bytes, 0);
        Ok(out)
    }

    /// Releases every element. Slot capacity is kept for reuse.
    pub fn clear(&mut self) {
        while self.head != NUL {
            drop(self.unlink(self.head));
        }
    }

    /// Returns an iterator over the payloads in logical order.
    #[must_use]
    pub fn iter(&self) -> DyllIter<'_> {
        self.into_iter()
    }

    /// Returns an iterator over the payloads from last to first.
    #[must_use]
    pub fn iter_rev(&self) -> DyllRevIter<'_> {
        DyllRevIter::new(self)
    }

    /// Returns an iterator over `(handle, payload)` pairs in logical order.
    #[must_use]
    pub fn handles(&self) -> DyllHandleIter<'_> {
        DyllHandleIter::new(self)
    }
}

impl PartialEq for DyllArray {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DyllArray {}

impl fmt::Debug for DyllArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
