use crate::core::{DyllArray, SlotHandle};
use crate::slot::{SlotTable, NUL};

/// Iterator over payloads in a `DyllArray`, in logical order
///
/// Walks the in-use list from both ends; `next_back` is supported.
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct DyllIter<'a> {
    table: &'a SlotTable,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a> DyllIter<'a> {
    pub(crate) fn new(array: &'a DyllArray) -> Self {
        Self {
            table: &array.table,
            front: array.head,
            back: array.tail,
            remaining: array.len(),
        }
    }

    fn next_slot(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front;
        debug_assert_ne!(slot, NUL);
        self.front = self.table.next(slot);
        self.remaining -= 1;
        Some(slot)
    }

    fn next_back_slot(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back;
        debug_assert_ne!(slot, NUL);
        self.back = self.table.prev(slot);
        self.remaining -= 1;
        Some(slot)
    }
}

impl<'a> Iterator for DyllIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        self.next_slot().map(|slot| table.payload(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for DyllIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let table = self.table;
        self.next_back_slot().map(|slot| table.payload(slot))
    }
}

impl ExactSizeIterator for DyllIter<'_> {}

impl<'a> IntoIterator for &'a DyllArray {
    type Item = &'a [u8];
    type IntoIter = DyllIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        DyllIter::new(self)
    }
}

/// Reverse iterator over payloads in a `DyllArray`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct DyllRevIter<'a> {
    inner: DyllIter<'a>,
}

impl<'a> DyllRevIter<'a> {
    pub(crate) fn new(array: &'a DyllArray) -> Self {
        Self {
            inner: DyllIter::new(array),
        }
    }
}

impl<'a> Iterator for DyllRevIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for DyllRevIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl ExactSizeIterator for DyllRevIter<'_> {}

/// Iterator over `(handle, payload)` pairs in a `DyllArray`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct DyllHandleIter<'a> {
    inner: DyllIter<'a>,
}

impl<'a> DyllHandleIter<'a> {
    pub(crate) fn new(array: &'a DyllArray) -> Self {
        Self {
            inner: DyllIter::new(array),
        }
    }
}

impl<'a> Iterator for DyllHandleIter<'a> {
    type Item = (SlotHandle, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.inner.table;
        self.inner
            .next_slot()
            .map(|slot| (SlotHandle(slot), table.payload(slot)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for DyllHandleIter<'_> {}
