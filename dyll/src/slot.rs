use alloc::vec::Vec;
use core::mem;

use crate::error::DyllError;

/// Link value meaning "no slot".
pub(crate) const NUL: usize = usize::MAX;

/// One entry of the slot table.
///
/// A slot is on exactly one of the two lists. Free slots are singly linked
/// through `next`; in-use slots are doubly linked and own their payload.
#[derive(Debug, Clone)]
pub(crate) enum Slot {
    Free {
        next: usize,
    },
    InUse {
        data: Vec<u8>,
        prev: usize,
        next: usize,
    },
}

/// Growable, never-shrinking table of slots plus the head of the free list.
///
/// Indices handed out by `acquire` stay valid across `grow`: growth only
/// appends a new segment, it never moves a slot to another index.
#[derive(Debug, Clone)]
pub(crate) struct SlotTable {
    slots: Vec<Slot>,
    free_head: usize,
    grow_by: usize,
    max_slots: Option<usize>,
}

impl SlotTable {
    pub(crate) fn new(
        initial: usize,
        grow_by: usize,
        max_slots: Option<usize>,
    ) -> Result<Self, DyllError> {
        let mut table = Self {
            slots: Vec::new(),
            free_head: NUL,
            grow_by,
            max_slots,
        };
        if initial > 0 {
            table.append_segment(initial)?;
        }
        Ok(table)
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `grow_by` free slots.
    ///
    /// # Errors
    ///
    /// `SlotLimitExceeded` if the ceiling would be passed, `AllocationFailed`
    /// if the allocator refuses. The table is unchanged in both cases.
    pub(crate) fn grow(&mut self) -> Result<(), DyllError> {
        if let Some(max_slots) = self.max_slots {
            let grown = self.slots.len().checked_add(self.grow_by);
            if grown.map_or(true, |n| n > max_slots) {
                return Err(DyllError::SlotLimitExceeded { max_slots });
            }
        }
        self.append_segment(self.grow_by)
    }

    fn append_segment(&mut self, count: usize) -> Result<(), DyllError> {
        debug_assert_eq!(self.free_head, NUL);
        self.slots
            .try_reserve_exact(count)
            .map_err(|_| DyllError::AllocationFailed {
                requested: count.saturating_mul(mem::size_of::<Slot>()),
            })?;

        let start = self.slots.len();
        let end = start + count;
        for i in start..end {
            let next = if i + 1 < end { i + 1 } else { NUL };
            self.slots.push(Slot::Free { next });
        }
        self.free_head = start;
        Ok(())
    }

    /// Pops the head of the free list, growing first if the list is empty.
    ///
    /// The returned slot is detached: it is marked free but on neither list
    /// until `occupy` or `release` is called on it.
    pub(crate) fn acquire(&mut self) -> Result<usize, DyllError> {
        if self.free_head == NUL {
            self.grow()?;
        }
        let slot = self.free_head;
        match self.slots[slot] {
            Slot::Free { next } => {
                self.free_head = next;
                self.slots[slot] = Slot::Free { next: NUL };
                Ok(slot)
            }
            Slot::InUse { .. } => unreachable!("free list points at an in-use slot"),
        }
    }

    /// Pushes `slot` onto the free list and hands back its payload, if any.
    pub(crate) fn release(&mut self, slot: usize) -> Option<Vec<u8>> {
        let old = mem::replace(
            &mut self.slots[slot],
            Slot::Free {
                next: self.free_head,
            },
        );
        self.free_head = slot;
        match old {
            Slot::InUse { data, .. } => Some(data),
            Slot::Free { .. } => None,
        }
    }

    pub(crate) fn occupy(&mut self, slot: usize, data: Vec<u8>, prev: usize, next: usize) {
        debug_assert!(matches!(self.slots[slot], Slot::Free { .. }));
        self.slots[slot] = Slot::InUse { data, prev, next };
    }

    pub(crate) fn is_live(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(Slot::InUse { .. }))
    }

    pub(crate) fn payload(&self, slot: usize) -> &[u8] {
        match &self.slots[slot] {
            Slot::InUse { data, .. } => data,
            Slot::Free { .. } => &[],
        }
    }

    pub(crate) fn next(&self, slot: usize) -> usize {
        match self.slots[slot] {
            Slot::InUse { next, .. } => next,
            Slot::Free { .. } => NUL,
        }
    }

    pub(crate) fn prev(&self, slot: usize) -> usize {
        match self.slots[slot] {
            Slot::InUse { prev, .. } => prev,
            Slot::Free { .. } => NUL,
        }
    }

    pub(crate) fn set_next(&mut self, slot: usize, link: usize) {
        if let Slot::InUse { next, .. } = &mut self.slots[slot] {
            *next = link;
        }
    }

    pub(crate) fn set_prev(&mut self, slot: usize, link: usize) {
        if let Slot::InUse { prev, .. } = &mut self.slots[slot] {
            *prev = link;
        }
    }

    #[cfg(test)]
    pub(crate) fn free_head(&self) -> usize {
        self.free_head
    }
}
