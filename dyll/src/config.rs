use crate::error::DyllError;

const DEFAULT_INITIAL_SLOTS: usize = 10;
const DEFAULT_GROW_BY: usize = 10;

/// Sizing parameters for a `DyllArray`.
///
/// The ceilings are optional. When set, an operation that would pass one
/// fails with `SlotLimitExceeded` or `ByteLimitExceeded` and leaves the
/// array untouched, exactly like an allocation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DyllConfig {
    /// Slots allocated up front
    pub initial_slots: usize,
    /// Slots appended each time the free list runs dry
    pub grow_by: usize,
    /// Upper bound on the slot table size
    pub max_slots: Option<usize>,
    /// Upper bound on the total payload bytes held
    pub max_bytes: Option<usize>,
}

impl Default for DyllConfig {
    fn default() -> Self {
        Self {
            initial_slots: DEFAULT_INITIAL_SLOTS,
            grow_by: DEFAULT_GROW_BY,
            max_slots: None,
            max_bytes: None,
        }
    }
}

impl DyllConfig {
    /// Sets how many slots are added each time the free list runs dry.
    #[must_use]
    pub fn with_grow_by(mut self, grow_by: usize) -> Self {
        self.grow_by = grow_by;
        self
    }

    /// Sets the number of slots allocated up front. 0 defers allocation to the first insert.
    #[must_use]
    pub fn with_initial_slots(mut self, initial_slots: usize) -> Self {
        self.initial_slots = initial_slots;
        self
    }

    /// Caps the table size. Growth past the cap fails with `SlotLimitExceeded`.
    #[must_use]
    pub fn with_max_slots(mut self, max_slots: usize) -> Self {
        self.max_slots = Some(max_slots);
        self
    }

    /// Caps the total payload bytes. Inserts past the cap fail with `ByteLimitExceeded`.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), DyllError> {
        if self.grow_by == 0 {
            return Err(DyllError::InvalidConfiguration {
                parameter: "grow_by",
                value: self.grow_by,
            });
        }
        if let Some(max_slots) = self.max_slots {
            if self.initial_slots > max_slots {
                return Err(DyllError::InvalidConfiguration {
                    parameter: "initial_slots",
                    value: self.initial_slots,
                });
            }
        }
        Ok(())
    }
}
