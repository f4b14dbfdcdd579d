use alloc::string::String;
use core::mem;

use crate::error::XmlError;

const GROW_BY: usize = 16;

/// A growable text accumulator.
///
/// Storage is allocated on the first push and grows 16 bytes at a time.
/// `flush` hands the text over and resets the accumulator.
///
/// `ConcatString` is also an `embedded_io::Write` sink, so XML can be
/// serialized straight into it. Writes must be valid UTF-8.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcatString {
    buf: String,
}

impl ConcatString {
    #[must_use]
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    fn reserve_for(&mut self, additional: usize) -> Result<(), XmlError> {
        let failed = move || XmlError::AllocationFailed {
            requested: additional,
        };
        let needed = self.buf.len().checked_add(additional).ok_or_else(failed)?;
        let capacity = self.buf.capacity();
        if needed <= capacity {
            return Ok(());
        }
        let target = (needed - capacity)
            .div_ceil(GROW_BY)
            .checked_mul(GROW_BY)
            .and_then(|step| step.checked_add(capacity))
            .ok_or_else(failed)?;
        self.buf
            .try_reserve_exact(target - self.buf.len())
            .map_err(|_| failed())
    }

    /// Appends `s` unchanged.
    ///
    /// # Errors
    ///
    /// Returns `XmlError::AllocationFailed` if the buffer cannot grow; the
    /// accumulated text is unchanged in that case.
    pub fn push_str(&mut self, s: &str) -> Result<(), XmlError> {
        self.reserve_for(s.len())?;
        self.buf.push_str(s);
        Ok(())
    }

    /// Appends only the printable ASCII characters of `s` (space to `~`).
    ///
    /// # Errors
    ///
    /// Returns `XmlError::AllocationFailed` if the buffer cannot grow.
    pub fn push_filtered(&mut self, s: &str) -> Result<(), XmlError> {
        let kept = s.bytes().filter(|b| (32..=126).contains(b)).count();
        self.reserve_for(kept)?;
        self.buf
            .extend(s.chars().filter(|c| (' '..='~').contains(c)));
        Ok(())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes the accumulator can hold before growing again.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the accumulated text, trimmed to its length, and resets the
    /// accumulator to its unallocated state.
    pub fn flush(&mut self) -> String {
        let mut text = mem::take(&mut self.buf);
        text.shrink_to_fit();
        text
    }
}

impl embedded_io::ErrorType for ConcatString {
    type Error = embedded_io::ErrorKind;
}

impl embedded_io::Write for ConcatString {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let text = core::str::from_utf8(buf).map_err(|_| embedded_io::ErrorKind::InvalidData)?;
        self.push_str(text)
            .map_err(|_| embedded_io::ErrorKind::OutOfMemory)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
