use crate::{error::fmt::Error as E, fmt::Write, Error};

/// A borrowed buffer for writing a NUL terminated string into a caller
/// provided slice of bytes.
///
/// One byte of the slice is always held back for the terminator. Each call
/// to `write_str` either writes the whole string or nothing at all, so a
/// printer that writes one grammar token per call never leaves a partial
/// token behind when it runs out of room.
#[derive(Debug)]
pub(crate) struct NulTerminated<'data> {
    data: &'data mut [u8],
    filled: usize,
}

impl<'data> NulTerminated<'data> {
    pub(crate) fn new(data: &'data mut [u8]) -> NulTerminated<'data> {
        NulTerminated { data, filled: 0 }
    }

    /// Returns the number of bytes that can still be written, not counting
    /// the byte reserved for the terminator.
    pub(crate) fn available(&self) -> usize {
        self.data.len().saturating_sub(1).saturating_sub(self.filled)
    }

    /// Returns the bytes written so far, without the terminator.
    #[cfg(any(test, feature = "logging"))]
    pub(crate) fn filled(&self) -> &[u8] {
        &self.data[..self.filled]
    }

    /// Writes the terminator and returns its index, which is also the
    /// length of the string written.
    ///
    /// An empty backing slice has no room for a terminator, so nothing is
    /// written and `0` is returned.
    pub(crate) fn finish(self) -> usize {
        if let Some(byte) = self.data.get_mut(self.filled) {
            *byte = 0;
        }
        self.filled
    }
}

impl<'data> Write for NulTerminated<'data> {
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        let available = self.available();
        if string.len() > available {
            let needed = string.len();
            return Err(E::BufferFull { needed, available }.into());
        }
        let end = self.filled + string.len();
        self.data[self.filled..end].copy_from_slice(string.as_bytes());
        self.filled = end;
        Ok(())
    }
}
