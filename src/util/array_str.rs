/// A fixed capacity string stored inline.
///
/// Names and abbreviations in a `TimeZoneInfo` are kept in these so that the
/// whole value stays `Copy` and can be built in a `const` context.
///
/// `N` must be less than `256` so that the length fits in a `u8`.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub(crate) struct ArrayStr<const N: usize> {
    /// The UTF-8 bytes that make up the string. Bytes at `len..` are
    /// always zero, which keeps the derived `Eq` and `Hash` honest.
    bytes: [u8; N],
    /// The number of bytes used by the string in `bytes`.
    len: u8,
}

impl<const N: usize> ArrayStr<N> {
    /// The empty string.
    pub(crate) const EMPTY: ArrayStr<N> = ArrayStr { bytes: [0; N], len: 0 };

    /// Creates a new fixed capacity string.
    ///
    /// If the given string exceeds `N` bytes, then this returns `None`.
    pub(crate) const fn new(s: &str) -> Option<ArrayStr<N>> {
        let src = s.as_bytes();
        if src.len() > N || N > u8::MAX as usize {
            return None;
        }
        let mut bytes = [0; N];
        let mut i = 0;
        while i < src.len() {
            bytes[i] = src[i];
            i += 1;
        }
        // Can't truncate since `N <= u8::MAX` was checked above.
        Some(ArrayStr { bytes, len: src.len() as u8 })
    }

    /// Append the given string to the end of this one.
    ///
    /// If the capacity would be exceeded, then this is a no-op and `false`
    /// is returned.
    pub(crate) fn push_str(&mut self, s: &str) -> bool {
        let len = usize::from(self.len);
        let Some(new_len) = len.checked_add(s.len()) else { return false };
        if new_len > N {
            return false;
        }
        self.bytes[len..new_len].copy_from_slice(s.as_bytes());
        let Ok(new_len) = u8::try_from(new_len) else { return false };
        self.len = new_len;
        true
    }

    /// Returns this array string as a string slice.
    pub(crate) fn as_str(&self) -> &str {
        // Construction only ever copies whole `&str` values (or appends
        // them), so the filled prefix is always valid UTF-8.
        core::str::from_utf8(&self.bytes[..usize::from(self.len)])
            .unwrap_or("")
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn capacity() -> usize {
        N
    }
}

impl<const N: usize> Default for ArrayStr<N> {
    fn default() -> ArrayStr<N> {
        ArrayStr::EMPTY
    }
}

impl<const N: usize> PartialEq<str> for ArrayStr<N> {
    fn eq(&self, rhs: &str) -> bool {
        self.as_str() == rhs
    }
}

impl<const N: usize> PartialEq<&str> for ArrayStr<N> {
    fn eq(&self, rhs: &&str) -> bool {
        self.as_str() == *rhs
    }
}

impl<const N: usize> core::fmt::Debug for ArrayStr<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> core::fmt::Display for ArrayStr<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.as_str(), f)
    }
}

impl<const N: usize> core::fmt::Write for ArrayStr<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        if self.push_str(s) {
            Ok(())
        } else {
            Err(core::fmt::Error)
        }
    }
}
