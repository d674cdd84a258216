/*!
Output sinks for printing POSIX `TZ` strings.

The main thing in this module is the [`Write`] trait. It is like
[`core::fmt::Write`], except it returns this crate's [`Error`] type. It is
implemented for `String`, `Vec<u8>` and `&mut W` where `W: Write`. Adapters
are provided for writing to anything implementing `core::fmt::Write`
([`StdFmtWrite`]) or, with the `std` feature, `std::io::Write`
([`StdIoWrite`]).

Printing into a caller provided byte slice, with a NUL terminator, is done
by [`TimeZoneInfo::to_posix_buffer`](crate::tz::TimeZoneInfo::to_posix_buffer).

# Example

```
use tzrule::{fmt::StdFmtWrite, tz::regions};

let mut out = String::new();
regions::US_PACIFIC.write_posix(&mut StdFmtWrite(&mut out))?;
assert_eq!(out, "PST8PDT,M3.2.0/2,M11.1.0/2");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::{string::String, vec::Vec};

use crate::{error::fmt::Error as E, Error};

pub(crate) mod buffer;
#[cfg(feature = "serde")]
pub mod serde;

/// The sink that POSIX `TZ` strings are printed to.
///
/// Printers in this crate call `write_str` once per grammar token (an
/// abbreviation, an offset or a transition rule). So a sink that refuses a
/// write because it is out of space never ends up holding half of a token.
pub trait Write {
    /// Write the given string to this writer, returning whether the write
    /// succeeded or not.
    fn write_str(&mut self, string: &str) -> Result<(), Error>;

    /// Write the given character to this writer, returning whether the
    /// write succeeded or not.
    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        self.write_str(char.encode_utf8(&mut [0; 4]))
    }
}

impl Write for String {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.push_str(string);
        Ok(())
    }
}

impl Write for Vec<u8> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.extend_from_slice(string.as_bytes());
        Ok(())
    }
}

impl<W: ?Sized + Write> Write for &mut W {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        (**self).write_str(string)
    }

    #[inline]
    fn write_char(&mut self, char: char) -> Result<(), Error> {
        (**self).write_char(char)
    }
}

/// An adapter for using `core::fmt::Write` implementations with
/// [`Write`].
///
/// This also works the other way: a `StdFmtWrite<&mut dyn Write>`
/// implements `core::fmt::Write`, which lets `write!` format into any of
/// this crate's sinks.
#[derive(Clone, Debug)]
pub struct StdFmtWrite<W>(pub W);

impl<W: core::fmt::Write> Write for StdFmtWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0.write_str(string).map_err(|_| E::StdFmtWriteAdapter.into())
    }
}

impl<'w> core::fmt::Write for StdFmtWrite<&'w mut dyn Write> {
    #[inline]
    fn write_str(&mut self, string: &str) -> core::fmt::Result {
        self.0.write_str(string).map_err(|_| core::fmt::Error)
    }
}

/// An adapter for using `std::io::Write` implementations with [`Write`].
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct StdIoWrite<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Write for StdIoWrite<W> {
    #[inline]
    fn write_str(&mut self, string: &str) -> Result<(), Error> {
        self.0.write_all(string.as_bytes()).map_err(|err| {
            Error::from_args(format_args!("failed to write to sink: {err}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    #[test]
    fn string_and_vec() {
        let mut out = String::new();
        out.write_str("EST").unwrap();
        out.write_char('5').unwrap();
        assert_eq!(out, "EST5");

        let mut out = alloc::vec::Vec::new();
        (&mut out).write_str("<+03>").unwrap();
        assert_eq!(out, b"<+03>");
    }

    #[test]
    fn fmt_adapter_both_ways() {
        let mut out = String::new();
        StdFmtWrite(&mut out).write_str("CET-1").unwrap();
        assert_eq!(out, "CET-1");

        let mut sink = String::new();
        {
            let dynsink: &mut dyn Write = &mut sink;
            let mut adapter = StdFmtWrite(dynsink);
            core::fmt::Write::write_fmt(
                &mut adapter,
                format_args!("M{}.{}.{}", 3, 5, 0),
            )
            .unwrap();
        }
        assert_eq!(sink, "M3.5.0");
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_adapter() {
        let mut out = std::vec::Vec::new();
        StdIoWrite(&mut out).write_str("IST-5:30").unwrap();
        assert_eq!(out, b"IST-5:30");
    }
}
