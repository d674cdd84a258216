use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    AbbreviationTooLong { len: usize },
    AbbreviationTooShort { len: usize },
    ExpectedAbbreviation,
    ExpectedDateSpec,
    ExpectedDigitAfterSign,
    ExpectedDigits { expected: usize, found: usize },
    ExpectedDot { after: &'static str },
    ExpectedEndRule,
    ExpectedJulianDay,
    ExpectedMinutes,
    ExpectedMonth,
    ExpectedOffset,
    ExpectedSeconds,
    ExpectedTime,
    FailedDstAbbreviation,
    FailedDstOffset,
    FailedEndRule,
    FailedStartRule,
    FailedStdAbbreviation,
    FailedStdOffset,
    FailedTransitionTime,
    InvalidDateSpec(u8),
    InvalidDigit(u8),
    InvalidQuotedAbbreviationByte(u8),
    Invalid { position: usize },
    InvalidUtf8,
    NoDigits,
    TooManyDigits { what: &'static str, max: usize },
    TrailingComma,
    TrailingInput(u8),
    UnclosedQuotedAbbreviation,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::TzPosix(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            AbbreviationTooLong { len } => write!(
                f,
                "abbreviation must be at most 7 bytes \
                 (including any `<` and `>` quotes), but found {len} bytes",
            ),
            AbbreviationTooShort { len } => write!(
                f,
                "abbreviation must be at least 3 bytes \
                 (excluding any `<` and `>` quotes), but found {len} bytes",
            ),
            ExpectedAbbreviation => f.write_str(
                "expected time zone abbreviation, but found end of input",
            ),
            ExpectedDateSpec => f.write_str(
                "expected `J`, `M` or a digit to begin a DST \
                 transition date, but found end of input",
            ),
            ExpectedDigitAfterSign => {
                f.write_str("expected digit after sign, but found end of input")
            }
            ExpectedDigits { expected, found } => write!(
                f,
                "expected exactly {expected} digits, but found {found}",
            ),
            ExpectedDot { after } => {
                write!(f, "expected `.` after {after} in `Mm.w.d` rule")
            }
            ExpectedEndRule => f.write_str(
                "expected `,` followed by the end of DST rule \
                 after the start of DST rule",
            ),
            ExpectedJulianDay => f.write_str(
                "expected one based day of year after `J`, \
                 but found end of input",
            ),
            ExpectedMinutes => {
                f.write_str("expected minutes after `:`, but found end of input")
            }
            ExpectedMonth => {
                f.write_str("expected month after `M`, but found end of input")
            }
            ExpectedOffset => {
                f.write_str("expected UTC offset, but found end of input")
            }
            ExpectedSeconds => {
                f.write_str("expected seconds after `:`, but found end of input")
            }
            ExpectedTime => f.write_str(
                "expected transition time after `/`, but found end of input",
            ),
            FailedDstAbbreviation => {
                f.write_str("failed to parse DST abbreviation")
            }
            FailedDstOffset => f.write_str("failed to parse DST offset"),
            FailedEndRule => {
                f.write_str("failed to parse end of DST transition rule")
            }
            FailedStartRule => {
                f.write_str("failed to parse start of DST transition rule")
            }
            FailedStdAbbreviation => {
                f.write_str("failed to parse standard abbreviation")
            }
            FailedStdOffset => f.write_str("failed to parse standard offset"),
            FailedTransitionTime => {
                f.write_str("failed to parse DST transition time")
            }
            InvalidDateSpec(byte) => write!(
                f,
                "expected `J`, `M` or a digit to begin a DST \
                 transition date, but found {}",
                Byte(byte),
            ),
            InvalidDigit(byte) => {
                write!(f, "expected digit 0-9, but found {}", Byte(byte))
            }
            InvalidQuotedAbbreviationByte(byte) => write!(
                f,
                "expected ASCII letter, digit, `+`, `-` or closing `>` \
                 in quoted abbreviation, but found {}",
                Byte(byte),
            ),
            Invalid { position } => write!(
                f,
                "invalid POSIX TZ string (failed at byte offset {position})",
            ),
            InvalidUtf8 => f.write_str("POSIX TZ string is not valid UTF-8"),
            NoDigits => f.write_str("expected at least one digit"),
            TooManyDigits { what, max } => {
                write!(f, "{what} must have at most {max} digits")
            }
            TrailingComma => f.write_str(
                "expected DST transition rule after `,`, \
                 but found end of input",
            ),
            TrailingInput(byte) => write!(
                f,
                "expected end of POSIX TZ string, but found {}",
                Byte(byte),
            ),
            UnclosedQuotedAbbreviation => f.write_str(
                "expected `>` to close quoted abbreviation, \
                 but found end of input",
            ),
        }
    }
}

/// Displays a single byte from the input in error messages.
///
/// Printable ASCII is shown quoted in backticks. Everything else is shown
/// as a hex escape.
struct Byte(u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.0.is_ascii_graphic() || self.0 == b' ' {
            write!(f, "`{}`", char::from(self.0))
        } else {
            write!(f, "`\\x{:02X}`", self.0)
        }
    }
}
