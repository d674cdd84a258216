use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    TooLong { what: &'static str, len: usize, max: usize },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::TzInfo(err).into()
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
            TooLong { what, len, max } => write!(
                f,
                "{what} has length {len}, \
                 but the most that can be stored is {max} bytes",
            ),
        }
    }
}
