use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    BufferFull { needed: usize, available: usize },
    StdFmtWriteAdapter,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
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
            BufferFull { needed, available } => write!(
                f,
                "buffer has room for {available} more bytes, \
                 but {needed} are needed to write the next token",
            ),
            StdFmtWriteAdapter => {
                f.write_str("an error occurred when formatting an argument")
            }
        }
    }
}
