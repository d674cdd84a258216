use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    NotQuarterHour { seconds: i32 },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::TzOffset(err).into()
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
            NotQuarterHour { seconds } => write!(
                f,
                "UTC offset of {seconds} seconds is not \
                 a whole number of 15 minute intervals",
            ),
        }
    }
}
