/// Unwrap an `Option<T>` in a `const` context.
///
/// Used when building the static region tables, where a name that doesn't
/// fit should fail compilation instead of being silently dropped.
macro_rules! unwrap {
    ($val:expr, $msg:expr$(,)?) => {
        match $val {
            Some(val) => val,
            None => panic!($msg),
        }
    };
}

pub(crate) use unwrap;
