pub(crate) mod info;
pub(crate) mod offset;
pub(crate) mod posix;
