pub(crate) mod array_str;
pub(crate) mod constant;
pub(crate) mod sync;
