/*!
The `Arc` used for error causes.

Targets without pointer sized atomics can't use `alloc::sync::Arc`, so
they get the one from `portable-atomic-util` instead.
*/

#[cfg(not(target_has_atomic = "ptr"))]
pub(crate) use portable_atomic_util::Arc;

#[cfg(target_has_atomic = "ptr")]
pub(crate) use alloc::sync::Arc;
