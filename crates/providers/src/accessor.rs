//! Deferred raw-value accessors for [`select`](crate::select).
//!
//! An accessor is any `FnOnce() -> Result<Option<String>, E>`: it says how
//! to obtain one field without deciding when. `select` calls each accessor
//! exactly once. The helpers here cover the common cases and use
//! [`credkit_core::Error`] as their error type; write a closure directly to
//! propagate a different error type.

use credkit_core::Result;
use credkit_utils::SyncEnv;

/// An accessor yielding a value that is already known
pub fn value<V: Into<String>>(value: Option<V>) -> impl FnOnce() -> Result<Option<String>> {
    move || Ok(value.map(Into::into))
}

/// An accessor that never has a value
pub fn absent() -> impl FnOnce() -> Result<Option<String>> {
    || Ok(None)
}

/// An accessor reading an environment variable when evaluated
///
/// Unset is absence; a non-unicode value is an error.
pub fn env_var(name: impl Into<String>) -> impl FnOnce() -> Result<Option<String>> {
    let name = name.into();
    move || SyncEnv::var(&name)
}
