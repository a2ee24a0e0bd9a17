//! Shared utilities for credkit
//!
//! Process-wide concerns live here so the provider crate stays free of
//! global state: the thread-safe environment reader used by the
//! environment-backed sources, and the tracing subscriber setup used by
//! the CLI.

pub mod sync;
pub mod tracing;

pub use sync::*;
