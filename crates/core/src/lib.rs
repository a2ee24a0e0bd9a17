//! Core domain types, errors, and constants for `credkit`.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   including the `CredentialsUnavailable` kind every credential source
//!   reports when it cannot produce a pair.
//! - **`types`**: The immutable `Credentials` pair and the secret wrapper
//!   that zeroizes its contents on drop.
//! - **`constants`**: Environment variable names, profile-file keys and
//!   default paths shared by the providers and the CLI.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, Validate},
    types::*,
};
