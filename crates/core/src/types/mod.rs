//! Credential value types

mod credentials;
mod secret;

pub use credentials::{is_usable, Credentials};
pub use secret::SecretString;
