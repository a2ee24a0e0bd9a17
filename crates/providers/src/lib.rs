//! Credential sources and the policy that chooses between them.
//!
//! Everything that hands out credentials implements [`CredentialSource`].
//! The [`select`] policy takes two deferred raw values plus a fallback
//! source and returns either a [`StaticSource`] wrapping the explicit pair
//! or the fallback itself, untouched.
//!
//! ```rust,ignore
//! use credkit_providers::{accessor, default_chain, select, CredentialSource, ProviderSettings};
//!
//! let settings = ProviderSettings::from_env()?;
//! let source = select(
//!     accessor::value(cli_identifier),
//!     accessor::value(cli_secret),
//!     default_chain(&settings),
//! )?;
//! let credentials = source.resolve().await?;
//! ```

pub mod accessor;
mod chain;
mod config;
mod default_chain;
mod environment;
mod fixed;
mod profile;
mod selection;
mod source;

pub use chain::ChainSource;
pub use config::ProviderSettings;
pub use default_chain::{default_chain, select_default};
pub use environment::EnvironmentSource;
pub use fixed::StaticSource;
pub use profile::ProfileFileSource;
pub use selection::{select, select_or_else, Selection};
pub use source::CredentialSource;

pub use credkit_core::{Credentials, Error, Result};
