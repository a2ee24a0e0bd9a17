//! The discovery chain used when no explicit credentials are supplied

use crate::chain::ChainSource;
use crate::config::ProviderSettings;
use crate::environment::EnvironmentSource;
use crate::profile::ProfileFileSource;
use crate::selection::{select_or_else, Selection};
use credkit_core::Error;

/// Environment variables first, then the shared credentials file.
///
/// Nothing is read here; each source looks for credentials when the chain
/// is resolved.
pub fn default_chain(settings: &ProviderSettings) -> ChainSource {
    ChainSource::new()
        .with_source(EnvironmentSource::from_settings(settings))
        .with_source(ProfileFileSource::from_settings(settings))
}

/// [`select`](crate::select) with the default chain as fallback.
///
/// Settings come from [`ProviderSettings::from_env`] and are only read when
/// the explicit pair is unusable, so a broken `AWS_PROFILE` cannot reject
/// explicit credentials.
pub fn select_default<I, S, E>(identifier: I, secret: S) -> Result<Selection<ChainSource>, E>
where
    I: FnOnce() -> Result<Option<String>, E>,
    S: FnOnce() -> Result<Option<String>, E>,
    E: From<Error>,
{
    select_or_else(identifier, secret, || {
        let settings = ProviderSettings::from_env()?;
        Ok(default_chain(&settings))
    })
}
