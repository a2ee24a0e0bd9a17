//! Credential source backed by process environment variables

use crate::config::ProviderSettings;
use crate::source::CredentialSource;
use async_trait::async_trait;
use credkit_core::{is_usable, Credentials, Error, Result};
use credkit_utils::SyncEnv;

const ENVIRONMENT_NAME: &str = "environment";

/// Reads the identifier and secret from two environment variables.
///
/// The variables are read again on every `resolve`, so changes made after
/// construction are picked up. Values are returned verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSource {
    identifier_var: String,
    secret_var: String,
}

impl EnvironmentSource {
    pub fn new(identifier_var: impl Into<String>, secret_var: impl Into<String>) -> Self {
        Self {
            identifier_var: identifier_var.into(),
            secret_var: secret_var.into(),
        }
    }

    pub fn from_settings(settings: &ProviderSettings) -> Self {
        Self::new(&settings.identifier_var, &settings.secret_var)
    }

    fn read(&self, variable: &str) -> Result<String> {
        let value = SyncEnv::var(variable).map_err(|e| {
            Error::credentials_unavailable_with_source(
                ENVIRONMENT_NAME,
                format!("could not read {variable}"),
                e,
            )
        })?;

        match value {
            Some(value) if is_usable(Some(value.as_str())) => Ok(value),
            Some(_) => Err(Error::credentials_unavailable(
                ENVIRONMENT_NAME,
                format!("{variable} is blank"),
            )),
            None => Err(Error::credentials_unavailable(
                ENVIRONMENT_NAME,
                format!("{variable} is not set"),
            )),
        }
    }
}

impl Default for EnvironmentSource {
    fn default() -> Self {
        Self::from_settings(&ProviderSettings::default())
    }
}

#[async_trait]
impl CredentialSource for EnvironmentSource {
    async fn resolve(&self) -> Result<Credentials> {
        let identifier = self.read(&self.identifier_var)?;
        let secret = self.read(&self.secret_var)?;
        Credentials::new(identifier, secret)
    }

    fn name(&self) -> &str {
        ENVIRONMENT_NAME
    }
}
