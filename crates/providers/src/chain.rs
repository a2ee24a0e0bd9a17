//! Ordered discovery chain of credential sources

use crate::source::CredentialSource;
use async_trait::async_trait;
use credkit_core::{Credentials, Error, Result};
use std::fmt;

const CHAIN_NAME: &str = "chain";

/// Tries an ordered list of sources and returns the first success.
///
/// Sources after the first success are never invoked. A failing source of
/// any kind just moves resolution on to the next one; only when every
/// source has failed does the chain fail, with a message listing each
/// source's failure in order. Nothing is cached between calls.
#[derive(Default)]
pub struct ChainSource {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl ChainSource {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chain from boxed sources, tried in the given order
    pub fn from_sources(sources: Vec<Box<dyn CredentialSource>>) -> Self {
        Self { sources }
    }

    /// Append a source to the end of the chain
    #[must_use]
    pub fn with_source(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Names of the sources in resolution order
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Number of sources in the chain
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the chain has no sources
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl fmt::Debug for ChainSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainSource")
            .field("sources", &self.source_names())
            .finish()
    }
}

#[async_trait]
impl CredentialSource for ChainSource {
    async fn resolve(&self) -> Result<Credentials> {
        if self.sources.is_empty() {
            return Err(Error::credentials_unavailable(
                CHAIN_NAME,
                "no credential sources configured",
            ));
        }

        let mut failures = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            match source.resolve().await {
                Ok(credentials) => {
                    tracing::debug!(
                        source = %source.name(),
                        identifier = %credentials.masked_identifier(),
                        "Resolved credentials"
                    );
                    return Ok(credentials);
                }
                Err(e) => {
                    tracing::debug!(
                        source = %source.name(),
                        error = %e,
                        "Credential source failed, trying next"
                    );
                    failures.push(format!("{}: {}", source.name(), e));
                }
            }
        }

        Err(Error::credentials_unavailable(
            CHAIN_NAME,
            format!("every source failed [{}]", failures.join("; ")),
        ))
    }

    fn name(&self) -> &str {
        CHAIN_NAME
    }
}
