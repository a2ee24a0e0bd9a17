//! Fixed-value credential source

use crate::source::CredentialSource;
use async_trait::async_trait;
use credkit_core::{Credentials, Result};

/// A source that always returns one precomputed pair.
///
/// Construction validates the pair; `resolve` never fails afterwards and is
/// a plain clone of immutable state, so concurrent calls need no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    credentials: Credentials,
}

impl StaticSource {
    /// Create a source from raw values, rejecting blank fields
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Ok(Self::from_credentials(Credentials::new(identifier, secret)?))
    }

    /// Wrap an already validated pair
    #[must_use]
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// The pair this source hands out
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[async_trait]
impl CredentialSource for StaticSource {
    async fn resolve(&self) -> Result<Credentials> {
        Ok(self.credentials.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credkit_core::Error;

    #[tokio::test]
    async fn test_resolve_returns_same_pair_every_time() {
        let source = StaticSource::new("AKIA123", "secret456").unwrap();

        let first = source.resolve().await.unwrap();
        let second = source.resolve().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.identifier(), "AKIA123");
        assert_eq!(first.secret(), "secret456");
    }

    #[test]
    fn test_new_rejects_blank_values() {
        assert!(matches!(
            StaticSource::new("  ", "secret456"),
            Err(Error::InvalidCredentialValue { .. })
        ));
        assert!(matches!(
            StaticSource::new("AKIA123", ""),
            Err(Error::InvalidCredentialValue { .. })
        ));
    }

    #[tokio::test]
    async fn test_concurrent_resolves() {
        let source = std::sync::Arc::new(StaticSource::new("AKIA123", "secret456").unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let source = source.clone();
                tokio::spawn(async move { source.resolve().await })
            })
            .collect();

        for handle in handles {
            let creds = handle.await.unwrap().unwrap();
            assert_eq!(creds, *source.credentials());
        }
    }
}
