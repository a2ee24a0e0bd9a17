//! The capability every credential provider implements

use async_trait::async_trait;
use credkit_core::{Credentials, Result};
use std::sync::Arc;

/// Something that can produce a credential pair on demand.
///
/// Implementations choose their own strategy: returning a fixed pair,
/// reading the environment, parsing a file, or asking a remote service.
/// Every call either yields a complete, valid [`Credentials`] or fails with
/// [`Error::CredentialsUnavailable`](credkit_core::Error::CredentialsUnavailable).
/// Callers must not assume repeated calls are cheap unless the concrete
/// source documents it.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Resolve a credential pair
    async fn resolve(&self) -> Result<Credentials>;

    /// Short name used in logs and error messages
    fn name(&self) -> &str {
        "custom"
    }
}

#[async_trait]
impl<T: CredentialSource + ?Sized> CredentialSource for Box<T> {
    async fn resolve(&self) -> Result<Credentials> {
        (**self).resolve().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<T: CredentialSource + ?Sized> CredentialSource for Arc<T> {
    async fn resolve(&self) -> Result<Credentials> {
        (**self).resolve().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<T: CredentialSource + ?Sized> CredentialSource for &T {
    async fn resolve(&self) -> Result<Credentials> {
        (**self).resolve().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
