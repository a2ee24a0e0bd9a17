//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a credentials-unavailable error for the named provider
    #[must_use]
    pub fn credentials_unavailable(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::CredentialsUnavailable {
            provider: provider.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a credentials-unavailable error caused by another error
    #[must_use]
    pub fn credentials_unavailable_with_source(
        provider: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::CredentialsUnavailable {
            provider: provider.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an invalid credential value error
    #[must_use]
    pub fn invalid_credential_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidCredentialValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an environment variable error
    #[must_use]
    pub fn environment(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Environment {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a profile parse error pointing at a line of the file
    #[must_use]
    pub fn profile_parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Error::ProfileParse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
