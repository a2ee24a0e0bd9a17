//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for credkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for credkit operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A credential source could not produce a valid pair
    CredentialsUnavailable {
        provider: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A credential field failed validation at construction time
    InvalidCredentialValue { field: String, message: String },

    /// Environment variable related errors
    Environment { variable: String, message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed shared credentials file
    ProfileParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Configuration errors
    Configuration { message: String },
}

impl Error {
    /// Whether this error means "no credentials could be produced right now"
    #[must_use]
    pub fn is_credentials_unavailable(&self) -> bool {
        matches!(self, Error::CredentialsUnavailable { .. })
    }
}
