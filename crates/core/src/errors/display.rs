//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CredentialsUnavailable {
                provider, message, ..
            } => {
                write!(f, "unable to load credentials from {provider}: {message}")
            }
            Error::InvalidCredentialValue { field, message } => {
                write!(f, "invalid credential value for '{field}': {message}")
            }
            Error::Environment { variable, message } => {
                write!(f, "environment variable '{variable}' error: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::ProfileParse {
                path,
                line,
                message,
            } => {
                write!(
                    f,
                    "failed to parse credentials file '{}' at line {}: {}",
                    path.display(),
                    line,
                    message
                )
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
        }
    }
}
