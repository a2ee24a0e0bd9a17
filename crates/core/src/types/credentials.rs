//! The credential pair handed out by every credential source

use super::secret::SecretString;
use crate::errors::{Result, Validate};
use std::fmt;

/// Whether a raw value can take part in a credential pair.
///
/// A value is usable when it is present and still non-empty after trimming
/// leading and trailing whitespace. Trimming only informs this decision; the
/// untrimmed value is what gets stored.
#[must_use]
pub fn is_usable(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// An identifier plus the secret that proves it.
///
/// Both fields are set together and never change afterwards. `Debug` and
/// `Display` keep the secret out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: SecretString,
}

impl Credentials {
    /// Create a credential pair, rejecting blank fields
    ///
    /// Values are stored verbatim, surrounding whitespace included.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        let secret = secret.into();
        Validate::not_blank(&identifier, "identifier")?;
        Validate::not_blank(&secret, "secret")?;
        Ok(Self {
            identifier,
            secret: SecretString::new(secret),
        })
    }

    /// The non-secret identifier naming the caller
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The secret proving the caller's identity
    #[must_use]
    pub fn secret(&self) -> &str {
        self.secret.expose()
    }

    /// Identifier with everything after the first four characters hidden
    #[must_use]
    pub fn masked_identifier(&self) -> String {
        let visible: String = self.identifier.chars().take(4).collect();
        format!("{visible}***")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"***")
            .finish()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (secret: ***)", self.masked_identifier())
    }
}
