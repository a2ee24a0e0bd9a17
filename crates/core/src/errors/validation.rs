//! Validation utilities for credential fields

use super::types::{Error, Result};

/// Functional validation utilities
pub struct Validate;

impl Validate {
    /// Validate that a value is present and not blank after trimming
    pub fn not_blank(value: &str, field_name: &str) -> Result<()> {
        if value.trim().is_empty() {
            Err(Error::invalid_credential_value(
                field_name,
                "value cannot be empty or whitespace",
            ))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(Validate::not_blank("AKIA123", "identifier").is_ok());
        assert!(Validate::not_blank("  padded  ", "identifier").is_ok());
        assert!(Validate::not_blank("", "identifier").is_err());
        assert!(Validate::not_blank(" \t\n", "identifier").is_err());
    }

    #[test]
    fn test_not_blank_names_field() {
        match Validate::not_blank("", "secret") {
            Err(Error::InvalidCredentialValue { field, .. }) => assert_eq!(field, "secret"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
