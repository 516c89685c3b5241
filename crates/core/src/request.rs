//! Credential request input type

use std::str::Utf8Error;
use thiserror::Error;

/// Input validation error.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A field was supplied as bytes that are not valid UTF-8 text.
    ///
    /// Coercing such input would still produce a plausible-looking hash
    /// that can never match the legacy table, so it is rejected outright.
    #[error("{field} is not valid UTF-8 text")]
    InvalidInput {
        field: &'static str,
        #[source]
        source: Utf8Error,
    },
}

/// One credential triple to derive a hash for.
///
/// Immutable, created per invocation, never persisted. Inputs outside the
/// Basic Multilingual Plane are accepted but digest through the legacy
/// encoder's surrogate-unit serialization (see `encoding`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRequest {
    pub username: String,
    pub password: String,
    pub legacy_id: String,
}

impl CredentialRequest {
    /// Build a request from already-validated text.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        legacy_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            legacy_id: legacy_id.into(),
        }
    }

    /// Build a request from raw bytes, failing fast on non-text input.
    pub fn from_raw(
        username: &[u8],
        password: &[u8],
        legacy_id: &[u8],
    ) -> Result<Self, CredentialError> {
        Ok(Self {
            username: text_field("username", username)?.to_string(),
            password: text_field("password", password)?.to_string(),
            legacy_id: text_field("legacy id", legacy_id)?.to_string(),
        })
    }
}

fn text_field<'a>(field: &'static str, raw: &'a [u8]) -> Result<&'a str, CredentialError> {
    std::str::from_utf8(raw).map_err(|source| CredentialError::InvalidInput { field, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_accepts_text() {
        let request = CredentialRequest::from_raw(b"demo", b"pass1234", b"reset").unwrap();
        assert_eq!(request, CredentialRequest::new("demo", "pass1234", "reset"));
    }

    #[test]
    fn from_raw_rejects_invalid_utf8() {
        let err = CredentialRequest::from_raw(b"demo", &[0xFF, 0xFE], b"reset").unwrap_err();
        assert!(err.to_string().contains("password"));
    }
}
