//! Operator-facing report for a derived hash
//!
//! Pure formatting over the derivation result; nothing here persists or
//! transmits anything.

use serde::{Deserialize, Serialize};

/// Result of one derivation, handed back to the operator.
///
/// The plaintext password is echoed on purpose: the manual reset workflow
/// has the operator confirm what was hashed before touching the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedHashReport {
    /// Legacy record identifier the hash is destined for
    pub legacy_id: String,
    /// Username of the legacy record
    pub username: String,
    /// Plaintext password that was hashed
    pub password: String,
    /// The derived 128-char uppercase hex hash
    pub hash_hex: String,
}

impl DerivedHashReport {
    /// Render the fixed multi-line report the operator pastes from.
    pub fn report_text(&self) -> String {
        format!(
            "=== REPLACE PASSWORD IN TCLMUSER TABLE WITH THIS NEW PASSWORD ===\n\
             UUID: {}\nUsername: {}\nPassword: {}\n\n{}",
            self.legacy_id, self.username, self.password, self.hash_hex
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{derive_password_hash, CredentialRequest};
    use credhash_core::DERIVED_HEX_LEN;

    #[tokio::test]
    async fn report_contains_inputs_and_hash() {
        let request = CredentialRequest::new("demo", "pass1234", "reset");
        let report = derive_password_hash(request).await;

        assert_eq!(report.hash_hex.len(), DERIVED_HEX_LEN);

        let text = report.report_text();
        assert!(text.contains("reset"));
        assert!(text.contains("demo"));
        assert!(text.contains("pass1234"));
        assert!(text.contains(&report.hash_hex));
        assert!(text.starts_with("=== REPLACE PASSWORD IN TCLMUSER TABLE"));
    }

    #[tokio::test]
    async fn report_round_trips_through_json() {
        let request = CredentialRequest::new("demo", "pass1234", "reset");
        let report = derive_password_hash(request).await;

        let json = serde_json::to_string(&report).unwrap();
        let parsed: super::DerivedHashReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
