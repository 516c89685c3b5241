//! # Legacy Credential Hash Tool
//!
//! Regenerates password hashes for an external legacy user table so an
//! operator can reset a credential by hand, without access to the original
//! system.
//!
//! # Overview
//!
//! Given a username, a plaintext password, and a legacy record identifier,
//! the pipeline deterministically produces the 128-char uppercase hex value
//! the legacy table expects, bit-for-bit. The heavy lifting lives in
//! `credhash-core`; this crate adds the operator report and the single
//! exposed entry point.
//!
//! # Example
//!
//! ```rust
//! use credhash::{derive_password_hash, CredentialRequest};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let request = CredentialRequest::new("demo", "pass1234", "reset");
//! let report = derive_password_hash(request).await;
//!
//! assert_eq!(report.hash_hex.len(), 128);
//! println!("{}", report.report_text());
//! # });
//! ```

// Re-export the core algorithm
pub use credhash_core as algorithm;

pub mod report;

// Convenience re-exports
pub use algorithm::{derive, digest, stretch, Case, CredentialError, CredentialRequest};
pub use report::DerivedHashReport;

/// Derive the replacement hash for one credential triple and package it
/// with the operator report.
///
/// This is the only operation the tool exposes. It owns no state, performs
/// no I/O, and resolves once all widening rounds have run.
pub async fn derive_password_hash(request: CredentialRequest) -> DerivedHashReport {
    let hash_hex =
        algorithm::derive(&request.username, &request.password, &request.legacy_id).await;

    DerivedHashReport {
        legacy_id: request.legacy_id,
        username: request.username,
        password: request.password,
        hash_hex,
    }
}
