//! # Legacy Credential-Hash Derivation Core
//!
//! Deterministically reproduces the password-hash scheme of an external
//! legacy user table so an operator can regenerate a stored hash without
//! access to the original system.
//!
//! ## Pipeline
//!
//! ```text
//! derive(username, password, legacy_id)
//!   -> stretch(password, "5unf15h" + username + "D4740N", 7)   160-bit digest, salted
//!   -> 1 + 1024 rounds of SHA-512 over reverse(username@legacy_id)
//!   -> 128 uppercase hex chars
//! ```
//!
//! The 160-bit primitive is implemented from first principles: every byte,
//! padding rule, and round constant is load-bearing for interoperability,
//! and the fixed vectors in `tests.rs` pin the behavior. The scheme's known
//! weaknesses are reproduced on purpose; this is not a general-purpose
//! password-hashing library.
//!
//! ## Example
//!
//! ```rust
//! use credhash_core::{derive, DERIVED_HEX_LEN};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let hash = derive("demo", "pass1234", "reset").await;
//! assert_eq!(hash.len(), DERIVED_HEX_LEN);
//! # });
//! ```
//!
//! The widening loop yields to the scheduler after every round, so a
//! derivation can share a single-threaded runtime with other work.

mod derive;
mod encoding;
mod params;
mod request;
mod sha1;
mod stretch;

pub use derive::derive;
pub use encoding::encode_utf8_legacy;
pub use params::*;
pub use request::{CredentialError, CredentialRequest};
pub use sha1::{Case, digest};
pub use stretch::stretch;
