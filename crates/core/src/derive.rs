//! Stretched key derivation
//!
//! Drives the keyed stretcher once over the password, then widens the
//! result through SHA-512 against a reversed `username@legacyId` key. The
//! widening loop yields back to the scheduler after every round so a
//! shared single-threaded host is not starved while a derivation runs.

use sha2::{Digest, Sha512};

use crate::params::{SALT_PREFIX, SALT_SUFFIX, STRETCH_ITERATIONS, WIDE_DIGEST_ROUNDS};
use crate::stretch::stretch;

/// Derive the final 128-char uppercase hex hash for a credential triple.
///
/// Deterministic: identical inputs always produce identical output. The
/// call suspends at each of the 1024 widening rounds and resolves only once
/// all of them have run; it is not cancellable mid-flight by design.
pub async fn derive(username: &str, password: &str, legacy_id: &str) -> String {
    derive_with(username, password, legacy_id, sha512_hex).await
}

/// Derivation driver, generic over the wide digest so the invocation count
/// stays observable with an instrumented stand-in.
pub(crate) async fn derive_with<W>(
    username: &str,
    password: &str,
    legacy_id: &str,
    mut wide: W,
) -> String
where
    W: FnMut(&str) -> String,
{
    let salt_constant = format!("{SALT_PREFIX}{username}{SALT_SUFFIX}");
    let pwd_hash = stretch(password, &salt_constant, STRETCH_ITERATIONS).to_uppercase();

    let combined_key = format!("{username}@{legacy_id}");
    let reversed_key: String = combined_key.chars().rev().collect();

    let mut seed = wide(&format!("{pwd_hash}{reversed_key}")).to_uppercase();
    for _ in 0..WIDE_DIGEST_ROUNDS {
        seed = wide(&format!("{seed}{reversed_key}")).to_uppercase();
        tokio::task::yield_now().await;
    }
    seed
}

/// SHA-512 of the input's UTF-8 bytes, rendered as lowercase hex.
pub(crate) fn sha512_hex(input: &str) -> String {
    hex::encode(Sha512::digest(input.as_bytes()))
}
