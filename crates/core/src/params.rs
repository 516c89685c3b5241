//! Derivation scheme parameters
//!
//! Every value here is load-bearing for interoperability with the legacy
//! user table. Changing any of them silently produces hashes that no longer
//! match the stored records.

/// Prefix of the stretch salt built around the username
pub const SALT_PREFIX: &str = "5unf15h";

/// Suffix of the stretch salt built around the username
pub const SALT_SUFFIX: &str = "D4740N";

/// Number of digest invocations in the stretch step
pub const STRETCH_ITERATIONS: u32 = 7;

/// Number of SHA-512 rounds after the initial seed digest
pub const WIDE_DIGEST_ROUNDS: u32 = 1024;

/// Hex length of the 160-bit primitive digest
pub const DIGEST_HEX_LEN: usize = 40;

/// Hex length of the final derived hash
pub const DERIVED_HEX_LEN: usize = 128;
