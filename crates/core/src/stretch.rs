//! Keyed stretcher
//!
//! Repeatedly digests the message together with a salt whose character
//! order is reversed before use. The salt reversal is nonstandard but
//! load-bearing: the legacy table's hashes were produced this way.

use crate::sha1::{Case, digest};

/// Stretch `message` with `salt` over `iterations` digest invocations.
///
/// `iterations == 0` selects the one-shot scramble transform instead: the
/// digest of the bare message with its first four, middle, and last four
/// characters each reversed in place. The production derivation never takes
/// that branch, but callers that stored hashes through it still match.
pub fn stretch(message: &str, salt: &str, iterations: u32) -> String {
    stretch_with(message, salt, iterations, |m| digest(m, true, Case::Upper))
}

/// Stretch driver, generic over the digest so the invocation count stays
/// observable with an instrumented stand-in.
pub(crate) fn stretch_with<F>(message: &str, salt: &str, iterations: u32, mut digest160: F) -> String
where
    F: FnMut(&str) -> String,
{
    if iterations == 0 {
        return scramble(&digest160(message));
    }

    let rev_salt: String = salt.chars().rev().collect();
    let mut running = digest160(&format!("{message}{rev_salt}"));
    for _ in 1..iterations {
        running = digest160(&format!("{running}{rev_salt}"));
    }
    running
}

/// Reverse the first four, middle, and last four characters independently.
fn scramble(digest_hex: &str) -> String {
    debug_assert!(digest_hex.len() >= 8);

    let (head, rest) = digest_hex.split_at(4);
    let (middle, tail) = rest.split_at(rest.len() - 4);

    let rev = |piece: &str| piece.chars().rev().collect::<String>();
    format!("{}{}{}", rev(head), rev(middle), rev(tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scramble_reverses_each_piece() {
        assert_eq!(scramble("0123456789AB"), "32107654BA98");
    }

    #[test]
    fn single_iteration_digests_message_plus_reversed_salt() {
        let direct = digest("secretTLAS", true, Case::Upper);
        assert_eq!(stretch("secret", "SALT", 1), direct);
    }
}
