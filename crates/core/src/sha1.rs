//! Hand-rolled 160-bit digest primitive
//!
//! A from-scratch Merkle-Damgard construction over 512-bit blocks, kept
//! bit-for-bit equal to the digest the legacy user table was populated
//! with. The padding model mirrors the source system: the message is a
//! sequence of 16-bit code units, a single 0x80 terminator unit is
//! appended, and every read past the end of the message packs as zero.
//! A standard-library or crate digest may only ever replace this module if
//! it is verified identical against the fixed vectors in `tests.rs`.

use crate::encoding::encode_utf8_legacy;

/// Hex rendering mode for the digest output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    /// Uppercase hex (the production default)
    #[default]
    Upper,
    /// Lowercase hex
    Lower,
}

/// Per-stage round constants (one per 20-round stage)
const K: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

/// Initial accumulator words
const H_INIT: [u32; 5] = [
    0x6745_2301,
    0xEFCD_AB89,
    0x98BA_DCFE,
    0x1032_5476,
    0xC3D2_E1F0,
];

/// Compute the 160-bit digest of `message` and render it as 40 hex chars.
///
/// With `apply_utf8` set, the message is first run through the legacy byte
/// encoder; otherwise its raw UTF-16 code units are packed directly (the
/// production path always encodes first).
pub fn digest(message: &str, apply_utf8: bool, case: Case) -> String {
    let mut units: Vec<u16> = if apply_utf8 {
        encode_utf8_legacy(message)
            .into_iter()
            .map(u16::from)
            .collect()
    } else {
        message.encode_utf16().collect()
    };

    // Terminator unit; everything past it reads as zero.
    units.push(0x80);

    // Block count leaves the last two words of the final block for the
    // bit-length of the pre-terminator message.
    let n_blocks = (units.len() + 8).div_ceil(64);
    let bit_len = (units.len() as u64 - 1) * 8;

    let unit_at = |idx: usize| -> u32 { units.get(idx).copied().map(u32::from).unwrap_or(0) };

    let mut blocks = vec![[0u32; 16]; n_blocks];
    for (i, block) in blocks.iter_mut().enumerate() {
        for (j, word) in block.iter_mut().enumerate() {
            let base = i * 64 + j * 4;
            *word = (unit_at(base) << 24)
                | (unit_at(base + 1) << 16)
                | (unit_at(base + 2) << 8)
                | unit_at(base + 3);
        }
    }
    blocks[n_blocks - 1][14] = (bit_len >> 32) as u32;
    blocks[n_blocks - 1][15] = bit_len as u32;

    let mut h = H_INIT;
    let mut w = [0u32; 80];

    for block in &blocks {
        w[..16].copy_from_slice(block);
        for t in 16..80 {
            w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
        }

        let (mut a, mut b, mut c, mut d, mut e) = (h[0], h[1], h[2], h[3], h[4]);

        for (t, &word) in w.iter().enumerate() {
            let stage = t / 20;
            let tmp = a
                .rotate_left(5)
                .wrapping_add(f(stage, b, c, d))
                .wrapping_add(e)
                .wrapping_add(K[stage])
                .wrapping_add(word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = tmp;
        }

        h[0] = h[0].wrapping_add(a);
        h[1] = h[1].wrapping_add(b);
        h[2] = h[2].wrapping_add(c);
        h[3] = h[3].wrapping_add(d);
        h[4] = h[4].wrapping_add(e);
    }

    render(&h, case)
}

/// Stage boolean function: choice, parity, majority, parity.
#[inline(always)]
fn f(stage: usize, x: u32, y: u32, z: u32) -> u32 {
    match stage {
        0 => (x & y) ^ (!x & z),
        2 => (x & y) ^ (x & z) ^ (y & z),
        _ => x ^ y ^ z,
    }
}

/// Render the five accumulator words as big-endian hex.
fn render(h: &[u32; 5], case: Case) -> String {
    match case {
        Case::Upper => format!(
            "{:08X}{:08X}{:08X}{:08X}{:08X}",
            h[0], h[1], h[2], h[3], h[4]
        ),
        Case::Lower => format!(
            "{:08x}{:08x}{:08x}{:08x}{:08x}",
            h[0], h[1], h[2], h[3], h[4]
        ),
    }
}
