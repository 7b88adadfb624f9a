// src/feed/guid.rs

//! Stable item identifiers.

use sha2::{Digest, Sha256};

/// Number of decimal digits in an item GUID.
pub const GUID_WIDTH: usize = 16;

const GUID_MODULUS: u64 = 10_000_000_000_000_000;

/// Derive the numeric GUID of an item from its canonical URL.
///
/// The first eight bytes of the SHA-256 digest, read big-endian, reduced
/// modulo 10^16 and zero-padded to [`GUID_WIDTH`] digits.
pub fn guid_for(link: &str) -> String {
    let digest = Sha256::digest(link.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let value = u64::from_be_bytes(head) % GUID_MODULUS;
    format!("{value:0width$}", width = GUID_WIDTH)
}
