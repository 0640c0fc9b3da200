//! Content fingerprints.
//!
//! A fingerprint is the first 16 bytes of a SHA-256 digest, hex-encoded.
//! 128 bits is plenty for equality checks on downloaded text and keeps the
//! index file readable.

use sha2::{Digest, Sha256};

/// Hash any string into a 32-character lowercase hex fingerprint.
pub fn digest(value: &str) -> String {
    let hash = Sha256::digest(value.as_bytes());
    hex::encode(&hash[..16])
}

/// Fingerprint of downloaded content.
///
/// Empty content has the empty fingerprint, the same value reported for a
/// URL that has never been recorded.
pub fn fingerprint_of(content: &str) -> String {
    if content.is_empty() {
        String::new()
    } else {
        digest(content)
    }
}
