//! Content-addressed identifier generation for script bodies.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the SHA-256 digest.
///
/// 16 characters (64 bits) is short enough for a readable filename and far
/// beyond any realistic collision risk for script bodies.
const ID_LEN: usize = 16;

/// Compute the content identifier for a script body.
///
/// The identifier is derived from the content bytes alone: same input always
/// produces the same output, across processes and restarts. The result is
/// lowercase hex and safe to use as a filename stem.
pub fn content_id(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(ID_LEN);
    id
}
