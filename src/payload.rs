use sha2::{Digest, Sha256};

/// Deterministic pseudo-random payload: the concatenation of
/// `sha256(seed)`, `sha256(sha256(seed))`, ... truncated to `len` octets.
pub fn generate(seed: &str, len: usize) -> Vec<u8> {
    let mut payload = Vec::with_capacity(len + 32);
    let mut hash = Sha256::digest(seed.as_bytes());
    while payload.len() < len {
        payload.extend_from_slice(&hash);
        hash = Sha256::digest(&hash);
    }
    payload.truncate(len);
    payload
}
