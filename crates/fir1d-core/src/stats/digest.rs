// crates/fir1d-core/src/stats/digest.rs

/// 16-byte blake3 digest of raw bytes.
pub fn digest16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

/// Digest of a fixed-engine output vector under a canonical little-endian
/// u64 encoding. Used to lock golden vectors in regression tests.
pub fn fixed_vector_digest16(values: &[u64]) -> [u8; 16] {
    let mut bytes = Vec::with_capacity(values.len() * 8);
    for v in values {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    digest16(&bytes)
}

/// Digest of an ideal-engine output vector (little-endian f64 bit patterns).
pub fn ideal_vector_digest16(values: &[f64]) -> [u8; 16] {
    let mut bytes = Vec::with_capacity(values.len() * 8);
    for v in values {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    digest16(&bytes)
}
