//! Content hashing helpers (blake3).

/// Compute a 64-bit content hash (first 8 bytes of blake3).
///
/// Used for change detection when reloading descriptors.
pub fn compute(bytes: &[u8]) -> u64 {
    let digest = blake3::hash(bytes);
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(buf)
}

/// Compute a short hex fingerprint (8 chars) for cache-busting filenames.
pub fn fingerprint(content: &str) -> String {
    let digest = blake3::hash(content.as_bytes());
    hex::encode(&digest.as_bytes()[..4])
}
