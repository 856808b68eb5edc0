/// Length in bytes of every digest produced by the tree.
pub const HASH_LENGTH: usize = 32;

/// A Blake3 digest.
pub type Hash = [u8; HASH_LENGTH];

/// Hash a single value: `blake3(value)`.
pub fn hash_value(value: &[u8]) -> Hash {
    *blake3::hash(value).as_bytes()
}

/// Hash two values in canonical order: `blake3(min(a, b) || max(a, b))`.
///
/// Ordering is lexicographic over bytes, so `hash_pair(a, b) ==
/// hash_pair(b, a)`. Proofs rely on this since they do not record which side
/// a sibling was on.
pub fn hash_pair(a: &[u8], b: &[u8]) -> Hash {
    let (first, second) = if a < b { (a, b) } else { (b, a) };
    let mut hasher = blake3::Hasher::new();
    hasher.update(first);
    hasher.update(second);
    *hasher.finalize().as_bytes()
}
