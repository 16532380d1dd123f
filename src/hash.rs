//! Polynomial rolling hash used to place keys into buckets.

/// Multiplier of the rolling hash.
const PRIME: u128 = 31;

/// Maps `key` to a bucket index in `0..capacity`.
///
/// Each UTF-16 code unit of the key is folded in as `h = (31 * h + code) % capacity`,
/// starting from `h = 0`. The reduction happens at every step, so the index for a given
/// key depends on the capacity it is computed against and changes after a resize.
///
/// An empty key always lands in bucket 0. A `capacity` of 0 is treated as 1.
///
/// ```rust
/// use chainmap::bucket_index;
///
/// assert_eq!(bucket_index("apple", 16), 10);
/// assert_eq!(bucket_index("apple", 32), 26);
/// assert_eq!(bucket_index("", 16), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    let modulus = capacity.max(1) as u128;

    // h < modulus <= usize::MAX, so 31 * h + code always fits in a u128.
    let hash = key
        .encode_utf16()
        .fold(0_u128, |h, code| (PRIME * h + u128::from(code)) % modulus);

    // hash < modulus, which came from a usize.
    hash as usize
}
