use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// The 32 bit golden ratio constant used by the boost style combiner.
const GOLDEN_RATIO: u64 = 0x9e37_79b9;

/// Hash a single value with a fixed-key hasher.
///
/// [`FxHasher`] has no random keys and a fixed algorithm, so the result depends only on `value`.
/// This is what makes [`hash_range`] and [`hash_unordered`] deterministic, as opposed to hashing
/// through a randomly seeded [`std::collections::hash_map::RandomState`].
#[must_use]
pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Mix the hash of `value` into `seed`.
///
/// The mixing step is the one from boost (and P0814): `seed ^= h + 0x9e3779b9 + (seed << 6) + (seed >> 2)`.
/// It is order-sensitive, combining `a` then `b` gives a different seed than `b` then `a`.
///
/// # Example
/// ```
/// use varia_utils::hash_combine;
///
/// let mut ab = 0;
/// hash_combine(&mut ab, &1);
/// hash_combine(&mut ab, &2);
/// let mut ba = 0;
/// hash_combine(&mut ba, &2);
/// hash_combine(&mut ba, &1);
/// assert_ne!(ab, ba);
/// ```
pub fn hash_combine<T: Hash + ?Sized>(seed: &mut u64, value: &T) {
    let hash = hash_one(value);
    *seed ^= hash
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
}

/// Combine the hashes of every element of a sequence, in order.
///
/// The empty sequence hashes to `0`.
///
/// # Example
/// ```
/// use varia_utils::hash_range;
///
/// assert_eq!(hash_range(Vec::<u32>::new()), 0);
/// assert_eq!(hash_range([1, 2, 3]), hash_range(&vec![1, 2, 3]));
/// assert_ne!(hash_range([1, 2, 3]), hash_range([3, 2, 1]));
/// ```
pub fn hash_range<I>(iter: I) -> u64
where
    I: IntoIterator,
    I::Item: Hash,
{
    iter.into_iter().fold(0, |mut seed, item| {
        hash_combine(&mut seed, &item);
        seed
    })
}

/// Combine the hashes of every element of a collection, ignoring order.
///
/// Every element is hashed on its own and the results are summed, so any permutation of the same
/// elements produces the same hash. Use this for collections whose equality does not care about
/// iteration order, like hash maps.
///
/// # Example
/// ```
/// use varia_utils::hash_unordered;
///
/// assert_eq!(hash_unordered([("a", 1), ("b", 2)]), hash_unordered([("b", 2), ("a", 1)]));
/// ```
pub fn hash_unordered<I>(iter: I) -> u64
where
    I: IntoIterator,
    I::Item: Hash,
{
    iter.into_iter()
        .fold(0, |acc: u64, item| acc.wrapping_add(hash_one(&item)))
}

/// A running [`hash_combine`] seed.
///
/// Useful to hash a fixed number of heterogeneous values in one expression.
///
/// # Example
/// ```
/// use varia_utils::HashSeed;
///
/// let hash = HashSeed::default().combine("key").combine(&42).finish();
/// assert_eq!(hash, HashSeed::default().combine("key").combine(&42).finish());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashSeed(u64);

impl HashSeed {
    /// Start combining from a specific seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Mix another value into the seed.
    #[must_use]
    pub fn combine<T: Hash + ?Sized>(mut self, value: &T) -> Self {
        hash_combine(&mut self.0, value);
        self
    }

    /// Get the combined hash.
    #[must_use]
    pub const fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{Hash, Hasher};

    use rustc_hash::FxHasher;

    use super::{hash_combine, hash_one, hash_range, hash_unordered, HashSeed};

    use pretty_assertions::assert_eq;

    #[test]
    fn test_hash_one_is_deterministic() {
        assert_eq!(hash_one("some text"), hash_one("some text"));
        assert_eq!(hash_one(&vec![1, 2, 3]), hash_one(&vec![1, 2, 3]));
        assert_ne!(hash_one(&1_u32), hash_one(&2_u32));
    }

    #[test]
    fn test_hash_one_is_unkeyed_fx() {
        let mut hasher = FxHasher::default();
        "some text".hash(&mut hasher);
        assert_eq!(hash_one("some text"), hasher.finish());

        let mut hasher = FxHasher::default();
        0_u64.hash(&mut hasher);
        assert_eq!(hash_one(&0_u64), 0);
        assert_eq!(hasher.finish(), 0);
    }

    #[test]
    fn test_combine_matches_range() {
        let mut seed = 0;
        for i in 0..10 {
            hash_combine(&mut seed, &i);
        }
        assert_eq!(seed, hash_range(0..10));
    }

    #[test]
    fn test_range_is_order_sensitive() {
        assert_ne!(hash_range(["a", "b"]), hash_range(["b", "a"]));
        assert_ne!(hash_range([1, 1]), hash_range([1]));
    }

    #[test]
    fn test_unordered_ignores_order() {
        let forward = hash_unordered((0..100).map(|i| (i, i * 2)));
        let backward = hash_unordered((0..100).rev().map(|i| (i, i * 2)));
        assert_eq!(forward, backward);
        assert_eq!(hash_unordered(Vec::<u8>::new()), 0);
    }

    #[test]
    fn test_seed_matches_combine() {
        let mut seed = 7;
        hash_combine(&mut seed, "x");
        hash_combine(&mut seed, &3_i32);
        assert_eq!(HashSeed::new(7).combine("x").combine(&3_i32).finish(), seed);
        assert_eq!(HashSeed::default().finish(), 0);
    }
}
