use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used by `SeededRandomGenerator::default()`.
pub const DEFAULT_SEED: u64 = 3819201;

/// Source of randomness for breaking ties between equally good moves.
///
/// The search owns its generator, so a fixed seed (or [`FirstChoice`]) makes every decision
/// reproducible.
pub trait RandomGenerator {
    /// Returns an index in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Picks one element of `items`, or `None` when the slice is empty.
    ///
    /// Indices past the end wrap around, so a non-empty slice always yields an element.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_index(items.len()) % items.len())
    }
}

/// Uses `rand`'s thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// A deterministic generator backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct SeededRandomGenerator {
    inner: ChaCha8Rng,
}

impl SeededRandomGenerator {
    /// Creates a generator whose sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        self.inner.random_range(0..len)
    }
}

/// Always picks the first candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstChoice;

impl RandomGenerator for FirstChoice {
    fn next_index(&mut self, _len: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::random::{FirstChoice, RandomGenerator, SeededRandomGenerator};

    #[test]
    fn same_seed_same_numbers() {
        let mut a = SeededRandomGenerator::new(42);
        let mut b = SeededRandomGenerator::new(42);
        let first: Vec<usize> = (0..20).map(|_| a.next_index(10)).collect();
        let second: Vec<usize> = (0..20).map(|_| b.next_index(10)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 10));
    }

    #[test]
    fn choose_stays_in_bounds() {
        let vec = vec![432, 6542, 534, 6, 13, 645, 88, 2352, 345, 2667, 8287];
        let mut rg = SeededRandomGenerator::default();
        for _ in 0..100 {
            assert!(vec.contains(rg.choose(vec.as_slice()).unwrap()));
        }
    }

    #[test]
    fn choose_on_empty_is_none() {
        let empty: Vec<u8> = Vec::new();
        assert_eq!(SeededRandomGenerator::default().choose(empty.as_slice()), None);
        assert_eq!(FirstChoice.choose(empty.as_slice()), None);
    }

    struct PastTheEnd;

    impl RandomGenerator for PastTheEnd {
        fn next_index(&mut self, len: usize) -> usize {
            len + 1
        }
    }

    #[test]
    fn choose_wraps_out_of_range_indices() {
        assert_eq!(PastTheEnd.choose(&[7, 8, 9][..]), Some(&8));
        assert_eq!(PastTheEnd.choose(&[7][..]), Some(&7));
    }

    #[test]
    fn first_choice_is_first() {
        assert_eq!(FirstChoice.choose(&[7, 8, 9][..]), Some(&7));
    }
}
