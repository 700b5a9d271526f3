//! In-place Fisher–Yates shuffle.
use rand::Rng;

/// Shuffles the slice in place: walks `i` from the last index down to 1 and
/// swaps `items[i]` with a uniformly random `items[j]`, `j` in `[0, i]`.
/// Every permutation is reachable. Empty and single-element slices are
/// left untouched.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn result_is_a_permutation() {
        let original: Vec<u32> = (0..100).collect();
        let mut shuffled = original.clone();

        shuffle(&mut shuffled, &mut rand::rng());

        assert_eq!(shuffled.len(), original.len());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn empty_and_singleton_are_untouched() {
        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, &mut rand::rng());
        assert!(empty.is_empty());

        let mut single = vec![7];
        shuffle(&mut single, &mut rand::rng());
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let mut first: Vec<u32> = (0..32).collect();
        let mut second = first.clone();

        shuffle(&mut first, &mut StdRng::seed_from_u64(42));
        shuffle(&mut second, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn duplicates_keep_their_multiplicity() {
        let mut items = vec!["a", "a", "b"];

        shuffle(&mut items, &mut rand::rng());

        assert_eq!(items.iter().filter(|s| **s == "a").count(), 2);
        assert_eq!(items.iter().filter(|s| **s == "b").count(), 1);
    }
}
