//! Unbiased random permutation (Fisher-Yates / Knuth shuffle)

use rand::Rng;

/// Shuffles a slice in place with the Fisher-Yates algorithm.
///
/// Walks `i` from `len - 1` down to 1, draws `j` uniformly from `0..=i` and
/// swaps the two positions when they differ. Given a uniform generator, every
/// one of the `n!` orderings is equally likely. Sorting by random keys is NOT
/// an acceptable substitute: it is biased and must not replace this loop.
///
/// Slices of length 0 or 1 are left untouched.
pub fn fisher_yates<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    if items.len() < 2 {
        return;
    }
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        if i != j {
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_and_singleton_are_untouched() {
        let mut rng = StdRng::seed_from_u64(1);

        let mut empty: Vec<u32> = vec![];
        fisher_yates(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![7];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn output_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut values: Vec<u32> = (0..50).collect();
        fisher_yates(&mut values, &mut rng);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn same_seed_same_ordering() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();

        fisher_yates(&mut a, &mut StdRng::seed_from_u64(42));
        fisher_yates(&mut b, &mut StdRng::seed_from_u64(42));

        assert_eq!(a, b);
    }
}
