//! Permutation solutions: random generation and validation.

use crate::random::RandomSource;

/// Returns a uniformly random permutation of `0..n`.
///
/// Starts from the identity and applies an unbiased Fisher–Yates shuffle.
pub fn random_permutation(n: usize, rng: &mut RandomSource) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    rng.shuffle(&mut perm);
    perm
}

/// Checks that `solution` is a bijection on `0..n`.
pub fn is_permutation(solution: &[usize], n: usize) -> bool {
    if solution.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in solution {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_permutation_is_valid() {
        let mut rng = RandomSource::new(42);
        for n in [1, 2, 5, 30] {
            for _ in 0..20 {
                let p = random_permutation(n, &mut rng);
                assert!(is_permutation(&p, n), "invalid: {p:?}");
            }
        }
        assert!(random_permutation(0, &mut rng).is_empty());
    }

    #[test]
    fn test_random_permutation_covers_all_orders() {
        // all 6 permutations of 3 elements should appear
        let mut rng = RandomSource::new(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            seen.insert(random_permutation(3, &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_is_permutation_rejects() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
        assert!(!is_permutation(&[0, 1], 3));
    }
}
