//! Sublist perturbation for permutations.
//!
//! Used as the kick in ILS and the shaking step in VNS.

use crate::random::RandomSource;

/// Shuffles a circular window of `size` consecutive positions.
///
/// Picks a uniform start index, collects the values at positions
/// `start, start + 1, …, start + size − 1` (indices wrap modulo n), shuffles
/// those values and writes them back to the same positions. The multiset of
/// values is unchanged, so a permutation stays a permutation.
///
/// Does nothing, and consumes no random draws, if `size <= 1` or
/// `size > n`.
///
/// # Examples
///
/// ```
/// use qap_metaheur::{mutate_sublist, RandomSource};
///
/// let mut rng = RandomSource::new(3);
/// let mut perm = vec![0, 1, 2, 3, 4, 5, 6, 7];
/// mutate_sublist(&mut perm, 1, &mut rng);
/// assert_eq!(perm, vec![0, 1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn mutate_sublist(solution: &mut [usize], size: usize, rng: &mut RandomSource) {
    let n = solution.len();
    if size <= 1 || size > n {
        return;
    }

    let start = rng.uniform_int(0, n - 1);
    let mut values: Vec<usize> = (0..size).map(|k| solution[(start + k) % n]).collect();
    rng.shuffle(&mut values);
    for (k, v) in values.into_iter().enumerate() {
        solution[(start + k) % n] = v;
    }
}
