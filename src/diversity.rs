//! Diversity metrics between permutations.

/// Number of positions at which `a` and `b` differ.
///
/// Ranges from 0 (identical) to n. Extra trailing elements of the longer
/// slice are ignored.
pub fn hamming_distance(a: &[usize], b: &[usize]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Mean pairwise Hamming distance over a set of solutions.
///
/// Returns 0.0 for fewer than two solutions.
pub fn population_diversity(solutions: &[Vec<usize>]) -> f64 {
    let mut total = 0usize;
    let mut pairs = 0usize;
    for (i, a) in solutions.iter().enumerate() {
        for b in &solutions[i + 1..] {
            total += hamming_distance(a, b);
            pairs += 1;
        }
    }
    if pairs == 0 {
        0.0
    } else {
        total as f64 / pairs as f64
    }
}
