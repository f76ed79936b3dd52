//! Recency-based tabu memory for swap moves.

/// n×n table holding, for each move `(r, s)`, the iteration at which it
/// becomes legal again.
#[derive(Debug, Clone)]
pub struct TabuMemory {
    n: usize,
    release: Vec<usize>,
}

impl TabuMemory {
    /// Empty memory: every move is legal.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            release: vec![0; n * n],
        }
    }

    /// Whether `(r, s)` is tabu at `iteration`.
    #[inline]
    pub fn is_tabu(&self, r: usize, s: usize, iteration: usize) -> bool {
        self.release[r * self.n + s] > iteration
    }

    /// Whether `(r, s)` may be applied at `iteration`: it is not tabu, or it
    /// is tabu but reaches `candidate_cost < best_cost` and aspiration is on.
    #[inline]
    pub fn admits(
        &self,
        r: usize,
        s: usize,
        iteration: usize,
        candidate_cost: i64,
        best_cost: i64,
        aspiration: bool,
    ) -> bool {
        !self.is_tabu(r, s, iteration) || (aspiration && candidate_cost < best_cost)
    }

    /// Forbids `(r, s)` and `(s, r)` until `iteration + tenure`.
    pub fn forbid(&mut self, r: usize, s: usize, iteration: usize, tenure: usize) {
        let until = iteration + tenure;
        self.release[r * self.n + s] = until;
        self.release[s * self.n + r] = until;
    }

    /// Makes every move legal again.
    pub fn clear(&mut self) {
        self.release.fill(0);
    }
}
