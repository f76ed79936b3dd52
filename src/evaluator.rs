//! Full and incremental (swap-delta) cost evaluation.
//!
//! # Cost
//!
//! `cost(π) = Σ_{i≠j} flow[i][j] · distance[π(i)][π(j)]`, computed in O(n²).
//!
//! # Swap delta
//!
//! Exchanging the locations of units `r` and `s` only changes terms that
//! involve `r` or `s`. For every other unit `k` the four cross terms
//! (`r→k`, `k→r`, `s→k`, `k→s`) are replaced, and the two direct `r↔s`
//! terms are corrected separately, giving an O(n) delta that equals the
//! difference of two full evaluations exactly.
//!
//! # Effort counter
//!
//! Every full evaluation and every delta call is counted. Both count once by
//! default; [`EffortWeights`] changes that convention.

use crate::instance::QapInstance;
use std::cell::Cell;

/// How much each evaluation kind adds to the effort counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffortWeights {
    /// Added per [`CostEvaluator::full_cost`] call.
    pub full: u64,
    /// Added per [`CostEvaluator::delta`] call.
    pub delta: u64,
}

impl Default for EffortWeights {
    fn default() -> Self {
        Self { full: 1, delta: 1 }
    }
}

/// Cost evaluator bound to one instance, carrying its own effort counter.
///
/// # Examples
///
/// ```
/// use qap_metaheur::{CostEvaluator, QapInstance};
///
/// let instance = QapInstance::new(
///     vec![vec![0, 1, 2], vec![1, 0, 3], vec![2, 3, 0]],
///     vec![vec![0, 5, 1], vec![5, 0, 2], vec![1, 2, 0]],
/// ).unwrap();
/// let eval = CostEvaluator::new(&instance);
///
/// let before = vec![0, 1, 2];
/// let after = vec![2, 1, 0];
/// assert_eq!(
///     eval.delta(0, 2, &before),
///     eval.full_cost(&after) - eval.full_cost(&before)
/// );
/// assert_eq!(eval.evaluations(), 3);
/// ```
#[derive(Debug)]
pub struct CostEvaluator<'a> {
    instance: &'a QapInstance,
    weights: EffortWeights,
    evaluations: Cell<u64>,
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator with the default effort weights.
    pub fn new(instance: &'a QapInstance) -> Self {
        Self::with_weights(instance, EffortWeights::default())
    }

    /// Creates an evaluator with custom effort weights.
    pub fn with_weights(instance: &'a QapInstance, weights: EffortWeights) -> Self {
        Self {
            instance,
            weights,
            evaluations: Cell::new(0),
        }
    }

    /// The instance being evaluated.
    #[inline]
    pub fn instance(&self) -> &'a QapInstance {
        self.instance
    }

    /// Number of units.
    #[inline]
    pub fn size(&self) -> usize {
        self.instance.size()
    }

    /// Accumulated effort since creation or the last reset.
    pub fn evaluations(&self) -> u64 {
        self.evaluations.get()
    }

    /// Resets the effort counter to zero.
    pub fn reset_evaluations(&self) {
        self.evaluations.set(0);
    }

    #[inline]
    fn count(&self, amount: u64) {
        self.evaluations.set(self.evaluations.get() + amount);
    }

    /// Full O(n²) cost of `solution`.
    pub fn full_cost(&self, solution: &[usize]) -> i64 {
        self.count(self.weights.full);
        let inst = self.instance;
        let n = solution.len();
        let mut cost = 0i64;
        for i in 0..n {
            let li = solution[i];
            for j in 0..n {
                if i != j {
                    cost += inst.flow(i, j) * inst.distance(li, solution[j]);
                }
            }
        }
        cost
    }

    /// Cost change of exchanging `solution[r]` and `solution[s]`, in O(n).
    ///
    /// Does not modify `solution`; applying the swap is the caller's job.
    /// Returns 0 when `r == s`.
    pub fn delta(&self, r: usize, s: usize, solution: &[usize]) -> i64 {
        self.count(self.weights.delta);
        if r == s {
            return 0;
        }
        let inst = self.instance;
        let lr = solution[r];
        let ls = solution[s];
        let mut delta = 0i64;

        for (k, &lk) in solution.iter().enumerate() {
            if k == r || k == s {
                continue;
            }
            let (frk, fkr) = (inst.flow(r, k), inst.flow(k, r));
            let (fsk, fks) = (inst.flow(s, k), inst.flow(k, s));

            delta -= frk * inst.distance(lr, lk)
                + fkr * inst.distance(lk, lr)
                + fsk * inst.distance(ls, lk)
                + fks * inst.distance(lk, ls);
            delta += frk * inst.distance(ls, lk)
                + fkr * inst.distance(lk, ls)
                + fsk * inst.distance(lr, lk)
                + fks * inst.distance(lk, lr);
        }

        let (frs, fsr) = (inst.flow(r, s), inst.flow(s, r));
        delta -= frs * inst.distance(lr, ls) + fsr * inst.distance(ls, lr);
        delta += frs * inst.distance(ls, lr) + fsr * inst.distance(lr, ls);

        delta
    }
}
