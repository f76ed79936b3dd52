//! QAP instance: validated flow and distance matrices.
//!
//! Parsing instance files is left to the caller; this module only checks
//! that two already-read matrices describe a well-formed problem.
//!
//! # Overflow envelope
//!
//! Costs and deltas are accumulated in `i64`. An instance is accepted only if
//! `2 · n · (n − 1) · max|flow| · max|distance|` fits in `i64`, which bounds
//! every full cost and every intermediate sum of a swap delta.
//!
//! The constructive heuristics sum `flow[i][j] + flow[j][i]` over a row, and
//! likewise for distances, so `2 · n · max|flow|` and `2 · n · max|distance|`
//! must fit in `i64` as well. The product bound alone misses these when n = 1
//! or when one matrix is all zeros.

use crate::error::{InstanceError, QapError};

/// A Quadratic Assignment Problem instance.
///
/// Matrices are stored row-major and may be asymmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QapInstance {
    n: usize,
    flow: Vec<i64>,
    distance: Vec<i64>,
}

impl QapInstance {
    /// Builds an instance from an n×n flow matrix and an n×n distance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`QapError::InvalidInstance`] if n = 0, if either matrix is
    /// not n×n, or if the coefficients exceed the overflow envelope.
    ///
    /// # Examples
    ///
    /// ```
    /// use qap_metaheur::QapInstance;
    ///
    /// let instance = QapInstance::new(
    ///     vec![vec![0, 3], vec![1, 0]],
    ///     vec![vec![0, 2], vec![5, 0]],
    /// ).unwrap();
    /// assert_eq!(instance.size(), 2);
    /// assert_eq!(instance.distance(1, 0), 5);
    /// ```
    pub fn new(flow: Vec<Vec<i64>>, distance: Vec<Vec<i64>>) -> Result<Self, QapError> {
        let n = flow.len();
        if n == 0 {
            return Err(InstanceError::Empty.into());
        }
        let flow = flatten("flow", flow, n)?;
        let distance = flatten("distance", distance, n)?;

        let max_flow = max_magnitude(&flow);
        let max_distance = max_magnitude(&distance);
        let pairs = 2 * (n as u128) * (n as u128 - 1);
        let cost_bound = pairs * max_flow as u128 * max_distance as u128;
        let potential_bound = 2 * n as u128 * max_flow.max(max_distance) as u128;
        if cost_bound.max(potential_bound) > i64::MAX as u128 {
            return Err(InstanceError::CostOverflow {
                max_flow,
                max_distance,
            }
            .into());
        }

        Ok(Self { n, flow, distance })
    }

    /// Number of units (and locations).
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Flow between units `i` and `j`.
    #[inline]
    pub fn flow(&self, i: usize, j: usize) -> i64 {
        self.flow[i * self.n + j]
    }

    /// Distance between locations `k` and `l`.
    #[inline]
    pub fn distance(&self, k: usize, l: usize) -> i64 {
        self.distance[k * self.n + l]
    }
}

fn flatten(matrix: &'static str, rows: Vec<Vec<i64>>, n: usize) -> Result<Vec<i64>, QapError> {
    if rows.len() != n {
        return Err(InstanceError::RowCount {
            matrix,
            rows: rows.len(),
            expected: n,
        }
        .into());
    }
    let mut flat = Vec::with_capacity(n * n);
    for (row, values) in rows.into_iter().enumerate() {
        if values.len() != n {
            return Err(InstanceError::RowLength {
                matrix,
                row,
                len: values.len(),
                expected: n,
            }
            .into());
        }
        flat.extend(values);
    }
    Ok(flat)
}

fn max_magnitude(values: &[i64]) -> u64 {
    values.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0)
}
