//! Error types.

use std::fmt;

/// Reasons a flow/distance pair is rejected as a QAP instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// The instance has no units (n = 0).
    Empty,
    /// A matrix does not have `expected` rows.
    RowCount {
        matrix: &'static str,
        rows: usize,
        expected: usize,
    },
    /// A matrix row does not have `expected` entries.
    RowLength {
        matrix: &'static str,
        row: usize,
        len: usize,
        expected: usize,
    },
    /// Coefficient magnitudes are large enough that a cost or delta could
    /// overflow `i64`.
    CostOverflow {
        max_flow: u64,
        max_distance: u64,
    },
}

impl fmt::Display for InstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceError::Empty => write!(f, "instance has no units"),
            InstanceError::RowCount {
                matrix,
                rows,
                expected,
            } => write!(f, "{matrix} matrix has {rows} rows, expected {expected}"),
            InstanceError::RowLength {
                matrix,
                row,
                len,
                expected,
            } => write!(
                f,
                "{matrix} matrix row {row} has {len} entries, expected {expected}"
            ),
            InstanceError::CostOverflow {
                max_flow,
                max_distance,
            } => write!(
                f,
                "coefficients too large: max |flow| = {max_flow}, max |distance| = {max_distance} may overflow a 64-bit cost"
            ),
        }
    }
}

impl std::error::Error for InstanceError {}

/// The error type returned by instance construction and by the runners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QapError {
    /// The flow/distance matrices do not form a valid instance.
    InvalidInstance(InstanceError),
    /// A runner configuration failed validation.
    InvalidConfig(String),
    /// A supplied starting solution is not a permutation of `0..expected`.
    InvalidSolution { expected: usize },
}

impl fmt::Display for QapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QapError::InvalidInstance(e) => write!(f, "invalid instance: {e}"),
            QapError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            QapError::InvalidSolution { expected } => {
                write!(f, "solution is not a permutation of 0..{expected}")
            }
        }
    }
}

impl std::error::Error for QapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QapError::InvalidInstance(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InstanceError> for QapError {
    fn from(e: InstanceError) -> Self {
        QapError::InvalidInstance(e)
    }
}
