//! Resolved numeric comparison matrix, the unit sent to the scoring
//! service.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// An `n x n` matrix of resolved judgment magnitudes with 1s on the
/// diagonal.
///
/// Values are plain numbers; the display labels they came from are not
/// part of the submission payload. Serializes transparently as nested
/// arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComparisonMatrix {
    rows: Vec<Vec<f64>>,
}

impl ComparisonMatrix {
    /// Validates and wraps externally supplied rows.
    ///
    /// The rows must form a square matrix with every diagonal entry
    /// equal to 1.
    pub fn try_from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ValidationError::count_mismatch(
                    "columns in matrix row",
                    n,
                    row.len(),
                ));
            }
            if row[i] != 1.0 {
                return Err(ValidationError::invalid_format(
                    "matrix",
                    format!("diagonal entry ({}, {}) must be 1, got {}", i, i, row[i]),
                ));
            }
        }
        Ok(Self { rows })
    }

    /// Wraps rows whose invariants were already enforced by the editor.
    pub(crate) fn from_resolved_rows(rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self { rows }
    }

    /// Returns the matrix dimension `n`.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows in row-major order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the entry at `(row, col)` if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}
