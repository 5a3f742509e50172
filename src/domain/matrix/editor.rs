//! Pairwise comparison matrix editor.
//!
//! One editor instance backs one editing session for one (expert,
//! criterion) pair. It owns an `n x n` grid of scale values over the
//! current alternative set and maintains two invariants on every edit:
//!
//! - diagonal cells hold `1` and cannot be edited;
//! - writing a value into `(i, j)` writes its reciprocal into `(j, i)`
//!   in the same call, so no read can ever observe half an update.
//!
//! `resolve()` never consumes the editor; a session may keep editing
//! and resolving for as long as the alternative set stays unchanged.

use crate::domain::foundation::{AlternativeName, ValidationError};
use crate::domain::scale::ScaleValue;

use super::ComparisonMatrix;

/// Grid editor for one expert's judgments under one criterion.
#[derive(Debug, Clone)]
pub struct MatrixEditor {
    alternatives: Vec<AlternativeName>,
    grid: Vec<ScaleValue>,
}

impl MatrixEditor {
    /// Allocates an `n x n` grid for the given alternative set.
    ///
    /// `expected_count` is the alternative count reported by the model
    /// service; a disagreement with the supplied labels means the two
    /// collaborators are out of sync and the build is refused.
    ///
    /// Every cell starts at scale value `1` (no preference), which
    /// also satisfies the diagonal invariant.
    pub fn build(
        alternatives: Vec<AlternativeName>,
        expected_count: usize,
    ) -> Result<Self, ValidationError> {
        if alternatives.len() != expected_count {
            return Err(ValidationError::count_mismatch(
                "alternatives",
                expected_count,
                alternatives.len(),
            ));
        }

        let n = alternatives.len();
        Ok(Self {
            alternatives,
            grid: vec![ScaleValue::One; n * n],
        })
    }

    /// Returns the matrix dimension `n`.
    pub fn dimension(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the alternative labels in row/column order.
    pub fn alternatives(&self) -> &[AlternativeName] {
        &self.alternatives
    }

    /// Returns the scale value currently held at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<ScaleValue, ValidationError> {
        self.check_bounds(row, col)?;
        Ok(self.grid[row * self.dimension() + col])
    }

    /// Sets the off-diagonal cell `(row, col)` and atomically mirrors
    /// the reciprocal value into `(col, row)`.
    ///
    /// The mirror write goes straight into the grid rather than back
    /// through this method, so it cannot trigger a second mirroring.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        value: ScaleValue,
    ) -> Result<(), ValidationError> {
        self.check_bounds(row, col)?;
        if row == col {
            return Err(ValidationError::diagonal_edit(row));
        }

        let n = self.dimension();
        self.grid[row * n + col] = value;
        self.grid[col * n + row] = value.reciprocal();
        Ok(())
    }

    /// Reads every cell's magnitude into a plain numeric matrix.
    ///
    /// Infallible once built; repeated calls without intervening edits
    /// return identical matrices. The diagonal is emitted as exactly 1.
    pub fn resolve(&self) -> ComparisonMatrix {
        let n = self.dimension();
        let rows = (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| {
                        if row == col {
                            1.0
                        } else {
                            self.grid[row * n + col].magnitude()
                        }
                    })
                    .collect()
            })
            .collect();

        ComparisonMatrix::from_resolved_rows(rows)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), ValidationError> {
        let n = self.dimension();
        if row >= n || col >= n {
            return Err(ValidationError::out_of_range(row, col, n));
        }
        Ok(())
    }
}
