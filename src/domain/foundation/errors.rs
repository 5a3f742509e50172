//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction and grid editing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Index ({row}, {col}) is outside the {dimension}x{dimension} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Expected {expected} {what}, got {actual}")]
    CountMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Diagonal cell ({index}, {index}) is fixed at 1 and cannot be edited")]
    DiagonalEdit { index: usize },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(row: usize, col: usize, dimension: usize) -> Self {
        ValidationError::OutOfRange {
            row,
            col,
            dimension,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a count mismatch validation error.
    pub fn count_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        ValidationError::CountMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Creates a diagonal edit validation error.
    pub fn diagonal_edit(index: usize) -> Self {
        ValidationError::DiagonalEdit { index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("expert_name");
        assert_eq!(format!("{}", err), "Field 'expert_name' cannot be empty");
    }

    #[test]
    fn out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range(4, 1, 3);
        assert_eq!(format!("{}", err), "Index (4, 1) is outside the 3x3 grid");
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("scale_label", "unknown label '10'");
        assert_eq!(
            format!("{}", err),
            "Field 'scale_label' has invalid format: unknown label '10'"
        );
    }

    #[test]
    fn count_mismatch_displays_correctly() {
        let err = ValidationError::count_mismatch("alternatives", 4, 3);
        assert_eq!(format!("{}", err), "Expected 4 alternatives, got 3");
    }

    #[test]
    fn diagonal_edit_displays_correctly() {
        let err = ValidationError::diagonal_edit(2);
        assert_eq!(
            format!("{}", err),
            "Diagonal cell (2, 2) is fixed at 1 and cannot be edited"
        );
    }
}
