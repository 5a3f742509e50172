//! Strongly-typed display labels for panel entities.
//!
//! Alternatives, criteria, and experts are managed by the remote model
//! service and consumed here as opaque display labels. The newtypes
//! reject empty labels at construction so downstream code never has to
//! re-validate.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Display label of a decision alternative.
///
/// The ordered alternative set defines the comparison matrix dimension
/// and its row/column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternativeName(String);

impl AlternativeName {
    /// Creates a new AlternativeName, returning error if empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("alternative_name"));
        }
        Ok(Self(name))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlternativeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display label of a decision criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriterionName(String);

impl CriterionName {
    /// Creates a new CriterionName, returning error if empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("criterion_name"));
        }
        Ok(Self(name))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CriterionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display label of a panel expert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpertName(String);

impl ExpertName {
    /// Creates a new ExpertName, returning error if empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("expert_name"));
        }
        Ok(Self(name))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpertName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
