//! Ports - Interfaces to external collaborators.

mod scoring_service;

pub use scoring_service::{AlternativeSet, MatrixSubmission, ScoringService, ServiceError};
