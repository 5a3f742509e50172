//! AHP Workbench - Interactive group decision support client
//!
//! This crate implements the interactive side of an Analytic Hierarchy
//! Process workbench: pairwise comparison matrix editing, matrix
//! submission, multi-method ranking orchestration, and report
//! rendering against a remote scoring service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
