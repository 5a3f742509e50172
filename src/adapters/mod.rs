//! Adapters - Implementations of the ports against real and test
//! collaborators.

pub mod scoring;
