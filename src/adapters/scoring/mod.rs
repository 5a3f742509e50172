//! Scoring service adapters.

mod http;
mod mock;

pub use http::{HttpScoringService, ScoringServiceConfig};
pub use mock::MockScoringService;
