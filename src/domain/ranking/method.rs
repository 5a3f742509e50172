//! The closed set of ranking methods offered by the scoring service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ranking method, identified by its service endpoint and display
/// label.
///
/// The set is closed: adding a method means adding a variant here and
/// nothing else, since the orchestration loop iterates
/// [`RankingMethod::INVOCATION_ORDER`] uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMethod {
    /// Relative closeness to ideal and negative-ideal solutions.
    Topsis,
    /// Priority weights adjusted by per-matrix consistency.
    ConsistencyAdjusted,
    /// Plain aggregated priority weights.
    Basic,
}

impl RankingMethod {
    /// The fixed order in which the orchestrator invokes the methods.
    pub const INVOCATION_ORDER: [RankingMethod; 3] = [
        RankingMethod::Topsis,
        RankingMethod::ConsistencyAdjusted,
        RankingMethod::Basic,
    ];

    /// Returns the display label used in report section headers.
    pub fn label(&self) -> &'static str {
        match self {
            RankingMethod::Topsis => "TOPSIS",
            RankingMethod::ConsistencyAdjusted => "CAM",
            RankingMethod::Basic => "BASIC",
        }
    }

    /// Returns the service route computing this method's ranking.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            RankingMethod::Topsis => "/calculate_final_ranking_topsis",
            RankingMethod::ConsistencyAdjusted => "/calculate_final_ranking_consistency_adjusted",
            RankingMethod::Basic => "/calculate_final_ranking_basic",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
