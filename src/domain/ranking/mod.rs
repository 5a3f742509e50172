//! Ranking module - Methods, the accumulated report, and its renderer.

mod method;
mod renderer;
mod report;

pub use method::RankingMethod;
pub use renderer::{ReportRenderer, NO_DATA_PLACEHOLDER};
pub use report::{
    CriterionMatrices, InconsistencyIndices, LabeledMatrix, MethodSection, RankedAlternative,
    RankingReport,
};
