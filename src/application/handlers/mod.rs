//! Application handlers - One handler per user-facing operation.

mod load_panel;
mod model_admin;
mod model_transfer;
mod run_rankings;
mod submit_matrix;

pub use load_panel::{LoadPanelHandler, PanelContext};
pub use model_admin::ModelAdminHandler;
pub use model_transfer::{ModelTransferHandler, TransferError};
pub use run_rankings::RankingOrchestrator;
pub use submit_matrix::{SubmitError, SubmitMatrixCommand, SubmitMatrixHandler};
