//! Binary entry point.
//!
//! Initializes observability and configuration, bootstraps the panel
//! context once, runs the ranking flow, and prints the rendered
//! report.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use ahp_workbench::adapters::scoring::{HttpScoringService, ScoringServiceConfig};
use ahp_workbench::application::handlers::{LoadPanelHandler, RankingOrchestrator};
use ahp_workbench::config::AppConfig;
use ahp_workbench::domain::ranking::ReportRenderer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let service = Arc::new(HttpScoringService::new(
        ScoringServiceConfig::new(&config.scoring.base_url)
            .with_timeout(Duration::from_secs(config.scoring.request_timeout_secs))
            .with_max_retries(config.scoring.max_retries),
    ));

    let panel = LoadPanelHandler::new(service.clone()).handle().await?;
    tracing::info!(
        "Panel loaded: {} experts, {} criteria, {} alternatives",
        panel.experts.len(),
        panel.criteria.len(),
        panel.alternatives.count
    );
    if panel.experts.is_empty() {
        tracing::info!("No experts available");
    }
    if panel.criteria.is_empty() {
        tracing::info!("No criteria available");
    }

    let report = RankingOrchestrator::new(service).run_sequential().await;
    print!("{}", ReportRenderer::render(&report));

    Ok(())
}
