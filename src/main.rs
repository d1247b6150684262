// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use production_dashboard::application::data_loader::DataLoader;
use production_dashboard::application::page_service::PageService;
use production_dashboard::infrastructure::config::load_settings;
use production_dashboard::infrastructure::http_source::HttpDatasetSource;
use production_dashboard::presentation::app_state::AppState;
use production_dashboard::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = load_settings()?;

    // Dataset source (infrastructure layer)
    let source = Arc::new(HttpDatasetSource::new(settings.data.base_url.clone()));

    // Services (application layer)
    let loader = DataLoader::new(source, settings.data.paths.clone());
    let state = Arc::new(AppState {
        page_service: PageService::new(loader),
    });

    // Router (presentation layer)
    let app = router(state, settings.data.serve_dir.as_deref());

    let addr: SocketAddr = settings.server.bind.parse()?;
    tracing::info!(
        "Starting production dashboard on {} (datasets from {})",
        addr,
        settings.data.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
