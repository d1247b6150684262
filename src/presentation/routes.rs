// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{detect_page, health_check, show_page};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>, serve_dir: Option<&str>) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(health_check))
        .route("/pages", get(detect_page))
        .route("/pages/:mode", get(show_page))
        .with_state(state);

    if let Some(dir) = serve_dir {
        router = router.nest_service("/data", ServeDir::new(dir));
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
