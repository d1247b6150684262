// HTTP request handlers
use crate::application::page_service::{PageOutcome, PageSession};
use crate::domain::page::{select_page_mode, PageMode};
use crate::presentation::app_state::AppState;
use crate::presentation::views::{ErrorBody, PageBody};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PageQuery {
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct TitleQuery {
    pub title: Option<String>,
    pub search: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render a page addressed by its route slug
pub async fn show_page(
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match slug.parse::<PageMode>() {
        Ok(mode) => render(&state, PageSession::new(mode).with_search(query.search)).await,
        Err(e) => (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    }
}

/// Render a page addressed by its heading text
pub async fn detect_page(
    Query(query): Query<TitleQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let mode = select_page_mode(query.title.as_deref().unwrap_or_default());
    tracing::debug!("Page title {:?} selected {}", query.title, mode);
    render(&state, PageSession::new(mode).with_search(query.search)).await
}

async fn render(state: &AppState, session: PageSession) -> Response {
    match state.page_service.bootstrap(&session).await {
        PageOutcome::Loaded(view) => Json(PageBody::from(view)).into_response(),
        PageOutcome::Failed(failure) => {
            (StatusCode::BAD_GATEWAY, Json(ErrorBody::from(failure))).into_response()
        }
    }
}
