//! Router assembly for the live preview server.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered on every request from the current catalog on disk.
//! Everything under `/static` is served straight from the static directory,
//! matching the layout the `build` command writes.

pub mod pages;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let static_service = ServeDir::new(state.static_dir.as_path());

    Router::new()
        .route("/", get(pages::index))
        .route("/index.html", get(pages::index))
        .route("/project/{section}/{index}", get(pages::project))
        .route("/project/{section}/{index}/", get(pages::project))
        .route("/healthz", get(healthz))
        .nest_service("/static", static_service)
        .fallback(pages::page_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
