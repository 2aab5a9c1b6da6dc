//! Page handlers for the live preview.

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use site::app::{render_index, render_project};
use site::{Links, Section};

use crate::state::AppState;

/// `GET /` — the landing page.
pub async fn index(State(state): State<AppState>) -> Response {
    let (catalog, tools) = match (state.catalog.load(), state.load_tools()) {
        (Ok(catalog), Ok(tools)) => (catalog, tools),
        (Err(e), _) => return render_failure(&e),
        (_, Err(e)) => return render_failure(&e),
    };
    Html(render_index(&catalog, &tools, &Links::absolute())).into_response()
}

/// `GET /project/{section}/{index}` — one project's detail page.
pub async fn project(
    State(state): State<AppState>,
    Path((section, index)): Path<(String, String)>,
) -> Response {
    let Some(section) = Section::from_slug(&section) else {
        return project_not_found();
    };
    let Ok(index) = index.parse::<usize>() else {
        return project_not_found();
    };

    let (catalog, tools) = match (state.catalog.load(), state.load_tools()) {
        (Ok(catalog), Ok(tools)) => (catalog, tools),
        (Err(e), _) => return render_failure(&e),
        (_, Err(e)) => return render_failure(&e),
    };
    match catalog.get(section, index) {
        Some(record) => Html(render_project(record, &tools, &Links::absolute())).into_response(),
        None => project_not_found(),
    }
}

fn project_not_found() -> Response {
    (StatusCode::NOT_FOUND, "Project not found").into_response()
}

fn render_failure(err: &dyn std::error::Error) -> Response {
    tracing::error!(error = %err, "failed to load site data");
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to load site data: {err}")).into_response()
}

pub async fn page_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Page not found")
}
