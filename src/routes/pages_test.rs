use std::io::Write as _;
use std::path::PathBuf;

use axum::body::to_bytes;

use super::*;
use crate::state::CatalogSource;

fn builtin_state() -> AppState {
    AppState::new(CatalogSource::Builtin, None, PathBuf::from("static"))
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn project_path(section: &str, index: &str) -> Path<(String, String)> {
    Path((section.to_owned(), index.to_owned()))
}

#[tokio::test]
async fn index_renders_builtin_catalog() {
    let response = index(State(builtin_state())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("AI-Powered Task Manager"));
    assert!(body.contains("/project/current/0/"));
}

#[tokio::test]
async fn project_renders_detail_page() {
    let response = project(State(builtin_state()), project_path("archived", "0")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Neural Network Visualizer"));
}

#[tokio::test]
async fn project_out_of_range_is_not_found() {
    let response = project(State(builtin_state()), project_path("current", "10")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Project not found");
}

#[tokio::test]
async fn project_unknown_section_is_not_found() {
    let response = project(State(builtin_state()), project_path("drafts", "0")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn project_non_numeric_index_is_not_found() {
    let response = project(State(builtin_state()), project_path("current", "-1")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn broken_catalog_is_server_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"current: [not, records]\n").unwrap();
    let state = AppState::new(
        CatalogSource::File(file.path().to_path_buf()),
        None,
        PathBuf::from("static"),
    );
    let response = index(State(state)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.starts_with("Failed to load site data"));
}

#[tokio::test]
async fn index_picks_up_catalog_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.yaml");
    let record = |title: &str| {
        format!(
            "current:\n  - title: {title}\n    date: '2024'\n    image: a.png\n    description: d\n    technologies: [rust]\n    demo-link: https://d\n    github-link: https://g\n"
        )
    };
    std::fs::write(&path, record("First Draft")).unwrap();
    let state = AppState::new(CatalogSource::File(path.clone()), None, PathBuf::from("static"));

    assert!(body_text(index(State(state.clone())).await).await.contains("First Draft"));
    std::fs::write(&path, record("Second Draft")).unwrap();
    assert!(body_text(index(State(state)).await).await.contains("Second Draft"));
}
