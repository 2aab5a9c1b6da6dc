use std::fs;

use super::*;
use crate::state::CatalogSource;

fn state_with_static(static_dir: PathBuf) -> AppState {
    AppState::new(CatalogSource::Builtin, None, static_dir)
}

#[test]
fn builds_index_and_one_page_per_project() {
    let out = tempfile::tempdir().unwrap();
    let state = state_with_static(out.path().join("no-static"));

    let report = build_site(&state, out.path()).unwrap();
    assert_eq!(report.projects, 20);
    assert_eq!(report.pages, 21);
    assert_eq!(report.assets, 0);

    let index = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(index.contains("AI-Powered Task Manager"));
    assert!(index.contains("./project/current/0/index.html"));

    let detail = fs::read_to_string(out.path().join("project/archived/0/index.html")).unwrap();
    assert!(detail.contains("Neural Network Visualizer"));
    assert!(detail.contains("../../../static/css/style.css"));
    assert!(out.path().join("project/current/9/index.html").is_file());
    assert!(!out.path().join("project/current/10").exists());
}

#[test]
fn copies_static_tree() {
    let assets = tempfile::tempdir().unwrap();
    fs::create_dir_all(assets.path().join("css")).unwrap();
    fs::write(assets.path().join("css/style.css"), "body {}").unwrap();
    fs::create_dir_all(assets.path().join("pkg")).unwrap();
    fs::write(assets.path().join("pkg/site.js"), "export default 1;").unwrap();

    let out = tempfile::tempdir().unwrap();
    let report = build_site(&state_with_static(assets.path().to_path_buf()), out.path()).unwrap();
    assert_eq!(report.assets, 2);
    assert!(!report.missing_bundle);
    assert_eq!(
        fs::read_to_string(out.path().join("static/css/style.css")).unwrap(),
        "body {}"
    );
    assert!(out.path().join("static/pkg/site.js").is_file());
}

#[test]
fn flags_missing_wasm_bundle() {
    let assets = tempfile::tempdir().unwrap();
    fs::create_dir_all(assets.path().join("css")).unwrap();
    fs::write(assets.path().join("css/style.css"), "body {}").unwrap();

    let out = tempfile::tempdir().unwrap();
    let report = build_site(&state_with_static(assets.path().to_path_buf()), out.path()).unwrap();
    assert_eq!(report.assets, 1);
    assert!(report.missing_bundle);
    assert!(!out.path().join("static").join(BUNDLE_ASSET).exists());

    let bare = build_site(&state_with_static(out.path().join("none")), out.path()).unwrap();
    assert!(bare.missing_bundle);
}

#[test]
fn output_inside_static_dir_is_not_copied_into_itself() {
    let root = tempfile::tempdir().unwrap();
    let static_dir = root.path().join("static");
    fs::create_dir_all(static_dir.join("css")).unwrap();
    fs::write(static_dir.join("css/style.css"), "body {}").unwrap();
    let out = static_dir.join("site");

    let report = build_site(&state_with_static(static_dir), &out).unwrap();
    assert_eq!(report.assets, 1);
    assert!(out.join("static/css/style.css").is_file());
    assert!(!out.join("static/site").exists());
}

#[test]
fn output_equal_to_static_dir_terminates() {
    let root = tempfile::tempdir().unwrap();
    let static_dir = root.path().join("static");
    fs::create_dir_all(&static_dir).unwrap();
    fs::write(static_dir.join("logo.svg"), "<svg/>").unwrap();

    build_site(&state_with_static(static_dir.clone()), &static_dir).unwrap();
    assert!(static_dir.join("static/logo.svg").is_file());
    assert!(!static_dir.join("static/static").exists());
}

#[test]
fn removes_stale_project_pages() {
    let out = tempfile::tempdir().unwrap();
    let stale = out.path().join("project/current/42");
    fs::create_dir_all(&stale).unwrap();
    fs::write(stale.join("index.html"), "old").unwrap();

    build_site(&state_with_static(out.path().join("none")), out.path()).unwrap();
    assert!(!stale.exists());
}

#[test]
fn invalid_catalog_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = dir.path().join("projects.yaml");
    fs::write(&catalog, "current:\n  - title: x\n").unwrap();
    let out = dir.path().join("build");
    let state = AppState::new(CatalogSource::File(catalog), None, dir.path().join("static"));

    let err = build_site(&state, &out).unwrap_err();
    assert!(matches!(err, BuildError::Catalog(_)));
    assert!(!out.exists());
}

#[test]
fn missing_tools_file_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(
        CatalogSource::Builtin,
        Some(dir.path().join("tools.yaml")),
        dir.path().join("static"),
    );
    let err = build_site(&state, &dir.path().join("build")).unwrap_err();
    assert!(matches!(err, BuildError::Tools(_)));
}
