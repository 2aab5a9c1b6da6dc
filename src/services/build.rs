//! Static site export.
//!
//! DESIGN
//! ======
//! Writes the same pages the preview server renders, with links relative to
//! each page so the output directory can be hosted anywhere or opened from
//! disk. Generated project pages are removed before writing so records
//! dropped from the catalog do not leave stale pages behind.
//!
//! The static directory is copied to `<output>/static`. An output directory
//! placed inside the static directory is skipped during that copy. Pages
//! import the WASM bundle from `static/pkg/site.js`; when it is absent the
//! build still succeeds but the report flags it, since the theme toggle
//! stays inert without it.

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;

use std::fs;
use std::path::{Path, PathBuf};

use site::app::{BUNDLE_ASSET, render_index, render_project};
use site::links::{Links, PROJECT_PAGE_DEPTH, project_dir};
use site::{CatalogError, ToolsError};
use tracing::{debug, info, warn};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Tools(#[from] ToolsError),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    /// Projects in the validated catalog.
    pub projects: usize,
    /// HTML pages written, including the index.
    pub pages: usize,
    /// Files copied from the static directory.
    pub assets: usize,
    /// `true` when the static directory has no WASM bundle.
    pub missing_bundle: bool,
}

/// Render the whole site into `output`.
///
/// # Errors
///
/// Returns a [`BuildError`] if the catalog or tools cannot be loaded, or if
/// any file cannot be written.
pub fn build_site(state: &AppState, output: &Path) -> Result<BuildReport, BuildError> {
    let catalog = state.catalog.load()?;
    let tools = state.load_tools()?;

    create_dir(output)?;
    let project_root = output.join("project");
    if project_root.exists() {
        fs::remove_dir_all(&project_root).map_err(|source| io_error(&project_root, source))?;
    }

    write_page(
        &output.join("index.html"),
        &render_index(&catalog, &tools, &Links::relative(0)),
    )?;
    let mut pages = 1;

    let links = Links::relative(PROJECT_PAGE_DEPTH);
    for (section, index, record) in catalog.iter() {
        let dir = output.join(project_dir(section, index));
        create_dir(&dir)?;
        write_page(&dir.join("index.html"), &render_project(record, &tools, &links))?;
        pages += 1;
    }

    let assets = if state.static_dir.is_dir() {
        let dest = output.join("static");
        create_dir(&dest)?;
        let skip = [canonical(output)?, canonical(&dest)?];
        copy_dir(&state.static_dir, &dest, &skip)?
    } else {
        warn!(dir = %state.static_dir.display(), "static directory missing; skipping assets");
        0
    };

    let bundle = state.static_dir.join(BUNDLE_ASSET);
    let missing_bundle = !bundle.is_file();
    if missing_bundle {
        warn!(
            bundle = %bundle.display(),
            "WASM bundle missing; the theme toggle will not respond to clicks"
        );
    }

    info!(output = %output.display(), pages, assets, "site built");
    Ok(BuildReport {
        output: output.to_path_buf(),
        projects: catalog.len(),
        pages,
        assets,
        missing_bundle,
    })
}

fn write_page(path: &Path, html: &str) -> Result<(), BuildError> {
    debug!(path = %path.display(), "writing page");
    fs::write(path, html).map_err(|source| io_error(path, source))
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|source| io_error(path, source))
}

fn canonical(path: &Path) -> Result<PathBuf, BuildError> {
    fs::canonicalize(path).map_err(|source| io_error(path, source))
}

/// Recursively copy `from` into `to`, leaving out directories in `skip`.
/// Returns the number of files copied.
fn copy_dir(from: &Path, to: &Path, skip: &[PathBuf]) -> Result<usize, BuildError> {
    create_dir(to)?;
    let entries = fs::read_dir(from).map_err(|source| io_error(from, source))?;
    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|source| io_error(from, source))?;
        let src = entry.path();
        let dest = to.join(entry.file_name());
        let file_type = entry.file_type().map_err(|source| io_error(&src, source))?;
        if file_type.is_dir() {
            if fs::canonicalize(&src).is_ok_and(|path| skip.contains(&path)) {
                debug!(dir = %src.display(), "skipping build output inside static directory");
                continue;
            }
            copied += copy_dir(&src, &dest, skip)?;
        } else {
            fs::copy(&src, &dest).map_err(|source| io_error(&dest, source))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn io_error(path: &Path, source: std::io::Error) -> BuildError {
    BuildError::Io {
        path: path.to_path_buf(),
        source,
    }
}
