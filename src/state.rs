//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! reused by the `validate` and `build` commands. It records *where* the
//! catalog and tools come from rather than caching them, so every preview
//! request reflects the files as they are on disk right now.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use site::{CatalogError, ProjectCatalog, ToolRegistry, ToolsError};

// =============================================================================
// CATALOG SOURCE
// =============================================================================

/// Where project records are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    /// The dataset compiled into the `site` crate.
    Builtin,
    /// A YAML catalog file.
    File(PathBuf),
}

impl CatalogSource {
    #[must_use]
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Builtin, Self::File)
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Builtin => None,
            Self::File(path) => Some(path),
        }
    }

    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the file cannot be read or parsed, or if
    /// any record has an empty field.
    pub fn load(&self) -> Result<ProjectCatalog, CatalogError> {
        let catalog = match self {
            Self::Builtin => ProjectCatalog::builtin().clone(),
            Self::File(path) => ProjectCatalog::load(path)?,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in catalog"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: CatalogSource,
    pub tools: Option<PathBuf>,
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: CatalogSource, tools: Option<PathBuf>, static_dir: PathBuf) -> Self {
        Self {
            catalog,
            tools,
            static_dir: Arc::new(static_dir),
        }
    }

    /// Load the tool registry, or an empty one when no tools file is set.
    ///
    /// # Errors
    ///
    /// Returns a [`ToolsError`] if the configured file cannot be read or parsed.
    pub fn load_tools(&self) -> Result<ToolRegistry, ToolsError> {
        match &self.tools {
            Some(path) => ToolRegistry::load(path),
            None => Ok(ToolRegistry::default()),
        }
    }
}
