//! URL construction for rendered pages.
//!
//! The live preview serves pages from absolute paths. Static builds use
//! links relative to the page being written so the output can be opened
//! from any directory, including straight from disk.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use crate::catalog::Section;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Links {
    root: String,
    index_file: bool,
}

impl Links {
    /// Links rooted at `/`, for the live preview server.
    #[must_use]
    pub fn absolute() -> Self {
        Self {
            root: "/".to_owned(),
            index_file: false,
        }
    }

    /// Links for a page written `depth` directories below the output root.
    #[must_use]
    pub fn relative(depth: usize) -> Self {
        let root = if depth == 0 {
            "./".to_owned()
        } else {
            "../".repeat(depth)
        };
        Self {
            root,
            index_file: true,
        }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn home(&self) -> String {
        if self.index_file {
            format!("{}index.html", self.root)
        } else {
            self.root.clone()
        }
    }

    /// Link to a file under the static directory.
    #[must_use]
    pub fn asset(&self, path: &str) -> String {
        format!("{}static/{}", self.root, path.trim_start_matches('/'))
    }

    /// Resolve a URI from catalog data. External and absolute URIs are kept.
    #[must_use]
    pub fn resolve(&self, uri: &str) -> String {
        if uri.contains("://") || uri.starts_with('/') || uri.starts_with("data:") {
            uri.to_owned()
        } else {
            format!("{}{uri}", self.root)
        }
    }

    #[must_use]
    pub fn project(&self, section: Section, index: usize) -> String {
        let dir = format!("{}{}", self.root, project_dir(section, index));
        if self.index_file {
            format!("{dir}index.html")
        } else {
            dir
        }
    }
}

/// Output directory of a project's detail page, relative to the site root.
#[must_use]
pub fn project_dir(section: Section, index: usize) -> String {
    format!("project/{}/{index}/", section.slug())
}

/// Directory depth of a project's detail page below the site root.
pub const PROJECT_PAGE_DEPTH: usize = 3;
