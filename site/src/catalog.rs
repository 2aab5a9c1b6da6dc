//! Project catalog: the records rendered on the portfolio page.
//!
//! A catalog is two ordered lists, current and archived. Order is the
//! authored order (newest first) and is never changed after construction.
//! The built-in catalog is compiled in; a catalog can also be loaded from
//! YAML.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

mod builtin;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

static BUILTIN: LazyLock<ProjectCatalog> = LazyLock::new(builtin::catalog);

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{section} project #{} has an empty `{field}`", .index + 1)]
    EmptyField {
        section: Section,
        index: usize,
        field: &'static str,
    },
}

/// Which of the two catalog lists a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Current,
    Archived,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Current, Section::Archived];

    /// URL path segment for this section.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Archived => "archived",
        }
    }

    /// Parse a URL path segment.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "current" => Some(Self::Current),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A single portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    /// Human-readable label such as "Oct 2025". Not parsed.
    pub date: String,
    pub image: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(rename = "demo-link", alias = "demo_link")]
    pub demo_link: String,
    #[serde(rename = "github-link", alias = "github_link")]
    pub github_link: String,
}

impl ProjectRecord {
    /// Name of the first empty field, if any.
    fn first_empty_field(&self) -> Option<&'static str> {
        let fields = [
            ("title", &self.title),
            ("date", &self.date),
            ("image", &self.image),
            ("description", &self.description),
            ("demo-link", &self.demo_link),
            ("github-link", &self.github_link),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Some(name);
            }
        }
        if self.technologies.is_empty() || self.technologies.iter().any(|t| t.trim().is_empty()) {
            return Some("technologies");
        }
        None
    }
}

/// Current and archived project lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    #[serde(default)]
    current: Vec<ProjectRecord>,
    #[serde(default)]
    archived: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    #[must_use]
    pub fn new(current: Vec<ProjectRecord>, archived: Vec<ProjectRecord>) -> Self {
        Self { current, archived }
    }

    /// The authored dataset, built on first access.
    #[must_use]
    pub fn builtin() -> &'static ProjectCatalog {
        &BUILTIN
    }

    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Yaml`] when the text is not a valid catalog.
    pub fn from_yaml_str(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Read and parse a catalog file. Does not validate.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Yaml`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    #[must_use]
    pub fn current_projects(&self) -> &[ProjectRecord] {
        &self.current
    }

    #[must_use]
    pub fn archived_projects(&self) -> &[ProjectRecord] {
        &self.archived
    }

    #[must_use]
    pub fn section(&self, section: Section) -> &[ProjectRecord] {
        match section {
            Section::Current => &self.current,
            Section::Archived => &self.archived,
        }
    }

    #[must_use]
    pub fn get(&self, section: Section, index: usize) -> Option<&ProjectRecord> {
        self.section(section).get(index)
    }

    /// All records with their address, current first.
    pub fn iter(&self) -> impl Iterator<Item = (Section, usize, &ProjectRecord)> {
        Section::ALL.into_iter().flat_map(move |section| {
            self.section(section)
                .iter()
                .enumerate()
                .map(move |(index, record)| (section, index, record))
        })
    }

    /// Total number of records across both sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len() + self.archived.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every record has all of its fields filled in.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyField`] for the first offending record.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (section, index, record) in self.iter() {
            if let Some(field) = record.first_empty_field() {
                return Err(CatalogError::EmptyField {
                    section,
                    index,
                    field,
                });
            }
        }
        Ok(())
    }
}
