//! Technology badges.
//!
//! A tools file maps technology tags to display metadata. Tags without an
//! entry still render, as a plain badge carrying the tag text.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ToolsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tools YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    #[serde(default, rename = "icon-color", alias = "icon_color")]
    pub icon_color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ToolsFile {
    #[serde(default)]
    tools: Vec<Tool>,
}

/// How a single technology tag is displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechBadge {
    pub label: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub icon_color: Option<String>,
}

impl TechBadge {
    fn plain(tag: &str) -> Self {
        Self {
            label: tag.to_owned(),
            icon: None,
            color: None,
            icon_color: None,
        }
    }

    /// Inline style for the badge, if the tool defines colors.
    #[must_use]
    pub fn style(&self) -> Option<String> {
        self.color.as_ref().map(|color| format!("background-color: {color}"))
    }
}

/// Lookup from lowercase tool id to tool.
#[derive(Clone, Debug, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    #[must_use]
    pub fn new(tools: Vec<Tool>) -> Self {
        let tools = tools
            .into_iter()
            .map(|tool| (tool.id.to_lowercase(), tool))
            .collect();
        Self { tools }
    }

    /// Parse a tools file from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ToolsError::Yaml`] when the text is not a valid tools file.
    pub fn from_yaml_str(text: &str) -> Result<Self, ToolsError> {
        let file: ToolsFile = serde_yaml::from_str(text)?;
        Ok(Self::new(file.tools))
    }

    /// # Errors
    ///
    /// Returns [`ToolsError::Io`] if the file cannot be read and
    /// [`ToolsError::Yaml`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ToolsError> {
        let text = std::fs::read_to_string(path).map_err(|source| ToolsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&Tool> {
        self.tools.get(&tag.trim().to_lowercase())
    }

    #[must_use]
    pub fn badge(&self, tag: &str) -> TechBadge {
        match self.get(tag) {
            Some(tool) => TechBadge {
                label: tool.name.clone(),
                icon: Some(tool.icon.clone()),
                color: Some(tool.color.clone()),
                icon_color: tool.icon_color.clone(),
            },
            None => TechBadge::plain(tag),
        }
    }

    /// Badges for `tags`, in the same order.
    #[must_use]
    pub fn badges(&self, tags: &[String]) -> Vec<TechBadge> {
        tags.iter().map(|tag| self.badge(tag)).collect()
    }
}
