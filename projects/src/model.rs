//! Upstream payloads and the derived gallery record.

use serde::{Deserialize, Serialize};

/// One entry of the repository listing, trimmed to the fields the gallery reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Contents of a repository's `project.json`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// ISO-8601 date, kept verbatim
    #[serde(default)]
    pub date: Option<String>,
}

/// Display-ready project, built once per load and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    /// Demo link
    pub url: String,
    /// Source link
    pub repo: String,
    pub thumbnail: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
