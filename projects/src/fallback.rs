//! Field resolution for [`ProjectRecord`].
//!
//! Each field has one function stating its fallback order: metadata first,
//! then the repository summary, then a computed default. Blank strings in
//! either source count as absent.

use crate::model::{ProjectMetadata, ProjectRecord, RepositorySummary};

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// metadata `title` → repository name
pub fn title(meta: &ProjectMetadata, repo: &RepositorySummary) -> String {
    non_blank(meta.title.as_deref())
        .unwrap_or(&repo.name)
        .to_string()
}

/// metadata `description` → repository description → empty
pub fn description(meta: &ProjectMetadata, repo: &RepositorySummary) -> String {
    non_blank(meta.description.as_deref())
        .or_else(|| non_blank(repo.description.as_deref()))
        .unwrap_or_default()
        .to_string()
}

/// metadata `url` → repository homepage → repository page
pub fn demo_url(meta: &ProjectMetadata, repo: &RepositorySummary) -> String {
    non_blank(meta.url.as_deref())
        .or_else(|| non_blank(repo.homepage.as_deref()))
        .unwrap_or(&repo.html_url)
        .to_string()
}

/// metadata `repo` → repository page
pub fn source_url(meta: &ProjectMetadata, repo: &RepositorySummary) -> String {
    non_blank(meta.repo.as_deref())
        .unwrap_or(&repo.html_url)
        .to_string()
}

/// metadata `tags` → no tags
pub fn tags(meta: &ProjectMetadata) -> Vec<String> {
    meta.tags.clone().unwrap_or_default()
}

/// metadata `date`, absent stays absent
pub fn date(meta: &ProjectMetadata) -> Option<String> {
    non_blank(meta.date.as_deref()).map(str::to_string)
}

/// Assemble a record. The thumbnail is computed by the caller from the
/// account and repository name and is never read from metadata.
pub fn build_record(
    meta: &ProjectMetadata,
    repo: &RepositorySummary,
    thumbnail: String,
) -> ProjectRecord {
    ProjectRecord {
        title: title(meta, repo),
        description: description(meta, repo),
        url: demo_url(meta, repo),
        repo: source_url(meta, repo),
        thumbnail,
        tags: tags(meta),
        date: date(meta),
    }
}
