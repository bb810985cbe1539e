//! What a single gallery card shows for a [`ProjectRecord`].

use crate::model::ProjectRecord;

/// Tags beyond this many are not shown on a card.
pub const MAX_CARD_TAGS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
    pub date: Option<&'a str>,
    pub demo_link: &'a str,
    pub source_link: &'a str,
    pub thumbnail: &'a str,
    /// Shown instead of `thumbnail` when the image fails to load
    pub fallback_thumbnail: &'a str,
}

impl<'a> ProjectCard<'a> {
    pub fn from_record(record: &'a ProjectRecord, placeholder: &'a str) -> Self {
        let shown = record.tags.len().min(MAX_CARD_TAGS);
        Self {
            title: &record.title,
            description: &record.description,
            tags: &record.tags[..shown],
            date: record.date.as_deref(),
            demo_link: &record.url,
            source_link: &record.repo,
            thumbnail: &record.thumbnail,
            fallback_thumbnail: placeholder,
        }
    }

    /// Accessible name for the thumbnail image
    pub fn thumbnail_alt(&self) -> String {
        format!("{} thumbnail", self.title)
    }
}
