//! FAQ entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::EntryStatus;
use super::taxonomy::Taxonomy;

/// One FAQ record: a question (title) and its answer (content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Numeric entry identifier.
    pub id: u64,
    /// URL-safe slug, unique per entry.
    pub slug: String,
    /// The question.
    pub title: String,
    /// The answer body, stored as authored (may contain markup).
    #[serde(default)]
    pub content: String,
    /// Publication status.
    #[serde(default)]
    pub status: EntryStatus,
    /// Manual sort position (lower first).
    #[serde(default)]
    pub menu_order: i32,
    /// When the entry was published.
    pub published_at: DateTime<Utc>,
    /// Slugs of the `faq-topic` terms assigned to this entry.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Slugs of the `faq-tags` terms assigned to this entry.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FaqEntry {
    /// Check whether the entry is publicly visible.
    pub fn is_published(&self) -> bool {
        self.status.is_public()
    }

    /// Term slugs assigned in the given taxonomy.
    pub fn terms(&self, taxonomy: Taxonomy) -> &[String] {
        match taxonomy {
            Taxonomy::Topic => &self.topics,
            Taxonomy::Tag => &self.tags,
        }
    }

    /// Check whether any of `slugs` is assigned in the given taxonomy.
    pub fn has_any_term(&self, taxonomy: Taxonomy, slugs: &[String]) -> bool {
        let assigned = self.terms(taxonomy);
        slugs.iter().any(|slug| assigned.iter().any(|t| t == slug))
    }
}
