//! In-memory question repository.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, info};

use faqdesk_core::error::AppError;
use faqdesk_core::result::AppResult;
use faqdesk_entity::{FaqEntry, Taxonomy};

use super::question::{FetchRequest, QuestionRepository};

/// Holds FAQ entries in memory and answers queries over them.
///
/// Only published entries are visible. Results are ordered by
/// `menu_order` ascending, then newest first.
#[derive(Debug, Clone)]
pub struct MemoryQuestionRepository {
    /// Published entries in display order.
    entries: Vec<FaqEntry>,
    /// Page size used when a request carries no limit.
    default_limit: i64,
}

impl MemoryQuestionRepository {
    /// Creates a repository over `entries`.
    pub fn new(entries: Vec<FaqEntry>, default_limit: i64) -> Self {
        let mut entries: Vec<FaqEntry> = entries.into_iter().filter(|e| e.is_published()).collect();
        entries.sort_by(|a, b| {
            a.menu_order
                .cmp(&b.menu_order)
                .then_with(|| b.published_at.cmp(&a.published_at))
        });

        Self {
            entries,
            default_limit,
        }
    }

    /// Loads entries from a JSON file holding an array of entries.
    pub async fn from_json_file(path: impl AsRef<Path>, default_limit: i64) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::read_failed("FAQ data", path, e))?;

        let entries: Vec<FaqEntry> = serde_json::from_str(&raw)?;
        info!(path = %path.display(), count = entries.len(), "Loaded FAQ entries");

        Ok(Self::new(entries, default_limit))
    }

    /// Number of published entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no published entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effective page size; `None` means everything on one page.
    fn page_size(&self, limit: Option<i64>) -> Option<usize> {
        let size = limit.unwrap_or(self.default_limit);
        (size > 0).then_some(size as usize)
    }

    /// Whether an entry passes the taxonomy filters of a request.
    fn matches(entry: &FaqEntry, request: &FetchRequest) -> bool {
        (request.topics.is_empty() || entry.has_any_term(Taxonomy::Topic, &request.topics))
            && (request.tags.is_empty() || entry.has_any_term(Taxonomy::Tag, &request.tags))
    }
}

#[async_trait]
impl QuestionRepository for MemoryQuestionRepository {
    async fn fetch_entries(&self, request: &FetchRequest) -> AppResult<Option<Vec<FaqEntry>>> {
        if request.faq_id > 0 {
            let found = self.entries.iter().find(|e| e.id == request.faq_id).cloned();
            debug!(faq_id = request.faq_id, found = found.is_some(), "Single FAQ lookup");
            return Ok(found.map(|entry| vec![entry]));
        }

        let matching = self.entries.iter().filter(|e| Self::matches(e, request));

        let page: Vec<FaqEntry> = match self.page_size(request.limit) {
            Some(size) => {
                // Pages past any addressable offset are simply empty
                let offset = usize::try_from(request.page.saturating_sub(1))
                    .ok()
                    .and_then(|skipped| skipped.checked_mul(size));
                match offset {
                    Some(offset) => matching.skip(offset).take(size).cloned().collect(),
                    None => Vec::new(),
                }
            }
            None if request.page <= 1 => matching.cloned().collect(),
            None => Vec::new(),
        };

        debug!(
            page = request.page,
            topics = request.topics.len(),
            tags = request.tags.len(),
            count = page.len(),
            "FAQ page lookup"
        );

        Ok((!page.is_empty()).then_some(page))
    }

    async fn count_total(&self, limit: Option<i64>) -> AppResult<u64> {
        let total = self.entries.len() as u64;
        Ok(match self.page_size(limit) {
            Some(size) => total.div_ceil(size as u64),
            None => u64::from(total > 0),
        })
    }
}
