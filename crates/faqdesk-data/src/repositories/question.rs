//! The data collaborator contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use faqdesk_core::result::AppResult;
use faqdesk_entity::FaqEntry;

/// Parameters of one entry lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    /// A specific entry to fetch; `0` means no specific entry.
    pub faq_id: u64,
    /// Entries per page; `None` lets the repository pick its default.
    pub limit: Option<i64>,
    /// Topic slugs to filter by (any match).
    pub topics: Vec<String>,
    /// Tag slugs to filter by (any match).
    pub tags: Vec<String>,
    /// 1-based page number.
    pub page: u64,
}

/// Query access to FAQ entries.
#[async_trait]
pub trait QuestionRepository: Send + Sync + 'static {
    /// Fetch the entries matching `request`.
    ///
    /// `Ok(None)` is the "no result" signal and is distinct from an empty
    /// list: callers render nothing at all when they receive it.
    async fn fetch_entries(&self, request: &FetchRequest) -> AppResult<Option<Vec<FaqEntry>>>;

    /// Total number of pages of published entries for a page size.
    async fn count_total(&self, limit: Option<i64>) -> AppResult<u64>;
}
