//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use faqdesk_core::config::site::SiteConfig;
use faqdesk_core::error::{AppError, ErrorKind};
use faqdesk_core::result::AppResult;
use faqdesk_core::traits::IdentityTransformer;
use faqdesk_data::{FetchRequest, MemoryQuestionRepository, QuestionRepository, SitePermalinks};
use faqdesk_entity::{EntryStatus, FaqEntry};
use faqdesk_plugin::{FilterDispatcher, FilterFn, FilterPoint};
use faqdesk_render::{RequestContext, ShortcodeRenderer};
use faqdesk_render::shortcode::RawAttrs;

/// Site URL used by every test renderer.
pub const SITE_URL: &str = "http://localhost";

/// Page the shortcodes are rendered on.
pub const PAGE_URL: &str = "https://example.test/help";

/// Build an entry published on day `id` of January 2024.
pub fn entry(id: u64, slug: &str, title: &str, topics: &[&str]) -> FaqEntry {
    FaqEntry {
        id,
        slug: slug.to_string(),
        title: title.to_string(),
        content: format!("Answer {id}."),
        status: EntryStatus::Publish,
        menu_order: 0,
        published_at: Utc.with_ymd_and_hms(2024, 1, id as u32, 9, 0, 0).unwrap(),
        topics: topics.iter().map(|s| s.to_string()).collect(),
        tags: Vec::new(),
    }
}

/// Three published entries, newest first once loaded.
pub fn sample_entries() -> Vec<FaqEntry> {
    vec![
        entry(1, "reset-password", "How do I reset my password?", &["account"]),
        entry(2, "payment-methods", "Which payment methods are accepted?", &["billing"]),
        entry(3, "invoices", "Can I get an invoice?", &["billing"]),
    ]
}

/// Repository answering every lookup with a fixed result and recording
/// the requests it receives.
#[derive(Debug)]
pub struct ScriptedRepository {
    /// Answer to every fetch.
    result: Option<Vec<FaqEntry>>,
    /// Answer to every page count.
    pages: u64,
    /// Whether every call fails.
    failing: bool,
    /// Requests seen so far.
    requests: Mutex<Vec<FetchRequest>>,
}

impl ScriptedRepository {
    /// Always answers with `entries` and `pages` pages.
    pub fn returning(entries: Vec<FaqEntry>, pages: u64) -> Self {
        Self {
            result: Some(entries),
            pages,
            failing: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answers "no result".
    pub fn no_result() -> Self {
        Self {
            result: None,
            pages: 0,
            failing: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::no_result()
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionRepository for ScriptedRepository {
    async fn fetch_entries(&self, request: &FetchRequest) -> AppResult<Option<Vec<FaqEntry>>> {
        self.requests.lock().unwrap().push(request.clone());
        if self.failing {
            return Err(AppError::new(ErrorKind::Storage, "FAQ store unavailable"));
        }
        Ok(self.result.clone())
    }

    async fn count_total(&self, _limit: Option<i64>) -> AppResult<u64> {
        if self.failing {
            return Err(AppError::new(ErrorKind::Storage, "FAQ store unavailable"));
        }
        Ok(self.pages)
    }
}

/// Renderer over `repo` with no filters registered.
pub fn renderer(repo: Arc<dyn QuestionRepository>) -> ShortcodeRenderer {
    renderer_with(repo, FilterDispatcher::default())
}

/// Renderer over `repo` using `filters`.
pub fn renderer_with(repo: Arc<dyn QuestionRepository>, filters: FilterDispatcher) -> ShortcodeRenderer {
    let site = SiteConfig {
        base_url: SITE_URL.to_string(),
        question_base: "question".to_string(),
    };

    ShortcodeRenderer::new(
        repo,
        Arc::new(SitePermalinks::new(&site)),
        Arc::new(IdentityTransformer),
        filters,
    )
}

/// In-memory repository over the sample entries.
pub fn memory_repo(default_limit: i64) -> Arc<dyn QuestionRepository> {
    Arc::new(MemoryQuestionRepository::new(sample_entries(), default_limit))
}

/// Register a handler replacing `point` with `value` in every view.
pub async fn override_filter(filters: &FilterDispatcher, point: FilterPoint, value: Value) {
    filters
        .registry()
        .register(
            point,
            Arc::new(FilterFn::new("test", 100, move |_, _| Some(value.clone()))),
        )
        .await;
}

/// Front-end context for [`PAGE_URL`].
pub fn page_context() -> RequestContext {
    RequestContext::front_end(PAGE_URL)
}

/// Attribute set from pairs.
pub fn attrs(pairs: &[(&str, &str)]) -> RawAttrs {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
