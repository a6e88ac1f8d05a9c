//! Permalink resolution for FAQ entries.

use faqdesk_core::config::site::SiteConfig;
use faqdesk_entity::FaqEntry;

/// Resolves the public URL of an entry.
pub trait PermalinkResolver: Send + Sync + 'static {
    /// Returns the permalink of `entry`.
    fn entry_permalink(&self, entry: &FaqEntry) -> String;
}

/// Pretty permalinks of the form `{base_url}/{question_base}/{slug}/`.
#[derive(Debug, Clone)]
pub struct SitePermalinks {
    /// Site root without trailing slash.
    base_url: String,
    /// Rewrite slug for entries.
    question_base: String,
}

impl SitePermalinks {
    /// Creates a resolver from the site config.
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            base_url: site.base_url.trim_end_matches('/').to_string(),
            question_base: site.question_base.trim_matches('/').to_string(),
        }
    }
}

impl PermalinkResolver for SitePermalinks {
    fn entry_permalink(&self, entry: &FaqEntry) -> String {
        format!("{}/{}/{}/", self.base_url, self.question_base, entry.slug)
    }
}
