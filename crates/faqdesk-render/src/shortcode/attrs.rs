//! Shortcode attribute handling.

use std::collections::BTreeMap;

use faqdesk_core::types::absint;
use faqdesk_data::FetchRequest;

use crate::context::RequestContext;
use crate::html::escape_attr;

/// Attributes as written by the author.
pub type RawAttrs = BTreeMap<String, String>;

/// Query parameter carrying the page number.
pub const PAGE_QUERY_PARAM: &str = "faq_page";

/// Declared attributes of `[faq]` and `[faqlist]`.
pub const QUERY_DEFAULTS: &[(&str, &str)] = &[
    ("faq_topic", ""),
    ("faq_tag", ""),
    ("faq_id", "0"),
    ("limit", "10"),
];

/// Declared attributes of `[faqtaxlist]`.
pub const TAX_LIST_DEFAULTS: &[(&str, &str)] = &[("type", "topics"), ("desc", "")];

/// Merges `atts` over `defaults`.
///
/// Only declared keys survive; anything else the author wrote is dropped.
pub fn shortcode_atts(defaults: &[(&str, &str)], atts: &RawAttrs) -> RawAttrs {
    defaults
        .iter()
        .map(|(key, default)| {
            let value = atts.get(*key).cloned().unwrap_or_else(|| (*default).to_string());
            ((*key).to_string(), value)
        })
        .collect()
}

/// Splits a comma-separated term list.
///
/// The raw value is attribute-escaped first. An absent or empty value (or
/// `"0"`) yields no terms; empty segments between commas are kept.
pub fn split_terms(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) if !raw.is_empty() && raw != "0" => {
            escape_attr(raw).split(',').map(str::to_string).collect()
        }
        _ => Vec::new(),
    }
}

/// Requested page: `faq_page` coerced to a positive integer, default 1.
pub fn current_page(ctx: &RequestContext) -> u64 {
    ctx.query_param(PAGE_QUERY_PARAM)
        .filter(|raw| !raw.is_empty() && *raw != "0")
        .map(absint)
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

/// Query attributes read from a merged attribute set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryAttrs {
    /// Topic slugs.
    pub topics: Vec<String>,
    /// Tag slugs.
    pub tags: Vec<String>,
    /// Specific entry id; `0` when none.
    pub faq_id: u64,
    /// Page size; `None` when the attribute is absent or not a number.
    pub limit: Option<i64>,
}

impl QueryAttrs {
    /// Reads the query attributes from `merged`.
    ///
    /// Keys missing from `merged` read as absent, which is how
    /// `[faqtaxlist]` ends up with no terms, no id and no limit.
    pub fn from_merged(merged: &RawAttrs) -> Self {
        let get = |key: &str| merged.get(key).map(String::as_str);

        Self {
            topics: split_terms(get("faq_topic")),
            tags: split_terms(get("faq_tag")),
            faq_id: get("faq_id").map(absint).unwrap_or(0),
            limit: get("limit").and_then(|raw| raw.trim().parse::<i64>().ok()),
        }
    }

    /// Whether a specific entry was requested.
    pub fn has_specific_id(&self) -> bool {
        self.faq_id > 0
    }

    /// The repository request for `page`.
    pub fn fetch_request(&self, page: u64) -> FetchRequest {
        FetchRequest {
            faq_id: self.faq_id,
            limit: self.limit,
            topics: self.topics.clone(),
            tags: self.tags.clone(),
            page,
        }
    }
}
