//! Display options resolved through the named filter points.
//!
//! Each view resolves its options once, before any markup is built. Filter
//! values are loosely typed; a value of the wrong shape falls back to the
//! default of its point.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use faqdesk_core::types::{absint_value, is_blank, is_truthy};
use faqdesk_entity::HeadingTag;
use faqdesk_plugin::{FilterDispatcher, FilterPoint, ViewContext};

/// Label used when the read-more text is empty.
pub const DEFAULT_MORE_TEXT: &str = "Read More";

/// Read-more link settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadMoreLink {
    /// Link text.
    pub text: String,
}

/// Options of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Expand animation speed, emitted as `data-speed`.
    pub expand_speed: u64,
    /// Run bodies through the content transformer.
    pub content_filter: bool,
    /// Expand/collapse mode; only changes class names.
    pub expand: bool,
    /// Heading tag for titles.
    pub heading: HeadingTag,
    /// Read-more link, `None` when hidden.
    pub more_link: Option<ReadMoreLink>,
    /// Emit the pagination block.
    pub paginate: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            expand_speed: 200,
            content_filter: true,
            expand: true,
            heading: HeadingTag::H3,
            more_link: Some(ReadMoreLink {
                text: DEFAULT_MORE_TEXT.to_string(),
            }),
            paginate: true,
        }
    }
}

impl DisplayOptions {
    /// Resolves all detail view options for `view`.
    pub async fn resolve(filters: &FilterDispatcher, view: ViewContext) -> Self {
        let speed = filters.resolve(FilterPoint::DisplayExpandSpeed, view).await;
        let content_filter = filters.resolve(FilterPoint::DisplayContentFilter, view).await;
        let expand = filters.resolve(FilterPoint::DisplayContentExpand, view).await;
        let htype = filters.resolve(FilterPoint::DisplayHtype, view).await;
        let more_link = filters.resolve(FilterPoint::DisplayContentMoreLink, view).await;
        let paginate = filters.resolve(FilterPoint::DisplayShortcodePaginate, view).await;

        Self {
            expand_speed: absint_value(&speed),
            // Only an explicit `false` turns the transformer off
            content_filter: content_filter != Value::Bool(false),
            expand: is_truthy(&expand),
            heading: heading_from(&htype),
            more_link: more_link_from(&more_link),
            paginate: is_truthy(&paginate),
        }
    }

    /// Class of each item container.
    pub fn item_class(&self) -> &'static str {
        if self.expand {
            "single-faq expand-faq"
        } else {
            "single-faq"
        }
    }

    /// Class of each title heading.
    pub fn title_class(&self) -> &'static str {
        if self.expand {
            "faq-question expand-title"
        } else {
            "faq-question"
        }
    }
}

/// Options of the list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    /// Emit the pagination block.
    pub paginate: bool,
}

impl ListOptions {
    /// Resolves the list view options for `view`.
    pub async fn resolve(filters: &FilterDispatcher, view: ViewContext) -> Self {
        let paginate = filters.resolve(FilterPoint::DisplayShortcodePaginate, view).await;
        Self {
            paginate: is_truthy(&paginate),
        }
    }
}

/// Output shape of the pagination links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinksType {
    /// Links joined by newlines.
    #[default]
    Plain,
    /// Links wrapped in an unordered list.
    List,
}

/// Arguments of the pagination link builder.
///
/// `base` contains a `%_%` placeholder replaced by `format` (or by nothing
/// for page 1); `format` contains `%#%`, replaced by the page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginateArgs {
    /// Link template containing `%_%`.
    pub base: String,
    /// Page fragment containing `%#%`.
    pub format: String,
    /// Output shape.
    #[serde(rename = "type", default)]
    pub kind: LinksType,
    /// Current page, 1-based.
    pub current: u64,
    /// Total number of pages.
    pub total: u64,
    /// Trusted markup of the previous link.
    #[serde(default = "default_prev_text")]
    pub prev_text: String,
    /// Trusted markup of the next link.
    #[serde(default = "default_next_text")]
    pub next_text: String,
    /// Show every page number instead of a window.
    #[serde(default)]
    pub show_all: bool,
    /// Page numbers always shown at each end.
    #[serde(default = "default_end_size")]
    pub end_size: u64,
    /// Page numbers shown on each side of the current page.
    #[serde(default = "default_mid_size")]
    pub mid_size: u64,
    /// Include previous/next links.
    #[serde(default = "default_true")]
    pub prev_next: bool,
}

impl PaginateArgs {
    /// Builds the default arguments for a shortcode rendered on `permalink`.
    pub fn for_page(permalink: &str, current: u64, total: u64) -> Self {
        Self {
            base: format!("{}%_%", trailingslashit(permalink)),
            format: "?faq_page=%#%".to_string(),
            kind: LinksType::Plain,
            current,
            total,
            prev_text: default_prev_text(),
            next_text: default_next_text(),
            show_all: false,
            end_size: default_end_size(),
            mid_size: default_mid_size(),
            prev_next: true,
        }
    }

    /// Runs the arguments through the pagination filter point.
    pub async fn filtered(self, filters: &FilterDispatcher, view: ViewContext) -> Self {
        let value = match serde_json::to_value(&self) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to serialize pagination args");
                return self;
            }
        };

        let filtered = filters
            .apply_filters(FilterPoint::ShortcodePaginateArgs, view, value)
            .await;

        match serde_json::from_value(filtered) {
            Ok(args) => args,
            Err(e) => {
                warn!(
                    filter = %FilterPoint::ShortcodePaginateArgs,
                    view = %view,
                    error = %e,
                    "Filtered pagination args are malformed, using defaults"
                );
                self
            }
        }
    }
}

/// Appends a single trailing slash.
pub fn trailingslashit(url: &str) -> String {
    format!("{}/", url.trim_end_matches(['/', '\\']))
}

/// Heading tag from a filtered value.
fn heading_from(value: &Value) -> HeadingTag {
    match value.as_str() {
        Some(tag) => HeadingTag::normalize(tag),
        None => {
            warn!(filter = %FilterPoint::DisplayHtype, value = %value, "Heading tag is not a string");
            HeadingTag::H3
        }
    }
}

/// Read-more settings from a filtered value.
///
/// Only an empty value hides the link; `show` is not consulted. Missing or
/// empty `text` falls back to [`DEFAULT_MORE_TEXT`].
fn more_link_from(value: &Value) -> Option<ReadMoreLink> {
    if is_blank(value) {
        return None;
    }

    let text = value
        .get("text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_MORE_TEXT);

    Some(ReadMoreLink {
        text: text.to_string(),
    })
}

fn default_prev_text() -> String {
    "&laquo;".to_string()
}

fn default_next_text() -> String {
    "&raquo;".to_string()
}

fn default_end_size() -> u64 {
    1
}

fn default_mid_size() -> u64 {
    2
}

fn default_true() -> bool {
    true
}
