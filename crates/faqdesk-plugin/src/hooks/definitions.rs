//! Filter point definitions with their payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use faqdesk_core::error::AppError;

/// Enumeration of all filter points exposed by the shortcode views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPoint {
    // ── Display options ──
    /// Expand animation speed in milliseconds, emitted as `data-speed`.
    DisplayExpandSpeed,
    /// Whether entry bodies go through the content transformer.
    DisplayContentFilter,
    /// Whether entries render in expand/collapse mode.
    DisplayContentExpand,
    /// Heading tag used for entry titles.
    DisplayHtype,
    /// Read-more link settings (`{show, text}`).
    DisplayContentMoreLink,
    /// Whether the pagination block is emitted.
    DisplayShortcodePaginate,

    // ── Pagination ──
    /// Arguments handed to the pagination link builder.
    ShortcodePaginateArgs,
}

impl FilterPoint {
    /// Every filter point, in declaration order.
    pub const ALL: [FilterPoint; 7] = [
        Self::DisplayExpandSpeed,
        Self::DisplayContentFilter,
        Self::DisplayContentExpand,
        Self::DisplayHtype,
        Self::DisplayContentMoreLink,
        Self::DisplayShortcodePaginate,
        Self::ShortcodePaginateArgs,
    ];

    /// Returns the public name of this filter point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DisplayExpandSpeed => "wpfaq_display_expand_speed",
            Self::DisplayContentFilter => "wpfaq_display_content_filter",
            Self::DisplayContentExpand => "wpfaq_display_content_expand",
            Self::DisplayHtype => "wpfaq_display_htype",
            Self::DisplayContentMoreLink => "wpfaq_display_content_more_link",
            Self::DisplayShortcodePaginate => "wpfaq_display_shortcode_paginate",
            Self::ShortcodePaginateArgs => "wpfaq_shortcode_paginate_args",
        }
    }

    /// Returns the value a point resolves to when no handler changes it.
    ///
    /// Pagination arguments depend on the request and have no static
    /// default; `null` is returned for them.
    pub fn default_value(&self) -> Value {
        match self {
            Self::DisplayExpandSpeed => serde_json::json!(200),
            Self::DisplayContentFilter => Value::Bool(true),
            Self::DisplayContentExpand => Value::Bool(true),
            Self::DisplayHtype => serde_json::json!("h3"),
            Self::DisplayContentMoreLink => serde_json::json!({ "show": 1, "text": "Read More" }),
            Self::DisplayShortcodePaginate => Value::Bool(true),
            Self::ShortcodePaginateArgs => Value::Null,
        }
    }
}

impl fmt::Display for FilterPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterPoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|point| point.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown filter point: '{s}'")))
    }
}

/// The view a filter is being resolved for.
///
/// Passed to every handler so that different call sites can be customized
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewContext {
    /// The detail view (`[faq]`).
    Main,
    /// The link-list views (`[faqlist]`, `[faqtaxlist]`).
    List,
}

impl ViewContext {
    /// Returns the context name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ViewContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewContext {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "list" => Ok(Self::List),
            _ => Err(AppError::validation(format!(
                "Unknown view context: '{s}'. Expected main or list"
            ))),
        }
    }
}

/// Payload passed to filter handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterPayload {
    /// The filter point being resolved.
    pub point: FilterPoint,
    /// The view the value is resolved for.
    pub view: ViewContext,
    /// The current value, as left by earlier handlers.
    pub value: Value,
}

impl FilterPayload {
    /// Creates a new filter payload.
    pub fn new(point: FilterPoint, view: ViewContext, value: Value) -> Self {
        Self { point, view, value }
    }
}

/// Action returned by a filter handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterAction {
    /// Leave the value as it is.
    Keep,
    /// Replace the value for all later handlers and the caller.
    Replace(Value),
}

/// Result returned from a filter handler invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterResult {
    /// What the handler wants done with the value.
    pub action: FilterAction,
    /// Plugin ID that produced this result.
    pub plugin_id: String,
}

impl FilterResult {
    /// Creates a keep result.
    pub fn keep(plugin_id: &str) -> Self {
        Self {
            action: FilterAction::Keep,
            plugin_id: plugin_id.to_string(),
        }
    }

    /// Creates a replace result.
    pub fn replace(plugin_id: &str, value: Value) -> Self {
        Self {
            action: FilterAction::Replace(value),
            plugin_id: plugin_id.to_string(),
        }
    }
}
