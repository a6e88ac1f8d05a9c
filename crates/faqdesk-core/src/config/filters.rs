//! Static display option overrides.
//!
//! Each field left unset keeps the built-in default of its filter point.
//! Overrides are registered as a filter handler at startup, so programmatic
//! handlers with a later priority still see (and may replace) them.

use serde::{Deserialize, Serialize};

/// Overrides keyed by view context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOverrides {
    /// Overrides for the detail view (`[faq]`).
    #[serde(default)]
    pub main: ViewOverrides,
    /// Overrides for the list views (`[faqlist]`, `[faqtaxlist]`).
    #[serde(default)]
    pub list: ViewOverrides,
}

/// Optional replacement values for one view context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewOverrides {
    /// Expand animation speed in milliseconds.
    #[serde(default)]
    pub expand_speed: Option<u64>,
    /// Run entry bodies through the content transformer.
    #[serde(default)]
    pub content_filter: Option<bool>,
    /// Render entries in expand/collapse mode.
    #[serde(default)]
    pub content_expand: Option<bool>,
    /// Heading tag for entry titles.
    #[serde(default)]
    pub htype: Option<String>,
    /// Read-more link settings.
    #[serde(default)]
    pub more_link: Option<MoreLinkOverride>,
    /// Emit the pagination block.
    #[serde(default)]
    pub paginate: Option<bool>,
    /// Markup for the "previous page" link.
    #[serde(default)]
    pub prev_text: Option<String>,
    /// Markup for the "next page" link.
    #[serde(default)]
    pub next_text: Option<String>,
}

/// Read-more link override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoreLinkOverride {
    /// Whether the link is shown.
    #[serde(default = "default_true")]
    pub show: bool,
    /// Link label.
    #[serde(default)]
    pub text: String,
}

fn default_true() -> bool {
    true
}
