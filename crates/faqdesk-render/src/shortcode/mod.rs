//! Shortcode views and the content expander.
//!
//! All three views share one skeleton: merge attributes over declared
//! defaults, read the page from the request, fetch entries, resolve display
//! options, build markup, optionally append page links. A "no result" from
//! the repository renders nothing at all.

pub mod attrs;
pub mod list_view;
pub mod main_view;
pub mod parser;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use faqdesk_core::error::AppError;
use faqdesk_core::traits::ContentTransformer;
use faqdesk_data::{FetchRequest, PermalinkResolver, QuestionRepository};
use faqdesk_entity::FaqEntry;
use faqdesk_plugin::{FilterDispatcher, ViewContext};

use crate::context::RequestContext;
use crate::options::PaginateArgs;
use crate::pagination::paginate_links;

pub use attrs::RawAttrs;

/// The registered shortcode tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcodeTag {
    /// `[faq]`, full entries.
    Faq,
    /// `[faqlist]`, linked titles.
    FaqList,
    /// `[faqtaxlist]`, linked titles with taxonomy attributes.
    FaqTaxList,
}

impl ShortcodeTag {
    /// Every tag, longest name first.
    pub const ALL: [ShortcodeTag; 3] = [Self::FaqTaxList, Self::FaqList, Self::Faq];

    /// Returns the tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Faq => "faq",
            Self::FaqList => "faqlist",
            Self::FaqTaxList => "faqtaxlist",
        }
    }
}

impl fmt::Display for ShortcodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShortcodeTag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "faq" => Ok(Self::Faq),
            "faqlist" => Ok(Self::FaqList),
            "faqtaxlist" => Ok(Self::FaqTaxList),
            _ => Err(AppError::validation(format!(
                "Unknown shortcode: '{s}'. Expected one of: faq, faqlist, faqtaxlist"
            ))),
        }
    }
}

/// Renders the FAQ shortcodes.
///
/// Holds only shared, read-only collaborators; every call is independent.
#[derive(Clone)]
pub struct ShortcodeRenderer {
    /// Entry source.
    repo: Arc<dyn QuestionRepository>,
    /// Entry URLs.
    permalinks: Arc<dyn PermalinkResolver>,
    /// Body transformation.
    content: Arc<dyn ContentTransformer>,
    /// Display option filters.
    filters: FilterDispatcher,
}

impl fmt::Debug for ShortcodeRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcodeRenderer")
            .field("filters", &self.filters)
            .finish()
    }
}

impl ShortcodeRenderer {
    /// Creates a renderer.
    pub fn new(
        repo: Arc<dyn QuestionRepository>,
        permalinks: Arc<dyn PermalinkResolver>,
        content: Arc<dyn ContentTransformer>,
        filters: FilterDispatcher,
    ) -> Self {
        Self {
            repo,
            permalinks,
            content,
            filters,
        }
    }

    /// Returns the filter dispatcher.
    pub fn filters(&self) -> &FilterDispatcher {
        &self.filters
    }

    /// Renders one shortcode. `None` means the shortcode produces no output.
    pub async fn render(
        &self,
        tag: ShortcodeTag,
        attrs: &RawAttrs,
        ctx: &RequestContext,
    ) -> Option<String> {
        match tag {
            ShortcodeTag::Faq => self.shortcode_main(attrs, ctx).await,
            ShortcodeTag::FaqList => self.shortcode_list(attrs, ctx).await,
            ShortcodeTag::FaqTaxList => self.shortcode_tax_list(attrs, ctx).await,
        }
    }

    /// Fetches entries, treating repository failures as "no result".
    async fn fetch(&self, request: &FetchRequest) -> Option<Vec<FaqEntry>> {
        match self.repo.fetch_entries(request).await {
            Ok(Some(entries)) => Some(entries),
            Ok(None) => {
                debug!(page = request.page, faq_id = request.faq_id, "No FAQ entries to render");
                None
            }
            Err(e) => {
                warn!(error = %e, "FAQ lookup failed, rendering nothing");
                None
            }
        }
    }

    /// Builds the `<p class="faq-nav">` block.
    async fn pagination_block(
        &self,
        ctx: &RequestContext,
        page: u64,
        limit: Option<i64>,
        view: ViewContext,
    ) -> String {
        let total = match self.repo.count_total(limit).await {
            Ok(total) => total,
            Err(e) => {
                warn!(error = %e, "FAQ count failed, pagination shows one page");
                1
            }
        };

        let args = PaginateArgs::for_page(&ctx.permalink, page, total)
            .filtered(&self.filters, view)
            .await;

        let mut block = String::from("<p class=\"faq-nav\">");
        if let Some(links) = paginate_links(&args) {
            block.push_str(&links);
        }
        block.push_str("</p>");
        block
    }
}
