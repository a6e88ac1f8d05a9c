//! The `[faq]` detail view.

use faqdesk_entity::FaqEntry;
use faqdesk_plugin::ViewContext;

use super::ShortcodeRenderer;
use super::attrs::{QUERY_DEFAULTS, QueryAttrs, RawAttrs, current_page, shortcode_atts};
use crate::context::RequestContext;
use crate::html::Element;
use crate::options::DisplayOptions;

impl ShortcodeRenderer {
    /// Renders full entries: title heading, answer body, read-more link,
    /// and page links unless a single entry was requested.
    pub async fn shortcode_main(&self, attrs: &RawAttrs, ctx: &RequestContext) -> Option<String> {
        let merged = shortcode_atts(QUERY_DEFAULTS, attrs);
        let query = QueryAttrs::from_merged(&merged);
        let page = current_page(ctx);

        let entries = self.fetch(&query.fetch_request(page)).await?;

        let options = DisplayOptions::resolve(&self.filters, ViewContext::Main).await;

        let items = entries.iter().map(|entry| self.main_item(entry, &options));

        let mut list = Element::new("div")
            .attr("class", "faq-list")
            .attr("data-speed", options.expand_speed.to_string())
            .children(items);

        if options.paginate && !query.has_specific_id() {
            let nav = self
                .pagination_block(ctx, page, query.limit, ViewContext::Main)
                .await;
            list = list.raw(nav);
        }

        Some(
            Element::new("div")
                .attr("id", "faq-block")
                .attr("name", "faq-block")
                .child(list)
                .render(),
        )
    }

    /// Markup of one entry.
    fn main_item(&self, entry: &FaqEntry, options: &DisplayOptions) -> Element {
        let heading = Element::new(options.heading.as_str())
            .attr("id", &entry.slug)
            .attr("name", &entry.slug)
            .attr("class", options.title_class())
            .text(&entry.title);

        let body = if options.content_filter {
            self.content.transform(&entry.content)
        } else {
            entry.content.clone()
        };

        let more = options.more_link.as_ref().map(|link| {
            Element::new("p").attr("class", "faq-link").child(
                Element::new("a")
                    .url_attr("href", &self.permalinks.entry_permalink(entry))
                    .attr("title", &entry.title)
                    .text(&link.text),
            )
        });

        let answer = Element::new("div")
            .attr("class", "faq-answer")
            .attr("rel", &entry.slug)
            .raw(body)
            .child_opt(more);

        Element::new("div")
            .attr("class", options.item_class())
            .child(heading)
            .child(answer)
    }
}
