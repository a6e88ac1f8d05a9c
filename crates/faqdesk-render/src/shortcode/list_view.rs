//! The `[faqlist]` and `[faqtaxlist]` link-list views.

use faqdesk_plugin::ViewContext;

use super::ShortcodeRenderer;
use super::attrs::{
    QUERY_DEFAULTS, QueryAttrs, RawAttrs, TAX_LIST_DEFAULTS, current_page, shortcode_atts,
};
use crate::context::RequestContext;
use crate::html::Element;
use crate::options::ListOptions;

impl ShortcodeRenderer {
    /// Renders entry titles as a list of links.
    pub async fn shortcode_list(&self, attrs: &RawAttrs, ctx: &RequestContext) -> Option<String> {
        let merged = shortcode_atts(QUERY_DEFAULTS, attrs);
        self.link_list(QueryAttrs::from_merged(&merged), ctx).await
    }

    /// Renders the taxonomy list shortcode.
    ///
    /// Declares `type` and `desc`, but reads the query keys of the list view
    /// from the merged set, where they never exist. The result is the list
    /// view over all entries with no limit given.
    pub async fn shortcode_tax_list(
        &self,
        attrs: &RawAttrs,
        ctx: &RequestContext,
    ) -> Option<String> {
        let merged = shortcode_atts(TAX_LIST_DEFAULTS, attrs);
        self.link_list(QueryAttrs::from_merged(&merged), ctx).await
    }

    /// Shared body of both list views.
    async fn link_list(&self, query: QueryAttrs, ctx: &RequestContext) -> Option<String> {
        let page = current_page(ctx);

        let entries = self.fetch(&query.fetch_request(page)).await?;

        let options = ListOptions::resolve(&self.filters, ViewContext::List).await;

        let items = entries.iter().map(|entry| {
            Element::new("li").attr("class", "faqlist-question").child(
                Element::new("a")
                    .url_attr("href", &self.permalinks.entry_permalink(entry))
                    .attr("title", &entry.title)
                    .text(&entry.title),
            )
        });

        let mut list = Element::new("div")
            .attr("class", "faq-list")
            .child(Element::new("ul").children(items));

        if options.paginate && !query.has_specific_id() {
            let nav = self
                .pagination_block(ctx, page, query.limit, ViewContext::List)
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
}
