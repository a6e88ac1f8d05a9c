//! Integration tests for the page links emitted by the shortcode views.

mod helpers;

use std::sync::Arc;

use serde_json::json;

use faqdesk_core::config::filters::{FilterOverrides, ViewOverrides};
use faqdesk_plugin::{ConfiguredOverrides, FilterDispatcher, FilterFn, FilterPoint, ViewContext};
use faqdesk_render::ShortcodeTag;
use faqdesk_render::options::{LinksType, PaginateArgs};
use faqdesk_render::pagination::paginate_links;
use faqdesk_render::shortcode::RawAttrs;

use helpers::{ScriptedRepository, count, entry, page_context};

fn one_entry_repo(pages: u64) -> Arc<ScriptedRepository> {
    Arc::new(ScriptedRepository::returning(vec![entry(1, "first", "First?", &[])], pages))
}

/// The `<p class="faq-nav">` block of a rendered fragment.
fn nav_block(html: &str) -> &str {
    let start = html.find("<p class=\"faq-nav\">").unwrap();
    let end = html[start..].find("</p>").unwrap() + start + "</p>".len();
    &html[start..end]
}

#[tokio::test]
async fn test_middle_page_links() {
    let renderer = helpers::renderer(one_entry_repo(3));
    let ctx = page_context().with_query("faq_page", "2");

    let html = renderer.render(ShortcodeTag::Faq, &RawAttrs::new(), &ctx).await.unwrap();

    assert_eq!(
        nav_block(&html),
        "<p class=\"faq-nav\">\
         <a class=\"prev page-numbers\" href=\"https://example.test/help/\">&laquo;</a>\n\
         <a class=\"page-numbers\" href=\"https://example.test/help/\">1</a>\n\
         <span aria-current=\"page\" class=\"page-numbers current\">2</span>\n\
         <a class=\"page-numbers\" href=\"https://example.test/help/?faq_page=3\">3</a>\n\
         <a class=\"next page-numbers\" href=\"https://example.test/help/?faq_page=3\">&raquo;</a>\
         </p>"
    );
}

#[tokio::test]
async fn test_invalid_page_is_first_page() {
    let renderer = helpers::renderer(one_entry_repo(2));

    for raw in ["0", "abc", ""] {
        let ctx = page_context().with_query("faq_page", raw);
        let html = renderer.render(ShortcodeTag::FaqList, &RawAttrs::new(), &ctx).await.unwrap();
        assert!(
            html.contains("<span aria-current=\"page\" class=\"page-numbers current\">1</span>"),
            "faq_page={raw:?}"
        );
        assert!(!html.contains("prev page-numbers"));
    }
}

#[tokio::test]
async fn test_single_page_has_empty_nav() {
    let renderer = helpers::renderer(one_entry_repo(1));

    let html = renderer
        .render(ShortcodeTag::Faq, &RawAttrs::new(), &page_context())
        .await
        .unwrap();

    assert_eq!(nav_block(&html), "<p class=\"faq-nav\"></p>");
}

#[tokio::test]
async fn test_zero_pages_has_empty_nav() {
    let renderer = helpers::renderer(one_entry_repo(0));

    let html = renderer
        .render(ShortcodeTag::FaqList, &RawAttrs::new(), &page_context())
        .await
        .unwrap();

    assert_eq!(nav_block(&html), "<p class=\"faq-nav\"></p>");
}

#[tokio::test]
async fn test_args_filter_sees_view_and_can_switch_to_list() {
    let filters = FilterDispatcher::default();
    filters
        .registry()
        .register(
            FilterPoint::ShortcodePaginateArgs,
            Arc::new(FilterFn::new("test", 100, |value, view| {
                if view != ViewContext::List {
                    return None;
                }
                let mut args = value.clone();
                args["type"] = json!("list");
                Some(args)
            })),
        )
        .await;

    let renderer = helpers::renderer_with(one_entry_repo(2), filters);
    let ctx = page_context();

    let list = renderer.render(ShortcodeTag::FaqList, &RawAttrs::new(), &ctx).await.unwrap();
    assert_eq!(count(&list, "<ul class='page-numbers'>"), 1);

    let main = renderer.render(ShortcodeTag::Faq, &RawAttrs::new(), &ctx).await.unwrap();
    assert!(!main.contains("<ul class='page-numbers'>"));
}

#[tokio::test]
async fn test_configured_prev_next_texts() {
    let overrides = FilterOverrides {
        main: ViewOverrides {
            prev_text: Some("Newer".to_string()),
            next_text: Some("Older".to_string()),
            ..ViewOverrides::default()
        },
        list: ViewOverrides::default(),
    };
    let filters = FilterDispatcher::default();
    ConfiguredOverrides::new(overrides).register(filters.registry()).await;

    let renderer = helpers::renderer_with(one_entry_repo(3), filters);
    let ctx = page_context().with_query("faq_page", "2");

    let main = renderer.render(ShortcodeTag::Faq, &RawAttrs::new(), &ctx).await.unwrap();
    assert!(main.contains(">Newer</a>"));
    assert!(main.contains(">Older</a>"));

    let list = renderer.render(ShortcodeTag::FaqList, &RawAttrs::new(), &ctx).await.unwrap();
    assert!(list.contains(">&laquo;</a>"));
}

#[tokio::test]
async fn test_huge_mid_size_from_filter_links_every_page() {
    let filters = FilterDispatcher::default();
    filters
        .registry()
        .register(
            FilterPoint::ShortcodePaginateArgs,
            Arc::new(FilterFn::new("test", 100, |value, _| {
                let mut args = value.clone();
                args["mid_size"] = json!(u64::MAX);
                Some(args)
            })),
        )
        .await;

    let renderer = helpers::renderer_with(one_entry_repo(9), filters);
    let ctx = page_context().with_query("faq_page", "5");

    let html = renderer.render(ShortcodeTag::Faq, &RawAttrs::new(), &ctx).await.unwrap();
    let nav = nav_block(&html);
    assert_eq!(count(nav, "<a class=\"page-numbers\""), 8);
    assert!(!nav.contains("dots"));
}

#[test]
fn test_show_all_lists_every_page() {
    let mut args = PaginateArgs::for_page("https://example.test/help/", 1, 9);
    args.show_all = true;
    args.prev_next = false;

    let html = paginate_links(&args).unwrap();
    assert_eq!(count(&html, "class=\"page-numbers\""), 8);
    assert!(!html.contains("dots"));
}

#[test]
fn test_base_gets_trailing_slash() {
    let args = PaginateArgs::for_page("https://example.test/help", 1, 2);
    assert_eq!(args.base, "https://example.test/help/%_%");
    assert_eq!(args.format, "?faq_page=%#%");
    assert_eq!(args.kind, LinksType::Plain);

    let html = paginate_links(&args).unwrap();
    assert!(html.contains("href=\"https://example.test/help/?faq_page=2\""));
}
