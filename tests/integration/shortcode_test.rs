//! Integration tests for the shortcode views and the content expander.

mod helpers;

use std::sync::Arc;

use serde_json::json;

use faqdesk_core::config::filters::{FilterOverrides, MoreLinkOverride, ViewOverrides};
use faqdesk_plugin::{ConfiguredOverrides, FilterDispatcher, FilterPoint};
use faqdesk_render::ShortcodeTag;
use faqdesk_render::shortcode::RawAttrs;

use helpers::{ScriptedRepository, attrs, count, entry, page_context};

#[tokio::test]
async fn test_no_result_renders_nothing() {
    let renderer = helpers::renderer(Arc::new(ScriptedRepository::no_result()));
    let ctx = page_context();

    for tag in ShortcodeTag::ALL {
        assert_eq!(renderer.render(tag, &RawAttrs::new(), &ctx).await, None, "{tag}");
    }
}

#[tokio::test]
async fn test_repository_failure_renders_nothing() {
    let renderer = helpers::renderer(Arc::new(ScriptedRepository::failing()));
    let ctx = page_context();

    assert_eq!(renderer.render(ShortcodeTag::Faq, &RawAttrs::new(), &ctx).await, None);
    assert_eq!(renderer.render(ShortcodeTag::FaqList, &RawAttrs::new(), &ctx).await, None);
}

#[tokio::test]
async fn test_single_entry_markup() {
    let repo = ScriptedRepository::returning(
        vec![entry(1, "reset-password", "How do I reset my password?", &[])],
        1,
    );
    let renderer = helpers::renderer(Arc::new(repo));

    let html = renderer
        .render(ShortcodeTag::Faq, &attrs(&[("faq_id", "1")]), &page_context())
        .await
        .unwrap();

    assert_eq!(
        html,
        "<div id=\"faq-block\" name=\"faq-block\"><div class=\"faq-list\" data-speed=\"200\">\
         <div class=\"single-faq expand-faq\">\
         <h3 id=\"reset-password\" name=\"reset-password\" class=\"faq-question expand-title\">How do I reset my password?</h3>\
         <div class=\"faq-answer\" rel=\"reset-password\">Answer 1.\
         <p class=\"faq-link\"><a href=\"http://localhost/question/reset-password/\" title=\"How do I reset my password?\">Read More</a></p>\
         </div></div></div></div>"
    );
}

#[tokio::test]
async fn test_two_entries_two_items_each_with_one_link() {
    let repo = ScriptedRepository::returning(
        vec![
            entry(1, "first", "First?", &[]),
            entry(2, "second", "Second?", &[]),
        ],
        1,
    );
    let renderer = helpers::renderer(Arc::new(repo));

    let html = renderer
        .render(ShortcodeTag::Faq, &RawAttrs::new(), &page_context())
        .await
        .unwrap();

    assert_eq!(count(&html, "<div class=\"single-faq expand-faq\">"), 2);
    assert_eq!(count(&html, "<p class=\"faq-link\">"), 2);
    assert_eq!(count(&html, "href=\"http://localhost/question/first/\""), 1);
    assert_eq!(count(&html, "href=\"http://localhost/question/second/\""), 1);
}

#[tokio::test]
async fn test_topics_and_tags_reach_repository() {
    let repo = Arc::new(ScriptedRepository::returning(Vec::new(), 1));
    let renderer = helpers::renderer(repo.clone());

    renderer
        .render(
            ShortcodeTag::Faq,
            &attrs(&[("faq_topic", "a,b"), ("faq_tag", ""), ("limit", "5"), ("color", "red")]),
            &page_context().with_query("faq_page", "3"),
        )
        .await;

    let requests = repo.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].topics, vec!["a", "b"]);
    assert!(requests[0].tags.is_empty());
    assert_eq!(requests[0].limit, Some(5));
    assert_eq!(requests[0].faq_id, 0);
    assert_eq!(requests[0].page, 3);
}

#[tokio::test]
async fn test_tax_list_ignores_query_attributes() {
    let repo = Arc::new(ScriptedRepository::returning(Vec::new(), 1));
    let renderer = helpers::renderer(repo.clone());

    renderer
        .render(
            ShortcodeTag::FaqTaxList,
            &attrs(&[("faq_topic", "billing"), ("faq_id", "4"), ("limit", "3"), ("type", "tags")]),
            &page_context(),
        )
        .await;

    let requests = repo.requests();
    assert!(requests[0].topics.is_empty());
    assert!(requests[0].tags.is_empty());
    assert_eq!(requests[0].faq_id, 0);
    assert_eq!(requests[0].limit, None);
}

#[tokio::test]
async fn test_list_and_tax_list_are_identical() {
    let renderer = helpers::renderer(helpers::memory_repo(10));
    let ctx = page_context();

    let list = renderer.render(ShortcodeTag::FaqList, &RawAttrs::new(), &ctx).await;
    let tax_list = renderer
        .render(ShortcodeTag::FaqTaxList, &attrs(&[("faq_topic", "billing")]), &ctx)
        .await;

    assert!(list.is_some());
    assert_eq!(list, tax_list);
}

#[tokio::test]
async fn test_list_markup() {
    let repo = ScriptedRepository::returning(vec![entry(2, "pay", "Pay \"now\"?", &[])], 1);
    let renderer = helpers::renderer(Arc::new(repo));

    let html = renderer
        .render(ShortcodeTag::FaqList, &RawAttrs::new(), &page_context())
        .await
        .unwrap();

    assert_eq!(
        html,
        "<div id=\"faq-block\" name=\"faq-block\"><div class=\"faq-list\"><ul>\
         <li class=\"faqlist-question\"><a href=\"http://localhost/question/pay/\" title=\"Pay &quot;now&quot;?\">Pay &quot;now&quot;?</a></li>\
         </ul><p class=\"faq-nav\"></p></div></div>"
    );
}

#[tokio::test]
async fn test_pagination_only_without_specific_id() {
    let entries = vec![entry(1, "first", "First?", &[])];
    let ctx = page_context();

    let renderer = helpers::renderer(Arc::new(ScriptedRepository::returning(entries.clone(), 3)));
    let paged = renderer.render(ShortcodeTag::Faq, &RawAttrs::new(), &ctx).await.unwrap();
    assert_eq!(count(&paged, "<p class=\"faq-nav\">"), 1);
    assert!(paged.contains("?faq_page=2"));

    let single = renderer
        .render(ShortcodeTag::Faq, &attrs(&[("faq_id", "1")]), &ctx)
        .await
        .unwrap();
    assert!(!single.contains("faq-nav"));

    let single_list = renderer
        .render(ShortcodeTag::FaqList, &attrs(&[("faq_id", "1")]), &ctx)
        .await
        .unwrap();
    assert!(!single_list.contains("faq-nav"));

    let filters = FilterDispatcher::default();
    helpers::override_filter(&filters, FilterPoint::DisplayShortcodePaginate, json!(false)).await;
    let disabled = helpers::renderer_with(Arc::new(ScriptedRepository::returning(entries, 3)), filters);
    for tag in ShortcodeTag::ALL {
        let html = disabled.render(tag, &RawAttrs::new(), &ctx).await.unwrap();
        assert!(!html.contains("faq-nav"), "{tag}");
    }
}

#[tokio::test]
async fn test_display_filters_change_markup() {
    let filters = FilterDispatcher::default();
    helpers::override_filter(&filters, FilterPoint::DisplayHtype, json!("h2")).await;
    helpers::override_filter(&filters, FilterPoint::DisplayContentExpand, json!(false)).await;
    helpers::override_filter(&filters, FilterPoint::DisplayExpandSpeed, json!("-350")).await;
    helpers::override_filter(&filters, FilterPoint::DisplayContentMoreLink, json!(false)).await;

    let repo = ScriptedRepository::returning(vec![entry(1, "first", "First?", &[])], 1);
    let renderer = helpers::renderer_with(Arc::new(repo), filters);

    let html = renderer
        .render(ShortcodeTag::Faq, &attrs(&[("faq_id", "1")]), &page_context())
        .await
        .unwrap();

    assert!(html.contains("data-speed=\"350\""));
    assert!(html.contains("<div class=\"single-faq\"><h2 id=\"first\" name=\"first\" class=\"faq-question\">First?</h2>"));
    assert!(!html.contains("faq-link"));
}

#[tokio::test]
async fn test_more_link_ignores_show_flag() {
    let filters = FilterDispatcher::default();
    helpers::override_filter(
        &filters,
        FilterPoint::DisplayContentMoreLink,
        json!({ "show": 0, "text": "More" }),
    )
    .await;

    let repo = ScriptedRepository::returning(vec![entry(1, "a", "A?", &[])], 1);
    let renderer = helpers::renderer_with(Arc::new(repo), filters);

    let html = renderer
        .render(ShortcodeTag::Faq, &attrs(&[("faq_id", "1")]), &page_context())
        .await
        .unwrap();

    assert!(html.contains(
        "<div class=\"faq-answer\" rel=\"a\">Answer 1.<p class=\"faq-link\"><a href=\"http://localhost/question/a/\" title=\"A?\">More</a></p></div>"
    ));
}

#[tokio::test]
async fn test_invalid_heading_filter_falls_back_to_h3() {
    let filters = FilterDispatcher::default();
    helpers::override_filter(&filters, FilterPoint::DisplayHtype, json!("script")).await;

    let repo = ScriptedRepository::returning(vec![entry(1, "first", "First?", &[])], 1);
    let renderer = helpers::renderer_with(Arc::new(repo), filters);

    let html = renderer
        .render(ShortcodeTag::Faq, &RawAttrs::new(), &page_context())
        .await
        .unwrap();

    assert!(html.contains("<h3 id=\"first\""));
    assert!(!html.contains("<script"));
}

#[tokio::test]
async fn test_configured_overrides_apply_per_view() {
    let overrides = FilterOverrides {
        main: ViewOverrides {
            more_link: Some(MoreLinkOverride {
                show: true,
                text: "Permalink".to_string(),
            }),
            ..ViewOverrides::default()
        },
        list: ViewOverrides {
            paginate: Some(false),
            ..ViewOverrides::default()
        },
    };

    let filters = FilterDispatcher::default();
    ConfiguredOverrides::new(overrides).register(filters.registry()).await;

    let repo = ScriptedRepository::returning(vec![entry(1, "first", "First?", &[])], 2);
    let renderer = helpers::renderer_with(Arc::new(repo), filters);
    let ctx = page_context();

    let main = renderer.render(ShortcodeTag::Faq, &RawAttrs::new(), &ctx).await.unwrap();
    assert!(main.contains(">Permalink</a>"));
    assert!(main.contains("faq-nav"));

    let list = renderer.render(ShortcodeTag::FaqList, &RawAttrs::new(), &ctx).await.unwrap();
    assert!(!list.contains("faq-nav"));
}

#[tokio::test]
async fn test_second_page_from_query() {
    let renderer = helpers::renderer(helpers::memory_repo(1));
    let ctx = page_context().with_query("faq_page", "2");

    let html = renderer
        .render(ShortcodeTag::FaqList, &attrs(&[("limit", "1")]), &ctx)
        .await
        .unwrap();

    // Newest first: invoices, payment-methods, reset-password
    assert!(html.contains("/question/payment-methods/"));
    assert_eq!(count(&html, "<li class=\"faqlist-question\">"), 1);
    assert!(html.contains("<span aria-current=\"page\" class=\"page-numbers current\">2</span>"));
}

#[tokio::test]
async fn test_expand_shortcodes_in_content() {
    let renderer = helpers::renderer(helpers::memory_repo(10));
    let ctx = page_context();

    let out = renderer
        .expand_shortcodes(
            "<h2>Help</h2>\n[faqlist faq_topic=\"billing\"]\nWrite [[faq]] to embed.",
            &ctx,
        )
        .await;

    assert!(out.starts_with("<h2>Help</h2>\n<div id=\"faq-block\" name=\"faq-block\">"));
    assert!(out.contains("/question/invoices/"));
    assert!(out.contains("/question/payment-methods/"));
    assert!(!out.contains("/question/reset-password/"));
    assert!(out.ends_with("\nWrite [faq] to embed."));
}

#[tokio::test]
async fn test_expand_drops_shortcodes_without_output() {
    let renderer = helpers::renderer(Arc::new(ScriptedRepository::no_result()));

    let out = renderer
        .expand_shortcodes("Before [faq limit=2] after [faqlist/].", &page_context())
        .await;

    assert_eq!(out, "Before  after .");
}

#[tokio::test]
async fn test_page_beyond_any_offset_renders_nothing() {
    let renderer = helpers::renderer(helpers::memory_repo(10));
    let ctx = page_context().with_query("faq_page", "18446744073709551615");

    for tag in ShortcodeTag::ALL {
        assert_eq!(renderer.render(tag, &RawAttrs::new(), &ctx).await, None, "{tag}");
    }

    let huge_limit = attrs(&[("limit", "9223372036854775807")]);
    let third = page_context().with_query("faq_page", "3");
    assert_eq!(renderer.render(ShortcodeTag::FaqList, &huge_limit, &third).await, None);
}
