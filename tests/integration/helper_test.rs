//! Integration tests for the context helpers.

mod helpers;

use async_trait::async_trait;
use serde_json::{Value, json};

use faqdesk_core::error::{AppError, ErrorKind};
use faqdesk_core::result::AppResult;
use faqdesk_core::traits::OptionStore;
use faqdesk_data::JsonOptionStore;
use faqdesk_entity::{HeadingTag, Screen};
use faqdesk_render::RequestContext;
use faqdesk_render::helper::{
    ScreenCheck, check_current_screen, check_htype_tag, get_legacy_option,
};

/// Option store whose reads always fail.
struct BrokenStore;

#[async_trait]
impl OptionStore for BrokenStore {
    async fn get_option(&self, _name: &str) -> AppResult<Option<Value>> {
        Err(AppError::new(ErrorKind::Storage, "options table missing"))
    }
}

fn settings_store() -> JsonOptionStore {
    JsonOptionStore::from_value(json!({
        "faq_options": {
            "page_title": "Frequently Asked Questions",
            "show_count": 0,
            "retired": null
        }
    }))
    .unwrap()
}

#[test]
fn test_heading_tags_pass_or_become_h3() {
    for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
        assert_eq!(check_htype_tag(tag), tag);
    }
    for tag in ["H2", "h7", "h0", "div", " h2", "h2 ", ""] {
        assert_eq!(check_htype_tag(tag), "h3", "{tag:?}");
    }
    assert_eq!(HeadingTag::normalize("p"), HeadingTag::H3);
}

#[tokio::test]
async fn test_empty_key_is_false_sentinel() {
    let store = settings_store();
    assert_eq!(get_legacy_option(&store, "", json!("fallback")).await, None);
    assert_eq!(get_legacy_option(&store, "", Value::Null).await, None);
}

#[tokio::test]
async fn test_missing_key_returns_fallback() {
    let store = settings_store();

    assert_eq!(
        get_legacy_option(&store, "missing", json!("fallback")).await,
        Some(json!("fallback"))
    );
    assert_eq!(get_legacy_option(&store, "missing", Value::Null).await, None);
    assert_eq!(
        get_legacy_option(&store, "retired", json!("fallback")).await,
        Some(json!("fallback"))
    );
}

#[tokio::test]
async fn test_present_key_returns_stored_value() {
    let store = settings_store();

    assert_eq!(
        get_legacy_option(&store, "page_title", json!("FAQ")).await,
        Some(json!("Frequently Asked Questions"))
    );
    assert_eq!(get_legacy_option(&store, "show_count", json!(5)).await, Some(json!(0)));
}

#[tokio::test]
async fn test_missing_record_returns_fallback() {
    let store = JsonOptionStore::empty();
    assert_eq!(get_legacy_option(&store, "page_title", json!("FAQ")).await, Some(json!("FAQ")));
    assert_eq!(get_legacy_option(&store, "page_title", json!(0)).await, None);
}

#[tokio::test]
async fn test_store_failure_behaves_like_missing_record() {
    assert_eq!(
        get_legacy_option(&BrokenStore, "page_title", json!("FAQ")).await,
        Some(json!("FAQ"))
    );
    assert_eq!(get_legacy_option(&BrokenStore, "page_title", Value::Null).await, None);
}

#[test]
fn test_screen_check_on_taxonomy_screen() {
    let screen = Screen {
        id: "edit-faq-topic".to_string(),
        base: "edit-tags".to_string(),
        post_type: "question".to_string(),
        taxonomy: "faq-topic".to_string(),
    };
    let ctx = RequestContext::admin(Some(screen.clone()));

    assert!(check_current_screen(&ctx, "compare", "post_type").is_truthy());
    assert_eq!(check_current_screen(&ctx, "return", ""), ScreenCheck::Screen(screen));
    assert_eq!(check_current_screen(&ctx, "return", "taxonomy"), ScreenCheck::False);
}
