//! Context helpers shared by the admin and front-end integrations.

use serde_json::Value;
use tracing::warn;

use faqdesk_core::traits::OptionStore;
use faqdesk_core::types::is_blank;
use faqdesk_entity::{HeadingTag, QUESTION_POST_TYPE, Screen, Taxonomy};

use crate::context::RequestContext;

/// Name of the option record holding the legacy settings.
pub const LEGACY_OPTION_NAME: &str = "faq_options";

/// Looks up `key` in the legacy settings record.
///
/// Returns `None` (the "false" answer) when `key` is empty. When the record
/// is missing or empty, or lacks `key` (a `null` entry counts as missing),
/// returns `default` if it is set and `None` otherwise. Any other stored
/// value is returned as is, even when empty.
pub async fn get_legacy_option(store: &dyn OptionStore, key: &str, default: Value) -> Option<Value> {
    if key.is_empty() {
        return None;
    }

    let fallback = || (!is_blank(&default)).then(|| default.clone());

    let settings = match store.get_option(LEGACY_OPTION_NAME).await {
        Ok(settings) => settings,
        Err(e) => {
            warn!(option = LEGACY_OPTION_NAME, error = %e, "Failed to read legacy settings");
            None
        }
    };

    let Some(settings) = settings.filter(|s| !is_blank(s)) else {
        return fallback();
    };

    match settings.get(key) {
        Some(value) if !value.is_null() => Some(value.clone()),
        _ => fallback(),
    }
}

/// What the caller wants done with the screen field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Compare the field against the FAQ content type.
    Compare,
    /// Return the field value.
    Return,
    /// Anything else.
    Other,
}

impl ScreenAction {
    /// Parses an action name.
    pub fn parse(action: &str) -> Self {
        match action {
            "compare" => Self::Compare,
            "return" => Self::Return,
            _ => Self::Other,
        }
    }
}

/// Which part of the screen the caller asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenField {
    /// The whole screen descriptor (empty check name).
    Whole,
    /// The screen's content type.
    PostType,
    /// Anything else.
    Other,
}

impl ScreenField {
    /// Parses a check name.
    pub fn parse(check: &str) -> Self {
        match check {
            "" => Self::Whole,
            "post_type" => Self::PostType,
            _ => Self::Other,
        }
    }
}

/// Answer of a screen check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCheck {
    /// Negative answer, also used for every unsupported combination.
    False,
    /// Positive comparison.
    True,
    /// The screen's content type.
    PostType(String),
    /// The whole screen descriptor.
    Screen(Screen),
}

impl ScreenCheck {
    /// Whether the answer counts as positive.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::False)
    }
}

/// Inspects the current admin screen.
///
/// Outside the admin area, or without a screen, the answer is `False`.
pub fn check_current_screen(ctx: &RequestContext, action: &str, check: &str) -> ScreenCheck {
    if !ctx.is_admin {
        return ScreenCheck::False;
    }

    let Some(screen) = ctx.screen.as_ref() else {
        return ScreenCheck::False;
    };

    match (ScreenField::parse(check), ScreenAction::parse(action)) {
        (ScreenField::Whole, _) => ScreenCheck::Screen(screen.clone()),
        (ScreenField::PostType, _) if screen.post_type.is_empty() => ScreenCheck::False,
        (ScreenField::PostType, ScreenAction::Compare) => {
            if screen.post_type == QUESTION_POST_TYPE {
                ScreenCheck::True
            } else {
                ScreenCheck::False
            }
        }
        (ScreenField::PostType, ScreenAction::Return) => {
            ScreenCheck::PostType(screen.post_type.clone())
        }
        (ScreenField::PostType, ScreenAction::Other) => ScreenCheck::False,
        (ScreenField::Other, _) => ScreenCheck::False,
    }
}

/// Whether the front-end request shows one of the FAQ surfaces: a single
/// entry, the entry archive, or a topic or tag archive.
pub fn is_faq_location(ctx: &RequestContext) -> bool {
    let queried = &ctx.queried;

    queried.is_singular(QUESTION_POST_TYPE)
        || queried.is_post_type_archive(QUESTION_POST_TYPE)
        || Taxonomy::ALL.iter().any(|tax| queried.is_tax(tax.as_str()))
}

/// Returns `tag` if it is one of `h1`..`h6`, otherwise `h3`.
pub fn check_htype_tag(tag: &str) -> &'static str {
    HeadingTag::normalize(tag).as_str()
}
