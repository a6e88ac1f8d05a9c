//! Filter handler applying static overrides from the application config.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use faqdesk_core::config::filters::{FilterOverrides, ViewOverrides};

use crate::hooks::definitions::{FilterPayload, FilterPoint, FilterResult, ViewContext};
use crate::hooks::registry::{FilterHandler, FilterRegistry};

/// Plugin ID used for config-driven overrides.
pub const CONFIG_PLUGIN_ID: &str = "config";

/// Priority of config overrides; runs ahead of default-priority handlers.
const CONFIG_PRIORITY: i32 = 10;

/// Replaces filter values with the ones set under `[filters.main]` and
/// `[filters.list]`.
#[derive(Debug, Clone)]
pub struct ConfiguredOverrides {
    /// Overrides per view.
    overrides: FilterOverrides,
}

impl ConfiguredOverrides {
    /// Creates the handler.
    pub fn new(overrides: FilterOverrides) -> Self {
        Self { overrides }
    }

    /// Registers the handler for every filter point with at least one
    /// override set in either view. Returns how many points were registered.
    pub async fn register(self, registry: &FilterRegistry) -> usize {
        let points: Vec<FilterPoint> = FilterPoint::ALL
            .into_iter()
            .filter(|point| {
                self.has_override(*point, &self.overrides.main)
                    || self.has_override(*point, &self.overrides.list)
            })
            .collect();

        let handler: Arc<dyn FilterHandler> = Arc::new(self);
        for point in &points {
            registry.register(*point, handler.clone()).await;
        }

        points.len()
    }

    /// Overrides for one view.
    fn for_view(&self, view: ViewContext) -> &ViewOverrides {
        match view {
            ViewContext::Main => &self.overrides.main,
            ViewContext::List => &self.overrides.list,
        }
    }

    /// Whether `view` sets anything for `point`.
    fn has_override(&self, point: FilterPoint, view: &ViewOverrides) -> bool {
        match point {
            FilterPoint::ShortcodePaginateArgs => {
                view.prev_text.is_some() || view.next_text.is_some()
            }
            _ => Self::scalar_override(point, view).is_some(),
        }
    }

    /// The replacement value of a scalar display option, if configured.
    fn scalar_override(point: FilterPoint, view: &ViewOverrides) -> Option<Value> {
        match point {
            FilterPoint::DisplayExpandSpeed => view.expand_speed.map(|v| json!(v)),
            FilterPoint::DisplayContentFilter => view.content_filter.map(Value::Bool),
            FilterPoint::DisplayContentExpand => view.content_expand.map(Value::Bool),
            FilterPoint::DisplayHtype => view.htype.as_ref().map(|v| json!(v)),
            FilterPoint::DisplayContentMoreLink => view
                .more_link
                .as_ref()
                .map(|link| {
                    // Only an empty value hides the link
                    if link.show {
                        json!({ "show": 1, "text": link.text })
                    } else {
                        Value::Bool(false)
                    }
                }),
            FilterPoint::DisplayShortcodePaginate => view.paginate.map(Value::Bool),
            FilterPoint::ShortcodePaginateArgs => None,
        }
    }

    /// Patches prev/next texts into a pagination args object.
    fn patch_paginate_args(current: &Value, view: &ViewOverrides) -> Option<Value> {
        let mut args = current.as_object()?.clone();
        let mut changed = false;

        if let Some(prev) = &view.prev_text {
            args.insert("prev_text".to_string(), json!(prev));
            changed = true;
        }
        if let Some(next) = &view.next_text {
            args.insert("next_text".to_string(), json!(next));
            changed = true;
        }

        changed.then_some(Value::Object(args))
    }
}

#[async_trait]
impl FilterHandler for ConfiguredOverrides {
    async fn apply(&self, payload: &FilterPayload) -> FilterResult {
        let view = self.for_view(payload.view);

        let replacement = match payload.point {
            FilterPoint::ShortcodePaginateArgs => Self::patch_paginate_args(&payload.value, view),
            point => Self::scalar_override(point, view),
        };

        match replacement {
            Some(value) => FilterResult::replace(CONFIG_PLUGIN_ID, value),
            None => FilterResult::keep(CONFIG_PLUGIN_ID),
        }
    }

    fn plugin_id(&self) -> &str {
        CONFIG_PLUGIN_ID
    }

    fn priority(&self) -> i32 {
        CONFIG_PRIORITY
    }
}
