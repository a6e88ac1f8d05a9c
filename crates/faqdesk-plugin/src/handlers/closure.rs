//! Closure-backed filter handler for programmatic registration.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::hooks::definitions::{FilterPayload, FilterResult, ViewContext};
use crate::hooks::registry::FilterHandler;

/// Boxed filter function: returns `Some` to replace the value.
type FilterFnBox = Box<dyn Fn(&Value, ViewContext) -> Option<Value> + Send + Sync>;

/// A filter handler wrapping a plain function.
pub struct FilterFn {
    /// Owning plugin.
    plugin_id: String,
    /// Execution priority.
    priority: i32,
    /// The function.
    func: FilterFnBox,
}

impl FilterFn {
    /// Creates a handler from a function returning `Some(new)` to replace
    /// the current value or `None` to keep it.
    pub fn new<F>(plugin_id: impl Into<String>, priority: i32, func: F) -> Self
    where
        F: Fn(&Value, ViewContext) -> Option<Value> + Send + Sync + 'static,
    {
        Self {
            plugin_id: plugin_id.into(),
            priority,
            func: Box::new(func),
        }
    }
}

impl fmt::Debug for FilterFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterFn")
            .field("plugin_id", &self.plugin_id)
            .field("priority", &self.priority)
            .finish()
    }
}

#[async_trait]
impl FilterHandler for FilterFn {
    async fn apply(&self, payload: &FilterPayload) -> FilterResult {
        match (self.func)(&payload.value, payload.view) {
            Some(value) => FilterResult::replace(&self.plugin_id, value),
            None => FilterResult::keep(&self.plugin_id),
        }
    }

    fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
