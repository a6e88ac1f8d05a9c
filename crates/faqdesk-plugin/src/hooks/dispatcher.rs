//! Filter dispatcher: threads a value through every registered handler.
//!
//! Handlers are called in priority order. Each one sees the value left by
//! the previous handler and either keeps it or replaces it. A handler that
//! does not answer within the configured timeout is skipped and the value
//! passes through unchanged.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use super::definitions::{FilterAction, FilterPayload, FilterPoint, ViewContext};
use super::registry::FilterRegistry;

/// Default per-handler timeout.
const DEFAULT_HANDLER_TIMEOUT: Duration = Duration::from_secs(5);

/// Dispatches filter points to all registered handlers.
#[derive(Debug, Clone)]
pub struct FilterDispatcher {
    /// Filter registry.
    registry: Arc<FilterRegistry>,
    /// Maximum time a single handler may take.
    handler_timeout: Duration,
}

impl FilterDispatcher {
    /// Creates a new filter dispatcher.
    pub fn new(registry: Arc<FilterRegistry>) -> Self {
        Self {
            registry,
            handler_timeout: DEFAULT_HANDLER_TIMEOUT,
        }
    }

    /// Sets the per-handler timeout.
    pub fn with_timeout(mut self, handler_timeout: Duration) -> Self {
        self.handler_timeout = handler_timeout;
        self
    }

    /// Resolves a filter point starting from `value`.
    pub async fn apply_filters(&self, point: FilterPoint, view: ViewContext, value: Value) -> Value {
        let handlers = self.registry.get_handlers(point).await;

        if handlers.is_empty() {
            return value;
        }

        debug!(
            filter = %point,
            view = %view,
            handler_count = handlers.len(),
            "Applying filter"
        );

        let mut payload = FilterPayload::new(point, view, value);

        for handler in &handlers {
            let result = match tokio::time::timeout(self.handler_timeout, handler.apply(&payload)).await
            {
                Ok(r) => r,
                Err(_) => {
                    error!(
                        filter = %point,
                        plugin_id = %handler.plugin_id(),
                        timeout_ms = self.handler_timeout.as_millis() as u64,
                        "Filter handler timed out"
                    );
                    continue;
                }
            };

            match result.action {
                FilterAction::Keep => {
                    debug!(filter = %point, plugin_id = %result.plugin_id, "Handler kept value");
                }
                FilterAction::Replace(next) => {
                    debug!(filter = %point, plugin_id = %result.plugin_id, "Handler replaced value");
                    payload.value = next;
                }
            }
        }

        payload.value
    }

    /// Resolves a filter point starting from its built-in default.
    pub async fn resolve(&self, point: FilterPoint, view: ViewContext) -> Value {
        self.apply_filters(point, view, point.default_value()).await
    }

    /// Returns a reference to the filter registry.
    pub fn registry(&self) -> &Arc<FilterRegistry> {
        &self.registry
    }
}

impl Default for FilterDispatcher {
    fn default() -> Self {
        Self::new(Arc::new(FilterRegistry::new()))
    }
}
