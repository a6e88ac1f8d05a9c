//! Filter registry: handlers per filter point, kept in priority order.
//!
//! Handlers are registered once while wiring the renderer and stay for the
//! life of the process.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use super::definitions::{FilterPayload, FilterPoint, FilterResult};

/// Trait for filter handler implementations.
#[async_trait]
pub trait FilterHandler: Send + Sync + std::fmt::Debug {
    /// Handles one filter invocation.
    async fn apply(&self, payload: &FilterPayload) -> FilterResult;

    /// Returns the plugin ID owning this handler.
    fn plugin_id(&self) -> &str;

    /// Returns the priority (lower = runs first).
    fn priority(&self) -> i32 {
        100
    }
}

#[derive(Debug)]
struct FilterEntry {
    handler: Arc<dyn FilterHandler>,
    priority: i32,
}

/// Registry of filter handlers organized by filter point.
#[derive(Debug)]
pub struct FilterRegistry {
    /// Filter point → handlers sorted by priority, registration order within ties.
    handlers: RwLock<HashMap<FilterPoint, Vec<FilterEntry>>>,
}

impl FilterRegistry {
    /// Creates a new empty filter registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler for a specific filter point.
    pub async fn register(&self, point: FilterPoint, handler: Arc<dyn FilterHandler>) {
        let priority = handler.priority();
        info!(
            filter = %point,
            plugin_id = %handler.plugin_id(),
            priority = priority,
            "Filter handler registered"
        );

        let mut handlers = self.handlers.write().await;
        let entries = handlers.entry(point).or_default();
        entries.push(FilterEntry { handler, priority });

        // Stable sort keeps registration order for equal priorities
        entries.sort_by_key(|e| e.priority);
    }

    /// Returns all handlers for a specific filter point, sorted by priority.
    pub async fn get_handlers(&self, point: FilterPoint) -> Vec<Arc<dyn FilterHandler>> {
        let handlers = self.handlers.read().await;
        handlers
            .get(&point)
            .map(|entries| entries.iter().map(|e| e.handler.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns whether any handlers are registered for a filter point.
    pub async fn has_handlers(&self, point: FilterPoint) -> bool {
        self.handler_count(point).await > 0
    }

    /// Returns the number of handlers registered for a filter point.
    pub async fn handler_count(&self, point: FilterPoint) -> usize {
        let handlers = self.handlers.read().await;
        handlers.get(&point).map(|entries| entries.len()).unwrap_or(0)
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
