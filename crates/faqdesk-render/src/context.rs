//! Request context describing where the current render happens.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use faqdesk_entity::{QueriedObject, Screen};

/// Per-request view of the host platform.
///
/// Built by the caller for every request and passed into helpers and
/// shortcode views; nothing in this crate keeps it beyond one call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    /// Whether the request is for the admin area.
    pub is_admin: bool,
    /// The admin screen; `None` when screen introspection is unavailable.
    pub screen: Option<Screen>,
    /// What a front-end request resolved to.
    pub queried: QueriedObject,
    /// Query string parameters.
    pub query: HashMap<String, String>,
    /// Permalink of the page being rendered.
    pub permalink: String,
}

impl RequestContext {
    /// Creates a front-end context for the page at `permalink`.
    pub fn front_end(permalink: impl Into<String>) -> Self {
        Self {
            permalink: permalink.into(),
            ..Self::default()
        }
    }

    /// Creates an admin context showing `screen`.
    pub fn admin(screen: Option<Screen>) -> Self {
        Self {
            is_admin: true,
            screen,
            ..Self::default()
        }
    }

    /// Sets a query string parameter.
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    /// Sets the queried object.
    pub fn with_queried(mut self, queried: QueriedObject) -> Self {
        self.queried = queried;
        self
    }

    /// Returns a query string parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}
