//! Admin screen descriptor.

use serde::{Deserialize, Serialize};

/// Describes the admin view being rendered for the current request.
///
/// Built by the host platform per admin request and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Unique screen identifier (e.g. `edit-question`).
    pub id: String,
    /// Base screen type (e.g. `edit`, `post`, `edit-tags`).
    #[serde(default)]
    pub base: String,
    /// Content type the screen manages; empty when not type-specific.
    #[serde(default)]
    pub post_type: String,
    /// Taxonomy the screen manages; empty when not taxonomy-specific.
    #[serde(default)]
    pub taxonomy: String,
}

impl Screen {
    /// Create a screen for a content type.
    pub fn for_post_type(id: impl Into<String>, base: impl Into<String>, post_type: &str) -> Self {
        Self {
            id: id.into(),
            base: base.into(),
            post_type: post_type.to_string(),
            taxonomy: String::new(),
        }
    }
}
