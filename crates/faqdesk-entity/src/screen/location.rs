//! Front-end queried object.

use serde::{Deserialize, Serialize};

/// What the current front-end request resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueriedObject {
    /// A single entry of the given content type.
    Single {
        /// Content type of the entry.
        post_type: String,
    },
    /// The archive listing of a content type.
    PostTypeArchive {
        /// Content type of the archive.
        post_type: String,
    },
    /// A term archive of a taxonomy.
    TaxonomyArchive {
        /// Taxonomy name.
        taxonomy: String,
    },
    /// Any other page.
    #[default]
    Other,
}

impl QueriedObject {
    /// Check for a single entry of `post_type`.
    pub fn is_singular(&self, post_type: &str) -> bool {
        matches!(self, Self::Single { post_type: p } if p == post_type)
    }

    /// Check for the archive of `post_type`.
    pub fn is_post_type_archive(&self, post_type: &str) -> bool {
        matches!(self, Self::PostTypeArchive { post_type: p } if p == post_type)
    }

    /// Check for a term archive of `taxonomy`.
    pub fn is_tax(&self, taxonomy: &str) -> bool {
        matches!(self, Self::TaxonomyArchive { taxonomy: t } if t == taxonomy)
    }
}
