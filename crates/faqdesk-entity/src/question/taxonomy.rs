//! The two FAQ taxonomies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Taxonomies used to organize FAQ entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Taxonomy {
    /// Hierarchical topics (`faq-topic`).
    #[serde(rename = "faq-topic")]
    Topic,
    /// Flat tags (`faq-tags`).
    #[serde(rename = "faq-tags")]
    Tag,
}

impl Taxonomy {
    /// Both taxonomies, topics first.
    pub const ALL: [Taxonomy; 2] = [Taxonomy::Topic, Taxonomy::Tag];

    /// Return the registered taxonomy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Topic => "faq-topic",
            Self::Tag => "faq-tags",
        }
    }
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Taxonomy {
    type Err = faqdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "faq-topic" => Ok(Self::Topic),
            "faq-tags" => Ok(Self::Tag),
            _ => Err(faqdesk_core::AppError::validation(format!(
                "Unknown taxonomy: '{s}'"
            ))),
        }
    }
}
