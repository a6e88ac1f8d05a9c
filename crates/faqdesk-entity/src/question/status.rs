//! Entry publication status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Visible on the public site.
    #[default]
    Publish,
    /// Work in progress.
    Draft,
    /// Visible to editors only.
    Private,
}

impl EntryStatus {
    /// Check if entries with this status appear in public listings.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Publish)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publish => "publish",
            Self::Draft => "draft",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = faqdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "publish" => Ok(Self::Publish),
            "draft" => Ok(Self::Draft),
            "private" => Ok(Self::Private),
            _ => Err(faqdesk_core::AppError::validation(format!(
                "Invalid entry status: '{s}'. Expected one of: publish, draft, private"
            ))),
        }
    }
}
