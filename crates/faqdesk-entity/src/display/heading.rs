//! Heading level used for entry titles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six HTML heading levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    /// `h1`
    H1,
    /// `h2`
    H2,
    /// `h3`, the fallback for anything unrecognized.
    #[default]
    H3,
    /// `h4`
    H4,
    /// `h5`
    H5,
    /// `h6`
    H6,
}

impl HeadingTag {
    /// Parse an exact tag token, or `None` for anything else.
    ///
    /// Matching is case-sensitive: `"H2"` is not admissible.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            _ => None,
        }
    }

    /// Parse a tag token, coercing anything inadmissible to `h3`.
    pub fn normalize(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }

    /// Return the tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
