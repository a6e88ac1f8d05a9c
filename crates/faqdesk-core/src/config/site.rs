//! Site URL configuration.

use serde::{Deserialize, Serialize};

/// Public site settings used to build entry permalinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site root URL without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Rewrite slug for single FAQ entries.
    #[serde(default = "default_question_base")]
    pub question_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            question_base: default_question_base(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost".to_string()
}

fn default_question_base() -> String {
    "question".to_string()
}
