//! Data source configuration.

use serde::{Deserialize, Serialize};

/// Locations of the reference data files and query defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file holding the FAQ entries.
    #[serde(default = "default_faqs_path")]
    pub faqs_path: String,
    /// JSON file holding the options records (e.g. `faq_options`).
    #[serde(default = "default_options_path")]
    pub options_path: String,
    /// Page size used when a request carries no limit.
    #[serde(default = "default_limit")]
    pub default_limit: i64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            faqs_path: default_faqs_path(),
            options_path: default_options_path(),
            default_limit: default_limit(),
        }
    }
}

fn default_faqs_path() -> String {
    "data/faqs.json".to_string()
}

fn default_options_path() -> String {
    "data/options.json".to_string()
}

fn default_limit() -> i64 {
    10
}
