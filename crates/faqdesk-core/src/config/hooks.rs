//! Filter dispatch configuration.

use serde::{Deserialize, Serialize};

/// Settings for the filter dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookConfig {
    /// Maximum time a single filter handler may take, in milliseconds.
    #[serde(default = "default_handler_timeout")]
    pub handler_timeout_ms: u64,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            handler_timeout_ms: default_handler_timeout(),
        }
    }
}

fn default_handler_timeout() -> u64 {
    5_000
}
