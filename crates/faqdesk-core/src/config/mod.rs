//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from an
//! optional TOML file overlaid with `FAQDESK__*` environment variables. Each
//! sub-module represents a logical configuration section and every field has
//! a serde default, so an empty source yields a usable configuration.

pub mod data;
pub mod filters;
pub mod hooks;
pub mod logging;
pub mod site;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::data::DataConfig;
use self::filters::FilterOverrides;
use self::hooks::HookConfig;
use self::logging::LoggingConfig;
use self::site::SiteConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Site URL settings used for permalinks.
    #[serde(default)]
    pub site: SiteConfig,
    /// Data file locations and query defaults.
    #[serde(default)]
    pub data: DataConfig,
    /// Filter dispatch settings.
    #[serde(default)]
    pub hooks: HookConfig,
    /// Static display option overrides per view.
    #[serde(default)]
    pub filters: FilterOverrides,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the environment.
    ///
    /// When `path` is given the file must exist under exactly that name; its
    /// extension selects the format. Environment variables
    /// prefixed with `FAQDESK__` override file values, using `__` as the
    /// section separator (e.g. `FAQDESK__DATA__DEFAULT_LIMIT=5`).
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            let file = Path::new(path);
            if !file.is_file() {
                return Err(AppError::not_found(format!(
                    "Configuration file '{path}' does not exist"
                )));
            }
            builder = builder.add_source(config::File::from(file).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("FAQDESK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
