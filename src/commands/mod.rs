//! CLI command definitions and dispatch.

pub mod filters;
pub mod heading;
pub mod option;
pub mod render;
pub mod shortcode;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use faqdesk_core::config::AppConfig;
use faqdesk_core::error::AppError;
use faqdesk_data::{JsonOptionStore, MemoryQuestionRepository, SitePermalinks};
use faqdesk_plugin::{ConfiguredOverrides, FilterDispatcher, FilterRegistry};
use faqdesk_render::{ParagraphTransformer, RequestContext, ShortcodeRenderer};
use faqdesk_render::shortcode::attrs::PAGE_QUERY_PARAM;

/// FAQ Desk: render FAQ shortcodes from the command line
#[derive(Debug, Parser)]
#[command(name = "faqdesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a single shortcode
    Shortcode(shortcode::ShortcodeArgs),
    /// Expand every FAQ shortcode in a content file
    Render(render::RenderArgs),
    /// Look up a legacy setting
    #[command(name = "option")]
    GetOption(option::OptionArgs),
    /// Normalize a heading tag
    Heading(heading::HeadingArgs),
    /// Show the resolved value of every filter point
    Filters(filters::FiltersArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Shortcode(args) => shortcode::execute(args, config).await,
            Commands::Render(args) => render::execute(args, config).await,
            Commands::GetOption(args) => option::execute(args, config).await,
            Commands::Heading(args) => heading::execute(args),
            Commands::Filters(args) => filters::execute(args, config).await,
        }
    }
}

/// Request options shared by the rendering commands
#[derive(Debug, Clone, clap::Args)]
pub struct RequestArgs {
    /// Value of the page query parameter
    #[arg(short, long)]
    pub page: Option<String>,

    /// URL of the page the shortcode is rendered on (defaults to the site URL)
    #[arg(long)]
    pub permalink: Option<String>,
}

impl RequestArgs {
    /// Builds the front-end request context.
    pub fn context(&self, config: &AppConfig) -> RequestContext {
        let permalink = self
            .permalink
            .clone()
            .unwrap_or_else(|| config.site.base_url.clone());

        let ctx = RequestContext::front_end(permalink);
        match &self.page {
            Some(page) => ctx.with_query(PAGE_QUERY_PARAM, page.clone()),
            None => ctx,
        }
    }
}

/// Helper: filter dispatcher with the configured overrides registered
pub async fn build_dispatcher(config: &AppConfig) -> FilterDispatcher {
    let registry = Arc::new(FilterRegistry::new());
    let registered = ConfiguredOverrides::new(config.filters.clone())
        .register(&registry)
        .await;
    info!(points = registered, "Registered configured filter overrides");

    FilterDispatcher::new(registry)
        .with_timeout(Duration::from_millis(config.hooks.handler_timeout_ms))
}

/// Helper: load the FAQ entries, or an empty set when the file is absent
pub async fn load_repository(config: &AppConfig) -> Result<MemoryQuestionRepository, AppError> {
    let path = Path::new(&config.data.faqs_path);
    if !path_exists(path).await {
        warn!(path = %path.display(), "FAQ data file not found, using an empty set");
        return Ok(MemoryQuestionRepository::new(Vec::new(), config.data.default_limit));
    }

    MemoryQuestionRepository::from_json_file(path, config.data.default_limit).await
}

/// Helper: load the option records, or none when the file is absent
pub async fn load_options(config: &AppConfig) -> Result<JsonOptionStore, AppError> {
    let path = Path::new(&config.data.options_path);
    if !path_exists(path).await {
        warn!(path = %path.display(), "Options file not found, using no records");
        return Ok(JsonOptionStore::empty());
    }

    JsonOptionStore::load(path).await
}

/// Helper: wire the shortcode renderer from config
pub async fn build_renderer(config: &AppConfig) -> Result<ShortcodeRenderer, AppError> {
    let repo = load_repository(config).await?;
    let filters = build_dispatcher(config).await;

    Ok(ShortcodeRenderer::new(
        Arc::new(repo),
        Arc::new(SitePermalinks::new(&config.site)),
        Arc::new(ParagraphTransformer),
        filters,
    ))
}

async fn path_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}
