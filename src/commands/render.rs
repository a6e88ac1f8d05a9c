//! Expand the FAQ shortcodes in a content file.

use std::path::PathBuf;

use clap::Args;

use faqdesk_core::config::AppConfig;
use faqdesk_core::error::AppError;

use super::RequestArgs;

/// Arguments for the render command
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// File holding page content with shortcodes
    pub content: PathBuf,

    #[command(flatten)]
    pub request: RequestArgs,
}

/// Execute the render command
pub async fn execute(args: &RenderArgs, config: &AppConfig) -> Result<(), AppError> {
    let content = tokio::fs::read_to_string(&args.content)
        .await
        .map_err(|e| AppError::read_failed("content", &args.content, e))?;

    let renderer = super::build_renderer(config).await?;
    let ctx = args.request.context(config);

    print!("{}", renderer.expand_shortcodes(&content, &ctx).await);
    Ok(())
}
