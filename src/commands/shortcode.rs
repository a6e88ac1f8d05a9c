//! Render a single shortcode.

use clap::Args;
use tracing::debug;

use faqdesk_core::config::AppConfig;
use faqdesk_core::error::AppError;
use faqdesk_render::ShortcodeTag;
use faqdesk_render::shortcode::RawAttrs;

use super::RequestArgs;

/// Arguments for the shortcode command
#[derive(Debug, Args)]
pub struct ShortcodeArgs {
    /// Shortcode tag: faq, faqlist or faqtaxlist
    pub tag: ShortcodeTag,

    /// Attribute as key=value, repeatable
    #[arg(short, long = "attr", value_parser = parse_attr)]
    pub attrs: Vec<(String, String)>,

    #[command(flatten)]
    pub request: RequestArgs,
}

/// Execute the shortcode command
pub async fn execute(args: &ShortcodeArgs, config: &AppConfig) -> Result<(), AppError> {
    let renderer = super::build_renderer(config).await?;
    let ctx = args.request.context(config);
    let attrs: RawAttrs = args.attrs.iter().cloned().collect();

    match renderer.render(args.tag, &attrs, &ctx).await {
        Some(markup) => println!("{}", markup),
        None => debug!(shortcode = %args.tag, "Shortcode produced no output"),
    }

    Ok(())
}

/// Parses `key=value`; keys are lowercased like attribute names in content.
fn parse_attr(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing attribute name in '{}'", raw));
    }

    Ok((key.to_lowercase(), value.to_string()))
}
