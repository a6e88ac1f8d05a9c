//! Look up a key in the legacy settings record.

use clap::Args;
use serde_json::Value;

use faqdesk_core::config::AppConfig;
use faqdesk_core::error::AppError;
use faqdesk_render::helper::get_legacy_option;

/// Arguments for the option command
#[derive(Debug, Args)]
pub struct OptionArgs {
    /// Settings key
    pub key: String,

    /// Fallback value, parsed as JSON when possible
    #[arg(short, long)]
    pub default: Option<String>,
}

/// Execute the option command
///
/// Prints the value as JSON, or `false` when there is no answer.
pub async fn execute(args: &OptionArgs, config: &AppConfig) -> Result<(), AppError> {
    let store = super::load_options(config).await?;
    let default = args.default.as_deref().map(parse_default).unwrap_or(Value::Null);

    match get_legacy_option(&store, &args.key, default).await {
        Some(value) => println!("{}", serde_json::to_string(&value)?),
        None => println!("false"),
    }

    Ok(())
}

/// Reads `raw` as JSON, falling back to a plain string.
fn parse_default(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
