//! Show what each filter point resolves to.

use clap::Args;

use faqdesk_core::config::AppConfig;
use faqdesk_core::error::AppError;
use faqdesk_plugin::{FilterPoint, ViewContext};

/// Arguments for the filters command
#[derive(Debug, Args)]
pub struct FiltersArgs {
    /// View context: main or list
    #[arg(long, default_value = "main")]
    pub view: ViewContext,
}

/// Execute the filters command
pub async fn execute(args: &FiltersArgs, config: &AppConfig) -> Result<(), AppError> {
    let dispatcher = super::build_dispatcher(config).await;

    for point in FilterPoint::ALL {
        let value = dispatcher.resolve(point, args.view).await;
        let handlers = dispatcher.registry().handler_count(point).await;
        println!(
            "  {:<40} {} ({} handler{})",
            format!("{}:", point),
            value,
            handlers,
            if handlers == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
