//! Normalize a heading tag.

use clap::Args;

use faqdesk_core::error::AppError;
use faqdesk_render::helper::check_htype_tag;

/// Arguments for the heading command
#[derive(Debug, Args)]
pub struct HeadingArgs {
    /// Tag to check, e.g. h2
    pub tag: String,
}

/// Execute the heading command
pub fn execute(args: &HeadingArgs) -> Result<(), AppError> {
    println!("{}", check_htype_tag(&args.tag));
    Ok(())
}
