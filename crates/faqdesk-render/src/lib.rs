//! # faqdesk-render
//!
//! Presentation layer of FAQ Desk:
//!
//! - `helper`: legacy option lookup, admin screen checks, front-end
//!   location predicate, heading tag normalization
//! - `shortcode`: the `[faq]`, `[faqlist]` and `[faqtaxlist]` views and
//!   the expander that finds them in stored content
//! - `options`: display options resolved once per render through the
//!   named filter points
//! - `pagination`: query-parameter page links
//! - `html`: per-field escaping and a small element builder
//!
//! Rendering never fails: missing data renders nothing, bad option values
//! fall back to their defaults.

pub mod content;
pub mod context;
pub mod helper;
pub mod html;
pub mod options;
pub mod pagination;
pub mod shortcode;

pub use content::ParagraphTransformer;
pub use context::RequestContext;
pub use shortcode::{ShortcodeRenderer, ShortcodeTag};
