//! # faqdesk-plugin
//!
//! Extension framework for FAQ Desk. Provides:
//!
//! - Named filter points with a documented default value each
//! - Filter registry with priority-ordered registration
//! - Filter dispatcher threading a value through every handler
//! - Ready-made handlers: static config overrides and closures

pub mod handlers;
pub mod hooks;

pub use handlers::{ConfiguredOverrides, FilterFn};
pub use hooks::definitions::{FilterAction, FilterPayload, FilterPoint, FilterResult, ViewContext};
pub use hooks::dispatcher::FilterDispatcher;
pub use hooks::registry::{FilterHandler, FilterRegistry};
