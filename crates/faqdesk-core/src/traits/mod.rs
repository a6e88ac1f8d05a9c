//! Core traits defined in `faqdesk-core` and implemented by host adapters.

pub mod content;
pub mod options;

pub use content::{ContentTransformer, IdentityTransformer};
pub use options::OptionStore;
