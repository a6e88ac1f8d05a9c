//! # faqdesk-entity
//!
//! Domain entity models for FAQ Desk. Every type here is a read-only value
//! object handed in by the host platform: FAQ entries and their taxonomies,
//! the admin screen descriptor, the front-end queried object, and the
//! heading level used when rendering titles.
//!
//! Entities are data-only; no filesystem or network side effects.

pub mod display;
pub mod question;
pub mod screen;

pub use display::HeadingTag;
pub use question::{EntryStatus, FaqEntry, Taxonomy, QUESTION_POST_TYPE};
pub use screen::{QueriedObject, Screen};
