//! FAQ entry entities.

pub mod model;
pub mod status;
pub mod taxonomy;

pub use model::FaqEntry;
pub use status::EntryStatus;
pub use taxonomy::Taxonomy;

/// Content type identifier of FAQ entries.
pub const QUESTION_POST_TYPE: &str = "question";
