//! # faqdesk-data
//!
//! The data collaborator contract consumed by the shortcode views, plus
//! reference adapters so the pipeline can run outside a host platform:
//!
//! - `QuestionRepository`: entry lookup and page counting
//! - `MemoryQuestionRepository`: entries held in memory, loadable from JSON
//! - `JsonOptionStore`: option records read from a JSON file
//! - `SitePermalinks`: entry permalinks derived from the site config

pub mod options;
pub mod permalink;
pub mod repositories;

pub use options::JsonOptionStore;
pub use permalink::{PermalinkResolver, SitePermalinks};
pub use repositories::{FetchRequest, MemoryQuestionRepository, QuestionRepository};
