//! Question repositories.

pub mod memory;
pub mod question;

pub use memory::MemoryQuestionRepository;
pub use question::{FetchRequest, QuestionRepository};
