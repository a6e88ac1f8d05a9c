//! Filter system: registry, dispatcher, and filter point definitions.

pub mod definitions;
pub mod dispatcher;
pub mod registry;

pub use definitions::{FilterAction, FilterPayload, FilterPoint, FilterResult, ViewContext};
pub use dispatcher::FilterDispatcher;
pub use registry::{FilterHandler, FilterRegistry};
