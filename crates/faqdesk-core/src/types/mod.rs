//! Shared value types used across crates.

pub mod value;

pub use value::{absint, absint_value, is_blank, is_truthy};
