//! Display value objects.

pub mod heading;

pub use heading::HeadingTag;
