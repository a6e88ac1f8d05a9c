//! Content transformation trait.

/// Transforms a stored entry body into display markup.
///
/// Stands in for the host platform's content pipeline (paragraph wrapping,
/// embeds, nested shortcodes). Implementations may cover only part of that
/// pipeline. Output is emitted without further escaping.
pub trait ContentTransformer: Send + Sync + 'static {
    /// Transform raw body text into markup.
    fn transform(&self, content: &str) -> String;
}

/// A transformer that returns the body untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransformer;

impl ContentTransformer for IdentityTransformer {
    fn transform(&self, content: &str) -> String {
        content.to_string()
    }
}
