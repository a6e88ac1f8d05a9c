//! Reference content transformer.

use std::sync::LazyLock;

use regex::Regex;

use faqdesk_core::traits::ContentTransformer;

/// Blank-line block separator.
static BLOCK_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("valid block separator pattern"));

/// Opening tags that already form a block and are left unwrapped.
static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^<(?:p|div|ul|ol|li|dl|table|thead|tbody|tr|blockquote|pre|figure|section|article|aside|form|hr|h[1-6])[\s/>]",
    )
    .expect("valid block tag pattern")
});

/// Wraps plain-text paragraphs in `<p>` and turns single newlines into
/// `<br />`, leaving blocks that already start with a block-level tag alone.
///
/// This covers paragraph wrapping only. Embeds are not resolved, and
/// shortcodes inside an entry body (`[faq]`, `[gallery]`, ...) are left as
/// literal text rather than expanded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphTransformer;

impl ContentTransformer for ParagraphTransformer {
    fn transform(&self, content: &str) -> String {
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        if normalized.trim().is_empty() {
            return String::new();
        }

        let mut out = String::new();
        for block in BLOCK_SPLIT.split(normalized.trim()) {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }

            if BLOCK_TAG.is_match(block) {
                out.push_str(block);
            } else {
                out.push_str("<p>");
                out.push_str(&block.replace('\n', "<br />\n"));
                out.push_str("</p>");
            }
            out.push('\n');
        }

        out
    }
}
