//! Finds FAQ shortcodes in stored content and expands them.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::attrs::RawAttrs;
use super::{ShortcodeRenderer, ShortcodeTag};
use crate::context::RequestContext;

/// `[tag attrs]`, optionally doubled (`[[tag]]`) to escape it.
static SHORTCODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(\[?)(faqtaxlist|faqlist|faq)\b([^\[\]]*?)(/?)\](\]?)")
        .expect("valid shortcode pattern")
});

/// One attribute: `k="v"`, `k='v'`, `k=v`, or a bare positional value.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([\w-]+)\s*=\s*"([^"]*)"(?:\s|$)|([\w-]+)\s*=\s*'([^']*)'(?:\s|$)|([\w-]+)\s*=\s*([^\s'"]+)(?:\s|$)|"([^"]*)"(?:\s|$)|'([^']*)'(?:\s|$)|(\S+)(?:\s|$)"#,
    )
    .expect("valid attribute pattern")
});

/// Parses an attribute string.
///
/// Keys are lowercased. Positional values carry no key and are ignored.
pub fn parse_attrs(text: &str) -> RawAttrs {
    let normalized = text.replace(['\u{a0}', '\u{200b}'], " ");
    let mut attrs = RawAttrs::new();

    for caps in ATTRIBUTE.captures_iter(&normalized) {
        let pair = [(1, 2), (3, 4), (5, 6)]
            .into_iter()
            .find_map(|(k, v)| Some((caps.get(k)?, caps.get(v)?)));

        if let Some((key, value)) = pair {
            attrs.insert(key.as_str().to_lowercase(), value.as_str().to_string());
        }
    }

    attrs
}

/// A shortcode occurrence inside content.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Text copied through unchanged.
    Literal(String),
    /// A shortcode to render.
    Shortcode(ShortcodeTag, RawAttrs),
}

/// Splits content into literal text and shortcodes.
fn segments(content: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;

    for caps in SHORTCODE.captures_iter(content) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        let literal = &content[last..whole.start()];
        if !literal.is_empty() {
            out.push(Segment::Literal(literal.to_string()));
        }
        last = whole.end();

        out.push(classify(&caps));
    }

    if last < content.len() {
        out.push(Segment::Literal(content[last..].to_string()));
    }

    out
}

/// Decides what one regex match stands for.
fn classify(caps: &Captures<'_>) -> Segment {
    let whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
    let group = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or_default();

    // [[faq]] renders as the literal [faq]
    if group(1) == "[" && group(5) == "]" {
        return Segment::Literal(whole[1..whole.len() - 1].to_string());
    }

    // A hyphen after the name means a different shortcode, e.g. [faq-archive]
    let attr_text = group(3);
    if attr_text.starts_with('-') {
        return Segment::Literal(whole.to_string());
    }

    // Half-escaped, e.g. [[faq]
    if !group(1).is_empty() || !group(5).is_empty() {
        return Segment::Literal(whole.to_string());
    }

    match group(2).parse::<ShortcodeTag>() {
        Ok(tag) => Segment::Shortcode(tag, parse_attrs(attr_text)),
        Err(_) => Segment::Literal(whole.to_string()),
    }
}

impl ShortcodeRenderer {
    /// Expands every FAQ shortcode in `content`.
    ///
    /// Shortcodes producing no output are replaced with nothing.
    pub async fn expand_shortcodes(&self, content: &str, ctx: &RequestContext) -> String {
        let mut out = String::with_capacity(content.len());

        for segment in segments(content) {
            match segment {
                Segment::Literal(text) => out.push_str(&text),
                Segment::Shortcode(tag, attrs) => {
                    debug!(shortcode = %tag, attrs = attrs.len(), "Expanding shortcode");
                    if let Some(markup) = self.render(tag, &attrs, ctx).await {
                        out.push_str(&markup);
                    }
                }
            }
        }

        out
    }
}
