//! HTML escaping and a minimal element builder.
//!
//! Every field has its own escaping rule: attribute values go through
//! [`escape_attr`], visible text through [`escape_html`], links through
//! [`escape_url`]. Entry bodies and pagination markup are trusted and are
//! inserted raw.

/// URL schemes allowed in emitted links.
const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "gopher", "nntp", "feed", "telnet",
    "sms", "tel",
];

/// Escapes text for use inside an element.
///
/// Encodes `& < > " '`. Existing character references such as `&amp;` or
/// `&#8217;` are kept, so already-escaped titles are not encoded twice.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for (i, c) in input.char_indices() {
        match c {
            '&' if is_char_reference(&input[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }

    out
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attr(input: &str) -> String {
    escape_html(input)
}

/// Cleans a URL for use in an `href` attribute.
///
/// Spaces become `%20`, characters outside the URL alphabet are dropped,
/// and links with a scheme outside [`ALLOWED_PROTOCOLS`] are rejected
/// (an empty string is returned). `&` and `'` are emitted as numeric
/// references.
pub fn escape_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let cleaned: String = trimmed
        .replace(' ', "%20")
        .chars()
        .filter(|c| is_url_char(*c))
        .collect();

    if let Some(scheme) = scheme_of(&cleaned) {
        let scheme = scheme.to_ascii_lowercase();
        if !ALLOWED_PROTOCOLS.contains(&scheme.as_str()) {
            return String::new();
        }
    }

    cleaned.replace('&', "&#038;").replace('\'', "&#039;")
}

/// Whether `s` (starting at `&`) begins with a named or numeric reference.
fn is_char_reference(s: &str) -> bool {
    let Some(end) = s.find(';') else {
        return false;
    };
    let body = &s[1..end];

    if let Some(num) = body.strip_prefix('#') {
        if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
        }
        return !num.is_empty() && num.chars().all(|c| c.is_ascii_digit());
    }

    let mut chars = body.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Characters kept in a cleaned URL.
fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || "-~+_.?#=!&;,/:%@$|*'()[]".contains(c)
        || !c.is_ascii()
}

/// The scheme of an absolute URL, if it has one.
fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let before = &url[..colon];
    if before.is_empty() || before.contains(['/', '?', '#']) {
        return None;
    }
    Some(before)
}

/// A child of an [`Element`].
#[derive(Debug, Clone)]
enum Node {
    /// A nested element.
    Element(Element),
    /// Escaped text.
    Text(String),
    /// Trusted markup.
    Raw(String),
}

/// An HTML element under construction.
///
/// Attributes render in insertion order, always double-quoted.
#[derive(Debug, Clone)]
pub struct Element {
    /// Tag name.
    tag: String,
    /// Attribute names with their escaped values.
    attrs: Vec<(&'static str, String)>,
    /// Child nodes.
    children: Vec<Node>,
}

impl Element {
    /// Starts a new element.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: escape_attr(tag),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute, escaping its value.
    pub fn attr(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.attrs.push((name, escape_attr(value.as_ref())));
        self
    }

    /// Adds a link attribute, cleaning its value as a URL.
    pub fn url_attr(mut self, name: &'static str, url: &str) -> Self {
        self.attrs.push((name, escape_url(url)));
        self
    }

    /// Appends escaped text.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(escape_html(text)));
        self
    }

    /// Appends trusted markup.
    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    /// Appends a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends a child element when present.
    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Appends several child elements.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    /// Renders the element into `out`.
    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');

        for child in &self.children {
            match child {
                Node::Element(el) => el.write_to(out),
                Node::Text(text) | Node::Raw(text) => out.push_str(text),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    /// Renders the element to a new string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}
