//! HTML escaping, tag construction, and highlighting primitives.
//!
//! Every other module renders through these helpers so that quoting and
//! escaping stay in one place.

/// Escapes HTML special characters in a string.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders a paired tag: `<name attrs>content</name>`.
///
/// Attribute values are escaped; `content` is embedded verbatim, so callers
/// escape any raw text before passing it in. Attributes are emitted in
/// sorted key order for deterministic output.
pub fn content_tag(name: &str, content: &str, attrs: &[(&str, &str)]) -> String {
    format!("<{name}{}>{content}</{name}>", render_attrs(attrs))
}

/// Renders a self-closing tag: `<name attrs />`.
pub fn tag(name: &str, attrs: &[(&str, &str)]) -> String {
    format!("<{name}{} />", render_attrs(attrs))
}

fn render_attrs(attrs: &[(&str, &str)]) -> String {
    let mut sorted: Vec<&(&str, &str)> = attrs.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);
    sorted
        .iter()
        .map(|(k, v)| format!(" {}=\"{}\"", k, escape_html(v)))
        .collect()
}

/// Wraps a script statement in a `<script>` tag with a CDATA guard, the way
/// the client widget expects inline wiring to be delivered.
pub fn javascript_tag(content: &str) -> String {
    format!("<script type=\"text/javascript\">\n//<![CDATA[\n{content}\n//]]>\n</script>")
}

/// Quotes a string as a single-quoted JavaScript literal, escaping
/// backslashes, quotes, and newlines.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Wraps occurrences of `phrase` in `text` with an emphasis marker
/// (`<strong class="highlight">…</strong>`), escaping both the matched and
/// the surrounding text. Matching is ASCII case-insensitive.
///
/// An empty phrase highlights nothing and returns the escaped text.
pub fn highlight(text: &str, phrase: &str) -> String {
    if phrase.is_empty() {
        return escape_html(text);
    }

    let bytes = text.as_bytes();
    let needle = phrase.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    let mut last = 0;

    while i + needle.len() <= bytes.len() {
        let end = i + needle.len();
        if text.is_char_boundary(i)
            && text.is_char_boundary(end)
            && bytes[i..end].eq_ignore_ascii_case(needle)
        {
            out.push_str(&escape_html(&text[last..i]));
            out.push_str("<strong class=\"highlight\">");
            out.push_str(&escape_html(&text[i..end]));
            out.push_str("</strong>");
            i = end;
            last = end;
        } else {
            i += 1;
        }
    }

    out.push_str(&escape_html(&text[last..]));
    out
}
