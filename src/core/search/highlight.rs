//! Marking matched substrings for presentational emphasis
//!
//! The renderer produces a markup string in which every matched span is
//! wrapped in `<mark>` tags and every other span is HTML-escaped. Escaping is
//! applied after splitting on match boundaries, never before, so the markers
//! themselves are never mangled and no span is escaped twice.

use crate::core::search::pattern::CompiledPattern;

/// Escape the HTML-significant characters in `text`
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap every match of `compiled` in `text` with `<mark>` markers
///
/// With no pattern, or empty text, the result is just the escaped input.
/// Adjacent matches are each wrapped independently. Zero-width matches
/// highlight nothing and are skipped; iteration always terminates.
pub fn highlight(text: &str, compiled: Option<&CompiledPattern>) -> String {
    let Some(compiled) = compiled else {
        return escape_html(text);
    };
    if text.is_empty() {
        return escape_html(text);
    }

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for m in compiled.regex().find_iter(text) {
        if m.is_empty() {
            continue;
        }
        output.push_str(&escape_html(&text[cursor..m.start()]));
        output.push_str("<mark>");
        output.push_str(&escape_html(m.as_str()));
        output.push_str("</mark>");
        cursor = m.end();
    }
    output.push_str(&escape_html(&text[cursor..]));
    output
}
