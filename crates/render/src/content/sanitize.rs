//! HTML sanitizing and escaping for user-authored text.
//!
//! Two levels are used by the block renderer:
//! - [`sanitize_inline`] keeps a small set of inline formatting tags
//!   (`<b>`, `<strong>`, `<i>`, `<em>`, `<u>`, `<br>`, `<code>`, `<a>`) and
//!   drops everything else. Anchors survive only with an `http(s)` target.
//! - [`strip_markup`] removes all markup and returns plain text, which the
//!   caller escapes with [`html_escape`].
//!
//! Both parse with ammonia (html5ever), so the input is never executed and
//! never fetches anything while being cleaned.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ammonia::{Builder, UrlRelative};
use regex::Regex;

/// Inline tags allowed inside paragraphs and quotes.
pub const INLINE_TAGS: &[&str] = &["b", "strong", "i", "em", "u", "br", "code", "a"];

/// Elements whose content is discarded together with the tag.
const CONTENT_DROPPING_TAGS: &[&str] = &["script", "style"];

static INLINE_SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::empty();
    builder
        .tags(INLINE_TAGS.iter().copied().collect())
        .tag_attributes(HashMap::from([("a", HashSet::from(["href"]))]))
        .generic_attributes(HashSet::new())
        .url_schemes(HashSet::from(["http", "https"]))
        .url_relative(UrlRelative::Deny)
        .attribute_filter(admit_href)
        .link_rel(None)
        .clean_content_tags(CONTENT_DROPPING_TAGS.iter().copied().collect())
        .strip_comments(true);
    builder
});

static TEXT_ONLY: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::empty();
    builder
        .clean_content_tags(CONTENT_DROPPING_TAGS.iter().copied().collect())
        .strip_comments(true);
    builder
});

#[allow(clippy::expect_used)]
static HTTP_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid href regex"));

/// Keep an anchor `href` only when its literal value starts with `http://` or
/// `https://`. Scheme-relative forms the URL parser accepts (`https:host`,
/// `http:/\host`, leading whitespace) are dropped.
fn admit_href<'u>(element: &str, attribute: &str, value: &'u str) -> Option<Cow<'u, str>> {
    if element == "a" && attribute == "href" && !HTTP_HREF.is_match(value) {
        return None;
    }
    Some(Cow::Borrowed(value))
}

// After the inline pass an anchor either carries exactly one `href` (already
// restricted to http/https) or no attribute at all.
#[allow(clippy::expect_used)]
static BARE_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<a>(.*?)</a>").expect("valid bare anchor regex"));

#[allow(clippy::expect_used)]
static LINKED_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a href="([^"]*)">"#).expect("valid linked anchor regex"));

/// Sanitize user-provided rich text, allowing only safe inline HTML.
///
/// Disallowed elements are unwrapped to their text (`<script>` and `<style>`
/// lose their content as well). SVG/MathML subtrees and `<template>` content
/// are dropped whole by the parser. Every attribute is removed. Anchors whose
/// `href` is not `http(s)` are replaced by their text; the rest open in a new
/// tab with `rel="noopener noreferrer"`.
///
/// Blank input yields an empty string.
pub fn sanitize_inline(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    let cleaned = INLINE_SANITIZER.clean(input).to_string();
    let unwrapped = BARE_ANCHOR.replace_all(&cleaned, "${1}");
    LINKED_ANCHOR
        .replace_all(
            &unwrapped,
            r#"<a href="${1}" target="_blank" rel="noopener noreferrer">"#,
        )
        .into_owned()
}

/// Remove all markup and return the plain text, trimmed.
///
/// Entities are decoded, so the result must be escaped before it is placed
/// back into HTML.
pub fn strip_markup(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    let text = TEXT_ONLY.clean(input).to_string();
    html_escape::decode_html_entities(&text).trim().to_string()
}

/// [`strip_markup`] followed by collapsing runs of whitespace to one space.
pub fn strip_markup_collapsed(input: &str) -> String {
    collapse_whitespace(&strip_markup(input))
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape a string for safe use in HTML text and quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
