//! Plain-text excerpts for listings and search.

use serde_json::Value;

use super::document::raw_blocks;
use super::sanitize::strip_markup_collapsed;

/// Appended to truncated text.
const ELLIPSIS: char = '…';

/// Extract the first readable text from a content value.
///
/// Looks at each block in order and returns the first non-blank of: a
/// top-level `text`/`content`/`value` string, the stripped `data.text`, or
/// the first non-blank stripped `data.items` entry. Returns an empty string
/// when nothing readable is found.
pub fn extract_text(content: &Value) -> String {
    let parsed;
    let content = match content {
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(value) => {
                parsed = value;
                &parsed
            }
            Err(_) => return String::new(),
        },
        other => other,
    };

    for block in raw_blocks(content).iter().filter(|b| b.is_object()) {
        let direct = ["text", "content", "value"]
            .iter()
            .filter_map(|key| block.get(key).and_then(Value::as_str))
            .map(strip_markup_collapsed)
            .find(|s| !s.is_empty());
        if let Some(text) = direct {
            return text;
        }

        let Some(data) = block.get("data") else {
            continue;
        };
        if let Some(text) = data.get("text").and_then(Value::as_str) {
            let stripped = strip_markup_collapsed(text);
            if !stripped.is_empty() {
                return stripped;
            }
        }
        if let Some(items) = data.get("items").and_then(Value::as_array) {
            let first = items
                .iter()
                .filter_map(|item| {
                    item.as_str()
                        .or_else(|| item.get("content").and_then(Value::as_str))
                })
                .map(strip_markup_collapsed)
                .find(|s| !s.is_empty());
            if let Some(text) = first {
                return text;
            }
        }
    }
    String::new()
}

/// Trim and shorten `s` to at most `max_chars` characters, ending with `…`
/// when it had to be cut.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let trimmed = s.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let kept: String = trimmed
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect();
    let mut out = kept.trim_end().to_string();
    out.push(ELLIPSIS);
    out
}
