//! Content documents and their blocks.
//!
//! Article content arrives as loosely-typed JSON. Two historical block shapes
//! are in circulation:
//!
//! ```json
//! { "type": "image", "url": "https://…", "caption": "…" }
//! { "type": "image", "data": { "file": { "url": "https://…" }, "caption": "…" } }
//! ```
//!
//! [`ContentDocument::normalize`] maps both onto a single [`Block`] enum so the
//! renderer never has to probe raw JSON.

use serde_json::Value;

/// Ordered list of blocks making up one piece of content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDocument {
    pub blocks: Vec<Block>,
}

/// Ordered or unordered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

/// One content unit, normalized from either historical shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph {
        text: String,
    },
    Heading {
        /// Raw level as authored; validated at render time.
        level: Option<i64>,
        text: String,
    },
    Image {
        url: String,
        caption: String,
        /// Best-effort file name or storage key, used when the URL is local.
        file_hint: Option<String>,
    },
    Embed {
        url: String,
        caption: String,
    },
    List {
        style: ListStyle,
        items: Vec<String>,
    },
    Quote {
        text: String,
        caption: String,
    },
    Delimiter,
    Video {
        url: String,
    },
    /// Unrecognized type without usable text. Rendered as nothing.
    Unknown {
        type_name: String,
    },
}

impl Block {
    /// Lowercased type name this block was normalized from.
    pub fn type_name(&self) -> &str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { .. } => "heading",
            Block::Image { .. } => "image",
            Block::Embed { .. } => "embed",
            Block::List { .. } => "list",
            Block::Quote { .. } => "quote",
            Block::Delimiter => "delimiter",
            Block::Video { .. } => "video",
            Block::Unknown { type_name } => type_name,
        }
    }

    /// Normalize one raw block value.
    ///
    /// Recognized type names win. A block of any other type that carries a
    /// `text` field (top level or under `data`) is treated as a paragraph.
    pub fn from_value(raw: &Value) -> Self {
        if !raw.is_object() {
            return Block::Unknown {
                type_name: String::new(),
            };
        }
        let fields = Fields::new(raw);
        let type_name = raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_lowercase();

        match type_name.as_str() {
            "paragraph" => Block::Paragraph {
                text: fields.text("text"),
            },
            "heading" | "header" => Block::Heading {
                level: fields.level(),
                text: fields.text("text"),
            },
            "image" => Block::Image {
                url: fields
                    .top_text(&["url", "src"])
                    .or_else(|| fields.nested_text("file", "url"))
                    .or_else(|| fields.data_text(&["url", "src"]))
                    .unwrap_or_default(),
                caption: fields.text("caption"),
                file_hint: fields.file_hint(),
            },
            "embed" => Block::Embed {
                url: fields
                    .first_text(&["embed", "source", "url"])
                    .unwrap_or_default(),
                caption: fields.text("caption"),
            },
            "list" => Block::List {
                style: match fields.text("style").to_lowercase().as_str() {
                    "ordered" => ListStyle::Ordered,
                    _ => ListStyle::Unordered,
                },
                items: fields.items(),
            },
            "quote" => Block::Quote {
                text: fields.text("text"),
                caption: fields.text("caption"),
            },
            "delimiter" => Block::Delimiter,
            "video" => Block::Video {
                url: fields.text("url"),
            },
            _ => match fields.lookup("text", Value::as_str) {
                Some(text) if !text.is_empty() => Block::Paragraph {
                    text: text.to_string(),
                },
                _ => Block::Unknown { type_name },
            },
        }
    }
}

impl ContentDocument {
    /// Normalize a content value.
    ///
    /// Strings are parsed as JSON first. Anything that is not an object with
    /// an array-valued `blocks` field gives an empty document.
    pub fn normalize(content: &Value) -> Self {
        match content {
            Value::String(encoded) => Self::from_json_str(encoded),
            other => Self::from_object(other),
        }
    }

    /// Parse and normalize a JSON-encoded document.
    pub fn from_json_str(encoded: &str) -> Self {
        match serde_json::from_str::<Value>(encoded) {
            Ok(value) => Self::from_object(&value),
            Err(e) => {
                tracing::debug!(error = %e, "content is not valid JSON, treating as empty");
                Self::default()
            }
        }
    }

    fn from_object(value: &Value) -> Self {
        let blocks = raw_blocks(value)
            .iter()
            .map(Block::from_value)
            .collect();
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// The raw `blocks` array of an already-parsed content value, or an empty
/// slice when the shape is wrong.
pub fn raw_blocks(value: &Value) -> &[Value] {
    value
        .get("blocks")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Field lookup over both block shapes: top level first, then `data`.
struct Fields<'a> {
    top: &'a Value,
    data: Option<&'a Value>,
}

impl<'a> Fields<'a> {
    fn new(block: &'a Value) -> Self {
        Self {
            top: block,
            data: block.get("data").filter(|d| d.is_object()),
        }
    }

    /// First of the top-level and `data` values of `key` that `project`
    /// accepts. A top-level value of the wrong type does not hide `data`.
    fn lookup<T>(&self, key: &str, project: impl Fn(&'a Value) -> Option<T>) -> Option<T> {
        self.top
            .get(key)
            .and_then(&project)
            .or_else(|| self.data.and_then(|d| d.get(key)).and_then(&project))
    }

    /// String field, or empty when missing or not a string.
    fn text(&self, key: &str) -> String {
        self.lookup(key, Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// First non-empty string among `keys`.
    fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .find_map(|key| self.lookup(key, non_blank))
            .map(str::to_string)
    }

    /// First non-empty top-level string among `keys`.
    fn top_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .find_map(|key| self.top.get(key).and_then(non_blank))
            .map(str::to_string)
    }

    /// First non-empty string among `keys` under `data`.
    fn data_text(&self, keys: &[&str]) -> Option<String> {
        let data = self.data?;
        keys.iter()
            .find_map(|key| data.get(key).and_then(non_blank))
            .map(str::to_string)
    }

    fn nested_text(&self, outer: &str, inner: &str) -> Option<String> {
        self.lookup(outer, |o| o.get(inner).and_then(non_blank))
            .map(str::to_string)
    }

    /// Heading level, accepting integers, whole floats and numeric strings.
    fn level(&self) -> Option<i64> {
        self.lookup("level", |v| match v {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    fn file_hint(&self) -> Option<String> {
        self.nested_text("file", "name")
            .or_else(|| self.first_text(&["name"]))
            .or_else(|| self.nested_text("file", "key"))
            .or_else(|| self.first_text(&["key", "caption"]))
    }

    /// List items as strings; objects contribute their `content` field.
    fn items(&self) -> Vec<String> {
        self.lookup("items", Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| {
                        item.as_str()
                            .or_else(|| item.get("content").and_then(Value::as_str))
                    })
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn non_blank(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}
