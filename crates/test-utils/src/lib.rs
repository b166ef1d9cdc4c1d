//! Darul Abror test utilities.
//!
//! Helpers for integration testing: article fixtures shaped like the content
//! API's responses, content block builders, and assertion helpers for
//! rendered HTML.

use serde_json::{Value as JsonValue, json};

/// Create a test article with default values.
pub fn test_article(id: i64, title: &str) -> TestArticle {
    TestArticle {
        id: json!(id),
        title: title.to_string(),
        author: "Admin".to_string(),
        photo_header: None,
        created_at: Some(1_766_188_800),
        blocks: Vec::new(),
        content_as_string: false,
    }
}

/// An article builder for creating API fixtures.
#[derive(Debug, Clone)]
pub struct TestArticle {
    pub id: JsonValue,
    pub title: String,
    pub author: String,
    pub photo_header: Option<String>,
    pub created_at: Option<i64>,
    pub blocks: Vec<JsonValue>,
    /// Serialize `content` as a JSON-encoded string, as some API rows do.
    pub content_as_string: bool,
}

impl TestArticle {
    /// Use a string ID instead of a number.
    pub fn with_string_id(mut self, id: &str) -> Self {
        self.id = json!(id);
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    /// Set the header image.
    pub fn with_header(mut self, url: &str) -> Self {
        self.photo_header = Some(url.to_string());
        self
    }

    /// Set the creation timestamp (Unix seconds).
    pub fn created_at(mut self, timestamp: i64) -> Self {
        self.created_at = Some(timestamp);
        self
    }

    /// Append a content block.
    pub fn with_block(mut self, block: JsonValue) -> Self {
        self.blocks.push(block);
        self
    }

    /// Serialize content as a JSON string.
    pub fn content_as_string(mut self) -> Self {
        self.content_as_string = true;
        self
    }

    /// The `{blocks: [...]}` content value.
    pub fn content(&self) -> JsonValue {
        let content = json!({ "blocks": self.blocks });
        if self.content_as_string {
            JsonValue::String(content.to_string())
        } else {
            content
        }
    }

    /// The article object as the API returns it.
    pub fn to_json(&self) -> JsonValue {
        json!({
            "id": self.id,
            "title": self.title,
            "author": self.author,
            "photo_header": self.photo_header,
            "created_at": self.created_at,
            "content": self.content(),
        })
    }

    /// The article wrapped in the single-article `{data: ...}` envelope.
    pub fn to_response(&self) -> JsonValue {
        json!({ "data": self.to_json() })
    }
}

/// A listing response `{data: {items, meta}}` for the given articles.
pub fn listing_response(articles: &[TestArticle], page: u64, limit: u64, total: u64) -> JsonValue {
    let items: Vec<JsonValue> = articles.iter().map(TestArticle::to_json).collect();
    json!({
        "data": {
            "items": items,
            "meta": { "page": page, "limit": limit, "total": total }
        }
    })
}

/// Content block builders in the shapes the content API stores.
pub mod blocks {
    use serde_json::{Value, json};

    /// Paragraph with text at the top level.
    pub fn paragraph(text: &str) -> Value {
        json!({ "type": "paragraph", "text": text })
    }

    /// Paragraph in the editor's `{data: {text}}` shape.
    pub fn editor_paragraph(text: &str) -> Value {
        json!({ "type": "paragraph", "data": { "text": text } })
    }

    /// Editor `header` block.
    pub fn header(text: &str, level: i64) -> Value {
        json!({ "type": "header", "data": { "text": text, "level": level } })
    }

    /// Image block with a top-level URL.
    pub fn image(url: &str, caption: &str) -> Value {
        json!({ "type": "image", "url": url, "caption": caption })
    }

    /// Editor image block with `data.file.url` and a file name.
    pub fn editor_image(url: &str, name: &str) -> Value {
        json!({ "type": "image", "data": { "file": { "url": url, "name": name } } })
    }

    /// Embed block.
    pub fn embed(url: &str, caption: &str) -> Value {
        json!({ "type": "embed", "data": { "embed": url, "caption": caption } })
    }

    /// List block.
    pub fn list(ordered: bool, items: &[&str]) -> Value {
        let style = if ordered { "ordered" } else { "unordered" };
        json!({ "type": "list", "data": { "style": style, "items": items } })
    }

    /// Quote block.
    pub fn quote(text: &str, caption: &str) -> Value {
        json!({ "type": "quote", "data": { "text": text, "caption": caption } })
    }

    /// Delimiter block.
    pub fn delimiter() -> Value {
        json!({ "type": "delimiter" })
    }

    /// Video block.
    pub fn video(url: &str) -> Value {
        json!({ "type": "video", "url": url })
    }

    /// A whole document from blocks.
    pub fn document(blocks: &[Value]) -> Value {
        json!({ "blocks": blocks })
    }
}

/// Assertion helpers for rendered HTML.
pub mod assert {
    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{}'\nActual: {}",
            needle,
            haystack
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{}'\nActual: {}",
            needle,
            haystack
        );
    }

    /// Assert how many times a substring occurs.
    pub fn count(haystack: &str, needle: &str, expected: usize) {
        let actual = haystack.matches(needle).count();
        assert_eq!(
            actual, expected,
            "Expected '{}' {} time(s), found {}\nActual: {}",
            needle, expected, actual, haystack
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_builder() {
        let article = test_article(7, "Kajian")
            .with_author("Humas")
            .with_header("https://cdn.test/h.jpg")
            .with_block(blocks::paragraph("Halo"));

        let value = article.to_json();
        assert_eq!(value["id"], 7);
        assert_eq!(value["author"], "Humas");
        assert_eq!(value["content"]["blocks"][0]["text"], "Halo");
    }

    #[test]
    fn content_can_be_a_string() {
        let article = test_article(1, "A")
            .with_block(blocks::delimiter())
            .content_as_string();
        assert!(article.to_json()["content"].is_string());
    }

    #[test]
    fn test_listing_response() {
        let response = listing_response(&[test_article(1, "A"), test_article(2, "B")], 1, 9, 2);
        assert_eq!(response["data"]["items"].as_array().map(Vec::len), Some(2));
        assert_eq!(response["data"]["meta"]["total"], 2);
    }
}
