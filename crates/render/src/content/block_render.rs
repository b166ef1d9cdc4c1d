//! Block rendering for article content.
//!
//! Converts normalized [`Block`]s into Bootstrap-flavoured HTML:
//! - Paragraph and quote text keeps a small set of inline tags
//! - Heading, list and caption text is reduced to escaped plain text
//! - Images, videos and embeds only load public `http(s)` sources, and embeds
//!   are restricted to the YouTube/Vimeo players
//!
//! Rendering is total: a block that cannot be shown yields `None` and
//! contributes nothing to the output.

use serde_json::Value;
use tracing::debug;

use super::document::{Block, ContentDocument, ListStyle};
use super::links::{is_blob_or_data_url, is_public_http_url, is_safe_embed_url};
use super::sanitize::{html_escape, sanitize_inline, strip_markup};

/// Shown in place of a document without blocks.
pub const EMPTY_CONTENT_PLACEHOLDER: &str = r#"<p class="text-muted mb-0">Konten belum tersedia.</p>"#;

/// Render a content value (parsed JSON or a JSON string) to HTML.
pub fn render_content(content: &Value) -> String {
    render_document(&ContentDocument::normalize(content))
}

/// Render a normalized document, or the placeholder when it is empty.
pub fn render_document(doc: &ContentDocument) -> String {
    if doc.is_empty() {
        return EMPTY_CONTENT_PLACEHOLDER.to_string();
    }
    render_blocks(&doc.blocks)
}

/// Render blocks in order and concatenate the fragments.
pub fn render_blocks(blocks: &[Block]) -> String {
    blocks.iter().filter_map(render_block).collect()
}

/// Render a single block, or `None` when it should be skipped.
pub fn render_block(block: &Block) -> Option<String> {
    let rendered = match block {
        Block::Paragraph { text } => render_paragraph(text),
        Block::Heading { level, text } => render_heading(*level, text),
        Block::Image {
            url,
            caption,
            file_hint,
        } => render_image(url, caption, file_hint.as_deref()),
        Block::Embed { url, caption } => render_embed(url, caption),
        Block::List { style, items } => render_list(*style, items),
        Block::Quote { text, caption } => render_quote(text, caption),
        Block::Delimiter => Some(render_delimiter()),
        Block::Video { url } => render_video(url),
        Block::Unknown { type_name } => {
            debug!(block_type = %type_name, "skipping unrecognized block");
            return None;
        }
    };
    if rendered.is_none() {
        debug!(block_type = block.type_name(), "block rendered empty");
    }
    rendered
}

// ---------------------------------------------------------------------------
// Individual block renderers
// ---------------------------------------------------------------------------

fn render_paragraph(text: &str) -> Option<String> {
    let clean = sanitize_inline(text);
    if clean.trim().is_empty() {
        return None;
    }
    Some(format!("<p>{clean}</p>"))
}

/// Levels 1-4 are honoured; anything else falls back to 2.
fn render_heading(level: Option<i64>, text: &str) -> Option<String> {
    let plain = strip_markup(text);
    if plain.is_empty() {
        return None;
    }
    let level = match level {
        Some(l @ 1..=4) => l,
        _ => 2,
    };
    Some(format!(
        "<h{level} class=\"mt-4\">{}</h{level}>",
        html_escape(&plain)
    ))
}

fn render_image(url: &str, caption: &str, file_hint: Option<&str>) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    if !is_public_http_url(url) {
        if is_blob_or_data_url(url) {
            return Some(render_local_image_warning(file_hint));
        }
        return None;
    }

    let caption = strip_markup(caption);
    let escaped_url = html_escape(url);
    let escaped_caption = html_escape(&caption);
    let alt = if caption.is_empty() {
        "Gambar".to_string()
    } else {
        escaped_caption.clone()
    };
    let figcaption = if caption.is_empty() {
        String::new()
    } else {
        format!("<figcaption class=\"text-muted small mt-2\">{escaped_caption}</figcaption>")
    };
    Some(format!(
        "<figure class=\"my-4\">\
         <img src=\"{escaped_url}\" class=\"img-fluid rounded-4 border\" alt=\"{alt}\" loading=\"lazy\">\
         {figcaption}</figure>"
    ))
}

/// Visible notice for an image still pointing at the author's local browser.
fn render_local_image_warning(file_hint: Option<&str>) -> String {
    let name = file_hint
        .map(strip_markup)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "tanpa nama".to_string());
    format!(
        "<div class=\"alert alert-warning small my-4\" role=\"alert\">\
         Gambar &quot;{}&quot; tidak dapat ditampilkan karena masih berupa file lokal. \
         Unggah ulang gambar ini agar dapat dilihat pengunjung.</div>",
        html_escape(&name)
    )
}

fn render_embed(url: &str, caption: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    if !is_safe_embed_url(url) {
        debug!(url, "embed source not on the allow-list");
        return None;
    }

    let caption = strip_markup(caption);
    let escaped_url = html_escape(url);
    let title = if caption.is_empty() {
        "Video".to_string()
    } else {
        html_escape(&caption)
    };
    let figcaption = if caption.is_empty() {
        String::new()
    } else {
        format!("<figcaption class=\"text-muted small mt-2\">{title}</figcaption>")
    };
    Some(format!(
        "<figure class=\"my-4\">\
         <div class=\"ratio ratio-16x9\">\
         <iframe src=\"{escaped_url}\" title=\"{title}\" class=\"rounded-4 border\" loading=\"lazy\" \
         referrerpolicy=\"strict-origin-when-cross-origin\" \
         allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
         allowfullscreen></iframe>\
         </div>{figcaption}</figure>"
    ))
}

fn render_list(style: ListStyle, items: &[String]) -> Option<String> {
    let items: Vec<String> = items
        .iter()
        .map(|item| strip_markup(item))
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        return None;
    }
    let tag = match style {
        ListStyle::Ordered => "ol",
        ListStyle::Unordered => "ul",
    };
    let mut html = format!("<{tag} class=\"my-3\">");
    for item in &items {
        html.push_str(&format!("<li>{}</li>", html_escape(item)));
    }
    html.push_str(&format!("</{tag}>"));
    Some(html)
}

fn render_quote(text: &str, caption: &str) -> Option<String> {
    let clean_text = sanitize_inline(text);
    if clean_text.trim().is_empty() {
        return None;
    }
    let caption = strip_markup(caption);
    let footer = if caption.is_empty() {
        String::new()
    } else {
        format!(
            "<figcaption class=\"blockquote-footer mt-2\">{}</figcaption>",
            html_escape(&caption)
        )
    };
    Some(format!(
        "<figure class=\"my-4\">\
         <blockquote class=\"blockquote border-start border-4 ps-3\"><p>{clean_text}</p></blockquote>\
         {footer}</figure>"
    ))
}

fn render_delimiter() -> String {
    "<hr class=\"my-4\">".to_string()
}

/// Legacy video block: a bare `<video>` for public sources only.
fn render_video(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() || !is_public_http_url(url) {
        return None;
    }
    Some(format!(
        "<div class=\"ratio ratio-16x9 my-4\">\
         <video src=\"{}\" controls class=\"rounded-4 border\"></video>\
         </div>",
        html_escape(url)
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render_one(block: Value) -> String {
        render_blocks(&[Block::from_value(&block)])
    }

    #[test]
    fn render_paragraph_block() {
        let html = render_one(json!({ "type": "paragraph", "data": { "text": "Hello, world!" } }));
        assert_eq!(html, "<p>Hello, world!</p>");
    }

    #[test]
    fn render_legacy_paragraph_block() {
        let html = render_one(json!({ "type": "paragraph", "text": "Legacy" }));
        assert_eq!(html, "<p>Legacy</p>");
    }

    #[test]
    fn render_paragraph_with_inline_html() {
        let html = render_one(json!({
            "type": "paragraph",
            "data": { "text": "This is <b>bold</b> and <i>italic</i>." }
        }));
        assert_eq!(html, "<p>This is <b>bold</b> and <i>italic</i>.</p>");
    }

    #[test]
    fn render_paragraph_strips_script_tags() {
        let html = render_one(json!({
            "type": "paragraph",
            "data": { "text": "Hello <script>alert('xss')</script> world" }
        }));
        assert!(!html.contains("<script"), "script tags must be stripped");
        assert!(html.starts_with("<p>Hello"));
        assert!(html.contains("world"));
    }

    #[test]
    fn render_empty_paragraph_skipped() {
        assert_eq!(render_one(json!({ "type": "paragraph", "data": { "text": "  " } })), "");
        assert_eq!(
            render_one(json!({ "type": "paragraph", "data": { "text": "<script>x</script>" } })),
            ""
        );
    }

    #[test]
    fn render_header_strips_markup() {
        let html = render_one(json!({
            "type": "header",
            "data": { "level": 2, "text": "<b>Hi</b>" }
        }));
        assert_eq!(html, "<h2 class=\"mt-4\">Hi</h2>");
    }

    #[test]
    fn render_heading_levels() {
        let h4 = render_one(json!({ "type": "heading", "level": 4, "text": "Four" }));
        assert_eq!(h4, "<h4 class=\"mt-4\">Four</h4>");

        for level in [json!(0), json!(5), json!(9), json!("x")] {
            let html = render_one(json!({ "type": "heading", "data": { "level": level, "text": "T" } }));
            assert_eq!(html, "<h2 class=\"mt-4\">T</h2>");
        }
    }

    #[test]
    fn render_heading_escapes_text() {
        let html = render_one(json!({ "type": "heading", "data": { "text": "Fish &amp; \"chips\"" } }));
        assert_eq!(html, "<h2 class=\"mt-4\">Fish &amp; &quot;chips&quot;</h2>");
    }

    #[test]
    fn render_heading_without_text_skipped() {
        assert_eq!(render_one(json!({ "type": "heading", "data": { "level": 1 } })), "");
    }

    #[test]
    fn render_image_block() {
        let html = render_one(json!({
            "type": "image",
            "data": {
                "file": { "url": "https://example.com/photo.jpg" },
                "caption": "A nice photo"
            }
        }));
        assert!(html.starts_with("<figure class=\"my-4\">"));
        assert!(html.contains("<img src=\"https://example.com/photo.jpg\""));
        assert!(html.contains("alt=\"A nice photo\""));
        assert!(html.contains("<figcaption class=\"text-muted small mt-2\">A nice photo</figcaption>"));
        assert!(html.ends_with("</figure>"));
    }

    #[test]
    fn render_image_without_caption_uses_default_alt() {
        let html = render_one(json!({ "type": "image", "url": "https://example.com/a.png" }));
        assert!(html.contains("alt=\"Gambar\""));
        assert!(!html.contains("<figcaption"));
    }

    #[test]
    fn image_escapes_url_and_strips_caption() {
        let html = render_one(json!({
            "type": "image",
            "data": {
                "url": "https://example.com/photo.jpg?a=1&b=2",
                "caption": "A <b>bold</b> \"caption\""
            }
        }));
        assert!(html.contains("&amp;b=2"), "URL ampersands should be escaped");
        assert!(html.contains("A bold &quot;caption&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn render_blob_image_warning() {
        let html = render_one(json!({
            "type": "image",
            "data": { "file": { "url": "blob:http://localhost/xyz", "name": "poster.png" } }
        }));
        assert!(!html.contains("<img"));
        assert!(html.contains("alert-warning"));
        assert!(html.contains("poster.png"));
    }

    #[test]
    fn render_data_image_warning_without_name() {
        let html = render_one(json!({ "type": "image", "url": "data:image/png;base64,AAAA" }));
        assert!(!html.contains("<img"));
        assert!(html.contains("tanpa nama"));
    }

    #[test]
    fn render_image_with_unsafe_url_skipped() {
        assert_eq!(render_one(json!({ "type": "image", "url": "javascript:alert(1)" })), "");
        assert_eq!(render_one(json!({ "type": "image", "url": "/local/a.png" })), "");
        assert_eq!(render_one(json!({ "type": "image", "data": {} })), "");
    }

    #[test]
    fn render_embed_youtube() {
        let html = render_one(json!({
            "type": "embed",
            "data": { "embed": "https://www.youtube.com/embed/abc123", "caption": "A video" }
        }));
        assert!(html.contains("<iframe src=\"https://www.youtube.com/embed/abc123\""));
        assert!(html.contains("allowfullscreen"));
        assert!(html.contains("<figcaption class=\"text-muted small mt-2\">A video</figcaption>"));
    }

    #[test]
    fn render_embed_vimeo_source_field() {
        let html = render_one(json!({
            "type": "embed",
            "data": { "source": "https://player.vimeo.com/video/76979871" }
        }));
        assert!(html.contains("<iframe"));
        assert!(html.contains("title=\"Video\""));
    }

    #[test]
    fn render_embed_rejects_other_hosts() {
        for url in [
            "https://evil.com/embed/abc123",
            "https://www.youtube.com/watch?v=abc123",
            "javascript:alert(1)",
            "not a url",
        ] {
            let html = render_one(json!({ "type": "embed", "data": { "embed": url } }));
            assert_eq!(html, "", "{url}");
        }
    }

    #[test]
    fn render_list_ordered() {
        let html = render_one(json!({
            "type": "list",
            "data": { "style": "ordered", "items": ["a", "<i>b</i>"] }
        }));
        assert_eq!(html, "<ol class=\"my-3\"><li>a</li><li>b</li></ol>");
    }

    #[test]
    fn render_list_defaults_to_unordered() {
        let html = render_one(json!({ "type": "list", "data": { "items": ["x < y"] } }));
        assert_eq!(html, "<ul class=\"my-3\"><li>x &lt; y</li></ul>");
    }

    #[test]
    fn render_empty_list_skipped() {
        assert_eq!(render_one(json!({ "type": "list", "data": { "items": [] } })), "");
        assert_eq!(render_one(json!({ "type": "list", "data": {} })), "");
    }

    #[test]
    fn render_quote_block() {
        let html = render_one(json!({
            "type": "quote",
            "data": { "text": "To be or <em>not</em> to be.", "caption": "<b>Shakespeare</b>" }
        }));
        assert!(html.contains("<blockquote"));
        assert!(html.contains("<p>To be or <em>not</em> to be.</p>"));
        assert!(html.contains("<figcaption class=\"blockquote-footer mt-2\">Shakespeare</figcaption>"));
    }

    #[test]
    fn render_quote_without_caption() {
        let html = render_one(json!({ "type": "quote", "data": { "text": "Just a quote." } }));
        assert!(html.contains("<p>Just a quote.</p></blockquote>"));
        assert!(!html.contains("<figcaption"));
    }

    #[test]
    fn render_empty_quote_skipped() {
        assert_eq!(render_one(json!({ "type": "quote", "data": { "caption": "x" } })), "");
    }

    #[test]
    fn render_delimiter_block() {
        assert_eq!(render_one(json!({ "type": "delimiter", "data": {} })), "<hr class=\"my-4\">");
    }

    #[test]
    fn render_video_block() {
        let html = render_one(json!({ "type": "video", "url": "https://cdn.test/v.mp4" }));
        assert!(html.contains("<video src=\"https://cdn.test/v.mp4\" controls"));

        assert_eq!(render_one(json!({ "type": "video", "url": "blob:http://x/1" })), "");
        assert_eq!(render_one(json!({ "type": "video" })), "");
    }

    #[test]
    fn render_unknown_block_type_skipped() {
        let html = render_one(json!({ "type": "unknown_widget", "data": { "foo": "bar" } }));
        assert!(html.is_empty(), "Unknown types should be silently skipped");
    }

    #[test]
    fn render_multiple_blocks_in_order() {
        let html = render_content(&json!({
            "blocks": [
                { "type": "heading", "data": { "text": "Title", "level": 1 } },
                { "type": "paragraph", "data": { "text": "Body text." } },
                { "type": "mystery" },
                { "type": "delimiter", "data": {} }
            ]
        }));
        assert_eq!(
            html,
            "<h1 class=\"mt-4\">Title</h1><p>Body text.</p><hr class=\"my-4\">"
        );
    }

    #[test]
    fn empty_document_renders_placeholder() {
        assert_eq!(render_content(&json!({ "blocks": [] })), EMPTY_CONTENT_PLACEHOLDER);
        assert_eq!(render_content(&json!("garbage")), EMPTY_CONTENT_PLACEHOLDER);
        assert_eq!(render_content(&json!(null)), EMPTY_CONTENT_PLACEHOLDER);
    }

    #[test]
    fn document_of_only_skipped_blocks_renders_empty() {
        assert_eq!(render_content(&json!({ "blocks": [{ "type": "widget" }] })), "");
    }
}
