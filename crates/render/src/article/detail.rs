//! Single article page.

use super::listing::byline;
use super::{Article, format_date};
use crate::config::Config;
use crate::content::{html_escape, is_public_http_url, render_content};

/// Render the full article view: back link, title, byline, header image and
/// the rendered content blocks.
pub fn render_article_detail(article: &Article, config: &Config) -> String {
    let title = html_escape(article.display_title());
    let date = html_escape(&format_date(article.created_at, config.utc_offset()));
    let author = html_escape(article.author.as_deref().unwrap_or_default().trim());
    let image = article
        .header_image()
        .filter(|url| is_public_http_url(url))
        .map(|url| {
            format!(
                "<div class=\"mb-4\"><img src=\"{}\" alt=\"{title}\" class=\"article-detail-image\" loading=\"lazy\"></div>",
                html_escape(url)
            )
        })
        .unwrap_or_default();
    let body = render_content(&article.content);

    format!(
        "<div class=\"article-detail-wrap\">\
         <div class=\"mb-3\"><a href=\"/artikel\" class=\"text-decoration-none\">\
         <i class=\"bi bi-arrow-left\"></i> Kembali ke Artikel</a></div>\
         <h1 class=\"h3 fw-bold mb-2\">{title}</h1>\
         <div class=\"text-muted mb-4\">{byline}</div>\
         {image}\
         <article class=\"article-body\">{body}</article>\
         </div>",
        byline = byline(&date, &author),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::content::EMPTY_CONTENT_PLACEHOLDER;
    use serde_json::json;

    #[test]
    fn detail_renders_header_and_blocks() {
        let article: Article = serde_json::from_value(json!({
            "id": 3,
            "title": "Wisuda Santri",
            "author": "Humas",
            "created_at": 1766188800,
            "photo_header": "https://cdn.test/h.jpg",
            "content": "{\"blocks\":[{\"type\":\"header\",\"data\":{\"text\":\"Acara\",\"level\":3}}]}"
        }))
        .unwrap();
        let html = render_article_detail(&article, &Config::default());
        assert!(html.contains("<h1 class=\"h3 fw-bold mb-2\">Wisuda Santri</h1>"));
        assert!(html.contains("<span>20 Desember 2025</span><span class=\"mx-2\">•</span><span>Humas</span>"));
        assert!(html.contains("<img src=\"https://cdn.test/h.jpg\" alt=\"Wisuda Santri\""));
        assert!(html.contains("<article class=\"article-body\"><h3 class=\"mt-4\">Acara</h3></article>"));
    }

    #[test]
    fn detail_without_content_shows_placeholder() {
        let html = render_article_detail(&Article::default(), &Config::default());
        assert!(html.contains("Untitled"));
        assert!(html.contains(EMPTY_CONTENT_PLACEHOLDER));
        assert!(!html.contains("<img"));
    }
}
