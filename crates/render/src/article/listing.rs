//! Article listing views: card grid, compact list, pager and local search.

use url::form_urlencoded;

use super::{Article, PageMeta, article_href, format_date};
use crate::config::Config;
use crate::content::{html_escape, is_public_http_url, truncate};

/// Excerpt shown when an article has no readable text.
const READ_MORE: &str = "Baca selengkapnya…";

/// Page size used when a listing response does not say.
pub const DEFAULT_PAGE_LIMIT: u64 = 9;

/// True if `query` (case-insensitive) occurs in the title or body text.
/// A blank query matches everything.
pub fn matches_query(article: &Article, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let title = article.title.as_deref().unwrap_or_default().to_lowercase();
    title.contains(&needle) || article.body_text().to_lowercase().contains(&needle)
}

/// Keep only the articles matching `query`.
pub fn search_articles(items: Vec<Article>, query: &str) -> Vec<Article> {
    items
        .into_iter()
        .filter(|a| matches_query(a, query))
        .collect()
}

/// Articles other than `current_id`, at most `limit` of them.
pub fn more_articles(items: Vec<Article>, current_id: &str, limit: usize) -> Vec<Article> {
    items
        .into_iter()
        .filter(|a| a.id_string() != current_id)
        .take(limit)
        .collect()
}

/// Status line shown above search results.
pub fn search_summary(query: &str, count: usize) -> String {
    format!(
        "Hasil pencarian untuk \"{}\": {count} artikel (pencarian lokal).",
        query.trim()
    )
}

/// Render the article card grid.
pub fn render_articles_grid(items: &[Article], config: &Config) -> String {
    if items.is_empty() {
        return r#"<div class="col-12"><div class="alert alert-light border mb-0">Belum ada artikel.</div></div>"#
            .to_string();
    }
    items
        .iter()
        .map(|article| render_card(article, config))
        .collect()
}

fn render_card(article: &Article, config: &Config) -> String {
    let title = html_escape(article.display_title());
    let date = html_escape(&format_date(article.created_at, config.utc_offset()));
    let author = html_escape(article.author.as_deref().unwrap_or_default().trim());
    let body = truncate(&article.body_text(), config.excerpt_max);
    let excerpt = html_escape(if body.is_empty() { READ_MORE } else { body.as_str() });
    let href = html_escape(&article_href(&article.id_string()));
    let image = header_image(article)
        .map(|src| {
            format!(
                "<img src=\"{src}\" class=\"card-img-top object-fit-cover\" alt=\"{title}\" loading=\"lazy\">"
            )
        })
        .unwrap_or_default();

    format!(
        "<div class=\"col-12 col-md-6 col-lg-4\">\
         <div class=\"card article-card h-100 shadow-sm border-0\">\
         <div class=\"article-image ratio ratio-16x9 bg-body-tertiary\">{image}</div>\
         <div class=\"card-body d-flex flex-column\">\
         <h5 class=\"card-title mb-2\">{title}</h5>\
         <div class=\"small text-muted mb-2\">{byline}</div>\
         <p class=\"card-text text-body-secondary\">{excerpt}</p>\
         <div class=\"mt-auto\"><a class=\"btn btn-success w-100\" href=\"{href}\">Selengkapnya</a></div>\
         </div></div></div>",
        byline = byline(&date, &author),
    )
}

/// Render the compact list used for "latest" and "more articles".
pub fn render_articles_compact(items: &[Article], config: &Config) -> String {
    if items.is_empty() {
        return r#"<div class="alert alert-light border mb-0 small">Belum ada artikel.</div>"#
            .to_string();
    }
    items
        .iter()
        .map(|article| render_compact_entry(article, config))
        .collect()
}

fn render_compact_entry(article: &Article, config: &Config) -> String {
    let title = html_escape(article.display_title());
    let date = html_escape(&format_date(article.created_at, config.utc_offset()));
    let body = article.body_text();
    let excerpt = html_escape(&truncate(
        if body.is_empty() { READ_MORE } else { body.as_str() },
        config.compact_excerpt_max,
    ));
    let href = html_escape(&article_href(&article.id_string()));
    let thumb = match header_image(article) {
        Some(src) => format!(
            "<img src=\"{src}\" class=\"object-fit-cover\" alt=\"{title}\" loading=\"lazy\" style=\"width:100%;height:100%;\">"
        ),
        None => "<div class=\"d-flex align-items-center justify-content-center\"><i class=\"bi bi-image text-muted\"></i></div>"
            .to_string(),
    };

    format!(
        "<div class=\"article-compact p-3 mb-3\">\
         <div class=\"row g-3 align-items-center\">\
         <div class=\"col-4\"><div class=\"article-thumb ratio ratio-1x1 bg-body-tertiary\">{thumb}</div></div>\
         <div class=\"col-8\">\
         <div class=\"fw-semibold mb-1 small\" style=\"line-height:1.3;\">{title}</div>\
         <div class=\"text-muted\" style=\"font-size:0.75rem;line-height:1.2;\">{excerpt}</div>\
         <div class=\"text-muted mt-1\" style=\"font-size:0.7rem;\">{date}</div>\
         <a href=\"{href}\" class=\"stretched-link\"></a>\
         </div></div></div>"
    )
}

/// Render Prev/Next navigation for a paginated listing.
///
/// `current_query` is the page's query string (with or without `?`); its
/// other parameters are kept in the generated links.
pub fn render_pager(meta: &PageMeta, current_query: &str) -> String {
    let page = meta.current_page();
    let limit = meta.page_size(DEFAULT_PAGE_LIMIT);
    let total = meta.total;
    let total_pages = meta.total_pages(DEFAULT_PAGE_LIMIT);

    let link = |target: u64| html_escape(&page_link(current_query, target, limit));
    let (prev_class, prev_href) = if page <= 1 {
        (" disabled", "#".to_string())
    } else {
        ("", link(page - 1))
    };
    let (next_class, next_href) = if page >= total_pages {
        (" disabled", "#".to_string())
    } else {
        ("", link(page + 1))
    };

    format!(
        "<div class=\"d-flex align-items-center justify-content-between gap-3\">\
         <a class=\"btn btn-outline-secondary{prev_class}\" href=\"{prev_href}\">Prev</a>\
         <div class=\"small text-muted\">Halaman {page} / {total_pages} • Total {total}</div>\
         <a class=\"btn btn-outline-secondary{next_class}\" href=\"{next_href}\">Next</a>\
         </div>"
    )
}

/// `?…` link to `page`, replacing `page`/`limit` and keeping other parameters.
fn page_link(current_query: &str, page: u64, limit: u64) -> String {
    let mut pairs: Vec<(String, String)> =
        form_urlencoded::parse(current_query.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect();
    set_param(&mut pairs, "page", &page.to_string());
    set_param(&mut pairs, "limit", &limit.to_string());

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("?{encoded}")
}

/// Replace the first `key` in place and drop any repeats, or append it.
fn set_param(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter().position(|(k, _)| k == key) {
        Some(first) => {
            pairs[first].1 = value.to_string();
            let mut index = 0;
            pairs.retain(|(k, _)| {
                let keep = k != key || index == first;
                index += 1;
                keep
            });
        }
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

fn header_image(article: &Article) -> Option<String> {
    article
        .header_image()
        .filter(|url| is_public_http_url(url))
        .map(html_escape)
}

/// Date and author line; either part is omitted when empty.
pub(super) fn byline(date: &str, author: &str) -> String {
    let mut html = String::new();
    if !date.is_empty() {
        html.push_str(&format!("<span>{date}</span>"));
    }
    if !author.is_empty() {
        html.push_str(&format!("<span class=\"mx-2\">•</span><span>{author}</span>"));
    }
    html
}
