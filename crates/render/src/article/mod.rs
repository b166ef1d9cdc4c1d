//! Articles as served by the content API, and their views.
//!
//! This module provides:
//! - Article / ArticlePage: tolerant models over the API's JSON envelopes
//! - Listing views: card grid, compact list, pager, local search
//! - Detail view: a single article with its rendered content

mod date;
mod detail;
mod listing;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::content::extract_text;
use crate::error::{Error, Result};

pub use date::format_date;
pub use detail::render_article_detail;
pub use listing::{
    DEFAULT_PAGE_LIMIT, matches_query, more_articles, render_articles_compact,
    render_articles_grid, render_pager, search_articles, search_summary,
};

/// Article identifier; the API has used both numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{n}"),
            ArticleId::Text(s) => f.write_str(s),
        }
    }
}

/// Article record. Every field is optional in practice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: Option<ArticleId>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    /// Header image URL.
    #[serde(default)]
    pub photo_header: Option<String>,

    /// Unix timestamp (seconds) when created.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<i64>,

    /// Flexible JSONB content (`{blocks: [...]}` or a JSON string of it).
    #[serde(default)]
    pub content: Value,
}

impl Article {
    /// Read a single article from an API response.
    ///
    /// Accepts both the `{data: {...}}` envelope and a bare object.
    pub fn from_response(response: &Value) -> Result<Self> {
        let body = match response.get("data") {
            Some(data) if data.is_object() => data,
            _ => response,
        };
        if !body.is_object() {
            return Err(Error::NotAnArticle);
        }
        Ok(serde_json::from_value(body.clone())?)
    }

    /// Title to display, `Untitled` when missing or blank.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Untitled")
    }

    /// Identifier as a string, empty when missing.
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Header image URL, if one is set.
    pub fn header_image(&self) -> Option<&str> {
        self.photo_header
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    /// First readable text of the content, for excerpts and search.
    pub fn body_text(&self) -> String {
        extract_text(&self.content)
    }
}

/// Relative link to an article's detail page.
pub fn article_href(id: &str) -> String {
    format!("/article?id={}", urlencoding::encode(id))
}

/// Pagination metadata of a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub page: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub total: u64,
}

impl PageMeta {
    /// Page number, at least 1.
    pub fn current_page(&self) -> u64 {
        self.page.max(1)
    }

    /// Page size, `default_limit` when unset.
    pub fn page_size(&self, default_limit: u64) -> u64 {
        if self.limit == 0 {
            default_limit.max(1)
        } else {
            self.limit
        }
    }

    /// Number of pages, at least 1.
    pub fn total_pages(&self, default_limit: u64) -> u64 {
        self.total.div_ceil(self.page_size(default_limit)).max(1)
    }
}

/// One page of a listing response.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePage {
    pub items: Vec<Article>,
    pub meta: PageMeta,
}

impl ArticlePage {
    /// Read a listing from a `{data: {items: [...], meta: {...}}}` response.
    ///
    /// Items that are not valid articles are skipped. When `meta` is missing,
    /// the requested page and limit are used with the item count as total.
    pub fn from_response(response: &Value, page: u64, limit: u64) -> Self {
        let data = response.get("data");
        let items: Vec<Article> = data
            .and_then(|d| d.get("items"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match serde_json::from_value(item.clone()) {
                        Ok(article) => Some(article),
                        Err(e) => {
                            debug!(error = %e, "skipping malformed article in listing");
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let meta = data
            .and_then(|d| d.get("meta"))
            .and_then(|m| serde_json::from_value::<PageMeta>(m.clone()).ok())
            .unwrap_or(PageMeta {
                page,
                limit,
                total: items.len() as u64,
            });

        Self { items, meta }
    }
}

/// Accept integer, float or numeric-string timestamps; anything else is `None`.
fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
