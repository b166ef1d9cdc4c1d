//! Photo gallery assembled from article header images and image blocks.

use std::collections::HashSet;

use crate::article::Article;
use crate::content::{Block, ContentDocument, html_escape, strip_markup};

/// File extensions treated as images when scanning article URLs.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp", ".gif", ".svg"];

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: String,
    pub caption: String,
}

/// True for `http(s)` URLs that mention a common image extension.
pub fn is_likely_image_url(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    lower.starts_with("http") && IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext))
}

/// Collect gallery images from articles, in order, without duplicates.
///
/// Each article contributes its header image first, then its image blocks.
/// Captions name the article, followed by the block caption when present.
pub fn collect_images(articles: &[Article]) -> Vec<GalleryImage> {
    let mut seen = HashSet::new();
    let mut images = Vec::new();

    for article in articles {
        let title = article
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Artikel");

        if let Some(url) = article.header_image()
            && is_likely_image_url(url)
            && seen.insert(url.to_string())
        {
            images.push(GalleryImage {
                url: url.to_string(),
                caption: title.to_string(),
            });
        }

        for block in ContentDocument::normalize(&article.content).blocks {
            let Block::Image { url, caption, .. } = block else {
                continue;
            };
            let url = url.trim().to_string();
            if !is_likely_image_url(&url) || !seen.insert(url.clone()) {
                continue;
            }
            let caption = strip_markup(&caption);
            let caption = if caption.is_empty() {
                title.to_string()
            } else {
                format!("{title} — {caption}")
            };
            images.push(GalleryImage { url, caption });
        }
    }
    images
}

/// Summary line above the grid.
pub fn gallery_summary(count: usize) -> String {
    format!("Total gambar: {count}")
}

/// Render the gallery grid. Each tile carries its index in
/// `data-gallery-idx` so the page script can open it in the modal.
pub fn render_gallery(images: &[GalleryImage]) -> String {
    if images.is_empty() {
        return "<div class=\"col-12\"><div class=\"alert alert-light border mb-0\">\
                Belum ada gambar. Nanti akan muncul otomatis setelah artikel berisi foto.\
                </div></div>"
            .to_string();
    }
    images
        .iter()
        .enumerate()
        .map(|(idx, image)| {
            let url = html_escape(&image.url);
            let alt = if image.caption.is_empty() {
                "Foto".to_string()
            } else {
                html_escape(&image.caption)
            };
            format!(
                "<div class=\"col-6 col-md-4 col-lg-3\">\
                 <button class=\"btn p-0 w-100 text-start\" data-gallery-idx=\"{idx}\" style=\"border:0;\">\
                 <div class=\"card da-card\"><div class=\"ratio ratio-1x1 bg-body-tertiary\">\
                 <img src=\"{url}\" alt=\"{alt}\" loading=\"lazy\" style=\"width:100%;height:100%;object-fit:cover;\">\
                 </div></div></button></div>"
            )
        })
        .collect()
}
