//! Fixed status fragments shown while a view loads or after it fails.

/// A status message placed in a view container instead of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ArticleLoading,
    ArticleMissingId,
    ArticleLoadFailed,
    ArticlesLoading,
    ArticlesLoadFailed,
    LatestLoadFailed,
    MoreArticlesLoadFailed,
    GalleryLoadFailed,
}

impl Notice {
    /// Static HTML for this notice.
    pub fn html(self) -> &'static str {
        match self {
            Notice::ArticleLoading => r#"<div class="text-muted">Memuat…</div>"#,
            Notice::ArticleMissingId => {
                r#"<div class="alert alert-warning">ID artikel tidak ditemukan.</div>"#
            }
            Notice::ArticleLoadFailed => {
                r#"<div class="alert alert-danger">Gagal memuat artikel.</div>"#
            }
            Notice::ArticlesLoading => {
                r#"<div class="col-12"><div class="text-muted">Memuat artikel…</div></div>"#
            }
            Notice::ArticlesLoadFailed => {
                r#"<div class="col-12"><div class="alert alert-danger mb-0">Gagal memuat artikel.</div></div>"#
            }
            Notice::LatestLoadFailed => {
                r#"<div class="alert alert-danger mb-0 small">Gagal memuat artikel terbaru.</div>"#
            }
            Notice::MoreArticlesLoadFailed => {
                r#"<div class="alert alert-danger mb-0 small">Gagal memuat berita lainnya.</div>"#
            }
            Notice::GalleryLoadFailed => {
                r#"<div class="col-12"><div class="alert alert-danger mb-0">Gagal memuat galeri.</div></div>"#
            }
        }
    }
}
