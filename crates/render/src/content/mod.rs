//! Article content rendering.
//!
//! This module provides:
//! - ContentDocument / Block: normalization of the flexible `content` JSON
//! - Block rendering: sanitized HTML per block type
//! - Inline sanitizing and markup stripping (ammonia)
//! - URL classification for media sources and embeds
//! - Plain-text excerpts for listings

pub mod block_render;
pub mod document;
pub mod excerpt;
pub mod links;
pub mod sanitize;

pub use block_render::{EMPTY_CONTENT_PLACEHOLDER, render_block, render_blocks, render_content};
pub use document::{Block, ContentDocument, ListStyle};
pub use excerpt::{extract_text, truncate};
pub use links::{is_blob_or_data_url, is_public_http_url, is_safe_embed_url};
pub use sanitize::{html_escape, sanitize_inline, strip_markup};
