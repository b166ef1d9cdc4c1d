//! URL classification for block sources.
//!
//! Image, video and embed blocks only ever point at public `http(s)` URLs.
//! Embeds are further restricted to a fixed set of video players.

use url::Url;

/// Hosts allowed to serve YouTube embeds (path must start with `/embed/`).
const YOUTUBE_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "youtube-nocookie.com",
    "www.youtube-nocookie.com",
];

/// Host allowed to serve Vimeo embeds (path must start with `/video/`).
const VIMEO_PLAYER_HOST: &str = "player.vimeo.com";

/// True if the trimmed URL starts with `http://` or `https://` (any case).
pub fn is_public_http_url(url: &str) -> bool {
    let trimmed = url.trim();
    has_prefix_ignore_case(trimmed, "http://") || has_prefix_ignore_case(trimmed, "https://")
}

/// True for browser-local object references (`blob:` and `data:` URLs).
///
/// These only resolve inside the authoring session, so a published article
/// that still carries one cannot show the file.
pub fn is_blob_or_data_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("blob:") || lower.starts_with("data:")
}

/// True if the URL is a public `http(s)` URL on the embed allow-list.
///
/// Unparsable URLs are rejected.
pub fn is_safe_embed_url(url: &str) -> bool {
    if !is_public_http_url(url) {
        return false;
    }
    let Ok(parsed) = Url::parse(url.trim()) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    let path = parsed.path();

    if YOUTUBE_HOSTS.contains(&host.as_str()) {
        return path.starts_with("/embed/");
    }
    if host == VIMEO_PLAYER_HOST {
        return path.starts_with("/video/");
    }
    false
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
