#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the photo gallery.

use darulabror_render::article::ArticlePage;
use darulabror_render::gallery::{collect_images, gallery_summary, render_gallery};
use darulabror_test_utils::{assert, blocks, listing_response, test_article};

#[test]
fn gallery_collects_across_articles() {
    let response = listing_response(
        &[
            test_article(1, "Ziarah")
                .with_header("https://cdn.test/ziarah.jpg")
                .with_block(blocks::image("https://cdn.test/bus.png", "Rombongan"))
                .with_block(blocks::editor_image("blob:http://localhost/a", "a.jpg")),
            test_article(2, "Pengajian")
                .with_block(blocks::image("https://cdn.test/bus.png", "Duplikat"))
                .with_block(blocks::video("https://cdn.test/rekaman.mp4"))
                .content_as_string(),
        ],
        1,
        100,
        2,
    );
    let page = ArticlePage::from_response(&response, 1, 100);
    let images = collect_images(&page.items);

    let captions: Vec<&str> = images.iter().map(|i| i.caption.as_str()).collect();
    assert_eq!(captions, vec!["Ziarah", "Ziarah — Rombongan"]);
    assert_eq!(gallery_summary(images.len()), "Total gambar: 2");

    let html = render_gallery(&images);
    assert::count(&html, "data-gallery-idx=", 2);
    assert::contains(&html, "src=\"https://cdn.test/bus.png\"");
    assert::not_contains(&html, "blob:");
}

#[test]
fn gallery_without_photos_shows_notice() {
    let response = listing_response(&[test_article(1, "Teks Saja")], 1, 100, 1);
    let page = ArticlePage::from_response(&response, 1, 100);
    let images = collect_images(&page.items);
    assert!(images.is_empty());
    assert::contains(&render_gallery(&images), "Belum ada gambar.");
}
