//! Darul Abror site renderer
//!
//! Turns content API payloads into HTML fragments for the public site:
//! article content blocks, listings, the detail page and the gallery, plus
//! validation for the contact and admission forms. The `darulabror-render`
//! binary exposes the same views on the command line.

pub mod article;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod gallery;
pub mod notice;

pub use config::Config;
pub use content::{ContentDocument, render_content};
pub use error::{Error, Result};
pub use notice::Notice;
