//! Darul Abror site renderer CLI
//!
//! Reads content API payloads (JSON files, or `-` for stdin) and prints the
//! HTML fragment of the matching site view.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use darulabror_render::article::{
    Article, ArticlePage, DEFAULT_PAGE_LIMIT, more_articles, render_article_detail, render_articles_compact,
    render_articles_grid, render_pager, search_articles, search_summary,
};
use darulabror_render::content::html_escape;
use darulabror_render::form::{
    Alert, ContactSubmission, Registration, contact_outcome, registration_outcome,
};
use darulabror_render::gallery::{collect_images, gallery_summary, render_gallery};
use darulabror_render::{Config, Error, Notice, render_content};

/// Listing size fetched for local search and the gallery.
const SCAN_LIMIT: u64 = 100;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a content document (`{"blocks": [...]}` or a JSON string of it).
    Content {
        /// JSON file, or `-` for stdin.
        input: PathBuf,
    },

    /// Render the article page from a single-article response.
    Article { input: PathBuf },

    /// Render the article grid and pager from a listing response.
    Articles {
        input: PathBuf,

        /// Search the listing locally instead of paginating.
        #[arg(long)]
        query: Option<String>,

        /// Query string of the current page, kept in pager links.
        #[arg(long, default_value = "")]
        page_query: String,

        /// Page that was requested.
        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Page size that was requested.
        #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u64,
    },

    /// Render the compact "latest articles" list from a listing response.
    Latest { input: PathBuf },

    /// Render the "more articles" list shown beside an article.
    More {
        input: PathBuf,

        /// ID of the article being viewed.
        #[arg(long)]
        current: String,
    },

    /// Render the photo gallery from a listing response.
    Gallery { input: PathBuf },

    /// Validate a contact form payload and print it normalized.
    Contact { input: PathBuf },

    /// Print the alert for the API's answer to a contact submission.
    ContactResult {
        /// HTTP status returned by the API.
        #[arg(long)]
        status: u16,

        /// Response body, if any.
        input: Option<PathBuf>,
    },

    /// Validate an admission form payload and print it normalized.
    Registration { input: PathBuf },

    /// Print the alert for the API's answer to a registration.
    RegistrationResult {
        #[arg(long)]
        status: u16,

        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    let config = Config::from_env().context("failed to load configuration")?;
    debug!(?config, "Configuration loaded");

    let html = run(cli.command, &config)?;
    println!("{html}");
    Ok(())
}

fn run(command: Command, config: &Config) -> Result<String> {
    match command {
        Command::Content { input } => {
            let content = read_json(&input)?;
            Ok(render_content(&content))
        }
        Command::Article { input } => {
            let response = match read_json(&input) {
                Ok(response) => response,
                Err(e) => return Ok(fallback(&e, Notice::ArticleLoadFailed)),
            };
            match Article::from_response(&response) {
                Ok(article) => {
                    info!(id = %article.id_string(), "Rendering article");
                    Ok(render_article_detail(&article, config))
                }
                Err(e) => {
                    warn!(error = %e, "article response unusable");
                    Ok(Notice::ArticleLoadFailed.html().to_string())
                }
            }
        }
        Command::Articles {
            input,
            query,
            page_query,
            page,
            limit,
        } => {
            let response = match read_json(&input) {
                Ok(response) => response,
                Err(e) => return Ok(fallback(&e, Notice::ArticlesLoadFailed)),
            };
            match query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
                Some(q) => {
                    let listing = ArticlePage::from_response(&response, 1, SCAN_LIMIT);
                    let found = search_articles(listing.items, q);
                    info!(query = q, results = found.len(), "Local article search");
                    Ok(format!(
                        "<div class=\"small text-muted mb-3\">{}</div>{}",
                        html_escape(&search_summary(q, found.len())),
                        render_articles_grid(&found, config)
                    ))
                }
                None => {
                    let listing = ArticlePage::from_response(&response, page, limit);
                    Ok(format!(
                        "{}{}",
                        render_articles_grid(&listing.items, config),
                        render_pager(&listing.meta, &page_query)
                    ))
                }
            }
        }
        Command::Latest { input } => {
            let response = match read_json(&input) {
                Ok(response) => response,
                Err(e) => return Ok(fallback(&e, Notice::LatestLoadFailed)),
            };
            let listing = ArticlePage::from_response(&response, 1, 6);
            Ok(render_articles_compact(&listing.items, config))
        }
        Command::More { input, current } => {
            let response = match read_json(&input) {
                Ok(response) => response,
                Err(e) => return Ok(fallback(&e, Notice::MoreArticlesLoadFailed)),
            };
            let listing = ArticlePage::from_response(&response, 1, 12);
            let items = more_articles(listing.items, &current, config.more_articles_limit);
            Ok(render_articles_compact(&items, config))
        }
        Command::Gallery { input } => {
            let response = match read_json(&input) {
                Ok(response) => response,
                Err(e) => return Ok(fallback(&e, Notice::GalleryLoadFailed)),
            };
            let listing = ArticlePage::from_response(&response, 1, SCAN_LIMIT);
            let images = collect_images(&listing.items);
            info!(images = images.len(), "{}", gallery_summary(images.len()));
            Ok(render_gallery(&images))
        }
        Command::Contact { input } => {
            let payload = read_json(&input)?;
            let submission = ContactSubmission::from_json(&payload).map_err(form_rejected)?;
            Ok(serde_json::to_string_pretty(&submission)?)
        }
        Command::ContactResult { status, input } => {
            let body = input.as_deref().map(read_json).transpose()?;
            Ok(contact_outcome(status, body.as_ref()).html())
        }
        Command::Registration { input } => {
            let payload = read_json(&input)?;
            let registration = Registration::from_json(&payload).map_err(form_rejected)?;
            Ok(serde_json::to_string_pretty(&registration)?)
        }
        Command::RegistrationResult { status, input } => {
            let body = input.as_deref().map(read_json).transpose()?;
            Ok(registration_outcome(status, body.as_ref()).html())
        }
    }
}

/// The failure notice of a view whose data could not be read.
fn fallback(err: &anyhow::Error, notice: Notice) -> String {
    warn!(error = %err, "view data unavailable");
    notice.html().to_string()
}

/// Print the visitor-facing alert for a rejected form and turn the error
/// into a failure exit.
fn form_rejected(err: Error) -> anyhow::Error {
    if let Error::Form(form_err) = &err {
        println!("{}", Alert::from(form_err).html());
    }
    anyhow!(err).context("form payload rejected")
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
