//! Library error types.

use thiserror::Error;

use crate::form::FormError;

/// Errors from reading API payloads and form submissions.
///
/// Content rendering itself never fails; see [`crate::content`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response does not contain an article")]
    NotAnArticle,

    #[error("form rejected: {0}")]
    Form(#[from] FormError),
}

/// Result type alias using the library [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
