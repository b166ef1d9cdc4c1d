//! Contact and admission (PPDB) form handling.
//!
//! Payloads are trimmed and checked before they are posted to the content
//! API, and API failures are translated into messages for the visitor.

mod contact;
mod registration;

use std::fmt;

use thiserror::Error;

use crate::content::html_escape;

pub use contact::{ContactSubmission, contact_failure_message, contact_outcome};
pub use registration::{Registration, registration_failure_message, registration_outcome};

/// Whose date of birth failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    Student,
    Father,
    Mother,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Person::Student => "siswa",
            Person::Father => "ayah",
            Person::Mother => "ibu",
        })
    }
}

/// Validation failures. `Display` is the message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Mohon lengkapi email, subjek, dan pesan.")]
    ContactIncomplete,

    #[error("Mohon lengkapi semua data yang wajib diisi.")]
    MissingFields(Vec<&'static str>),

    #[error("NISN harus tepat 10 digit angka.")]
    InvalidNisn,

    #[error("Format email tidak valid.")]
    InvalidEmail,

    #[error("Format tanggal lahir {0} tidak valid. Gunakan format YYYY-MM-DD (contoh: 2007-01-15).")]
    InvalidDate(Person),
}

/// Bootstrap alert colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Danger,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
        }
    }
}

/// A message for the alert area above a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn html(&self) -> String {
        render_alert(self.kind, &self.message)
    }
}

impl From<&FormError> for Alert {
    fn from(err: &FormError) -> Self {
        Alert::new(AlertKind::Warning, err.to_string())
    }
}

/// Render an alert; the message is escaped.
pub fn render_alert(kind: AlertKind, message: &str) -> String {
    format!(
        "<div class=\"alert alert-{} border-0\" role=\"alert\">{}</div>",
        kind.class(),
        html_escape(message)
    )
}

/// The `message` string of an API error body, if any.
fn api_message(body: Option<&serde_json::Value>) -> Option<&str> {
    body?
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
}
