//! Contact form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Alert, AlertKind, FormError, api_message};
use crate::error::Result;

/// Payload for `POST /contacts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// Read, trim and validate a submission from JSON.
    pub fn from_json(value: &Value) -> Result<Self> {
        let submission: Self = serde_json::from_value(value.clone())?;
        Ok(submission.validated()?)
    }

    /// Trim every field and check that none is empty.
    pub fn validated(self) -> std::result::Result<Self, FormError> {
        let trimmed = Self {
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        if trimmed.email.is_empty() || trimmed.subject.is_empty() || trimmed.message.is_empty() {
            return Err(FormError::ContactIncomplete);
        }
        Ok(trimmed)
    }
}

/// Message for a failed contact submission, from the API error body.
pub fn contact_failure_message(body: Option<&Value>) -> String {
    let Some(message) = api_message(body) else {
        return "Gagal mengirim pesan. Silakan coba lagi.".to_string();
    };
    let lower = message.to_lowercase();
    if lower.contains("email") && lower.contains("invalid") {
        FormError::InvalidEmail.to_string()
    } else if lower.contains("required") {
        FormError::ContactIncomplete.to_string()
    } else {
        message.to_string()
    }
}

/// Alert for the API's answer to a contact submission (201 is success).
pub fn contact_outcome(status: u16, body: Option<&Value>) -> Alert {
    if status == 201 {
        Alert::new(AlertKind::Success, "Pesan berhasil dikirim. Terima kasih.")
    } else {
        Alert::new(AlertKind::Danger, contact_failure_message(body))
    }
}
