//! Admission (PPDB) registration form.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Alert, AlertKind, FormError, Person, api_message};
use crate::error::Result;

#[allow(clippy::expect_used)]
static NISN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid NISN regex"));

#[allow(clippy::expect_used)]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[allow(clippy::expect_used)]
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Payload for `POST /registrations`. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registration {
    pub student_type: String,
    pub gender: String,

    pub email: String,
    pub full_name: String,
    pub phone: String,

    pub place_of_birth: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,

    pub address: String,
    pub origin_school: String,

    /// National student number, exactly 10 digits.
    pub nisn: String,

    pub father_name: String,
    pub father_occupation: String,
    pub phone_father: String,
    pub date_of_birth_father: String,

    pub mother_name: String,
    pub mother_occupation: String,
    pub phone_mother: String,
    pub date_of_birth_mother: String,
}

impl Registration {
    /// Read, trim and validate a registration from JSON.
    pub fn from_json(value: &Value) -> Result<Self> {
        let registration: Self = serde_json::from_value(value.clone())?;
        Ok(registration.validated()?)
    }

    /// Trim every field, then check in order: all present, NISN, email and
    /// the three dates of birth.
    pub fn validated(mut self) -> std::result::Result<Self, FormError> {
        for field in self.fields_mut() {
            *field = field.trim().to_string();
        }

        let missing: Vec<&'static str> = self
            .fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        if !NISN.is_match(&self.nisn) {
            return Err(FormError::InvalidNisn);
        }
        if !EMAIL.is_match(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        for (date, person) in [
            (&self.date_of_birth, Person::Student),
            (&self.date_of_birth_father, Person::Father),
            (&self.date_of_birth_mother, Person::Mother),
        ] {
            if !ISO_DATE.is_match(date) {
                return Err(FormError::InvalidDate(person));
            }
        }
        Ok(self)
    }

    fn fields(&self) -> [(&'static str, &str); 18] {
        [
            ("student_type", &self.student_type),
            ("gender", &self.gender),
            ("email", &self.email),
            ("full_name", &self.full_name),
            ("phone", &self.phone),
            ("place_of_birth", &self.place_of_birth),
            ("date_of_birth", &self.date_of_birth),
            ("address", &self.address),
            ("origin_school", &self.origin_school),
            ("nisn", &self.nisn),
            ("father_name", &self.father_name),
            ("father_occupation", &self.father_occupation),
            ("phone_father", &self.phone_father),
            ("date_of_birth_father", &self.date_of_birth_father),
            ("mother_name", &self.mother_name),
            ("mother_occupation", &self.mother_occupation),
            ("phone_mother", &self.phone_mother),
            ("date_of_birth_mother", &self.date_of_birth_mother),
        ]
    }

    fn fields_mut(&mut self) -> [&mut String; 18] {
        [
            &mut self.student_type,
            &mut self.gender,
            &mut self.email,
            &mut self.full_name,
            &mut self.phone,
            &mut self.place_of_birth,
            &mut self.date_of_birth,
            &mut self.address,
            &mut self.origin_school,
            &mut self.nisn,
            &mut self.father_name,
            &mut self.father_occupation,
            &mut self.phone_father,
            &mut self.date_of_birth_father,
            &mut self.mother_name,
            &mut self.mother_occupation,
            &mut self.phone_mother,
            &mut self.date_of_birth_mother,
        ]
    }
}

/// Message for a failed registration, from the API error body.
pub fn registration_failure_message(body: Option<&Value>) -> String {
    let Some(message) = api_message(body) else {
        return "Gagal mengirim pendaftaran. Silakan coba lagi.".to_string();
    };
    let lower = message.to_lowercase();
    if lower.contains("nisn") && lower.contains("10") {
        "NISN harus 10 digit angka.".to_string()
    } else if lower.contains("email") && lower.contains("unique") {
        "Email sudah terdaftar. Gunakan email lain.".to_string()
    } else if lower.contains("nisn") && lower.contains("unique") {
        "NISN sudah terdaftar.".to_string()
    } else if lower.contains("phone") {
        "Format nomor telepon tidak valid.".to_string()
    } else if lower.contains("required") {
        FormError::MissingFields(Vec::new()).to_string()
    } else {
        message.to_string()
    }
}

/// Alert for the API's answer to a registration (201 is success).
pub fn registration_outcome(status: u16, body: Option<&Value>) -> Alert {
    if status == 201 {
        Alert::new(
            AlertKind::Success,
            "Pendaftaran berhasil dikirim. Tim kami akan menghubungi Anda.",
        )
    } else {
        Alert::new(AlertKind::Danger, registration_failure_message(body))
    }
}
