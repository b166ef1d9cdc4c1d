#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the contact and admission forms.

use darulabror_render::Error;
use darulabror_render::form::{
    Alert, AlertKind, ContactSubmission, FormError, Person, Registration, contact_outcome,
    registration_outcome,
};
use serde_json::{Value, json};

fn registration_payload() -> Value {
    json!({
        "student_type": "baru",
        "gender": "P",
        "email": "  wali@example.id ",
        "full_name": "Aisyah",
        "phone": "081311112222",
        "place_of_birth": "Garut",
        "date_of_birth": "2011-07-09",
        "address": "Kp. Sukamaju RT 01",
        "origin_school": "MI Al-Falah",
        "nisn": "0011223344",
        "father_name": "Hasan",
        "father_occupation": "Pedagang",
        "phone_father": "081311113333",
        "date_of_birth_father": "1979-12-01",
        "mother_name": "Fatimah",
        "mother_occupation": "Ibu rumah tangga",
        "phone_mother": "081311114444",
        "date_of_birth_mother": "1983-05-20"
    })
}

#[test]
fn contact_requires_every_field() {
    let err = ContactSubmission::from_json(&json!({
        "email": "a@b.id",
        "subject": "   ",
        "message": "Assalamualaikum"
    }))
    .unwrap_err();
    assert!(matches!(err, Error::Form(FormError::ContactIncomplete)));
}

#[test]
fn contact_with_wrong_types_is_a_json_error() {
    let err = ContactSubmission::from_json(&json!({ "email": 5 })).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn contact_outcome_messages() {
    let ok = contact_outcome(201, None);
    assert_eq!(ok.kind, AlertKind::Success);
    assert!(ok.html().contains("alert-success"));

    let invalid = contact_outcome(400, Some(&json!({ "message": "email is invalid" })));
    assert_eq!(invalid.message, "Format email tidak valid.");

    let generic = contact_outcome(500, None);
    assert_eq!(generic.message, "Gagal mengirim pesan. Silakan coba lagi.");
}

#[test]
fn registration_is_trimmed_and_accepted() {
    let registration = Registration::from_json(&registration_payload()).unwrap();
    assert_eq!(registration.email, "wali@example.id");
    assert_eq!(registration.nisn, "0011223344");
}

#[test]
fn registration_reports_first_failing_check() {
    let mut payload = registration_payload();
    payload["date_of_birth_mother"] = json!("20-05-1983");
    let err = Registration::from_json(&payload).unwrap_err();
    let Error::Form(form_err) = err else {
        panic!("expected form error");
    };
    assert_eq!(form_err, FormError::InvalidDate(Person::Mother));
    assert_eq!(
        Alert::from(&form_err).message,
        "Format tanggal lahir ibu tidak valid. Gunakan format YYYY-MM-DD (contoh: 2007-01-15)."
    );
}

#[test]
fn registration_alert_is_escaped() {
    let alert = registration_outcome(422, Some(&json!({ "message": "<b>ditolak</b>" })));
    assert_eq!(alert.kind, AlertKind::Danger);
    assert!(alert.html().contains("&lt;b&gt;ditolak&lt;/b&gt;"));
}

#[test]
fn registration_duplicate_email() {
    let alert = registration_outcome(409, Some(&json!({ "message": "email must be unique" })));
    assert_eq!(alert.message, "Email sudah terdaftar. Gunakan email lain.");
}
