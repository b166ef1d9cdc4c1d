//! Indonesian long-form dates ("20 Desember 2025").

use chrono::{DateTime, Datelike, FixedOffset};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Format a unix timestamp (seconds) as a long Indonesian date in the given
/// time zone. Missing, zero or out-of-range timestamps give an empty string.
pub fn format_date(unix_seconds: Option<i64>, offset: FixedOffset) -> String {
    let Some(secs) = unix_seconds.filter(|s| *s != 0) else {
        return String::new();
    };
    let Some(utc) = DateTime::from_timestamp(secs, 0) else {
        return String::new();
    };
    let local = utc.with_timezone(&offset);
    format!(
        "{} {} {}",
        local.day(),
        MONTHS[local.month0() as usize],
        local.year()
    )
}
