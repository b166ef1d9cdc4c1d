//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result, bail};
use chrono::{FixedOffset, Offset, Utc};

/// Site rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Offset of the site's time zone from UTC, in minutes (default: 420, WIB).
    pub utc_offset_minutes: i32,

    /// Excerpt length on article cards (default: 160).
    pub excerpt_max: usize,

    /// Excerpt length in compact lists (default: 80).
    pub compact_excerpt_max: usize,

    /// Number of entries in the "more articles" list (default: 5).
    pub more_articles_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 7 * 60,
            excerpt_max: 160,
            compact_excerpt_max: 80,
            more_articles_limit: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let utc_offset_minutes = parse_utc_offset(
            &env::var("SITE_UTC_OFFSET_MINUTES")
                .unwrap_or_else(|_| defaults.utc_offset_minutes.to_string()),
        )?;

        let excerpt_max = env::var("EXCERPT_MAX")
            .unwrap_or_else(|_| defaults.excerpt_max.to_string())
            .parse()
            .context("EXCERPT_MAX must be a valid usize")?;

        let compact_excerpt_max = env::var("COMPACT_EXCERPT_MAX")
            .unwrap_or_else(|_| defaults.compact_excerpt_max.to_string())
            .parse()
            .context("COMPACT_EXCERPT_MAX must be a valid usize")?;

        let more_articles_limit = env::var("MORE_ARTICLES_LIMIT")
            .unwrap_or_else(|_| defaults.more_articles_limit.to_string())
            .parse()
            .context("MORE_ARTICLES_LIMIT must be a valid usize")?;

        Ok(Self {
            utc_offset_minutes,
            excerpt_max,
            compact_excerpt_max,
            more_articles_limit,
        })
    }

    /// The site time zone as a fixed offset. Out-of-range values fall back to UTC.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

/// Parse `SITE_UTC_OFFSET_MINUTES`, which must lie strictly within one day of UTC.
fn parse_utc_offset(raw: &str) -> Result<i32> {
    let minutes: i32 = raw
        .trim()
        .parse()
        .context("SITE_UTC_OFFSET_MINUTES must be a valid i32")?;
    if minutes.unsigned_abs() >= 24 * 60 {
        bail!("SITE_UTC_OFFSET_MINUTES must be within one day of UTC");
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_western_indonesia_time() {
        let config = Config::default();
        assert_eq!(config.utc_offset().local_minus_utc(), 7 * 3600);
        assert_eq!(config.excerpt_max, 160);
        assert_eq!(config.compact_excerpt_max, 80);
        assert_eq!(config.more_articles_limit, 5);
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let config = Config {
            utc_offset_minutes: 100_000,
            ..Config::default()
        };
        assert_eq!(config.utc_offset().local_minus_utc(), 0);

        let extreme = Config {
            utc_offset_minutes: i32::MIN,
            ..Config::default()
        };
        assert_eq!(extreme.utc_offset().local_minus_utc(), 0);
    }

    #[test]
    fn offset_parsing_bounds() {
        assert_eq!(parse_utc_offset("420").ok(), Some(420));
        assert_eq!(parse_utc_offset(" -180 ").ok(), Some(-180));
        assert!(parse_utc_offset("1440").is_err());
        assert!(parse_utc_offset("-2147483648").is_err());
        assert!(parse_utc_offset("WIB").is_err());
    }
}
