//! Provider payload → [`MediaRecord`](super::MediaRecord) normalization.
//!
//! One pure function per provider. Both are total over their input: missing
//! or oddly shaped fields degrade to `None`, `0` or an empty list.

mod catalog;
mod tracking;

pub use catalog::normalize_catalog;
pub use tracking::{normalize_tracking, search_hit_ids};

use chrono::{DateTime, Datelike, NaiveDate};

/// Year of a `YYYY-MM-DD` date, an RFC 3339 timestamp, or anything starting
/// with four digits.
pub(crate) fn year_from_date(date: Option<&str>) -> Option<i32> {
    let date = date?.trim();
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(day.year());
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(date) {
        return Some(ts.year());
    }
    date.get(..4)
        .filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|y| y.parse().ok())
}

pub(crate) fn clamp_rating(rating: Option<f64>) -> f64 {
    rating
        .filter(|r| r.is_finite())
        .map(|r| r.clamp(0.0, 10.0))
        .unwrap_or(0.0)
}
