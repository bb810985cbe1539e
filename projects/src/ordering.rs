//! Display order for the gallery: newest `date` first.

use crate::model::ProjectRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Milliseconds since the epoch for the date formats project metadata uses.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` (read as UTC),
/// `YYYY-MM-DD`, `YYYY-MM` and `YYYY`. Anything else is `None`.
pub fn parse_date_millis(value: &str) -> Option<i64> {
    let value = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.timestamp_millis());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(ts.and_utc().timestamp_millis());
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d"))
        .ok()
        .or_else(|| year_only(value))?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}

fn year_only(value: &str) -> Option<NaiveDate> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(value.parse().ok()?, 1, 1)
}

fn sort_key(record: &ProjectRecord) -> Option<i64> {
    record.date.as_deref().and_then(parse_date_millis)
}

/// Sort newest first. Absent or unparseable dates sort as the oldest; ties
/// keep their incoming order.
pub fn sort_for_display(records: &mut [ProjectRecord]) {
    records.sort_by_cached_key(|r| std::cmp::Reverse(sort_key(r)));
}
