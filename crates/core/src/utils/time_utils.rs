use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use log::warn;

use crate::errors::ValidationError;

const NOT_UPDATED: &str = "Not updated yet";

/// Parses an API timestamp. Accepts RFC 3339 and naive ISO forms; naive
/// values are taken as UTC.
pub fn parse_api_timestamp(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))?;
    Ok(naive.and_utc())
}

fn plural(count: i64, unit: &str) -> String {
    if count > 1 {
        format!("{} {}s ago", count, unit)
    } else {
        format!("{} {} ago", count, unit)
    }
}

/// Human label for how long ago a price was refreshed, relative to `now`.
///
/// Anything a week or older is shown as a date, with the year only when it
/// differs from `now`'s.
pub fn format_last_update(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = timestamp.filter(|s| !s.trim().is_empty()) else {
        return NOT_UPDATED.to_string();
    };
    let updated_at = match parse_api_timestamp(raw) {
        Ok(dt) => dt,
        Err(e) => {
            warn!("Unparseable last_price_at '{}': {}", raw, e);
            return NOT_UPDATED.to_string();
        }
    };

    let elapsed = now.signed_duration_since(updated_at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "min")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else if updated_at.year() != now.year() {
        updated_at.format("%b %-d, %Y, %I:%M %p").to_string()
    } else {
        updated_at.format("%b %-d, %I:%M %p").to_string()
    }
}
