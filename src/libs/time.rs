//! Canonical "HH:MM" time handling for attendance records.
//!
//! Attendance in/out times arrive as free-text keyboard input and must be
//! coerced into canonical zero-padded strings before they are stored or
//! compared. This module owns that normalization plus the elapsed-duration
//! arithmetic shared by the calendar grid, the status report, and the
//! record editing commands.
//!
//! ## Format Specifications
//!
//! - Canonical times are "HH:MM" in 24-hour form, both parts zero-padded.
//! - Durations are "HH:MM" as well; overnight shifts wrap past midnight.
//! - Normalization is idempotent: feeding a canonical string back through
//!   `normalize_time` returns it unchanged.
//!
//! ## Error Handling
//!
//! Nothing in this module panics or returns errors. Malformed input
//! degrades to a clamped value or an empty string; callers decide what an
//! empty result means at their own boundary (the report renders it as
//! "00:00", the calendar leaves the cell blank).

use chrono::Duration;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Normalizes free-text time input into a canonical "HH:MM" string.
///
/// All non-digit characters are stripped and at most four digits are kept.
/// The trailing two digits are the minutes when more than two digits
/// remain; everything before them is the hour. Hours clamp to [0, 23] and
/// minutes to [0, 59]. Empty input returns an empty string, not "00:00".
///
/// ```
/// use atrak::libs::time::normalize_time;
///
/// assert_eq!(normalize_time("930"), "09:30");
/// assert_eq!(normalize_time("99:99"), "23:59");
/// assert_eq!(normalize_time(""), "");
/// ```
pub fn normalize_time(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(4).collect();
    if digits.is_empty() {
        return String::new();
    }

    let (hour_digits, minute_digits) = if digits.len() > 2 {
        digits.split_at(digits.len() - 2)
    } else {
        (digits.as_str(), "")
    };

    let hours = hour_digits.parse::<u32>().unwrap_or(0).min(23);
    let minutes = minute_digits.parse::<u32>().unwrap_or(0).min(59);

    format!("{:02}:{:02}", hours, minutes)
}

/// Computes the elapsed duration between two canonical "HH:MM" times.
///
/// Returns an empty string when either side is missing or fails the strict
/// "HH:MM" numeric parse. An out time earlier than the in time wraps past
/// midnight, so "22:00" to "06:00" yields "08:00". Equal times yield
/// "00:00", not a full day.
pub fn compute_duration(in_time: &str, out_time: &str) -> String {
    let (start, end) = match (parse_minutes(in_time), parse_minutes(out_time)) {
        (Some(start), Some(end)) => (start, end),
        _ => return String::new(),
    };

    let elapsed = (end - start).rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", elapsed / 60, elapsed % 60)
}

/// Formats a `chrono::Duration` into the same "HH:MM" shape.
///
/// Used when summing per-day durations into monthly totals. Negative
/// durations clamp to "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Parses a "HH:MM" duration string back into a `chrono::Duration`.
///
/// The inverse of [`compute_duration`] for aggregation: the report's
/// monthly total sums the per-day "Total" cells. Non-matching strings
/// yield `None`.
pub fn parse_duration(value: &str) -> Option<Duration> {
    parse_minutes(value).map(Duration::minutes)
}

fn parse_minutes(time: &str) -> Option<i64> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    Some(hours * 60 + minutes)
}
