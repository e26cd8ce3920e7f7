//! Monthly calendar grid construction.
//!
//! Expands a (year, month) pair into the ordered cell sequence a 7-column
//! calendar renders: leading padding cells to align the 1st under its
//! weekday, then one dated cell per day of the month with any matching
//! attendance record merged in. The grid is rebuilt from scratch on every
//! render; nothing here is cached or persisted.

use crate::libs::record::{AttendanceRecord, AttendanceStatus};
use chrono::{Datelike, Local, Month, NaiveDate};

/// Day-of-week ordinals run 0=Sunday..6=Saturday throughout this module,
/// matching the calendar header and the report's day-initial scheme.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of the calendar grid.
///
/// `day` is `None` for the leading padding cells that align the 1st of the
/// month under its weekday column; padding cells carry no date, no
/// classification, and are excluded from every aggregate count.
#[derive(Debug, Clone)]
pub struct CalendarDay {
    /// 1-based day of month; `None` marks a padding cell.
    pub day: Option<u32>,
    /// ISO "YYYY-MM-DD", present only on dated cells.
    pub date: Option<String>,
    pub is_weekend: bool,
    pub is_today: bool,
    pub status: AttendanceStatus,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
}

impl CalendarDay {
    fn padding() -> Self {
        Self {
            day: None,
            date: None,
            is_weekend: false,
            is_today: false,
            status: AttendanceStatus::Unmarked,
            in_time: None,
            out_time: None,
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day.is_none()
    }
}

/// Builds the cell sequence for (year, month), merging `records` by date.
///
/// "Today" is resolved from the local clock; use [`build_calendar_on`]
/// when the reference date must be explicit.
pub fn build_calendar(year: i32, month: u32, records: &[AttendanceRecord]) -> Vec<CalendarDay> {
    build_calendar_on(year, month, records, Local::now().date_naive())
}

/// Builds the cell sequence for (year, month) against an explicit `today`.
///
/// Output length is `first_weekday + days_in_month`; dated cells are
/// strictly ascending by date. Records are matched by exact string
/// equality on the ISO date, and the first match wins; the portal
/// enforces per-date uniqueness, this function does not. A month outside
/// 1..=12 is a caller error and yields an empty grid; validation belongs
/// at the CLI boundary.
pub fn build_calendar_on(year: i32, month: u32, records: &[AttendanceRecord], today: NaiveDate) -> Vec<CalendarDay> {
    let total_days = days_in_month(year, month);
    let lead = first_weekday(year, month);
    let today_iso = today.format("%Y-%m-%d").to_string();

    let mut cells = Vec::with_capacity((lead + total_days) as usize);
    for _ in 0..lead {
        cells.push(CalendarDay::padding());
    }

    for day in 1..=total_days {
        let date = format!("{:04}-{:02}-{:02}", year, month, day);
        let record = records.iter().find(|r| r.date == date);
        let weekday = (lead + day - 1) % 7;

        cells.push(CalendarDay {
            day: Some(day),
            is_weekend: weekday == 0 || weekday == 6,
            is_today: date == today_iso,
            status: record.map(|r| r.status()).unwrap_or(AttendanceStatus::Unmarked),
            in_time: record.and_then(|r| r.in_time.clone()),
            out_time: record.and_then(|r| r.out_time.clone()),
            date: Some(date),
        });
    }

    cells
}

/// Count of cells explicitly marked present.
pub fn present_count(cells: &[CalendarDay]) -> usize {
    cells.iter().filter(|c| c.status == AttendanceStatus::Present).count()
}

/// Count of cells explicitly marked absent.
///
/// Unmarked weekdays do not count here even though the exported status
/// report renders them as "A"; the two surfaces disagree on purpose,
/// mirroring the portal's backend aggregates.
pub fn absent_count(cells: &[CalendarDay]) -> usize {
    cells.iter().filter(|c| c.status == AttendanceStatus::Absent).count()
}

/// Gregorian day count for (year, month), leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

/// Day of week of the 1st of the month, 0=Sunday..6=Saturday.
pub fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// English month name for 1-based `month`.
pub fn month_name(month: u32) -> &'static str {
    Month::try_from(month as u8).map(|m| m.name()).unwrap_or("Unknown")
}
