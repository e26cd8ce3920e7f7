//! Monthly status report formatting.
//!
//! Builds the fixed, spreadsheet-shaped report the portal's consumers
//! expect: a header block, a day-of-month column header row, and one row
//! per metric (`Status`, `InTime`, `OutTime`, `Total`) with one column per
//! calendar day. The output is a [`TabularReport`], a grid of cells with
//! style hints, that drives both the console view and the Excel export
//! without either knowing the layout.
//!
//! ## Layout Contract
//!
//! Downstream spreadsheet consumers depend on this exact shape:
//!
//! 1. Centered bold title spanning the full day-column width.
//! 2. Centered date range, `"<MonthName>-1-<Year> to <MonthName>-<lastDay>-<Year>"`.
//! 3. Company identification line.
//! 4. Bold department line.
//! 5. `Emp. Code` label/value pair in the first two columns.
//! 6. `Emp. Name` label/value pair.
//! 7. `Days` header: columns B.. hold `"<day> <initial>"` with initials
//!    `S M T W Th F St` (two letters for Thursday and Saturday so they
//!    stay distinguishable from Tuesday and Sunday).
//! 8. `Status`, `InTime`, `OutTime`, `Total` rows.
//!
//! A status cell renders the record's code, or "A" when no record matches
//! the day — every day, weekends included. The live calendar leaves such
//! days blank instead; the asymmetry is observed portal behavior and both
//! surfaces keep it.

use crate::libs::calendar::{days_in_month, first_weekday, month_name};
use crate::libs::record::{AttendanceRecord, AttendanceStatus, Employee};
use crate::libs::time::compute_duration;

pub const REPORT_TITLE: &str = "Monthly Status Report (Basic Work Duration)";

/// Day-of-week initials for the `Days` header, indexed 0=Sunday..6=Saturday.
pub const DAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "Th", "F", "St"];

/// Horizontal alignment hint for a report cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One styled cell of the report grid.
#[derive(Debug, Clone)]
pub struct ReportCell {
    pub text: String,
    pub bold: bool,
    pub align: Align,
    pub bordered: bool,
    /// Number of columns this cell spans; title rows span the full width.
    pub span: u16,
}

impl ReportCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            align: Align::Left,
            bordered: false,
            span: 1,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn data(text: impl Into<String>) -> Self {
        Self {
            align: Align::Center,
            bordered: true,
            ..Self::plain(text)
        }
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::data(text)
        }
    }

    pub fn title(text: impl Into<String>, span: u16) -> Self {
        Self {
            bold: true,
            align: Align::Center,
            span,
            ..Self::plain(text)
        }
    }
}

/// A report as a grid of styled cells.
///
/// `day_count` is the number of data columns; the full grid is one label
/// column plus `day_count` day columns. The label column is presented
/// wider than the day columns, a presentation invariant the renderers
/// honor, not a numeric contract.
#[derive(Debug, Clone)]
pub struct TabularReport {
    pub rows: Vec<Vec<ReportCell>>,
    pub day_count: u32,
}

impl TabularReport {
    /// Total grid width in columns, label column included.
    pub fn width(&self) -> u16 {
        self.day_count as u16 + 1
    }
}

/// Formats the single-user monthly report.
///
/// A user with no records in range still produces the full row skeleton:
/// all-"A" status cells, blank times, "00:00" totals. No day column is
/// ever omitted for missing data.
pub fn format_report(employee: &Employee, company: &str, year: i32, month: u32, records: &[AttendanceRecord]) -> TabularReport {
    let day_count = days_in_month(year, month);
    let mut rows = header_rows(company, year, month, day_count);

    rows.push(vec![ReportCell::bold(&employee.department)]);
    rows.extend(user_block(employee, year, month, day_count, records));

    TabularReport { rows, day_count }
}

/// Formats the organization-wide monthly report.
///
/// The per-user block (`Emp. Code` through `Total`) repeats once per
/// employee, grouped under a bold department header row. Groups and their
/// members are ordered by (department, name) so the export is
/// deterministic regardless of roster order.
pub fn format_org_report(company: &str, year: i32, month: u32, entries: &[(Employee, Vec<AttendanceRecord>)]) -> TabularReport {
    let day_count = days_in_month(year, month);
    let mut rows = header_rows(company, year, month, day_count);

    let mut sorted: Vec<&(Employee, Vec<AttendanceRecord>)> = entries.iter().collect();
    sorted.sort_by(|a, b| (&a.0.department, &a.0.name).cmp(&(&b.0.department, &b.0.name)));

    let mut current_department: Option<&str> = None;
    for (employee, records) in sorted {
        if current_department != Some(employee.department.as_str()) {
            rows.push(vec![ReportCell::bold(&employee.department)]);
            current_department = Some(employee.department.as_str());
        }
        rows.extend(user_block(employee, year, month, day_count, records));
    }

    TabularReport { rows, day_count }
}

/// The date range string of row 2, e.g. "March-1-2025 to March-31-2025".
pub fn date_range(year: i32, month: u32) -> String {
    let name = month_name(month);
    format!("{}-1-{} to {}-{}-{}", name, year, name, days_in_month(year, month), year)
}

fn header_rows(company: &str, year: i32, month: u32, day_count: u32) -> Vec<Vec<ReportCell>> {
    let width = day_count as u16 + 1;
    vec![
        vec![ReportCell::title(REPORT_TITLE, width)],
        vec![ReportCell::title(date_range(year, month), width)],
        vec![ReportCell::title(company, width)],
    ]
}

fn user_block(employee: &Employee, year: i32, month: u32, day_count: u32, records: &[AttendanceRecord]) -> Vec<Vec<ReportCell>> {
    let lead = first_weekday(year, month);

    let mut days_row = vec![ReportCell::header("Days")];
    let mut status_row = vec![ReportCell::header("Status")];
    let mut in_row = vec![ReportCell::header("InTime")];
    let mut out_row = vec![ReportCell::header("OutTime")];
    let mut total_row = vec![ReportCell::header("Total")];

    for day in 1..=day_count {
        let date = format!("{:04}-{:02}-{:02}", year, month, day);
        let record = records.iter().find(|r| r.date == date);
        let initial = DAY_INITIALS[((lead + day - 1) % 7) as usize];

        days_row.push(ReportCell::header(format!("{} {}", day, initial)));
        status_row.push(ReportCell::data(status_code(record)));
        in_row.push(ReportCell::data(record.and_then(|r| r.in_time.as_deref()).unwrap_or("")));
        out_row.push(ReportCell::data(record.and_then(|r| r.out_time.as_deref()).unwrap_or("")));
        total_row.push(ReportCell::data(day_total(record)));
    }

    vec![
        vec![ReportCell::bold("Emp. Code"), ReportCell::plain(&employee.code)],
        vec![ReportCell::bold("Emp. Name"), ReportCell::plain(&employee.name)],
        days_row,
        status_row,
        in_row,
        out_row,
        total_row,
    ]
}

/// Status cell text: the record's code, or "A" for any day the merge
/// found nothing for, including weekends and records whose status string
/// parsed to nothing.
fn status_code(record: Option<&AttendanceRecord>) -> &'static str {
    match record.map(|r| r.status()) {
        Some(AttendanceStatus::Unmarked) | None => "A",
        Some(status) => status.code(),
    }
}

/// Total cell text: the in/out elapsed duration, "00:00" when either side
/// is missing or malformed. The zero fallback lives here, not in
/// `compute_duration`.
fn day_total(record: Option<&AttendanceRecord>) -> String {
    let duration = record
        .map(|r| compute_duration(r.in_time.as_deref().unwrap_or(""), r.out_time.as_deref().unwrap_or("")))
        .unwrap_or_default();

    if duration.is_empty() {
        "00:00".to_string()
    } else {
        duration
    }
}
