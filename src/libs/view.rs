//! Console rendering for calendars, reports, and record listings.

use crate::libs::calendar::{absent_count, present_count, CalendarDay, WEEKDAY_LABELS};
use crate::libs::record::AttendanceRecord;
use crate::libs::report::TabularReport;
use crate::libs::time::{compute_duration, format_duration, parse_duration};
use anyhow::Result;
use chrono::Duration;
use prettytable::{Cell, Row, Table};

pub struct View {}

impl View {
    /// Renders the calendar grid as a 7-column table, Sunday first.
    ///
    /// Dated cells show the day number, the status code, and the in/out
    /// elapsed duration when both times are present; today is flagged
    /// with an asterisk. Unmarked weekdays stay blank; only explicit
    /// statuses are shown or counted here.
    pub fn calendar(cells: &[CalendarDay]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(Row::new(WEEKDAY_LABELS.iter().map(|label| Cell::new(label)).collect()));

        for week in cells.chunks(7) {
            let mut row = Vec::with_capacity(7);
            for cell in week {
                row.push(Cell::new(&Self::calendar_cell(cell)));
            }
            // Pad the trailing week out to the full grid width.
            while row.len() < 7 {
                row.push(Cell::new(""));
            }
            table.add_row(Row::new(row));
        }

        table.printstd();

        println!("\nPresent: {}  Absent: {}  Worked: {}", present_count(cells), absent_count(cells), Self::total_worked(cells));
        Ok(())
    }

    /// Renders a tabular report; spans collapse into single cells and the
    /// bold/border hints are left to the Excel export.
    pub fn report(report: &TabularReport) -> Result<()> {
        let mut table = Table::new();
        for row in &report.rows {
            table.add_row(Row::new(row.iter().map(|cell| Cell::new(&cell.text)).collect()));
        }
        table.printstd();
        Ok(())
    }

    /// Renders raw records as a flat listing, newest first as fetched.
    pub fn records(records: &[AttendanceRecord]) -> Result<()> {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("ID"),
            Cell::new("DATE"),
            Cell::new("STATUS"),
            Cell::new("IN"),
            Cell::new("OUT"),
            Cell::new("NOTES"),
        ]));

        for record in records {
            table.add_row(Row::new(vec![
                Cell::new(&record.id.map_or(String::new(), |id| id.to_string())),
                Cell::new(&record.date),
                Cell::new(record.status().code()),
                Cell::new(record.in_time.as_deref().unwrap_or("")),
                Cell::new(record.out_time.as_deref().unwrap_or("")),
                Cell::new(record.notes.as_deref().unwrap_or("")),
            ]));
        }

        table.printstd();
        Ok(())
    }

    fn calendar_cell(cell: &CalendarDay) -> String {
        let day = match cell.day {
            Some(day) => day,
            None => return String::new(),
        };

        let marker = if cell.is_today { "*" } else { "" };
        let code = cell.status.code();
        let duration = compute_duration(cell.in_time.as_deref().unwrap_or(""), cell.out_time.as_deref().unwrap_or(""));

        let mut text = format!("{:>2}{}", day, marker);
        if !code.is_empty() {
            text.push_str(&format!(" {}", code));
        }
        if !duration.is_empty() {
            text.push_str(&format!("\n{}", duration));
        }
        text
    }

    fn total_worked(cells: &[CalendarDay]) -> String {
        let total = cells
            .iter()
            .filter_map(|cell| {
                parse_duration(&compute_duration(
                    cell.in_time.as_deref().unwrap_or(""),
                    cell.out_time.as_deref().unwrap_or(""),
                ))
            })
            .fold(Duration::zero(), |acc, d| acc + d);
        format_duration(&total)
    }
}
