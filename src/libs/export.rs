//! Excel export of monthly status reports.
//!
//! Serializes a [`TabularReport`] into an .xlsx workbook with the style
//! hints applied: bold and centered formats, thin borders around data
//! cells, merged title rows, and a label column wider than the day
//! columns. The report layout itself lives in `libs::report`; this module
//! only maps cells onto a worksheet and writes the file.

use crate::libs::calendar::month_name;
use crate::libs::messages::Message;
use crate::libs::report::{Align, ReportCell, TabularReport};
use crate::msg_success;
use anyhow::Result;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::path::PathBuf;

const LABEL_COLUMN_WIDTH: f64 = 16.0;
const DAY_COLUMN_WIDTH: f64 = 6.0;

/// Writes report workbooks to disk.
pub struct ReportExporter {
    output_path: PathBuf,
}

impl ReportExporter {
    /// Creates an exporter writing to `output_path`, or to the default
    /// filename for `(subject, year, month)` in the working directory.
    ///
    /// The default pattern is
    /// `<Subject_with_underscores>_<MonthName>_<Year>_Attendance.xlsx`,
    /// where the subject is the employee name for a single-user export
    /// and the company name for an organization-wide one.
    pub fn new(output_path: Option<PathBuf>, subject: &str, year: i32, month: u32) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(default_filename(subject, year, month)));
        Self { output_path }
    }

    /// Serializes `report` into a single worksheet and saves the workbook.
    pub fn write(&self, report: &TabularReport) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Attendance")?;

        worksheet.set_column_width(0, LABEL_COLUMN_WIDTH)?;
        for col in 1..report.width() {
            worksheet.set_column_width(col, DAY_COLUMN_WIDTH)?;
        }

        for (row_index, row) in report.rows.iter().enumerate() {
            let mut col: u16 = 0;
            for cell in row {
                write_cell(worksheet, row_index as u32, col, cell)?;
                col += cell.span;
            }
        }

        workbook.save(&self.output_path)?;
        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }
}

fn write_cell(worksheet: &mut rust_xlsxwriter::Worksheet, row: u32, col: u16, cell: &ReportCell) -> Result<()> {
    let format = cell_format(cell);
    if cell.span > 1 {
        worksheet.merge_range(row, col, row, col + cell.span - 1, &cell.text, &format)?;
    } else {
        worksheet.write_string_with_format(row, col, &cell.text, &format)?;
    }
    Ok(())
}

fn cell_format(cell: &ReportCell) -> Format {
    let mut format = Format::new();
    if cell.bold {
        format = format.set_bold();
    }
    if cell.align == Align::Center {
        format = format.set_align(FormatAlign::Center);
    }
    if cell.bordered {
        format = format.set_border(FormatBorder::Thin);
    }
    format
}

/// Default export filename, spaces in the subject replaced by underscores.
pub fn default_filename(subject: &str, year: i32, month: u32) -> String {
    format!("{}_{}_{}_Attendance.xlsx", subject.replace(' ', "_"), month_name(month), year)
}
