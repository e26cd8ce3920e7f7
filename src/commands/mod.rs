pub mod calendar;
pub mod export;
pub mod init;
pub mod mark;
pub mod report;
pub mod unmark;

use crate::libs::calendar::month_name;
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the monthly attendance calendar")]
    Calendar(calendar::CalendarArgs),
    #[command(about = "Show the monthly status report")]
    Report(report::ReportArgs),
    #[command(about = "Export the monthly status report as an Excel workbook")]
    Export(export::ExportArgs),
    #[command(about = "Mark attendance or edit in/out times for a date")]
    Mark(mark::MarkArgs),
    #[command(about = "Delete an attendance record by id")]
    Unmark(unmark::UnmarkArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Calendar(args) => calendar::cmd(args).await,
            Commands::Report(args) => report::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Mark(args) => mark::cmd(args).await,
            Commands::Unmark(args) => unmark::cmd(args).await,
        }
    }
}

/// Fills a (year, month) window from the local clock when flags are
/// absent; month range validation happens in clap before this runs.
pub(crate) fn resolve_period(year: Option<i32>, month: Option<u32>) -> (i32, u32) {
    let now = Local::now().date_naive();
    (year.unwrap_or_else(|| now.year()), month.unwrap_or_else(|| now.month()))
}

/// Human label for a (year, month) window, e.g. "March 2025".
pub(crate) fn period_label(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}
