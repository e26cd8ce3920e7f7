//! Excel export command for monthly status reports.
//!
//! Exports either the configured employee's report or, with `--org`, the
//! full organization grouped by department. The workbook layout is the
//! shared report contract from `libs::report`; this command only gathers
//! the records and picks the output path.

use crate::{
    api::portal::PortalApi,
    commands::{period_label, resolve_period},
    libs::{
        config::Config,
        export::ReportExporter,
        messages::Message,
        record::{AttendanceRecord, Employee},
        report::{format_org_report, format_report},
        session::Session,
    },
    msg_bail_anyhow, msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12), help = "Month to export (1-12, default: current)")]
    month: Option<u32>,
    #[arg(short, long, help = "Year to export (default: current)")]
    year: Option<i32>,
    #[arg(long, help = "Export every employee, grouped by department")]
    org: bool,
    #[arg(short, long, help = "Custom output file path")]
    output: Option<PathBuf>,
}

pub async fn cmd(export_args: ExportArgs) -> Result<()> {
    let (year, month) = resolve_period(export_args.year, export_args.month);

    msg_info!(Message::ExportingReport(period_label(year, month)));

    let config = Config::read()?;
    let portal = config.portal()?.clone();
    let session = Session::load(&config)?;
    let mut api = PortalApi::new(&portal, session);

    if export_args.org {
        let employees = api.fetch_employees().await?;
        if employees.is_empty() {
            msg_bail_anyhow!(Message::EmployeesNotFound);
        }

        let mut entries: Vec<(Employee, Vec<AttendanceRecord>)> = Vec::with_capacity(employees.len());
        for employee in employees {
            let records = api.fetch_month_for(&employee.code, year, month).await?;
            entries.push((employee, records));
        }

        let report = format_org_report(&portal.company, year, month, &entries);
        ReportExporter::new(export_args.output, &portal.company, year, month).write(&report)
    } else {
        let records = api.fetch_month(year, month).await?;
        let employee = api.employee().clone();
        let report = format_report(&employee, &portal.company, year, month, &records);
        ReportExporter::new(export_args.output, &employee.name, year, month).write(&report)
    }
}
