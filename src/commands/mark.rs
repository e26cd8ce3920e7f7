//! Attendance marking and in/out time editing.
//!
//! With a status, creates a new record for the date. Without one, sends a
//! time-only update for an existing date. Free-text time input is
//! normalized before it leaves the client, so "930" arrives at the portal
//! as "09:30". After a successful write the month is re-fetched and the
//! affected record shown; the client never trusts its own unacknowledged
//! state.

use crate::{
    api::portal::{NewAttendance, PortalApi, TimeUpdate},
    libs::{config::Config, messages::Message, record::AttendanceStatus, session::Session, time::normalize_time, view::View},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct MarkArgs {
    #[arg(default_value = "today", help = "Date to mark, 'today' or YYYY-MM-DD")]
    date: String,
    #[arg(short, long, help = "Status: present, absent, PL, CL or SL")]
    status: Option<String>,
    #[arg(long = "in", value_name = "HH:MM", help = "Clock-in time (free text, normalized)")]
    in_time: Option<String>,
    #[arg(long = "out", value_name = "HH:MM", help = "Clock-out time (free text, normalized)")]
    out_time: Option<String>,
    #[arg(short, long, help = "Free-text note for the audit trail")]
    notes: Option<String>,
}

pub async fn cmd(mark_args: MarkArgs) -> Result<()> {
    let date = parse_date(&mark_args.date)?;
    let date_iso = date.format("%Y-%m-%d").to_string();

    let in_time = mark_args.in_time.as_deref().map(normalize_time).filter(|t| !t.is_empty());
    let out_time = mark_args.out_time.as_deref().map(normalize_time).filter(|t| !t.is_empty());

    if mark_args.status.is_none() && in_time.is_none() && out_time.is_none() {
        msg_bail_anyhow!(Message::NothingToUpdate);
    }

    let config = Config::read()?;
    let portal = config.portal()?;
    let session = Session::load(&config)?;
    let mut api = PortalApi::new(portal, session);
    let employee_code = api.employee().code.clone();

    match mark_args.status {
        Some(status) => {
            let attendance = NewAttendance {
                employee_code,
                date: date_iso.clone(),
                status: AttendanceStatus::parse(&status).code().to_string(),
                in_time,
                out_time,
                notes: mark_args.notes,
            };
            api.submit(&attendance).await?;
            msg_success!(Message::AttendanceMarked(date_iso.clone()));
        }
        None => {
            let update = TimeUpdate {
                employee_code,
                date: date_iso.clone(),
                in_time,
                out_time,
            };
            api.update_times(&update).await?;
            msg_success!(Message::AttendanceUpdated(date_iso.clone()));
        }
    }

    // Re-fetch the month and show the record as the portal now holds it.
    let records = api.fetch_month(date.year(), date.month()).await?;
    if let Some(record) = records.into_iter().find(|r| r.date == date_iso) {
        View::records(&[record])?;
    }
    Ok(())
}

/// Parses a date string supporting both 'today' and ISO format.
fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}
