use crate::{
    api::portal::PortalApi,
    commands::{period_label, resolve_period},
    libs::{calendar::build_calendar, config::Config, messages::Message, session::Session, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CalendarArgs {
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12), help = "Month to show (1-12, default: current)")]
    month: Option<u32>,
    #[arg(short, long, help = "Year to show (default: current)")]
    year: Option<i32>,
}

pub async fn cmd(calendar_args: CalendarArgs) -> Result<()> {
    let (year, month) = resolve_period(calendar_args.year, calendar_args.month);
    let period = period_label(year, month);

    let config = Config::read()?;
    let portal = config.portal()?;
    let session = Session::load(&config)?;
    let mut api = PortalApi::new(portal, session);

    let records = api.fetch_month(year, month).await?;
    if records.is_empty() {
        msg_info!(Message::RecordsNotFound(period.clone()));
    }

    let cells = build_calendar(year, month, &records);
    msg_print!(Message::CalendarHeader(period), true);
    View::calendar(&cells)
}
