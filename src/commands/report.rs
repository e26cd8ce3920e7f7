use crate::{
    api::portal::PortalApi,
    commands::{period_label, resolve_period},
    libs::{config::Config, messages::Message, report::format_report, session::Session, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12), help = "Month to report (1-12, default: current)")]
    month: Option<u32>,
    #[arg(short, long, help = "Year to report (default: current)")]
    year: Option<i32>,
}

pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let (year, month) = resolve_period(report_args.year, report_args.month);

    let config = Config::read()?;
    let portal = config.portal()?.clone();
    let session = Session::load(&config)?;
    let mut api = PortalApi::new(&portal, session);

    let records = api.fetch_month(year, month).await?;
    let report = format_report(api.employee(), &portal.company, year, month, &records);

    msg_print!(Message::ReportHeader(period_label(year, month)), true);
    View::report(&report)
}
