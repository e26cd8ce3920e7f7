use crate::{
    api::portal::PortalApi,
    libs::{config::Config, messages::Message, session::Session},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UnmarkArgs {
    #[arg(help = "Server id of the attendance record to delete")]
    id: i64,
}

pub async fn cmd(unmark_args: UnmarkArgs) -> Result<()> {
    let config = Config::read()?;
    let portal = config.portal()?;
    let session = Session::load(&config)?;
    let mut api = PortalApi::new(portal, session);

    api.delete(unmark_args.id).await?;
    msg_success!(Message::AttendanceDeleted(unmark_args.id));
    Ok(())
}
