use crate::libs::config::Config;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {}

pub fn cmd(_init_args: InitArgs) -> Result<()> {
    Config::init()?.save()
}
