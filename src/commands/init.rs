//! Interactive configuration setup.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Print the resulting configuration without saving it
    #[arg(long)]
    dry_run: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = Config::init()?;

    if init_args.dry_run {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    config.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
