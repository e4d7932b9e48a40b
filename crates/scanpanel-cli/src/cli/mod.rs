use crate::notify::{NotifyTone, notify};
use crate::render;
use anyhow::Context;
use clap::Parser;
use scanpanel_client::ScannerClient;
use scanpanel_core::model::{defaults, number_or, parse_statuses};
use scanpanel_core::session::{ConfigForm, PanelSession};
use tracing::warn;

mod args;
mod config_cmd;
mod keys_cmd;
mod schedule_cmd;
#[cfg(test)]
mod tests;

use args::*;

use config_cmd::handle_config;
use keys_cmd::handle_keys;
use schedule_cmd::handle_schedule;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = ScannerClient::new(&cli.panel_url)?;
    match cli.command {
        Commands::Config(args) => handle_config(&client, args),
        Commands::Keys(args) => handle_keys(&client, args),
        Commands::Schedule(args) => handle_schedule(&client, args),
    }
}
