//! # CLI Layer
//!
//! This module is **one possible UI client** for rosterapp.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve configuration and build the API over a `FileStore`
//! 3. **Dispatch**: Drive a `UserListView` through the requested action
//! 4. **Output Formatting**: Tables, coloured messages, the delete prompt

mod commands;
mod logging;
mod render;
mod setup;

use anyhow::Context;
use clap::Parser;
use rosterapp::config::RosterConfig;
use setup::Cli;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let mut config = RosterConfig::load(&cwd)?;
    if let Some(data) = &cli.data {
        config.data_file = cwd.join(data);
    }

    logging::init(cli.verbose, config.log_json);
    tracing::debug!(data_file = %config.data_file.display(), "configuration resolved");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("cannot start async runtime")?;
    runtime.block_on(commands::dispatch(cli, config))
}
