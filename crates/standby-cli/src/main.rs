//! Standby CLI Application
//!
//! Command-line interface for going offline and back online.

mod args;
mod cli;
mod renderer;

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, LogListener};
use log::{debug, info};
use renderer::TerminalRenderer;
use standby_core::{Alert, StandbyConfig, StatusMachine, SystemClock};

/// Loads the configuration file and applies command-line overrides.
fn load_config(args: &Args) -> Result<StandbyConfig> {
    let mut config =
        StandbyConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(token) = &args.token {
        config.token = Some(token.clone());
    }
    if let Some(time_zone) = &args.time_zone {
        config.time_zone = Some(time_zone.clone());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    debug!("Using API at {}", config.base_url);

    let time_zone = config.time_zone().context("Invalid time zone")?;
    let client = config
        .client_builder()
        .build()
        .context("Failed to initialize status client")?;

    let machine = StatusMachine::new(Arc::new(client))
        .with_clock(Arc::new(SystemClock::new(time_zone.clone())))
        .with_listener(Arc::new(LogListener));
    let cli = Cli::new(machine, TerminalRenderer::new(!args.no_color), time_zone);

    info!("Standby started");

    let outcome = match args.command {
        Commands::Offline { command } => cli.handle_offline_command(command).await,
        Commands::Online => cli.online().await,
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!("Command failed: {e}");
            cli.renderer().render_alert(&Alert::from(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
