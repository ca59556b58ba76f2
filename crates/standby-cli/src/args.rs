use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::OfflineCommands;

/// Take yourself offline for the rest of the day or a custom window, and
/// come back online.
///
/// Every change is sent to the account service with a single request and
/// only takes effect once the service accepted it. Connection settings are
/// read from $XDG_CONFIG_HOME/standby/config.toml unless overridden.
#[derive(Parser)]
#[command(version, about, name = "standby")]
pub struct Args {
    /// Path to a TOML configuration file. Defaults to
    /// $XDG_CONFIG_HOME/standby/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, e.g. https://api.example.com/api
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token sent with the update
    #[arg(long, global = true, env = "STANDBY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// IANA time zone used for calendar days and entered times
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Standby CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Go offline
    #[command(alias = "off")]
    Offline {
        #[command(subcommand)]
        command: OfflineCommands,
    },
    /// Go back online
    #[command(alias = "on")]
    Online,
}
