//! Command definitions and the handlers that drive the status machine.
//!
//! Arguments are parsed by clap into the structures below, converted into
//! core values (parsed instants in the configured time zone), and then fed
//! through [`StatusMachine`] one transition at a time, exactly as a user
//! would step through the status screen:
//!
//! ```text
//! standby offline today          toggle_offline → choose_today
//! standby offline custom ...     toggle_offline → choose_custom → edit_* → save_custom
//! standby online                 toggle_offline → toggle_online
//! ```

use clap::{Args, Subcommand};
use jiff::{tz::TimeZone, Zoned};
use log::info;
use standby_core::{
    validator::{parse_date_and_time, parse_instant, validate_input},
    OfflineSettings, Result, StatusListener, StatusMachine, ValidationError,
};

use crate::renderer::TerminalRenderer;

#[derive(Subcommand)]
pub enum OfflineCommands {
    /// Go offline from now until the end of today
    #[command(alias = "t")]
    Today,
    /// Go offline for a custom window
    #[command(alias = "c")]
    Custom(CustomWindowArgs),
}

/// Go offline for a custom window
///
/// Each endpoint is given either as one value (--from, --to) or as separate
/// date and time fields (--from-date with --from-time, --to-date with
/// --to-time). Without a start the window starts now; without an end it
/// lasts one hour. Moving the start past the end pushes the end to one hour
/// after the new start.
#[derive(Args)]
pub struct CustomWindowArgs {
    /// Start of the window
    #[arg(
        long,
        conflicts_with_all = ["from_date", "from_time"],
        help = "Start of the window, e.g. '2024-06-14 13:00' or an RFC 3339 timestamp"
    )]
    pub from: Option<String>,
    /// End of the window
    #[arg(
        long,
        conflicts_with_all = ["to_date", "to_time"],
        help = "End of the window, e.g. '2024-06-14 17:30' or an RFC 3339 timestamp"
    )]
    pub to: Option<String>,
    /// Start date (YYYY-MM-DD)
    #[arg(long, requires = "from_time")]
    pub from_date: Option<String>,
    /// Start time (HH:MM)
    #[arg(long, requires = "from_date")]
    pub from_time: Option<String>,
    /// End date (YYYY-MM-DD)
    #[arg(long, requires = "to_time")]
    pub to_date: Option<String>,
    /// End time (HH:MM)
    #[arg(long, requires = "to_date")]
    pub to_time: Option<String>,
}

/// Endpoints entered for a custom window.
pub struct CustomWindow {
    pub from: Option<Zoned>,
    pub to: Option<Zoned>,
}

impl CustomWindowArgs {
    /// Parses the endpoints in `tz`.
    ///
    /// When both endpoints are given as single values, both are read before
    /// their order is checked.
    pub fn into_window(self, tz: &TimeZone) -> std::result::Result<CustomWindow, ValidationError> {
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            let (from, to) = validate_input(from, to, tz)?;
            return Ok(CustomWindow {
                from: Some(from),
                to: Some(to),
            });
        }

        let from = endpoint(
            "start date",
            self.from.as_deref(),
            self.from_date.as_deref().zip(self.from_time.as_deref()),
            tz,
        )?;
        let to = endpoint(
            "end date",
            self.to.as_deref(),
            self.to_date.as_deref().zip(self.to_time.as_deref()),
            tz,
        )?;
        Ok(CustomWindow { from, to })
    }
}

/// One endpoint from either its single value or its date and time fields.
fn endpoint(
    field: &str,
    value: Option<&str>,
    fields: Option<(&str, &str)>,
    tz: &TimeZone,
) -> std::result::Result<Option<Zoned>, ValidationError> {
    match (value, fields) {
        (Some(value), _) => parse_instant(field, value, tz).map(Some),
        (None, Some((date, time))) => parse_date_and_time(field, date, time, tz).map(Some),
        (None, None) => Ok(None),
    }
}

/// Logs every accepted change.
pub struct LogListener;

impl StatusListener for LogListener {
    fn status_saved(&self, online: bool, settings: Option<&OfflineSettings>) {
        match settings {
            Some(settings) => info!("Status saved: offline {settings}"),
            None => info!("Status saved: online={online}"),
        }
    }
}

/// Runs commands against one status machine.
pub struct Cli {
    machine: StatusMachine,
    renderer: TerminalRenderer,
    time_zone: TimeZone,
}

impl Cli {
    pub fn new(machine: StatusMachine, renderer: TerminalRenderer, time_zone: TimeZone) -> Self {
        Self {
            machine,
            renderer,
            time_zone,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }

    pub async fn handle_offline_command(&self, command: OfflineCommands) -> Result<()> {
        match command {
            OfflineCommands::Today => self.offline_today().await,
            OfflineCommands::Custom(args) => {
                let window = args.into_window(&self.time_zone)?;
                self.offline_custom(window).await
            }
        }
    }

    async fn offline_today(&self) -> Result<()> {
        self.machine.toggle_offline()?;
        self.machine.choose_today().await?;
        self.show_status();
        Ok(())
    }

    async fn offline_custom(&self, window: CustomWindow) -> Result<()> {
        self.machine.toggle_offline()?;
        self.machine.choose_custom()?;
        if let Some(from) = window.from {
            self.machine.edit_start(from)?;
        }
        if let Some(to) = window.to {
            self.machine.edit_end(to)?;
        }
        self.machine.save_custom().await?;
        self.show_status();
        Ok(())
    }

    /// Goes online from whatever the service currently has.
    ///
    /// Each run starts from a fresh online state, so the machine is first
    /// taken offline locally; nothing is sent for that step.
    pub async fn online(&self) -> Result<()> {
        self.machine.toggle_offline()?;
        self.machine.toggle_online().await?;
        self.show_status();
        Ok(())
    }

    fn show_status(&self) {
        self.renderer.render(&self.machine.view().to_string());
    }
}
