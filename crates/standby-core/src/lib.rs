//! Core library for the Standby availability manager.
//!
//! This crate lets a user take themselves offline, either for the rest of
//! the day or for a custom window, and come back online. Every change that
//! matters is persisted with a single call to the account service and only
//! takes effect locally once that call succeeded.
//!
//! # Architecture
//!
//! - **State machine** ([`machine`]): owns the [`AvailabilityState`] and all
//!   transitions, with at most one remote update in flight
//! - **Validation** ([`validator`]): date parsing and range checks, run
//!   before anything reaches the network
//! - **Sync** ([`sync`]): the `PUT /account/status` client
//! - **Display** ([`display`]): markdown formatting of the status card and
//!   of user-visible alerts, rendered by the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use standby_core::{StandbyConfig, StatusMachine, SystemClock};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StandbyConfig::load(None)?;
//! let client = config.client_builder().build()?;
//!
//! let machine = StatusMachine::new(Arc::new(client))
//!     .with_clock(Arc::new(SystemClock::new(config.time_zone()?)));
//!
//! machine.toggle_offline()?;
//! machine.choose_custom()?;
//! let end = machine.snapshot().draft().map(|d| d.end().clone());
//! if let Some(end) = end {
//!     machine.edit_end(end.checked_add(jiff::SignedDuration::from_hours(2))?)?;
//! }
//! machine.save_custom().await?;
//! println!("{}", machine.view());
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod machine;
pub mod models;
pub mod sync;
pub mod validator;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::StandbyConfig;
pub use display::{Alert, LocalDateTime, ShortDateTime, StatusView};
pub use error::{Result, StatusError, SyncError, ValidationError};
pub use machine::{NoopListener, StatusListener, StatusMachine};
pub use models::{
    AvailabilityState, DateRangeDraft, DurationType, OfflineOption, OfflineSettings, StatusState,
};
pub use sync::{
    CredentialStore, HttpStatusClient, HttpStatusClientBuilder, StaticCredentials, StatusSync,
    StatusUpdate,
};
