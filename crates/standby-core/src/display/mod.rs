//! Display formatting for status screens.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context-specific formatting. Everything renders as
//! markdown so the CLI can pass it straight to its terminal renderer.
//!
//! - [`card`]: the status card ([`StatusView`])
//! - [`alert`]: user-visible failure messages ([`Alert`])
//! - [`datetime`]: instant formatting ([`LocalDateTime`], [`ShortDateTime`])
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use standby_core::{display::StatusView, models::AvailabilityState};
//!
//! let view = StatusView::from(&AvailabilityState::new());
//! let output = view.to_string();
//! assert!(output.contains("# Current Status: Online"));
//! assert!(output.contains("- Action: Go Offline"));
//! ```

pub mod alert;
pub mod card;
pub mod datetime;
pub mod models;

pub use alert::Alert;
pub use card::StatusView;
pub use datetime::{LocalDateTime, ShortDateTime};
