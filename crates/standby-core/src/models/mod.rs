//! Data models for availability status.
//!
//! - [`AvailabilityState`]: what one status screen knows, from the moment it
//!   opens until it closes
//! - [`StatusState`]: the phase of the state machine
//! - [`OfflineOption`] / [`DurationType`]: which offline path is in play
//! - [`DateRangeDraft`]: the custom window while it is being edited
//! - [`OfflineSettings`]: the last window the server accepted
//!
//! Display implementations live in [`crate::display`].

pub mod availability;
pub mod draft;
pub mod settings;
pub mod status;

#[cfg(test)]
mod tests;

pub use availability::AvailabilityState;
pub use draft::DateRangeDraft;
pub use settings::OfflineSettings;
pub use status::{DurationType, OfflineOption, StatusState};
