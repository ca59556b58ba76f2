//! Status enumerations for availability and offline options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phase of the availability state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusState {
    /// Available; no offline window is active
    #[default]
    Online,

    /// Toggled offline, picking between "today" and "custom"
    ChoosingOption,

    /// The "today" update is in flight
    OfflineToday,

    /// Editing a custom offline window
    OfflineCustomDraft,

    /// An offline window has been committed remotely
    OfflineActive,
}

impl StatusState {
    /// Whether the user counts as online in this phase.
    pub fn is_online(&self) -> bool {
        matches!(self, StatusState::Online)
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StatusState::Online => "online",
            StatusState::ChoosingOption => "choosing an offline option",
            StatusState::OfflineToday => "going offline for today",
            StatusState::OfflineCustomDraft => "editing a custom offline window",
            StatusState::OfflineActive => "offline",
        };
        f.write_str(text)
    }
}

/// Offline path the user is configuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfflineOption {
    #[default]
    None,
    Today,
    Custom,
}

/// Kind of a persisted offline window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DurationType {
    /// From now until the end of the calendar day
    Today,
    /// A user-chosen range
    Custom,
}

impl DurationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationType::Today => "today",
            DurationType::Custom => "custom",
        }
    }
}

impl From<DurationType> for OfflineOption {
    fn from(value: DurationType) -> Self {
        match value {
            DurationType::Today => OfflineOption::Today,
            DurationType::Custom => OfflineOption::Custom,
        }
    }
}
