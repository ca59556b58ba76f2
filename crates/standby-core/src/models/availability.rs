//! Per-screen availability state.

use super::{DateRangeDraft, OfflineOption, OfflineSettings, StatusState};

/// Everything the status screen knows about the user's availability.
///
/// Created online when the screen opens and dropped when it closes; only
/// [`OfflineSettings`] reflect anything the server has accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityState {
    pub(crate) phase: StatusState,
    pub(crate) selected_option: OfflineOption,
    pub(crate) offline_duration: String,
    pub(crate) saved_settings: Option<OfflineSettings>,
    pub(crate) draft: Option<DateRangeDraft>,
    pub(crate) is_loading: bool,
}

impl AvailabilityState {
    /// Fresh state: online, nothing selected, nothing saved.
    pub fn new() -> Self {
        Self {
            phase: StatusState::Online,
            selected_option: OfflineOption::None,
            offline_duration: String::new(),
            saved_settings: None,
            draft: None,
            is_loading: false,
        }
    }

    pub fn phase(&self) -> StatusState {
        self.phase
    }

    /// True unless the user has started going offline.
    pub fn is_online(&self) -> bool {
        self.phase.is_online()
    }

    pub fn selected_option(&self) -> OfflineOption {
        self.selected_option
    }

    /// Human-readable description of the active offline window; empty while
    /// no window is active.
    pub fn offline_duration(&self) -> &str {
        &self.offline_duration
    }

    pub fn saved_settings(&self) -> Option<&OfflineSettings> {
        self.saved_settings.as_ref()
    }

    /// The custom window being edited, present only while drafting.
    pub fn draft(&self) -> Option<&DateRangeDraft> {
        self.draft.as_ref()
    }

    /// True while a status update is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Back to the freshly opened state, keeping the loading flag.
    pub(crate) fn reset_online(&mut self) {
        let is_loading = self.is_loading;
        *self = Self::new();
        self.is_loading = is_loading;
    }
}

impl Default for AvailabilityState {
    fn default() -> Self {
        Self::new()
    }
}
