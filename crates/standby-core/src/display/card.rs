//! Status card view derived from the availability state.

use std::fmt;

use jiff::Zoned;

use super::datetime::LocalDateTime;
use crate::models::{AvailabilityState, OfflineOption, OfflineSettings, StatusState};

/// Everything the status card shows, computed from an
/// [`AvailabilityState`].
///
/// Formats as markdown:
///
/// ```text
/// # Current Status: Offline
///
/// Until Oct 16, 03:45 PM
///
/// - Action: Go Online
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub phase: StatusState,
    pub is_online: bool,
    pub offline_duration: String,
    pub is_loading: bool,
    /// Hidden while the user is choosing how to go offline
    pub show_toggle_button: bool,
    pub show_offline_options: bool,
    /// Window being edited, shown only while drafting a custom window
    pub draft: Option<(Zoned, Zoned)>,
    pub saved_settings: Option<OfflineSettings>,
}

impl StatusView {
    pub fn status_label(&self) -> &'static str {
        if self.is_online {
            "Online"
        } else {
            "Offline"
        }
    }

    /// Label of the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_loading {
            "Updating..."
        } else if self.is_online {
            "Go Offline"
        } else {
            "Go Online"
        }
    }
}

impl From<&AvailabilityState> for StatusView {
    fn from(state: &AvailabilityState) -> Self {
        let choosing = !state.is_online() && state.selected_option() == OfflineOption::None;
        let draft = match (state.phase(), state.draft()) {
            (StatusState::OfflineCustomDraft, Some(draft)) => {
                Some((draft.start().clone(), draft.end().clone()))
            }
            _ => None,
        };

        Self {
            phase: state.phase(),
            is_online: state.is_online(),
            offline_duration: state.offline_duration().to_string(),
            is_loading: state.is_loading(),
            show_toggle_button: !choosing,
            show_offline_options: choosing,
            draft,
            saved_settings: state.saved_settings().cloned(),
        }
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Current Status: {}", self.status_label())?;

        if !self.offline_duration.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.offline_duration)?;
        }

        writeln!(f)?;
        if let Some(settings) = &self.saved_settings {
            writeln!(f, "- Saved: {settings}")?;
        }
        if self.show_toggle_button {
            writeln!(f, "- Action: {}", self.toggle_label())?;
        }

        if self.show_offline_options {
            writeln!(f, "\n## Offline Options")?;
            writeln!(f)?;
            writeln!(f, "- For Today")?;
            writeln!(f, "- Custom")?;
        }

        if let Some((start, end)) = &self.draft {
            writeln!(f, "\n## Custom Window")?;
            writeln!(f)?;
            writeln!(f, "- Start: {}", LocalDateTime(start))?;
            writeln!(f, "- End: {}", LocalDateTime(end))?;
        }

        Ok(())
    }
}
