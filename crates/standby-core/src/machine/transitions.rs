//! The transitions of [`StatusMachine`].

use std::sync::Arc;

use jiff::Zoned;
use log::{debug, info, warn};

use super::{InFlight, StatusMachine};
use crate::{
    clock::end_of_day,
    display::ShortDateTime,
    error::{Result, StatusError, SyncError},
    models::{
        AvailabilityState, DateRangeDraft, DurationType, OfflineOption, OfflineSettings,
        StatusState,
    },
    sync::StatusUpdate,
};

/// Text shown while offline for the rest of the day.
pub const UNTIL_END_OF_DAY: &str = "Until end of day";

fn require(state: &AvailabilityState, phase: StatusState, operation: &'static str) -> Result<()> {
    if state.phase != phase {
        warn!("Refusing to {operation} while {}", state.phase);
        return Err(StatusError::invalid_transition(operation).in_state(state.phase));
    }
    Ok(())
}

/// Commits an accepted offline window.
fn go_offline(state: &mut AvailabilityState, settings: OfflineSettings, duration: String) {
    state.phase = StatusState::OfflineActive;
    state.selected_option = settings.duration_type().into();
    state.offline_duration = duration;
    state.saved_settings = Some(settings);
    state.draft = None;
}

impl StatusMachine {
    /// Starts going offline: `Online → ChoosingOption`.
    ///
    /// Purely local; nothing is sent until an option is chosen.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless online, `Busy` while an update is in
    /// flight.
    pub fn toggle_offline(&self) -> Result<()> {
        let mut state = self.lock_idle()?;
        require(&state, StatusState::Online, "go offline")?;

        state.phase = StatusState::ChoosingOption;
        state.selected_option = OfflineOption::None;
        debug!("Choosing how to go offline");
        Ok(())
    }

    /// Goes offline from now until the end of the calendar day.
    ///
    /// Pushes `[now, 23:59:59.999]` and, once accepted, moves to
    /// `OfflineActive`. On failure the machine is back in `ChoosingOption`
    /// with nothing saved.
    pub async fn choose_today(&self) -> Result<()> {
        let (flight, update, settings) = self.begin_sync(|state, now| {
            require(state, StatusState::ChoosingOption, "go offline for today")?;
            let end = end_of_day(now)?;
            let settings = OfflineSettings::single_day(now.date(), DurationType::Today);

            state.phase = StatusState::OfflineToday;
            state.selected_option = OfflineOption::Today;
            Ok((StatusUpdate::go_offline(now, &end), settings))
        })?;

        let saved = settings.clone();
        self.push_and_commit(flight, update, move |state| {
            go_offline(state, settings, UNTIL_END_OF_DAY.to_string());
        })
        .await?;

        info!("Offline until end of day");
        self.listener.status_saved(false, Some(&saved));
        Ok(())
    }

    /// Starts a custom window seeded with `[now, now + 1h]`.
    pub fn choose_custom(&self) -> Result<()> {
        let mut state = self.lock_idle()?;
        require(&state, StatusState::ChoosingOption, "choose a custom window")?;

        let draft = DateRangeDraft::seeded(self.clock.now())?;
        state.phase = StatusState::OfflineCustomDraft;
        state.selected_option = OfflineOption::Custom;
        state.draft = Some(draft);
        debug!("Editing a custom offline window");
        Ok(())
    }

    /// Moves the start of the custom window.
    ///
    /// When the current end lies before `start`, the end moves to one hour
    /// after `start`.
    pub fn edit_start(&self, start: Zoned) -> Result<()> {
        let mut state = self.lock_idle()?;
        require(&state, StatusState::OfflineCustomDraft, "change the start")?;

        let phase = state.phase;
        let draft = state
            .draft
            .as_mut()
            .ok_or_else(|| StatusError::invalid_transition("change the start").in_state(phase))?;
        draft.set_start(start)?;
        debug!("Custom window now {} to {}", draft.start(), draft.end());
        Ok(())
    }

    /// Moves the end of the custom window.
    ///
    /// # Errors
    ///
    /// `Validation` when `end` lies before the current start; the draft is
    /// left as it was.
    pub fn edit_end(&self, end: Zoned) -> Result<()> {
        let mut state = self.lock_idle()?;
        require(&state, StatusState::OfflineCustomDraft, "change the end")?;

        let phase = state.phase;
        let draft = state
            .draft
            .as_mut()
            .ok_or_else(|| StatusError::invalid_transition("change the end").in_state(phase))?;
        if let Err(e) = draft.set_end(end) {
            warn!("Rejected end of custom window: {e}");
            return Err(e.into());
        }
        debug!("Custom window now {} to {}", draft.start(), draft.end());
        Ok(())
    }

    /// Commits the custom window.
    ///
    /// The range is validated again before anything is sent. Once accepted
    /// the duration reads `Until <end>`; on failure the draft is kept
    /// untouched so the user can retry.
    pub async fn save_custom(&self) -> Result<()> {
        let (flight, update, (settings, duration)) = self.begin_sync(|state, _now| {
            require(state, StatusState::OfflineCustomDraft, "save the custom window")?;
            let phase = state.phase;
            let draft = state.draft.as_ref().ok_or_else(|| {
                StatusError::invalid_transition("save the custom window").in_state(phase)
            })?;
            draft.validate()?;

            let (start, end) = (draft.start(), draft.end());
            let end_date = end.with_time_zone(start.time_zone().clone()).date();
            let settings = OfflineSettings::new(start.date(), end_date, DurationType::Custom)?;
            let duration = format!("Until {}", ShortDateTime(end));
            Ok((StatusUpdate::go_offline(start, end), (settings, duration)))
        })?;

        let saved = settings.clone();
        self.push_and_commit(flight, update, move |state| {
            go_offline(state, settings, duration);
        })
        .await?;

        info!("Offline from {} to {}", saved.start_date(), saved.end_date());
        self.listener.status_saved(false, Some(&saved));
        Ok(())
    }

    /// Goes back online from any offline phase.
    ///
    /// Already online is a no-op and sends nothing.
    pub async fn toggle_online(&self) -> Result<()> {
        if self.lock_idle()?.phase == StatusState::Online {
            debug!("Already online");
            return Ok(());
        }

        let (flight, update, ()) = self.begin_sync(|state, now| {
            if state.phase == StatusState::Online {
                return Err(StatusError::invalid_transition("go online").in_state(state.phase));
            }
            Ok((StatusUpdate::go_online(now)?, ()))
        })?;

        self.push_and_commit(flight, update, AvailabilityState::reset_online)
            .await?;

        info!("Back online");
        self.listener.status_saved(true, None);
        Ok(())
    }

    /// Sends `update` and commits `apply` only if it was accepted.
    ///
    /// The remote call runs on its own task and always completes; if this
    /// future is dropped first, only the outcome is discarded.
    async fn push_and_commit<F>(
        &self,
        flight: InFlight<'_>,
        update: StatusUpdate,
        apply: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut AvailabilityState) + Send,
    {
        let sync = Arc::clone(&self.sync);
        let call = tokio::spawn(async move { sync.push(&update).await });
        let outcome = call.await.unwrap_or_else(|e| Err(SyncError::from(e)));

        match outcome {
            Ok(()) => {
                flight.commit(apply);
                Ok(())
            }
            Err(e) => {
                warn!("Status update failed, keeping previous state: {e}");
                drop(flight);
                Err(e.into())
            }
        }
    }
}
