//! Availability status state machine.
//!
//! [`StatusMachine`] owns one [`AvailabilityState`] and every transition on
//! it. Local transitions apply immediately; transitions that must be
//! persisted push a single [`StatusUpdate`] and only commit once the
//! update was accepted.
//!
//! ```text
//!            toggle_offline              choose_today (sync)
//!   Online ─────────────────▶ ChoosingOption ──▶ OfflineToday ──▶ OfflineActive
//!     ▲                            │                  │ (fail)          ▲
//!     │                            │ choose_custom    ▼                 │
//!     │                            ▼             ChoosingOption         │
//!     │                     OfflineCustomDraft ───────────────────────▶─┘
//!     │                       edit_start / edit_end   save_custom (sync)
//!     │
//!     └──────────── toggle_online (sync) from any offline phase
//! ```
//!
//! # In-flight updates
//!
//! At most one update is in flight per machine. The `is_loading` flag is
//! checked and set under the state lock; any operation attempted while it
//! is set fails with [`StatusError::Busy`] and changes nothing. If the
//! future driving an update is dropped before the update resolves, the
//! state rolls back to where it was before the call and the result is
//! discarded.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use standby_core::{HttpStatusClient, StaticCredentials, StatusMachine};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpStatusClient::builder()
//!     .with_base_url("https://api.example.com/api")
//!     .with_credentials(Arc::new(StaticCredentials::new(Some("token".into()))))
//!     .build()?;
//!
//! let machine = StatusMachine::new(Arc::new(client));
//! machine.toggle_offline()?;
//! machine.choose_today().await?;
//! println!("{}", machine.view());
//! # Ok(())
//! # }
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jiff::Zoned;

use crate::{
    clock::{Clock, SystemClock},
    display::StatusView,
    error::{Result, StatusError},
    models::AvailabilityState,
    sync::{StatusSync, StatusUpdate},
};

pub mod listener;
mod transitions;


pub use listener::{NoopListener, StatusListener};

/// Drives one status screen's availability.
pub struct StatusMachine {
    state: Mutex<AvailabilityState>,
    sync: Arc<dyn StatusSync>,
    clock: Arc<dyn Clock>,
    listener: Arc<dyn StatusListener>,
}

impl StatusMachine {
    /// Creates a machine in the online state using the system clock.
    pub fn new(sync: Arc<dyn StatusSync>) -> Self {
        Self {
            state: Mutex::new(AvailabilityState::new()),
            sync,
            clock: Arc::new(SystemClock::default()),
            listener: Arc::new(NoopListener),
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Registers the hook notified after each committed update.
    pub fn with_listener(mut self, listener: Arc<dyn StatusListener>) -> Self {
        self.listener = listener;
        self
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> AvailabilityState {
        self.lock().clone()
    }

    /// Derived display state for the status card.
    pub fn view(&self) -> StatusView {
        StatusView::from(&*self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, AvailabilityState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the state, refusing while an update is in flight.
    fn lock_idle(&self) -> Result<MutexGuard<'_, AvailabilityState>> {
        let state = self.lock();
        if state.is_loading {
            return Err(StatusError::Busy);
        }
        Ok(state)
    }

    /// Claims the in-flight slot and prepares the update to send.
    ///
    /// `prepare` checks the current phase and builds the update along with
    /// whatever the caller needs to commit it; it may move the state into a
    /// transient phase. If it fails, the state is restored and the slot
    /// stays free.
    fn begin_sync<F, T>(&self, prepare: F) -> Result<(InFlight<'_>, StatusUpdate, T)>
    where
        F: FnOnce(&mut AvailabilityState, &Zoned) -> Result<(StatusUpdate, T)>,
    {
        let mut state = self.lock_idle()?;
        let before = state.clone();
        let now = self.clock.now();

        match prepare(&mut state, &now) {
            Ok((update, payload)) => {
                state.is_loading = true;
                let flight = InFlight {
                    state: &self.state,
                    before: Some(before),
                };
                Ok((flight, update, payload))
            }
            Err(e) => {
                *state = before;
                Err(e)
            }
        }
    }
}

/// Holds the in-flight slot until the update resolves.
///
/// Dropping it without [`InFlight::commit`] restores the state captured
/// before the update started.
struct InFlight<'a> {
    state: &'a Mutex<AvailabilityState>,
    before: Option<AvailabilityState>,
}

impl InFlight<'_> {
    /// Applies the successful outcome and releases the slot.
    fn commit<F>(mut self, apply: F)
    where
        F: FnOnce(&mut AvailabilityState),
    {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state);
        state.is_loading = false;
        self.before = None;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(before) = self.before.take() {
            *state = before;
        }
        state.is_loading = false;
    }
}
