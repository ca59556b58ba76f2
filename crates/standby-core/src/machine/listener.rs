//! Hook for observers of committed status changes.

use crate::models::OfflineSettings;

/// Notified after the server has accepted a status change.
///
/// `settings` is the newly saved offline window, or `None` when the user
/// went back online.
pub trait StatusListener: Send + Sync {
    fn status_saved(&self, online: bool, settings: Option<&OfflineSettings>);
}

/// Listener that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl StatusListener for NoopListener {
    fn status_saved(&self, _online: bool, _settings: Option<&OfflineSettings>) {}
}
