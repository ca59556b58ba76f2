//! Body of the remote status update.

use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};

use crate::{clock::end_of_day, error::ValidationError};

/// JSON body sent with `PUT /account/status`.
///
/// Instants serialize as RFC 3339 timestamps in UTC, e.g.
/// `2024-06-14T23:59:59.999Z`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub make_online: bool,
    pub make_offline: bool,
    pub offline_from: Timestamp,
    pub offline_to: Timestamp,
}

impl StatusUpdate {
    /// Go offline for `[from, to]`.
    pub fn go_offline(from: &Zoned, to: &Zoned) -> Self {
        Self {
            make_online: false,
            make_offline: true,
            offline_from: from.timestamp(),
            offline_to: to.timestamp(),
        }
    }

    /// Go back online. The server still expects a window, so the rest of
    /// the current day is sent along.
    pub fn go_online(now: &Zoned) -> Result<Self, ValidationError> {
        Ok(Self {
            make_online: true,
            make_offline: false,
            offline_from: now.timestamp(),
            offline_to: end_of_day(now)?.timestamp(),
        })
    }

    /// Fills omitted instants the way older callers relied on: `from`
    /// defaults to `now` and `to` to the end of `now`'s calendar day.
    pub fn with_defaults(
        make_online: bool,
        make_offline: bool,
        from: Option<&Zoned>,
        to: Option<&Zoned>,
        now: &Zoned,
    ) -> Result<Self, ValidationError> {
        let offline_from = from.unwrap_or(now).timestamp();
        let offline_to = match to {
            Some(to) => to.timestamp(),
            None => end_of_day(now)?.timestamp(),
        };
        Ok(Self {
            make_online,
            make_offline,
            offline_from,
            offline_to,
        })
    }
}
