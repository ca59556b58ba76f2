//! Configuration for talking to the account service.
//!
//! Settings are read from a TOML file. Without an explicit path the file is
//! looked up following the XDG Base Directory specification at
//! `$XDG_CONFIG_HOME/standby/config.toml`; a missing default file simply
//! means defaults.
//!
//! ```toml
//! base_url = "https://api.example.com/api"
//! token = "..."
//! timeout_secs = 10
//! time_zone = "Europe/Berlin"
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use jiff::tz::TimeZone;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigResultExt, Result, StatusError},
    sync::{HttpStatusClientBuilder, StaticCredentials},
};

/// API base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5008/api";

const CONFIG_FILE: &str = "config.toml";

/// Settings for the status sync client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StandbyConfig {
    /// API base URL; the status resource lives at `<base_url>/account/status`
    pub base_url: String,
    /// Bearer token sent with every update
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// IANA time zone calendar days are computed in; system zone if absent
    pub time_zone: Option<String>,
}

impl Default for StandbyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: 10,
            time_zone: None,
        }
    }
}

impl StandbyConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StatusError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&contents)
            .config_context(&format!("Failed to parse {}", path.display()))
    }

    /// Loads from `path` if given, otherwise from the XDG default location.
    ///
    /// # Errors
    ///
    /// An explicit `path` must exist and parse. The default location may be
    /// missing, but must parse when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) => {
                    debug!("Loading configuration from {}", path.display());
                    Self::from_file(&path)
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// The existing configuration file at the XDG default location, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("standby").find_config_file(CONFIG_FILE)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured time zone, or the system zone.
    pub fn time_zone(&self) -> Result<TimeZone> {
        match self.time_zone.as_deref() {
            Some(name) => {
                TimeZone::get(name).config_context(&format!("Unknown time zone '{name}'"))
            }
            None => Ok(TimeZone::system()),
        }
    }

    /// Client builder carrying these settings.
    pub fn client_builder(&self) -> HttpStatusClientBuilder {
        HttpStatusClientBuilder::new()
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout())
            .with_credentials(Arc::new(StaticCredentials::new(self.token.clone())))
    }
}
