//! HTTP client for `PUT /account/status`.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use jiff::Zoned;
use log::{debug, warn};
use reqwest::{header::CONTENT_TYPE, StatusCode, Url};

use super::{CredentialStore, StaticCredentials, StatusSync, StatusUpdate};
use crate::{
    clock::{Clock, SystemClock},
    error::{ConfigResultExt, Result, StatusError, SyncError},
};

/// Path of the status resource, relative to the API base URL.
pub const STATUS_PATH: &str = "account/status";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends status updates to the account service.
pub struct HttpStatusClient {
    client: reqwest::Client,
    endpoint: Url,
    credentials: Arc<dyn CredentialStore>,
    clock: Arc<dyn Clock>,
}

impl HttpStatusClient {
    /// Creates a builder with default settings.
    pub fn builder() -> HttpStatusClientBuilder {
        HttpStatusClientBuilder::new()
    }

    /// Full URL updates are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Boolean form of [`StatusSync::push`] for callers that may omit the
    /// window.
    ///
    /// Missing instants default to the client clock's now and the end of
    /// that day. Failures are logged and reported as `false`; nothing is
    /// returned as an error.
    pub async fn update_status(
        &self,
        make_online: bool,
        make_offline: bool,
        from: Option<&Zoned>,
        to: Option<&Zoned>,
    ) -> bool {
        let now = self.clock.now();
        let update =
            match StatusUpdate::with_defaults(make_online, make_offline, from, to, &now) {
                Ok(update) => update,
                Err(e) => {
                    warn!("Could not build status update: {e}");
                    return false;
                }
            };

        match self.push(&update).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Error updating status: {e}");
                false
            }
        }
    }
}

#[async_trait]
impl StatusSync for HttpStatusClient {
    async fn push(&self, update: &StatusUpdate) -> std::result::Result<(), SyncError> {
        debug!(
            "Sending status update to {}: {}",
            self.endpoint,
            serde_json::to_string(update).unwrap_or_default()
        );

        let mut request = self
            .client
            .put(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(update);

        match self.credentials.token() {
            Some(token) => request = request.bearer_auth(token),
            None => warn!("No credential available, sending status update without one"),
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Status update answered with {status}");

        if status.is_success() {
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED {
            self.credentials.clear();
            Err(SyncError::Unauthorized)
        } else {
            Err(SyncError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

/// Builder for creating and configuring [`HttpStatusClient`] instances.
#[derive(Clone)]
pub struct HttpStatusClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    credentials: Option<Arc<dyn CredentialStore>>,
    clock: Option<Arc<dyn Clock>>,
}

impl HttpStatusClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            credentials: None,
            clock: None,
        }
    }

    /// Sets the API base URL, e.g. `https://api.example.com/api`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets where the bearer token comes from.
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the clock that fills in omitted instants.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::Configuration` if no base URL was given, the
    /// base URL cannot be parsed, or the HTTP client cannot be created.
    pub fn build(self) -> Result<HttpStatusClient> {
        let base_url = self.base_url.ok_or_else(|| StatusError::Configuration {
            message: "No API base URL configured".to_string(),
        })?;
        let endpoint = status_endpoint(&base_url)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .config_context("Failed to create HTTP client")?;

        Ok(HttpStatusClient {
            client,
            endpoint,
            credentials: self
                .credentials
                .unwrap_or_else(|| Arc::new(StaticCredentials::default())),
            clock: self
                .clock
                .unwrap_or_else(|| Arc::new(SystemClock::default())),
        })
    }
}

impl Default for HttpStatusClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Joins the status path onto `base_url`, with or without a trailing slash.
fn status_endpoint(base_url: &str) -> Result<Url> {
    let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
    let base = Url::parse(&normalized).config_context("Invalid API base URL")?;
    base.join(STATUS_PATH)
        .config_context("Invalid API base URL")
}
