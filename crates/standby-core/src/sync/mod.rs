//! Remote persistence of availability transitions.
//!
//! A committed transition turns into exactly one [`StatusUpdate`] pushed
//! through a [`StatusSync`] implementation. There is no retry and no partial
//! success: either the update was accepted or the caller rolls back.
//!
//! - [`request`]: the JSON body and how its window is computed
//! - [`http`]: the `PUT /account/status` client and its builder
//! - [`credentials`]: where the bearer token comes from

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SyncError;

pub mod credentials;
pub mod http;
pub mod request;

pub use credentials::{CredentialStore, StaticCredentials};
pub use http::{HttpStatusClient, HttpStatusClientBuilder, DEFAULT_TIMEOUT, STATUS_PATH};
pub use request::StatusUpdate;

/// Something that can commit a status update remotely.
#[async_trait]
pub trait StatusSync: Send + Sync {
    /// Performs one remote call. Any outcome other than acceptance is an
    /// error.
    async fn push(&self, update: &StatusUpdate) -> Result<(), SyncError>;
}

#[async_trait]
impl<T: StatusSync + ?Sized> StatusSync for Arc<T> {
    async fn push(&self, update: &StatusUpdate) -> Result<(), SyncError> {
        (**self).push(update).await
    }
}
