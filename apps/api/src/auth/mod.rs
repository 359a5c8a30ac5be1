//! Authorization Gate and the identity-service seam it depends on.
//!
//! The gate (`AuthUser`) runs as an Axum extractor, so a request without a valid
//! session is rejected before its body is read or any handler logic runs.

pub mod gate;
pub mod supabase;

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::models::user::Identity;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Identity service error (status {status}): {message}")]
    Service { status: u16, message: String },
}

/// Resolves an access token to the session it belongs to.
///
/// `Ok(None)` means the token carries no valid, unexpired session.
/// `Err` means the identity service itself could not answer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn current_session(&self, access_token: &str) -> Result<Option<Identity>, IdentityError>;
}
