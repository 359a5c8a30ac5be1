use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::warn;

use crate::errors::AppError;
use crate::models::user::Identity;
use crate::state::AppState;

/// Extractor that admits only callers with a valid session.
///
/// Place it before any body extractor so unauthenticated requests are
/// rejected regardless of what they carry.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            warn!("Rejected {} {}: missing bearer token", parts.method, parts.uri.path());
            return Err(AppError::Unauthorized);
        };

        match state.identity.current_session(token).await {
            Ok(Some(identity)) => Ok(AuthUser(identity)),
            Ok(None) => {
                warn!("Rejected {} {}: no valid session", parts.method, parts.uri.path());
                Err(AppError::Unauthorized)
            }
            Err(e) => Err(AppError::Internal(anyhow::anyhow!(
                "Session lookup failed: {e}"
            ))),
        }
    }
}

/// Extracts the token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
