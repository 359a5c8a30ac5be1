use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::auth::{IdentityError, IdentityService};
use crate::models::user::Identity;

/// Session lookups against Supabase Auth (`GET /auth/v1/user`).
///
/// Supabase validates the access token's signature and expiry; a 401 or 403
/// answer is treated as "no session".
#[derive(Clone)]
pub struct SupabaseIdentity {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseIdentity {
    pub fn new(base_url: String, anon_key: String) -> Result<Self, IdentityError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(10)).build()?,
            base_url,
            anon_key,
        })
    }
}

#[async_trait]
impl IdentityService for SupabaseIdentity {
    async fn current_session(&self, access_token: &str) -> Result<Option<Identity>, IdentityError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status if status.is_success() => Ok(Some(response.json::<Identity>().await?)),
            status => Err(IdentityError::Service {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            }),
        }
    }
}
